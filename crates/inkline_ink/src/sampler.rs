//! Touch sampling and tolerance filtering
//!
//! Converts raw pointer events into filtered gesture samples. Movements
//! smaller than the tolerance on both axes are dropped; this is a jitter
//! filter, not an error condition. Out-of-sequence events (a `Move` or `Up`
//! with no active gesture, or events from a pointer other than the captured
//! one) are silently ignored.

use inkline_paint::Point;
use tracing::trace;

use crate::event::{PointerEvent, PointerId, PointerPhase};

/// Minimum drag distance in pixels before a move sample is accepted.
///
/// Matches the typical platform touch-slop value.
pub const DEFAULT_TOLERANCE: f32 = 8.0;

/// A filtered gesture sample forwarded to the stroke builder
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// A new gesture started at the given point
    Begin(Point),
    /// The gesture moved far enough for the sample to be accepted
    Extend(Point),
    /// The gesture ended; the stroke should be committed
    Finish,
    /// A `Down` arrived while a gesture was active: finish the interrupted
    /// stroke, then begin a new one at the given point
    Restart(Point),
}

#[derive(Clone, Copy, Debug)]
enum SamplerState {
    Idle,
    Tracking { pointer: PointerId, last: Point },
}

/// Tolerance-filtering gesture tracker
///
/// At most one gesture is tracked at a time. The first pointer to go down
/// is captured; events from other pointer ids are ignored until it lifts.
#[derive(Debug)]
pub struct TouchSampler {
    tolerance: f32,
    state: SamplerState,
}

impl TouchSampler {
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            state: SamplerState::Idle,
        }
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// True while a gesture is being tracked
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, SamplerState::Tracking { .. })
    }

    /// Feed one pointer event, producing at most one gesture sample
    pub fn sample(&mut self, event: PointerEvent) -> Option<Gesture> {
        let position = event.position();
        match (event.phase, self.state) {
            (PointerPhase::Down, SamplerState::Idle) => {
                self.state = SamplerState::Tracking {
                    pointer: event.pointer,
                    last: position,
                };
                Some(Gesture::Begin(position))
            }
            (PointerPhase::Down, SamplerState::Tracking { pointer, .. }) => {
                if pointer != event.pointer {
                    // Second finger while drawing: the captured pointer wins.
                    trace!(pointer = ?event.pointer, "ignoring down from non-captured pointer");
                    return None;
                }
                self.state = SamplerState::Tracking {
                    pointer,
                    last: position,
                };
                Some(Gesture::Restart(position))
            }
            (PointerPhase::Move, SamplerState::Tracking { pointer, last })
                if pointer == event.pointer =>
            {
                let dx = (position.x - last.x).abs();
                let dy = (position.y - last.y).abs();
                if dx > self.tolerance || dy > self.tolerance {
                    self.state = SamplerState::Tracking {
                        pointer,
                        last: position,
                    };
                    Some(Gesture::Extend(position))
                } else {
                    trace!(dx, dy, tolerance = self.tolerance, "move below tolerance");
                    None
                }
            }
            (PointerPhase::Up, SamplerState::Tracking { pointer, .. })
                if pointer == event.pointer =>
            {
                self.state = SamplerState::Idle;
                Some(Gesture::Finish)
            }
            // Move/Up with no gesture, or from a non-captured pointer.
            _ => None,
        }
    }
}

impl Default for TouchSampler {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}
