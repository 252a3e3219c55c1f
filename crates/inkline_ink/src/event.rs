//! Pointer input events
//!
//! The host input system delivers one event per pointer callback, in
//! surface-local pixel coordinates.

use inkline_paint::Point;

/// Identifies one pointer (finger or stylus) across a gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

/// Phase of a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A pointer event from the host input system
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(pointer: PointerId, phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            pointer,
            phase,
            x,
            y,
        }
    }

    /// Convenience constructor for the primary pointer
    pub fn primary(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::new(PointerId(0), phase, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
