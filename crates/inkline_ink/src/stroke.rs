//! Incremental stroke accumulation
//!
//! A stroke is a sequence of quadratic curve segments. Each accepted sample
//! becomes the control point of a new segment whose end anchor is the
//! midpoint between the previous cursor and the sample, so the curve passes
//! near, but not exactly through, each raw sample. Filtered samples are
//! never stored; memory is bounded by committed geometry, not event volume.

use inkline_paint::{Path, PathBuilder, Point};
use smallvec::SmallVec;
use tracing::debug;

/// One smoothed curve piece within a stroke
///
/// The start anchor is implicit: the previous segment's `anchor`, or the
/// stroke origin for the first segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub control: Point,
    pub anchor: Point,
}

/// One continuous gesture's worth of committed drawing
///
/// Immutable once committed; a zero-movement gesture produces a stroke with
/// no segments, which renders nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    origin: Point,
    segments: SmallVec<[StrokeSegment; 16]>,
}

impl Stroke {
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn segments(&self) -> &[StrokeSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replay the stroke as a path for the host renderer
    pub fn to_path(&self) -> Path {
        let mut builder = PathBuilder::new().move_to(self.origin.x, self.origin.y);
        for segment in &self.segments {
            builder = builder.quad_to(
                segment.control.x,
                segment.control.y,
                segment.anchor.x,
                segment.anchor.y,
            );
        }
        builder.build()
    }
}

/// Builds one stroke at a time from accepted gesture samples
///
/// Owns the in-progress stroke exclusively; at most one is active.
#[derive(Debug, Default)]
pub struct StrokeBuilder {
    current: Option<InProgress>,
}

#[derive(Debug)]
struct InProgress {
    origin: Point,
    segments: SmallVec<[StrokeSegment; 16]>,
    cursor: Point,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `point`
    ///
    /// Any previously active stroke is discarded; callers that want the
    /// interrupted stroke kept must call [`finish`](Self::finish) first.
    pub fn begin(&mut self, point: Point) {
        self.current = Some(InProgress {
            origin: point,
            segments: SmallVec::new(),
            cursor: point,
        });
    }

    /// Extend the active stroke with an accepted sample
    ///
    /// Emits a segment with the cursor as control point and the midpoint
    /// between cursor and `point` as the new anchor. No-op when no stroke
    /// is active.
    pub fn extend(&mut self, point: Point) {
        let Some(current) = self.current.as_mut() else {
            return;
        };
        current.segments.push(StrokeSegment {
            control: current.cursor,
            anchor: current.cursor.midpoint(point),
        });
        current.cursor = point;
    }

    /// Finish the active stroke, returning it for commit
    ///
    /// Returns `None` when no stroke is active, so calling twice in a row
    /// is a no-op the second time.
    pub fn finish(&mut self) -> Option<Stroke> {
        let current = self.current.take()?;
        let stroke = Stroke {
            origin: current.origin,
            segments: current.segments,
        };
        debug!(segments = stroke.segments.len(), "stroke finished");
        Some(stroke)
    }

    /// True while a stroke is being built
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The in-progress stroke's segments, for rendering the live gesture
    pub fn segments(&self) -> &[StrokeSegment] {
        self.current
            .as_ref()
            .map(|c| c.segments.as_slice())
            .unwrap_or(&[])
    }

    /// Replay the in-progress stroke as a path, if one is active
    pub fn to_path(&self) -> Option<Path> {
        let current = self.current.as_ref()?;
        if current.segments.is_empty() {
            return None;
        }
        let mut builder = PathBuilder::new().move_to(current.origin.x, current.origin.y);
        for segment in &current.segments {
            builder = builder.quad_to(
                segment.control.x,
                segment.control.y,
                segment.anchor.x,
                segment.anchor.y,
            );
        }
        Some(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_paint::PathCommand;

    #[test]
    fn test_extend_emits_midpoint_anchor() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(10.0, 10.0));
        builder.extend(Point::new(10.0, 19.0));

        let segments = builder.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].control, Point::new(10.0, 10.0));
        assert_eq!(segments[0].anchor, Point::new(10.0, 14.5));
    }

    #[test]
    fn test_cursor_advances_to_raw_sample() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(0.0, 0.0));
        builder.extend(Point::new(10.0, 0.0));
        builder.extend(Point::new(10.0, 10.0));

        let segments = builder.segments();
        // Second segment's control is the previous raw sample, not its anchor.
        assert_eq!(segments[1].control, Point::new(10.0, 0.0));
        assert_eq!(segments[1].anchor, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_extend_without_begin_is_noop() {
        let mut builder = StrokeBuilder::new();
        builder.extend(Point::new(5.0, 5.0));
        assert!(!builder.is_active());
        assert!(builder.segments().is_empty());
    }

    #[test]
    fn test_finish_is_lossless() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(0.0, 0.0));
        builder.extend(Point::new(10.0, 0.0));
        builder.extend(Point::new(20.0, 10.0));
        let live: Vec<_> = builder.segments().to_vec();

        let stroke = builder.finish().unwrap();
        assert_eq!(stroke.segments(), live.as_slice());
        assert_eq!(stroke.origin(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_finish_twice_is_noop() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(0.0, 0.0));
        assert!(builder.finish().is_some());
        assert!(builder.finish().is_none());
    }

    #[test]
    fn test_tap_produces_empty_stroke() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(7.0, 7.0));
        let stroke = builder.finish().unwrap();
        assert!(stroke.is_empty());
        assert!(builder.to_path().is_none());
    }

    #[test]
    fn test_to_path_replays_segments() {
        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(0.0, 0.0));
        builder.extend(Point::new(10.0, 0.0));
        let stroke = builder.finish().unwrap();

        let path = stroke.to_path();
        assert_eq!(path.commands().len(), 2);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::ZERO));
        assert_eq!(
            path.commands()[1],
            PathCommand::QuadTo {
                control: Point::new(0.0, 0.0),
                end: Point::new(5.0, 0.0),
            }
        );
    }
}
