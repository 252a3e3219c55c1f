//! Inkline Paint API
//!
//! A small 2D drawing vocabulary for custom graphics. Drawing code records
//! [`PaintCommand`]s into a [`PaintContext`]; the host renderer replays the
//! recorded commands against whatever pixel surface it owns.
//!
//! # Features
//!
//! - Path building (lines, quadratic curves, circle subpaths)
//! - Shape primitives (rect, circle)
//! - Stroke and fill styles with colors
//! - Nested clip regions and affine transforms
//! - Text and bitmap composite commands

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;

pub use color::Color;
pub use context::{
    Bitmap, ClipOp, FillRule, FillStyle, LineCap, LineJoin, PaintCommand, PaintContext,
    StrokeStyle, Transform2D,
};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::{Circle, Rect};
