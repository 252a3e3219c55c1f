//! Paint context - the main drawing API

use std::sync::Arc;

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::*;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

/// Fill rule for path fills
///
/// EvenOdd lets a subpath punch a hole through an enclosing subpath.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

/// How a clip shape combines with the current clip region
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClipOp {
    /// Keep only the area inside the shape
    #[default]
    Intersect,
    /// Remove the area inside the shape
    Difference,
}

/// A 2D affine transform
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform2D {
    pub const IDENTITY: Transform2D = Transform2D {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub const fn translate(x: f32, y: f32) -> Self {
        Transform2D {
            e: x,
            f: y,
            ..Self::IDENTITY
        }
    }

    /// Shear along x by `sx * y` and along y by `sy * x`
    pub const fn skew(sx: f32, sy: f32) -> Self {
        Transform2D {
            b: sy,
            c: sx,
            ..Self::IDENTITY
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// An immutable RGBA8 raster, cheap to clone across the draw boundary
#[derive(Clone, Debug)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<Vec<u8>>,
}

impl Bitmap {
    /// Wrap raw RGBA8 pixels. `pixels.len()` must be `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        style: FillStyle,
    },
    StrokeRect {
        rect: Rect,
        style: StrokeStyle,
    },
    FillCircle {
        circle: Circle,
        style: FillStyle,
    },
    StrokeCircle {
        circle: Circle,
        style: StrokeStyle,
    },
    FillPath {
        path: Path,
        style: FillStyle,
        rule: FillRule,
    },
    StrokePath {
        path: Path,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        position: Point,
        size: f32,
        color: Color,
    },
    DrawBitmap {
        bitmap: Bitmap,
        x: f32,
        y: f32,
    },
    PushClip {
        rect: Rect,
        op: ClipOp,
    },
    PushClipPath {
        path: Path,
        op: ClipOp,
    },
    PopClip,
    PushTransform {
        transform: Transform2D,
    },
    PopTransform,
}

/// The paint context used for custom drawing
///
/// Records commands; the host replays them once per refresh.
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        tracing::trace!(count = self.commands.len(), "handing off paint commands");
        std::mem::take(&mut self.commands)
    }

    // === Shape drawing ===

    pub fn fill_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        style: impl Into<FillStyle>,
    ) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            style: style.into(),
        });
    }

    pub fn stroke_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeRect { rect, style });
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(Point::new(cx, cy), radius),
            style: style.into(),
        });
    }

    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeCircle {
            circle: Circle::new(Point::new(cx, cy), radius),
            style,
        });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>, rule: FillRule) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
            rule,
        });
    }

    pub fn stroke_path(&mut self, path: Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath { path, style });
    }

    // === Text ===

    pub fn draw_text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            position: Point::new(x, y),
            size,
            color,
        });
    }

    // === Bitmaps ===

    pub fn draw_bitmap(&mut self, bitmap: Bitmap, x: f32, y: f32) {
        self.commands.push(PaintCommand::DrawBitmap { bitmap, x, y });
    }

    // === Clipping ===

    /// Restrict subsequent draws to a rectangular region.
    ///
    /// Clips nest; each push must be balanced by a [`Self::pop_clip`].
    pub fn push_clip(&mut self, rect: Rect, op: ClipOp) {
        self.commands.push(PaintCommand::PushClip { rect, op });
    }

    pub fn push_clip_path(&mut self, path: Path, op: ClipOp) {
        self.commands.push(PaintCommand::PushClipPath { path, op });
    }

    pub fn pop_clip(&mut self) {
        self.commands.push(PaintCommand::PopClip);
    }

    // === Transforms ===

    pub fn push_transform(&mut self, transform: Transform2D) {
        self.commands.push(PaintCommand::PushTransform { transform });
    }

    /// Shorthand for pushing a translation transform
    pub fn translate(&mut self, x: f32, y: f32) {
        self.push_transform(Transform2D::translate(x, y));
    }

    pub fn pop_transform(&mut self) {
        self.commands.push(PaintCommand::PopTransform);
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_order() {
        let mut ctx = PaintContext::new();
        ctx.fill_rect(0.0, 0.0, 10.0, 10.0, Color::WHITE);
        ctx.stroke_circle(5.0, 5.0, 2.0, StrokeStyle::default());
        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 2);
        assert!(matches!(commands[0], PaintCommand::FillRect { .. }));
        assert!(matches!(commands[1], PaintCommand::StrokeCircle { .. }));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_clip_and_transform_recording() {
        let mut ctx = PaintContext::new();
        ctx.translate(10.0, 20.0);
        ctx.push_clip(Rect::new(0.0, 0.0, 90.0, 90.0), ClipOp::Intersect);
        ctx.fill_rect(0.0, 0.0, 90.0, 90.0, Color::WHITE);
        ctx.pop_clip();
        ctx.pop_transform();

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 5);
        match &commands[0] {
            PaintCommand::PushTransform { transform } => {
                assert_eq!(*transform, Transform2D::translate(10.0, 20.0));
            }
            other => panic!("expected PushTransform, got {other:?}"),
        }
        assert!(matches!(
            commands[1],
            PaintCommand::PushClip {
                op: ClipOp::Intersect,
                ..
            }
        ));
        assert!(matches!(commands[3], PaintCommand::PopClip));
        assert!(matches!(commands[4], PaintCommand::PopTransform));
    }

    #[test]
    fn test_skew_transform_shears_axes() {
        let t = Transform2D::skew(0.2, 0.3);
        // x' = x + 0.2 * y, y' = y + 0.3 * x
        let (x, y) = (10.0_f32, 20.0_f32);
        let tx = t.a * x + t.c * y + t.e;
        let ty = t.b * x + t.d * y + t.f;
        assert_eq!(tx, 14.0);
        assert_eq!(ty, 23.0);
    }
}
