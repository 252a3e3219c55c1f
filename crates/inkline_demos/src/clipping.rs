//! Clip-region sample grid
//!
//! A static screen that walks through the ways a clip region can restrict
//! drawing: a two-column grid of identical decorated cells, each rendered
//! under a different clip (none, difference frame, circular cut-out,
//! intersection, combined path, rounded rectangle, shrunken bounds),
//! followed by translated and skewed text and a quick-reject cell that
//! skips draws falling entirely outside the clip.
//!
//! Each cell follows the same flow: push a translation to its grid slot,
//! push the clip shapes, draw, then pop everything back off.

use inkline_paint::{
    ClipOp, Color, PaintContext, Path, PathBuilder, Rect, StrokeStyle, Transform2D,
};

const CELL_SIZE: f32 = 90.0;
const RECT_INSET: f32 = 8.0;
const SMALL_RECT_OFFSET: f32 = 40.0;
const CIRCLE_RADIUS: f32 = 30.0;
const TEXT_OFFSET: f32 = 20.0;
const TEXT_SIZE: f32 = 18.0;
const STROKE_WIDTH: f32 = 4.0;

const COLUMN_ONE: f32 = RECT_INSET;
const COLUMN_TWO: f32 = COLUMN_ONE + RECT_INSET + CELL_SIZE;
const ROW_ONE: f32 = RECT_INSET;
const ROW_TWO: f32 = ROW_ONE + RECT_INSET + CELL_SIZE;
const ROW_THREE: f32 = ROW_TWO + RECT_INSET + CELL_SIZE;
const ROW_FOUR: f32 = ROW_THREE + RECT_INSET + CELL_SIZE;
const TEXT_ROW: f32 = ROW_FOUR + 1.5 * CELL_SIZE;
const REJECT_ROW: f32 = ROW_FOUR + RECT_INSET + 2.0 * CELL_SIZE;

/// Static clip-region demonstration screen
#[derive(Debug, Default)]
pub struct ClippingDemo;

impl ClippingDemo {
    pub const WIDTH: f32 = COLUMN_TWO + CELL_SIZE + RECT_INSET;
    pub const HEIGHT: f32 = REJECT_ROW + CELL_SIZE + RECT_INSET;

    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, ctx: &mut PaintContext) {
        ctx.fill_rect(0.0, 0.0, Self::WIDTH, Self::HEIGHT, Color::gray(0.5));

        self.unclipped_cell(ctx);
        self.difference_cell(ctx);
        self.circular_cell(ctx);
        self.intersection_cell(ctx);
        self.combined_cell(ctx);
        self.rounded_rect_cell(ctx);
        self.outside_cell(ctx);
        self.translated_text(ctx);
        self.skewed_text(ctx);
        quick_reject_cell(ctx, offscreen_candidate());
    }

    /// The reference cell with no extra clip applied
    fn unclipped_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_ONE, ROW_ONE);
        draw_cell(ctx);
        ctx.pop_transform();
    }

    /// Subtracting an inner rectangle from an outer one leaves a frame
    fn difference_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_TWO, ROW_ONE);
        ctx.push_clip(
            Rect::new(
                2.0 * RECT_INSET,
                2.0 * RECT_INSET,
                CELL_SIZE - 4.0 * RECT_INSET,
                CELL_SIZE - 4.0 * RECT_INSET,
            ),
            ClipOp::Intersect,
        );
        ctx.push_clip(
            Rect::new(
                4.0 * RECT_INSET,
                4.0 * RECT_INSET,
                CELL_SIZE - 8.0 * RECT_INSET,
                CELL_SIZE - 8.0 * RECT_INSET,
            ),
            ClipOp::Difference,
        );
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_clip();
        ctx.pop_transform();
    }

    /// A circular hole cut out of the cell
    fn circular_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_ONE, ROW_TWO);
        let hole = PathBuilder::new()
            .circle(CIRCLE_RADIUS, CELL_SIZE - CIRCLE_RADIUS, CIRCLE_RADIUS)
            .build();
        ctx.push_clip_path(hole, ClipOp::Difference);
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_transform();
    }

    /// Two overlapping rectangle clips keep only their intersection
    fn intersection_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_TWO, ROW_TWO);
        ctx.push_clip(
            Rect::new(
                0.0,
                0.0,
                CELL_SIZE - SMALL_RECT_OFFSET,
                CELL_SIZE - SMALL_RECT_OFFSET,
            ),
            ClipOp::Intersect,
        );
        ctx.push_clip(
            Rect::new(
                SMALL_RECT_OFFSET,
                SMALL_RECT_OFFSET,
                CELL_SIZE - SMALL_RECT_OFFSET,
                CELL_SIZE - SMALL_RECT_OFFSET,
            ),
            ClipOp::Intersect,
        );
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_clip();
        ctx.pop_transform();
    }

    /// One clip path holding both a circle and a rectangle subpath
    fn combined_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_ONE, ROW_THREE);
        let top = CIRCLE_RADIUS + RECT_INSET;
        let shape = PathBuilder::new()
            .circle(RECT_INSET + CIRCLE_RADIUS, top, CIRCLE_RADIUS)
            .move_to(CELL_SIZE / 2.0 - CIRCLE_RADIUS, top)
            .line_to(CELL_SIZE / 2.0 + CIRCLE_RADIUS, top)
            .line_to(CELL_SIZE / 2.0 + CIRCLE_RADIUS, CELL_SIZE - RECT_INSET)
            .line_to(CELL_SIZE / 2.0 - CIRCLE_RADIUS, CELL_SIZE - RECT_INSET)
            .close()
            .build();
        ctx.push_clip_path(shape, ClipOp::Intersect);
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_transform();
    }

    fn rounded_rect_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_TWO, ROW_THREE);
        let rect = Rect::new(
            RECT_INSET,
            RECT_INSET,
            CELL_SIZE - 2.0 * RECT_INSET,
            CELL_SIZE - 2.0 * RECT_INSET,
        );
        ctx.push_clip_path(rounded_rect_path(rect, CELL_SIZE / 4.0), ClipOp::Intersect);
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_transform();
    }

    /// Clip tighter than the cell bounds, cutting off its edges
    fn outside_cell(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_ONE, ROW_FOUR);
        ctx.push_clip(
            Rect::new(
                2.0 * RECT_INSET,
                2.0 * RECT_INSET,
                CELL_SIZE - 4.0 * RECT_INSET,
                CELL_SIZE - 4.0 * RECT_INSET,
            ),
            ClipOp::Intersect,
        );
        draw_cell(ctx);
        ctx.pop_clip();
        ctx.pop_transform();
    }

    fn translated_text(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_TWO, TEXT_ROW);
        ctx.draw_text("Translated text", 0.0, 0.0, TEXT_SIZE, Color::GREEN);
        ctx.pop_transform();
    }

    fn skewed_text(&self, ctx: &mut PaintContext) {
        ctx.translate(COLUMN_TWO, TEXT_ROW);
        ctx.push_transform(Transform2D::skew(0.2, 0.3));
        ctx.draw_text(
            "Skewed text",
            0.0,
            0.0,
            TEXT_SIZE,
            Color::from_hex(0xFFFF00),
        );
        ctx.pop_transform();
        ctx.pop_transform();
    }
}

/// The decorated cell every clip example draws: white background, diagonal
/// line, circle and a label, all clipped to the cell bounds
fn draw_cell(ctx: &mut PaintContext) {
    ctx.push_clip(Rect::new(0.0, 0.0, CELL_SIZE, CELL_SIZE), ClipOp::Intersect);
    ctx.fill_rect(0.0, 0.0, CELL_SIZE, CELL_SIZE, Color::WHITE);
    ctx.stroke_path(
        PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(CELL_SIZE, CELL_SIZE)
            .build(),
        StrokeStyle {
            color: Color::RED,
            width: STROKE_WIDTH,
            ..Default::default()
        },
    );
    ctx.fill_circle(
        CIRCLE_RADIUS,
        CELL_SIZE - CIRCLE_RADIUS,
        CIRCLE_RADIUS,
        Color::GREEN,
    );
    ctx.draw_text("Clipping", RECT_INSET, TEXT_OFFSET, TEXT_SIZE, Color::BLUE);
    ctx.pop_clip();
}

/// Skip the draw entirely when the candidate cannot intersect the clip
fn quick_reject_cell(ctx: &mut PaintContext, candidate: Rect) {
    let clip = Rect::new(0.0, 0.0, CELL_SIZE, CELL_SIZE);
    ctx.translate(COLUMN_ONE, REJECT_ROW);
    ctx.push_clip(clip, ClipOp::Intersect);
    if clip.intersects(&candidate) {
        ctx.fill_rect(0.0, 0.0, CELL_SIZE, CELL_SIZE, Color::BLACK);
        ctx.fill_rect(
            candidate.x,
            candidate.y,
            candidate.width,
            candidate.height,
            Color::WHITE,
        );
    } else {
        ctx.fill_rect(0.0, 0.0, CELL_SIZE, CELL_SIZE, Color::WHITE);
    }
    ctx.pop_clip();
    ctx.pop_transform();
}

/// A candidate that sits entirely past the clip's bottom-right corner
fn offscreen_candidate() -> Rect {
    Rect::new(CELL_SIZE + 1.0, CELL_SIZE + 1.0, CELL_SIZE, CELL_SIZE)
}

fn rounded_rect_path(rect: Rect, radius: f32) -> Path {
    let (l, t) = (rect.x, rect.y);
    let r = rect.x + rect.width;
    let b = rect.y + rect.height;
    PathBuilder::new()
        .move_to(l + radius, t)
        .line_to(r - radius, t)
        .quad_to(r, t, r, t + radius)
        .line_to(r, b - radius)
        .quad_to(r, b, r - radius, b)
        .line_to(l + radius, b)
        .quad_to(l, b, l, b - radius)
        .line_to(l, t + radius)
        .quad_to(l, t, l + radius, t)
        .close()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkline_paint::PaintCommand;

    fn rendered_commands() -> Vec<PaintCommand> {
        let mut ctx = PaintContext::new();
        ClippingDemo::new().render(&mut ctx);
        ctx.take_commands()
    }

    #[test]
    fn test_clip_and_transform_stacks_balance() {
        let commands = rendered_commands();
        let clip_pushes = commands
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    PaintCommand::PushClip { .. } | PaintCommand::PushClipPath { .. }
                )
            })
            .count();
        let clip_pops = commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::PopClip))
            .count();
        assert_eq!(clip_pushes, clip_pops);

        let transform_pushes = commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::PushTransform { .. }))
            .count();
        let transform_pops = commands
            .iter()
            .filter(|c| matches!(c, PaintCommand::PopTransform))
            .count();
        assert_eq!(transform_pushes, transform_pops);
        // Ten grid slots plus the extra skew on the skewed-text example.
        assert_eq!(transform_pushes, 11);
    }

    #[test]
    fn test_difference_clips_are_recorded() {
        let commands = rendered_commands();
        assert!(commands.iter().any(|c| matches!(
            c,
            PaintCommand::PushClip {
                op: ClipOp::Difference,
                ..
            }
        )));
        assert!(commands.iter().any(|c| matches!(
            c,
            PaintCommand::PushClipPath {
                op: ClipOp::Difference,
                ..
            }
        )));
    }

    #[test]
    fn test_skewed_text_is_sheared() {
        let commands = rendered_commands();
        assert!(commands.iter().any(|c| matches!(
            c,
            PaintCommand::PushTransform { transform } if *transform == Transform2D::skew(0.2, 0.3)
        )));
    }

    #[test]
    fn test_offscreen_candidate_is_rejected() {
        let mut ctx = PaintContext::new();
        quick_reject_cell(&mut ctx, offscreen_candidate());
        let fills = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, PaintCommand::FillRect { .. }))
            .count();
        // Only the rejection marker is drawn, not the candidate.
        assert_eq!(fills, 1);
    }

    #[test]
    fn test_overlapping_candidate_is_drawn() {
        let mut ctx = PaintContext::new();
        quick_reject_cell(
            &mut ctx,
            Rect::new(CELL_SIZE / 2.0, CELL_SIZE / 2.0, CELL_SIZE, CELL_SIZE),
        );
        let fills = ctx
            .commands()
            .iter()
            .filter(|c| matches!(c, PaintCommand::FillRect { .. }))
            .count();
        assert_eq!(fills, 2);
    }
}
