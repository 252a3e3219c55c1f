//! Dial selector screen
//!
//! A circular selector that cycles through a fixed set of positions on each
//! activation. Positions sit on an arc starting at 9π/8 radians, stepping
//! π/4 per position; the indicator dot sits just inside the dial edge and
//! labels just outside it.

use std::f32::consts::PI;

use inkline_paint::{Color, PaintContext, Point};

const START_ANGLE: f32 = PI * 9.0 / 8.0;
const ANGLE_STEP: f32 = PI / 4.0;
const RADIUS_OFFSET_LABEL: f32 = 30.0;
const RADIUS_OFFSET_INDICATOR: f32 = -35.0;
const LABEL_TEXT_SIZE: f32 = 40.0;

/// One selectable position on the dial
#[derive(Clone, Debug)]
pub struct DialPosition {
    pub label: String,
    pub color: Color,
}

impl DialPosition {
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// Cycling dial selector
#[derive(Debug)]
pub struct Dial {
    positions: Vec<DialPosition>,
    selected: usize,
    radius: f32,
    width: f32,
    height: f32,
}

impl Dial {
    /// `positions` must be non-empty
    pub fn new(positions: Vec<DialPosition>) -> Self {
        debug_assert!(!positions.is_empty());
        Self {
            positions,
            selected: 0,
            radius: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Size-change notification; the dial fills 80% of the smaller axis
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.radius = width.min(height) / 2.0 * 0.8;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_position(&self) -> &DialPosition {
        &self.positions[self.selected]
    }

    /// Advance to the next position, wrapping at the end
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.positions.len();
    }

    /// Screen position for a dial index at the given radius offset
    pub fn position_at(&self, index: usize, radius_offset: f32) -> Point {
        let angle = START_ANGLE + index as f32 * ANGLE_STEP;
        let radius = self.radius + radius_offset;
        Point::new(
            radius * angle.cos() + self.width / 2.0,
            radius * angle.sin() + self.height / 2.0,
        )
    }

    pub fn render(&self, ctx: &mut PaintContext) {
        if self.radius <= 0.0 {
            return;
        }
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;
        ctx.fill_circle(center_x, center_y, self.radius, self.selected_position().color);

        let indicator = self.position_at(self.selected, RADIUS_OFFSET_INDICATOR);
        ctx.fill_circle(indicator.x, indicator.y, self.radius / 12.0, Color::BLACK);

        for (index, position) in self.positions.iter().enumerate() {
            let at = self.position_at(index, RADIUS_OFFSET_LABEL);
            ctx.draw_text(
                position.label.clone(),
                at.x,
                at.y,
                LABEL_TEXT_SIZE,
                Color::BLACK,
            );
        }
    }
}
