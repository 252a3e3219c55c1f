//! Spotlight find-the-target screen
//!
//! A target is hidden at a random position under a full-surface cover.
//! While the pointer is held down a circular spotlight follows it, punched
//! through the cover with an even-odd fill; releasing inside the target
//! wins the round, and the next press hides the target somewhere new.

use rand::Rng;
use tracing::debug;

use inkline_ink::{PointerEvent, PointerPhase};
use inkline_paint::{Color, FillRule, PaintContext, Path, PathBuilder, Point, Rect};

/// Round state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotlightState {
    /// Cover fully opaque, pointer up
    Covered,
    /// Pointer held down, spotlight follows it
    Searching,
    /// Target was found; the cover is lifted until the next press
    Won,
}

/// Find-the-hidden-target game
#[derive(Debug)]
pub struct SpotlightGame {
    width: f32,
    height: f32,
    target_width: f32,
    target_height: f32,
    spotlight_radius: f32,
    target: Rect,
    pointer: Point,
    state: SpotlightState,
}

impl SpotlightGame {
    pub fn new(
        width: f32,
        height: f32,
        target_width: f32,
        target_height: f32,
        spotlight_radius: f32,
        rng: &mut impl Rng,
    ) -> Self {
        let mut game = Self {
            width,
            height,
            target_width,
            target_height,
            spotlight_radius,
            target: Rect::default(),
            pointer: Point::ZERO,
            state: SpotlightState::Covered,
        };
        game.place_target(rng);
        game
    }

    fn place_target(&mut self, rng: &mut impl Rng) {
        let x = (rng.gen::<f32>() * (self.width - self.target_width)).floor();
        let y = (rng.gen::<f32>() * (self.height - self.target_height)).floor();
        self.target = Rect::new(x, y, self.target_width, self.target_height);
        debug!(target = ?self.target, "target placed");
    }

    pub fn state(&self) -> SpotlightState {
        self.state
    }

    pub fn target(&self) -> Rect {
        self.target
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, rng: &mut impl Rng) {
        self.pointer = event.position();
        match event.phase {
            PointerPhase::Down => {
                if self.state == SpotlightState::Won {
                    self.place_target(rng);
                }
                self.state = SpotlightState::Searching;
            }
            PointerPhase::Move => {}
            PointerPhase::Up => {
                self.state = if self.target.contains(self.pointer) {
                    SpotlightState::Won
                } else {
                    SpotlightState::Covered
                };
            }
        }
    }

    pub fn render(&self, ctx: &mut PaintContext) {
        ctx.fill_rect(0.0, 0.0, self.width, self.height, Color::WHITE);
        ctx.fill_rect(
            self.target.x,
            self.target.y,
            self.target.width,
            self.target.height,
            Color::GREEN,
        );

        match self.state {
            SpotlightState::Won => {}
            SpotlightState::Covered => {
                ctx.fill_rect(0.0, 0.0, self.width, self.height, Color::BLACK);
            }
            SpotlightState::Searching => {
                let path = cover_with_hole(
                    self.width,
                    self.height,
                    self.pointer,
                    self.spotlight_radius,
                );
                ctx.fill_path(path, Color::BLACK, FillRule::EvenOdd);
            }
        }
    }
}

/// Full-surface cover with a circular hole, for even-odd filling
fn cover_with_hole(width: f32, height: f32, center: Point, radius: f32) -> Path {
    PathBuilder::new()
        .move_to(0.0, 0.0)
        .line_to(width, 0.0)
        .line_to(width, height)
        .line_to(0.0, height)
        .close()
        .circle(center.x, center.y, radius)
        .build()
}
