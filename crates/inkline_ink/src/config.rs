//! Surface configuration
//!
//! Style is an explicit configuration value handed to the surface, not a
//! set of module-level constants: each screen passes its own theme.

use std::num::NonZeroUsize;

use inkline_paint::{Color, LineCap, LineJoin, StrokeStyle};
use thiserror::Error;

use crate::sampler::DEFAULT_TOLERANCE;

/// Frame decoration drawn around the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct FrameStyle {
    pub color: Color,
    pub width: f32,
    pub inset: f32,
}

/// Label decoration drawn at the top of the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub text: String,
    pub size: f32,
    pub color: Color,
}

/// Visual style for one canvas screen
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasTheme {
    pub background: Color,
    pub stroke: StrokeStyle,
    pub frame: Option<FrameStyle>,
    pub label: Option<LabelStyle>,
}

impl Default for CanvasTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            stroke: StrokeStyle {
                color: Color::BLUE,
                width: 12.0,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
            },
            frame: None,
            label: None,
        }
    }
}

/// Eviction policy for the per-page raster layer cache
///
/// `Unbounded` matches the original behavior: one full-page raster per
/// visited page, never discarded. Acceptable for short sessions; pick
/// `Lru` when page counts are large.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EvictionPolicy {
    #[default]
    Unbounded,
    Lru(NonZeroUsize),
}

/// Configuration for a canvas surface
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    pub tolerance: f32,
    pub theme: CanvasTheme,
    pub eviction: EvictionPolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasConfig {
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            theme: CanvasTheme::default(),
            eviction: EvictionPolicy::default(),
        }
    }

    /// Check the numeric fields before wiring the surface up
    ///
    /// Tolerance zero is legal and accepts every move sample.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        let width = self.theme.stroke.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::InvalidStrokeWidth(width));
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("touch tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f32),
    #[error("stroke width must be finite and positive, got {0}")]
    InvalidStrokeWidth(f32),
}
