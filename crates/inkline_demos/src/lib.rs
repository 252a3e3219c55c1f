//! Inkline sample screens
//!
//! Small self-contained interaction demos built on `inkline_paint` and
//! `inkline_ink`: a cycling dial selector, a spotlight find-the-target
//! game and a static clip-region gallery. Each screen owns its own state
//! and renders into a recording [`inkline_paint::PaintContext`]; the host
//! supplies pointer events and surface dimensions.

pub mod clipping;
pub mod dial;
pub mod spotlight;

pub use clipping::ClippingDemo;
pub use dial::{Dial, DialPosition};
pub use spotlight::{SpotlightGame, SpotlightState};
