//! Inkline Ink Core
//!
//! Touch-driven freehand drawing: raw pointer events are tolerance-filtered
//! by the [`TouchSampler`], accumulated into smoothed quadratic strokes by
//! the [`StrokeBuilder`], and committed into an append-only [`Drawing`].
//! A [`CanvasSurface`] ties the pipeline together and replays committed and
//! in-progress strokes as paint commands each refresh, optionally through a
//! per-page raster [`LayerCache`] for annotation overlays.
//!
//! Everything runs on the host UI thread in response to discrete input and
//! refresh callbacks; rendering is read-only over the committed state so
//! coalesced refreshes are side-effect free.

pub mod config;
pub mod event;
pub mod layer;
pub mod raster;
pub mod sampler;
pub mod store;
pub mod stroke;
pub mod surface;

pub use config::{CanvasConfig, CanvasTheme, ConfigError, EvictionPolicy, FrameStyle, LabelStyle};
pub use event::{PointerEvent, PointerId, PointerPhase};
pub use layer::LayerCache;
pub use raster::RasterLayer;
pub use sampler::{Gesture, TouchSampler};
pub use store::{Drawing, PageKey, PagedDrawing, SingleDrawing, StrokeStore};
pub use stroke::{Stroke, StrokeBuilder, StrokeSegment};
pub use surface::CanvasSurface;
