//! Canvas render surface
//!
//! Ties the pipeline together for one screen: pointer events go through the
//! sampler into the stroke builder, finished strokes are committed into the
//! store, and each refresh replays committed plus in-progress strokes as
//! paint commands. With a layer cache attached, committed strokes composite
//! as a cached page bitmap instead of vector replay.

use tracing::{debug, trace};

use inkline_paint::{PaintContext, Rect, StrokeStyle};

use crate::config::{CanvasConfig, CanvasTheme, ConfigError, EvictionPolicy};
use crate::event::PointerEvent;
use crate::layer::LayerCache;
use crate::sampler::{Gesture, TouchSampler};
use crate::store::StrokeStore;
use crate::stroke::StrokeBuilder;

/// A drawing surface bound to one storage strategy
pub struct CanvasSurface<S: StrokeStore> {
    store: S,
    sampler: TouchSampler,
    builder: StrokeBuilder,
    theme: CanvasTheme,
    eviction: EvictionPolicy,
    cache: Option<LayerCache>,
    width: u32,
    height: u32,
}

impl<S: StrokeStore> CanvasSurface<S> {
    /// Create a surface; dimensions are zero until [`resize`](Self::resize)
    pub fn new(store: S, config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            store,
            sampler: TouchSampler::new(config.tolerance),
            builder: StrokeBuilder::new(),
            theme: config.theme,
            eviction: config.eviction,
            cache: None,
            width: 0,
            height: 0,
        })
    }

    /// Composite committed strokes through a per-page raster layer cache
    /// instead of replaying them as vectors (the annotation-overlay mode)
    pub fn with_layer_cache(mut self) -> Self {
        self.cache = Some(LayerCache::new(self.eviction));
        self
    }

    /// Size-change notification from the host
    ///
    /// Stroke coordinates are only meaningful relative to the dimensions in
    /// effect at capture time; the host is expected to clear or rescale on
    /// real layout changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Host-side access to the store, e.g. to select the current page
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn theme(&self) -> &CanvasTheme {
        &self.theme
    }

    /// True while a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        self.builder.is_active()
    }

    /// Feed one pointer event through the sampler and builder
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match self.sampler.sample(event) {
            Some(Gesture::Begin(point)) => self.builder.begin(point),
            Some(Gesture::Extend(point)) => self.builder.extend(point),
            Some(Gesture::Finish) => self.commit_current(),
            Some(Gesture::Restart(point)) => {
                // Interrupted stroke is kept, not discarded.
                self.commit_current();
                self.builder.begin(point);
            }
            None => {}
        }
    }

    fn commit_current(&mut self) {
        if let Some(stroke) = self.builder.finish() {
            debug!(
                segments = stroke.segments().len(),
                total = self.store.drawing().len() + 1,
                "committing stroke"
            );
            self.store.drawing_mut().commit(stroke);
        }
    }

    /// Record this refresh's paint commands
    ///
    /// Repeatable: rendering twice without intervening input produces the
    /// same commands. Takes `&mut self` only so the layer cache can refresh
    /// itself; committed and in-progress strokes are never modified here.
    pub fn render(&mut self, ctx: &mut PaintContext) {
        if self.width == 0 || self.height == 0 {
            trace!("render before size-change notification, skipping");
            return;
        }
        let (w, h) = (self.width as f32, self.height as f32);
        ctx.fill_rect(0.0, 0.0, w, h, self.theme.background);

        // Committed strokes: cached page bitmap or vector replay.
        if let Some(cache) = &mut self.cache {
            let bitmap = cache.layer(
                self.store.current_page(),
                self.store.drawing(),
                &self.theme.stroke,
                self.width,
                self.height,
            );
            ctx.draw_bitmap(bitmap, 0.0, 0.0);
        } else {
            for stroke in self.store.drawing().strokes() {
                if !stroke.is_empty() {
                    ctx.stroke_path(stroke.to_path(), self.theme.stroke.clone());
                }
            }
        }

        // The live gesture renders in the same style so it appears
        // continuous with history.
        if let Some(path) = self.builder.to_path() {
            ctx.stroke_path(path, self.theme.stroke.clone());
        }

        let frame_inset = self.theme.frame.as_ref().map(|f| f.inset).unwrap_or(0.0);
        if let Some(frame) = &self.theme.frame {
            ctx.stroke_rect(
                Rect::new(
                    frame.inset,
                    frame.inset,
                    w - 2.0 * frame.inset,
                    h - 2.0 * frame.inset,
                ),
                StrokeStyle {
                    color: frame.color,
                    width: frame.width,
                    ..Default::default()
                },
            );
        }
        if let Some(label) = &self.theme.label {
            ctx.draw_text(
                label.text.clone(),
                w / 2.0,
                frame_inset + label.size,
                label.size,
                label.color,
            );
        }
    }
}
