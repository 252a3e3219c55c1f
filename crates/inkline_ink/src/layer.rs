//! Per-page raster layer cache
//!
//! Revisiting an annotated page composites a cached bitmap instead of
//! replaying vector segments, trading recomputation for memory. The
//! eviction policy is an explicit configuration choice; the unbounded
//! variant keeps one full-page raster per visited page.

use lru::LruCache;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use inkline_paint::{Bitmap, StrokeStyle};

use crate::config::EvictionPolicy;
use crate::raster::rasterize_drawing;
use crate::store::{Drawing, PageKey};

#[derive(Clone, Debug)]
struct CachedLayer {
    bitmap: Bitmap,
    strokes: usize,
}

impl CachedLayer {
    fn render(drawing: &Drawing, style: &StrokeStyle, width: u32, height: u32) -> Self {
        Self {
            bitmap: rasterize_drawing(drawing, style, width, height).to_bitmap(),
            strokes: drawing.len(),
        }
    }

    /// Strokes are append-only, so the count is a complete revision stamp.
    fn is_fresh(&self, drawing: &Drawing, width: u32, height: u32) -> bool {
        self.strokes == drawing.len() && self.bitmap.width == width && self.bitmap.height == height
    }
}

enum Layers {
    Unbounded(FxHashMap<PageKey, CachedLayer>),
    Lru(LruCache<PageKey, CachedLayer>),
}

/// Cache of rasterized page layers
pub struct LayerCache {
    layers: Layers,
}

impl LayerCache {
    pub fn new(policy: EvictionPolicy) -> Self {
        let layers = match policy {
            EvictionPolicy::Unbounded => Layers::Unbounded(FxHashMap::default()),
            EvictionPolicy::Lru(capacity) => Layers::Lru(LruCache::new(capacity)),
        };
        Self { layers }
    }

    /// The bitmap for a page, rasterizing when missing, stale, or resized
    ///
    /// The returned bitmap shares its pixel storage with the cache entry,
    /// so a cache hit is an `Arc` clone, not a pixel copy.
    pub fn layer(
        &mut self,
        page: PageKey,
        drawing: &Drawing,
        style: &StrokeStyle,
        width: u32,
        height: u32,
    ) -> Bitmap {
        match &mut self.layers {
            Layers::Unbounded(map) => {
                let cached = map
                    .entry(page)
                    .or_insert_with(|| CachedLayer::render(drawing, style, width, height));
                if cached.is_fresh(drawing, width, height) {
                    trace!(?page, "layer cache hit");
                } else {
                    debug!(?page, strokes = drawing.len(), "re-rasterizing page layer");
                    *cached = CachedLayer::render(drawing, style, width, height);
                }
                cached.bitmap.clone()
            }
            Layers::Lru(cache) => {
                if let Some(cached) = cache.get(&page) {
                    if cached.is_fresh(drawing, width, height) {
                        trace!(?page, "layer cache hit");
                        return cached.bitmap.clone();
                    }
                }
                debug!(?page, strokes = drawing.len(), "rasterizing page layer");
                let rendered = CachedLayer::render(drawing, style, width, height);
                let bitmap = rendered.bitmap.clone();
                cache.put(page, rendered);
                bitmap
            }
        }
    }

    /// True when the page currently has a cached layer (does not promote)
    pub fn contains(&self, page: PageKey) -> bool {
        match &self.layers {
            Layers::Unbounded(map) => map.contains_key(&page),
            Layers::Lru(cache) => cache.peek(&page).is_some(),
        }
    }

    /// Number of cached layers
    pub fn len(&self) -> usize {
        match &self.layers {
            Layers::Unbounded(map) => map.len(),
            Layers::Lru(cache) => cache.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached layer, keeping the policy
    pub fn clear(&mut self) {
        match &mut self.layers {
            Layers::Unbounded(map) => map.clear(),
            Layers::Lru(cache) => cache.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::StrokeBuilder;
    use inkline_paint::{Color, Point};
    use std::num::NonZeroUsize;

    fn style() -> StrokeStyle {
        StrokeStyle {
            color: Color::BLACK,
            width: 4.0,
            ..Default::default()
        }
    }

    fn drawing_with_strokes(n: usize) -> Drawing {
        let mut drawing = Drawing::new();
        for i in 0..n {
            let mut builder = StrokeBuilder::new();
            builder.begin(Point::new(i as f32, 0.0));
            builder.extend(Point::new(i as f32 + 10.0, 10.0));
            drawing.commit(builder.finish().unwrap());
        }
        drawing
    }

    #[test]
    fn test_repeat_render_is_byte_identical() {
        let mut cache = LayerCache::new(EvictionPolicy::Unbounded);
        let drawing = drawing_with_strokes(2);
        let first = cache.layer(PageKey(0), &drawing, &style(), 32, 32);
        let second = cache.layer(PageKey(0), &drawing, &style(), 32, 32);
        assert_eq!(first.pixels, second.pixels);
        // Hit path shares storage rather than re-rasterizing.
        assert!(std::sync::Arc::ptr_eq(&first.pixels, &second.pixels));
    }

    #[test]
    fn test_new_stroke_invalidates_layer() {
        let mut cache = LayerCache::new(EvictionPolicy::Unbounded);
        let mut drawing = drawing_with_strokes(1);
        let before = cache.layer(PageKey(0), &drawing, &style(), 32, 32);

        let mut builder = StrokeBuilder::new();
        builder.begin(Point::new(20.0, 20.0));
        builder.extend(Point::new(30.0, 30.0));
        drawing.commit(builder.finish().unwrap());

        let after = cache.layer(PageKey(0), &drawing, &style(), 32, 32);
        assert_ne!(before.pixels, after.pixels);
    }

    #[test]
    fn test_resize_invalidates_layer() {
        let mut cache = LayerCache::new(EvictionPolicy::Unbounded);
        let drawing = drawing_with_strokes(1);
        cache.layer(PageKey(0), &drawing, &style(), 32, 32);
        let resized = cache.layer(PageKey(0), &drawing, &style(), 64, 64);
        assert_eq!(resized.width, 64);
    }

    #[test]
    fn test_unbounded_never_evicts() {
        let mut cache = LayerCache::new(EvictionPolicy::Unbounded);
        let drawing = drawing_with_strokes(1);
        for page in 0..10 {
            cache.layer(PageKey(page), &drawing, &style(), 16, 16);
        }
        assert_eq!(cache.len(), 10);
    }

    #[test]
    fn test_lru_evicts_least_recent_page() {
        let capacity = NonZeroUsize::new(2).unwrap();
        let mut cache = LayerCache::new(EvictionPolicy::Lru(capacity));
        let drawing = drawing_with_strokes(1);
        cache.layer(PageKey(0), &drawing, &style(), 16, 16);
        cache.layer(PageKey(1), &drawing, &style(), 16, 16);
        // Touch page 0 so page 1 becomes least recent.
        cache.layer(PageKey(0), &drawing, &style(), 16, 16);
        cache.layer(PageKey(2), &drawing, &style(), 16, 16);

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(PageKey(0)));
        assert!(!cache.contains(PageKey(1)));
        assert!(cache.contains(PageKey(2)));
    }
}
