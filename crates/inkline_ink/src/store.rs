//! Committed stroke storage
//!
//! A [`Drawing`] is an append-only record of finished strokes. The
//! [`StrokeStore`] trait is the storage-strategy seam: a notes canvas keeps
//! one drawing, an annotation overlay keeps one drawing per page key.

use rustc_hash::FxHashMap;

use crate::stroke::Stroke;

/// Identifies a document page for page-keyed annotation storage
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct PageKey(pub u32);

/// Append-only record of committed strokes
///
/// Strokes are never mutated or removed after commit, so the stroke count
/// doubles as a revision stamp for cached raster layers.
#[derive(Clone, Debug, Default)]
pub struct Drawing {
    strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Storage strategy for committed strokes
pub trait StrokeStore {
    /// The drawing new strokes are committed into and renders replay from
    fn drawing(&self) -> &Drawing;

    fn drawing_mut(&mut self) -> &mut Drawing;

    /// Cache key for the drawing currently selected; single-drawing stores
    /// live on the default page
    fn current_page(&self) -> PageKey {
        PageKey::default()
    }
}

/// A single drawing shared by the whole surface (notes canvas)
#[derive(Debug, Default)]
pub struct SingleDrawing {
    drawing: Drawing,
}

impl SingleDrawing {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StrokeStore for SingleDrawing {
    fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    fn drawing_mut(&mut self) -> &mut Drawing {
        &mut self.drawing
    }
}

/// One drawing per page key (annotation overlay)
///
/// Pages materialize lazily on first write and are never discarded; the
/// raster layer cache, not this store, is where eviction applies.
#[derive(Debug)]
pub struct PagedDrawing {
    pages: FxHashMap<PageKey, Drawing>,
    current: PageKey,
    // Read-path placeholder so `drawing()` can return a reference for
    // pages that have never been written.
    empty: Drawing,
}

impl PagedDrawing {
    pub fn new() -> Self {
        Self {
            pages: FxHashMap::default(),
            current: PageKey::default(),
            empty: Drawing::new(),
        }
    }

    /// Select which page subsequent commits and renders apply to
    pub fn set_page(&mut self, page: PageKey) {
        self.current = page;
    }

    pub fn page(&self, page: PageKey) -> Option<&Drawing> {
        self.pages.get(&page)
    }

    /// Number of pages that have at least one committed stroke
    pub fn page_count(&self) -> usize {
        self.pages.values().filter(|d| !d.is_empty()).count()
    }
}

impl Default for PagedDrawing {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeStore for PagedDrawing {
    fn drawing(&self) -> &Drawing {
        self.pages.get(&self.current).unwrap_or(&self.empty)
    }

    fn drawing_mut(&mut self) -> &mut Drawing {
        self.pages.entry(self.current).or_default()
    }

    fn current_page(&self) -> PageKey {
        self.current
    }
}
