//! Software rasterization of committed strokes
//!
//! Cached page layers are plain RGBA8 buffers. Strokes are flattened into
//! polylines and stamped with a round brush; overlapping dabs use max-alpha
//! stamping so opacity never stacks within a stroke. The math is pure and
//! the flattening step count fixed, so rasterizing the same drawing at the
//! same size is byte-for-byte deterministic.

use inkline_paint::{Bitmap, Point, StrokeStyle};

use crate::store::Drawing;
use crate::stroke::Stroke;

/// Line steps each quadratic segment is flattened into
const QUAD_FLATTEN_STEPS: u32 = 16;

/// An RGBA8 raster holding one page's committed strokes
#[derive(Clone, Debug, PartialEq)]
pub struct RasterLayer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterLayer {
    /// A fully transparent layer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy into a shareable bitmap for the draw boundary
    pub fn to_bitmap(&self) -> Bitmap {
        Bitmap::new(self.width, self.height, self.pixels.clone())
    }

    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, rgba: [u8; 4]) {
        let r = radius.max(0.5);
        let min_x = (cx - r).floor() as i64;
        let max_x = (cx + r).ceil() as i64;
        let min_y = (cy - r).floor() as i64;
        let max_y = (cy + r).ceil() as i64;
        for y in min_y..=max_y {
            if y < 0 || y >= self.height as i64 {
                continue;
            }
            for x in min_x..=max_x {
                if x < 0 || x >= self.width as i64 {
                    continue;
                }
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
                self.pixels[idx] = rgba[0];
                self.pixels[idx + 1] = rgba[1];
                self.pixels[idx + 2] = rgba[2];
                // Max-alpha: overlapping dabs don't darken each other.
                self.pixels[idx + 3] = self.pixels[idx + 3].max(rgba[3]);
            }
        }
    }

    fn stamp_span(&mut self, from: Point, to: Point, radius: f32, rgba: [u8; 4]) {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let distance = (dx * dx + dy * dy).sqrt();
        let spacing = (radius * 0.5).max(0.5);
        let dabs = (distance / spacing).ceil().max(1.0) as u32;
        for i in 0..=dabs {
            let t = i as f32 / dabs as f32;
            self.stamp_disc(from.x + dx * t, from.y + dy * t, radius, rgba);
        }
    }

    fn stamp_stroke(&mut self, stroke: &Stroke, style: &StrokeStyle) {
        if stroke.is_empty() {
            return;
        }
        let radius = style.width / 2.0;
        let rgba = style.color.to_rgba8();
        let mut cursor = stroke.origin();
        for segment in stroke.segments() {
            let mut prev = cursor;
            for step in 1..=QUAD_FLATTEN_STEPS {
                let t = step as f32 / QUAD_FLATTEN_STEPS as f32;
                let point = quad_point(cursor, segment.control, segment.anchor, t);
                self.stamp_span(prev, point, radius, rgba);
                prev = point;
            }
            cursor = segment.anchor;
        }
    }
}

/// Point on a quadratic bezier at parameter `t`
fn quad_point(start: Point, control: Point, end: Point, t: f32) -> Point {
    let u = 1.0 - t;
    Point::new(
        u * u * start.x + 2.0 * u * t * control.x + t * t * end.x,
        u * u * start.y + 2.0 * u * t * control.y + t * t * end.y,
    )
}

/// Rasterize every committed stroke of a drawing into a fresh layer
///
/// Round caps and joins fall out of disc stamping; the configured cap and
/// join styles only affect vector replay on the host side.
pub fn rasterize_drawing(
    drawing: &Drawing,
    style: &StrokeStyle,
    width: u32,
    height: u32,
) -> RasterLayer {
    let mut layer = RasterLayer::new(width, height);
    for stroke in drawing.strokes() {
        layer.stamp_stroke(stroke, style);
    }
    layer
}
