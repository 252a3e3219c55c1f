//! Integration tests for the full pointer → stroke → render pipeline
//!
//! These tests verify that:
//! - Tolerance filtering, stroke smoothing, and commit compose end to end
//! - Committed strokes replay losslessly across refreshes
//! - The page-keyed annotation variant keeps pages and cached layers apart

use inkline_ink::{
    CanvasConfig, CanvasSurface, PageKey, PagedDrawing, PointerEvent, PointerPhase, SingleDrawing,
    StrokeStore,
};
use inkline_paint::{PaintCommand, PaintContext, Point};

const TOLERANCE: f32 = 4.0;

fn config() -> CanvasConfig {
    CanvasConfig {
        tolerance: TOLERANCE,
        ..CanvasConfig::new()
    }
}

fn drag(surface: &mut CanvasSurface<impl StrokeStore>, points: &[(f32, f32)]) {
    let (first, rest) = points.split_first().expect("drag needs at least one point");
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Down, first.0, first.1));
    for &(x, y) in rest {
        surface.handle_pointer(PointerEvent::primary(PointerPhase::Move, x, y));
    }
    let last = points.last().expect("drag needs at least one point");
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Up, last.0, last.1));
}

/// A full gesture commits exactly the segments that were accumulated live
#[test]
fn test_commit_is_lossless() {
    let mut surface = CanvasSurface::new(SingleDrawing::new(), config()).unwrap();
    surface.resize(300, 300);

    drag(&mut surface, &[(10.0, 10.0), (50.0, 10.0), (50.0, 50.0), (90.0, 90.0)]);

    let strokes = surface.store().drawing().strokes();
    assert_eq!(strokes.len(), 1);
    let segments = strokes[0].segments();
    assert_eq!(segments.len(), 3);

    // First segment per the smoothing rule: control is the previous cursor,
    // anchor the midpoint toward the new sample.
    assert_eq!(segments[0].control, Point::new(10.0, 10.0));
    assert_eq!(segments[0].anchor, Point::new(30.0, 10.0));
    assert_eq!(segments[1].control, Point::new(50.0, 10.0));
    assert_eq!(segments[1].anchor, Point::new(50.0, 30.0));
}

/// Jittery moves below tolerance leave the accumulated segments unchanged
#[test]
fn test_jitter_does_not_add_segments() {
    let mut surface = CanvasSurface::new(SingleDrawing::new(), config()).unwrap();
    surface.resize(300, 300);

    surface.handle_pointer(PointerEvent::primary(PointerPhase::Down, 100.0, 100.0));
    for i in 0..20 {
        let wobble = (i % 2) as f32 * (TOLERANCE - 1.0);
        surface.handle_pointer(PointerEvent::primary(
            PointerPhase::Move,
            100.0 + wobble,
            100.0 - wobble,
        ));
    }
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Up, 100.0, 100.0));

    let strokes = surface.store().drawing().strokes();
    assert_eq!(strokes.len(), 1);
    assert!(strokes[0].is_empty());
}

/// Events with no active gesture are silently ignored
#[test]
fn test_orphan_events_are_noops() {
    let mut surface = CanvasSurface::new(SingleDrawing::new(), config()).unwrap();
    surface.resize(300, 300);

    surface.handle_pointer(PointerEvent::primary(PointerPhase::Move, 50.0, 50.0));
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Up, 50.0, 50.0));

    assert!(surface.store().drawing().is_empty());
    assert!(!surface.is_drawing());
}

/// Multiple gestures accumulate; the drawing never shrinks
#[test]
fn test_drawing_accumulates_across_gestures() {
    let mut surface = CanvasSurface::new(SingleDrawing::new(), config()).unwrap();
    surface.resize(300, 300);

    drag(&mut surface, &[(10.0, 10.0), (60.0, 60.0)]);
    drag(&mut surface, &[(200.0, 20.0), (150.0, 80.0), (120.0, 140.0)]);
    drag(&mut surface, &[(5.0, 5.0)]); // tap

    assert_eq!(surface.store().drawing().len(), 3);

    let mut ctx = PaintContext::new();
    surface.render(&mut ctx);
    let stroked_paths = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, PaintCommand::StrokePath { .. }))
        .count();
    // The tap's empty stroke renders nothing.
    assert_eq!(stroked_paths, 2);
}

/// The in-progress stroke renders alongside committed history mid-gesture
#[test]
fn test_live_gesture_renders_with_history() {
    let mut surface = CanvasSurface::new(SingleDrawing::new(), config()).unwrap();
    surface.resize(300, 300);

    drag(&mut surface, &[(10.0, 10.0), (60.0, 60.0)]);
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Down, 100.0, 100.0));
    surface.handle_pointer(PointerEvent::primary(PointerPhase::Move, 140.0, 100.0));

    let mut ctx = PaintContext::new();
    surface.render(&mut ctx);
    let stroked_paths = ctx
        .commands()
        .iter()
        .filter(|c| matches!(c, PaintCommand::StrokePath { .. }))
        .count();
    assert_eq!(stroked_paths, 2);
    assert!(surface.is_drawing());
}

/// Page-keyed strokes stay on their page and layers replay deterministically
#[test]
fn test_paged_annotation_roundtrip() {
    let mut surface = CanvasSurface::new(PagedDrawing::new(), config())
        .unwrap()
        .with_layer_cache();
    surface.resize(128, 128);

    surface.store_mut().set_page(PageKey(1));
    drag(&mut surface, &[(10.0, 10.0), (60.0, 60.0)]);

    surface.store_mut().set_page(PageKey(2));
    drag(&mut surface, &[(100.0, 20.0), (40.0, 90.0)]);

    let bitmap_for = |surface: &mut CanvasSurface<PagedDrawing>| {
        let mut ctx = PaintContext::new();
        surface.render(&mut ctx);
        ctx.commands()
            .iter()
            .find_map(|c| match c {
                PaintCommand::DrawBitmap { bitmap, .. } => Some(bitmap.clone()),
                _ => None,
            })
            .expect("cached surface should composite a bitmap")
    };

    let page2_first = bitmap_for(&mut surface);
    let page2_second = bitmap_for(&mut surface);
    assert_eq!(page2_first.pixels, page2_second.pixels);

    // Revisiting page 1 composites its own layer, not page 2's.
    surface.store_mut().set_page(PageKey(1));
    let page1 = bitmap_for(&mut surface);
    assert_ne!(page1.pixels, page2_first.pixels);

    assert_eq!(surface.store().page(PageKey(1)).map(|d| d.len()), Some(1));
    assert_eq!(surface.store().page(PageKey(2)).map(|d| d.len()), Some(1));
}
