//! Scripted demo run
//!
//! Drives each sample screen with synthetic input and logs the paint
//! commands it would hand to a host renderer. Useful for eyeballing the
//! pipeline without a windowing host: `RUST_LOG=debug cargo run`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use inkline_demos::{ClippingDemo, Dial, DialPosition, SpotlightGame, SpotlightState};
use inkline_ink::{
    CanvasConfig, CanvasSurface, FrameStyle, LabelStyle, PageKey, PagedDrawing, PointerEvent,
    PointerPhase, SingleDrawing, StrokeStore,
};
use inkline_paint::{Color, PaintContext};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    notes_screen();
    annotation_screen();
    dial_screen();
    spotlight_screen();
    clipping_screen();
}

fn drag(surface: &mut CanvasSurface<impl StrokeStore>, points: &[(f32, f32)]) {
    let mut phases = std::iter::once(PointerPhase::Down)
        .chain(std::iter::repeat(PointerPhase::Move))
        .take(points.len());
    for &(x, y) in points {
        let phase = phases.next().unwrap_or(PointerPhase::Move);
        surface.handle_pointer(PointerEvent::primary(phase, x, y));
    }
    if let Some(&(x, y)) = points.last() {
        surface.handle_pointer(PointerEvent::primary(PointerPhase::Up, x, y));
    }
}

fn notes_screen() {
    let mut config = CanvasConfig::new();
    config.theme.frame = Some(FrameStyle {
        color: Color::BLACK,
        width: 4.0,
        inset: 40.0,
    });
    config.theme.label = Some(LabelStyle {
        text: "My Notes".into(),
        size: 55.0,
        color: Color::WHITE,
    });

    let mut surface =
        CanvasSurface::new(SingleDrawing::new(), config).expect("notes config is valid");
    surface.resize(1080, 1920);

    drag(&mut surface, &[(200.0, 300.0), (400.0, 350.0), (600.0, 300.0)]);
    drag(&mut surface, &[(300.0, 600.0), (320.0, 900.0)]);

    let mut ctx = PaintContext::new();
    surface.render(&mut ctx);
    info!(
        strokes = surface.store().drawing().len(),
        commands = ctx.commands().len(),
        "notes screen rendered"
    );
}

fn annotation_screen() {
    let mut surface = CanvasSurface::new(PagedDrawing::new(), CanvasConfig::new())
        .expect("annotation config is valid")
        .with_layer_cache();
    surface.resize(800, 1100);

    for page in 0..3u32 {
        surface.store_mut().set_page(PageKey(page));
        drag(
            &mut surface,
            &[(100.0, 100.0 + page as f32 * 50.0), (500.0, 400.0)],
        );
        let mut ctx = PaintContext::new();
        surface.render(&mut ctx);
    }
    info!(
        pages = surface.store().page_count(),
        "annotation screen rendered three pages"
    );
}

fn dial_screen() {
    let mut dial = Dial::new(vec![
        DialPosition::new("off", Color::gray(0.5)),
        DialPosition::new("low", Color::GREEN),
        DialPosition::new("medium", Color::from_hex(0xFFC107)),
        DialPosition::new("high", Color::RED),
    ]);
    dial.resize(400.0, 400.0);

    for _ in 0..2 {
        dial.select_next();
    }
    let mut ctx = PaintContext::new();
    dial.render(&mut ctx);
    info!(
        selected = %dial.selected_position().label,
        commands = ctx.commands().len(),
        "dial screen rendered"
    );
}

fn spotlight_screen() {
    let mut rng = StdRng::seed_from_u64(0xF00D);
    let mut game = SpotlightGame::new(1080.0, 1920.0, 200.0, 200.0, 150.0, &mut rng);

    let center = game.target().center();
    game.handle_pointer(
        PointerEvent::primary(PointerPhase::Down, 100.0, 100.0),
        &mut rng,
    );
    game.handle_pointer(
        PointerEvent::primary(PointerPhase::Move, center.x, center.y),
        &mut rng,
    );
    game.handle_pointer(
        PointerEvent::primary(PointerPhase::Up, center.x, center.y),
        &mut rng,
    );

    let mut ctx = PaintContext::new();
    game.render(&mut ctx);
    info!(
        won = game.state() == SpotlightState::Won,
        commands = ctx.commands().len(),
        "spotlight round finished"
    );
}

fn clipping_screen() {
    let demo = ClippingDemo::new();
    let mut ctx = PaintContext::new();
    demo.render(&mut ctx);
    info!(
        commands = ctx.commands().len(),
        width = ClippingDemo::WIDTH,
        height = ClippingDemo::HEIGHT,
        "clipping gallery rendered"
    );
}
