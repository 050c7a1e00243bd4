//! End-to-end editing scenarios: session commands, repaint and export,
//! without a terminal.
//!
//! Run: cargo test --test editor_session_test

#![allow(clippy::unwrap_used)]

use raster_cad::output::{export, ExportFormat};
use raster_cad::prelude::*;
use raster_cad::render::primitives::{midpoint_circle, rasterize};

const W: u32 = 200;
const H: u32 = 160;

fn plain_session() -> EditorSession {
    let mut session = EditorSession::default();
    session.apply(Command::ToggleGrid);
    session.apply(Command::ToggleAxes);
    session
}

fn draw(session: &mut EditorSession, kind: PrimitiveKind, a: Point, b: Point) {
    session.apply(Command::SelectTool(kind));
    session.apply(Command::PointerDown(a));
    session.apply(Command::PointerDown(b));
}

fn ink(fb: &Framebuffer) -> Vec<(u32, u32)> {
    (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get_pixel(x, y) != Some(Rgba::WHITE))
        .collect()
}

fn world_ink(points: &[Point]) -> Vec<(u32, u32)> {
    let viewport = Viewport::new(W, H);
    let mut out: Vec<(u32, u32)> = points
        .iter()
        .map(|&p| {
            let (x, y) = viewport.world_to_screen(p);
            (x as u32, y as u32)
        })
        .collect();
    out.sort_by_key(|&(x, y)| (y, x));
    out.dedup();
    out
}

#[test]
fn test_direct_line_scenario() {
    let mut session = plain_session();
    draw(&mut session, PrimitiveKind::DirectLine, Point::new(0, 0), Point::new(4, 2));

    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    let fb = renderer.paint(&session);

    let expected = [(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)].map(|(x, y)| Point::new(x, y));
    assert_eq!(ink(fb), world_ink(&expected));
}

#[test]
fn test_midpoint_circle_scenario() {
    let mut session = plain_session();
    session.apply(Command::SelectColor(Color::RED));
    draw(&mut session, PrimitiveKind::MidpointCircle, Point::new(10, -5), Point::new(10, 20));

    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    let fb = renderer.paint(&session);

    let expected = midpoint_circle(Point::new(10, -5), 25);
    assert_eq!(ink(fb), world_ink(&expected));
    let (x, y) = Viewport::new(W, H).world_to_screen(Point::new(10, 20));
    assert_eq!(fb.get_pixel(x as u32, y as u32), Some(Rgba::RED));
}

#[test]
fn test_figures_keep_their_style() {
    let mut session = plain_session();
    session.apply(Command::SelectColor(Color::BLUE));
    draw(&mut session, PrimitiveKind::DdaLine, Point::new(-20, 0), Point::new(20, 0));
    session.apply(Command::SelectColor(Color::GREEN));
    session.apply(Command::SelectThickness(5));

    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    let fb = renderer.paint(&session);

    let painted = ink(fb);
    assert_eq!(painted.len(), 41);
    assert!(painted.iter().all(|&(x, y)| fb.get_pixel(x, y) == Some(Rgba::BLUE)));
}

#[test]
fn test_undo_redo_repaint_cycle() {
    let mut session = plain_session();
    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();

    draw(&mut session, PrimitiveKind::MidpointEllipse, Point::new(0, 0), Point::new(30, 12));
    draw(&mut session, PrimitiveKind::IncrementalCircle, Point::new(-40, 10), Point::new(-40, 30));
    let both = ink(renderer.paint(&session));

    assert!(session.apply(Command::Undo));
    let one = ink(renderer.paint(&session));
    let ellipse = world_ink(&rasterize(
        PrimitiveKind::MidpointEllipse,
        Point::new(0, 0),
        Point::new(30, 12),
    ));
    assert_eq!(one, ellipse);

    assert!(session.apply(Command::Redo));
    assert_eq!(ink(renderer.paint(&session)), both);
}

#[test]
fn test_commit_after_undo_drops_redo() {
    let mut session = plain_session();
    draw(&mut session, PrimitiveKind::DirectLine, Point::new(0, 0), Point::new(5, 5));
    draw(&mut session, PrimitiveKind::DirectLine, Point::new(0, 0), Point::new(-5, 5));
    session.apply(Command::Undo);
    draw(&mut session, PrimitiveKind::DdaLine, Point::new(1, 1), Point::new(9, 1));

    assert!(!session.apply(Command::Redo));
    let kinds: Vec<PrimitiveKind> = session.document().figures().iter().map(Figure::kind).collect();
    assert_eq!(kinds, vec![PrimitiveKind::DirectLine, PrimitiveKind::DdaLine]);
}

#[test]
fn test_clear_then_undo_is_noop() {
    let mut session = plain_session();
    draw(&mut session, PrimitiveKind::DirectLine, Point::new(0, 0), Point::new(5, 5));
    session.apply(Command::Clear);
    assert!(!session.apply(Command::Undo));

    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    assert!(ink(renderer.paint(&session)).is_empty());
}

#[test]
fn test_export_ppm_matches_frame() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = EditorSession::default();
    session.apply(Command::SelectThickness(3));
    draw(&mut session, PrimitiveKind::MidpointCircle, Point::new(0, 0), Point::new(30, 0));

    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    let fb = renderer.paint(&session);
    let path = dir.path().join("frame.ppm");
    assert_eq!(export(fb, &path).unwrap(), ExportFormat::Ppm);

    let bytes = std::fs::read(&path).unwrap();
    let header = format!("P6\n{W} {H}\n255\n");
    assert!(bytes.starts_with(header.as_bytes()));
    let body = &bytes[header.len()..];
    assert_eq!(body.len(), (W * H * 3) as usize);

    // File is top-down: byte offset of raster (x, y) matches the framebuffer.
    for (x, y) in [(0, 0), (100, 80), (130, 80), (W - 1, H - 1)] {
        let i = ((y * W + x) * 3) as usize;
        let px = fb.get_pixel(x, y).unwrap();
        assert_eq!(&body[i..i + 3], &[px.r, px.g, px.b], "({x}, {y})");
    }
}

#[test]
fn test_export_png_and_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let mut renderer = Renderer::new(W, H, Color::WHITE, 20).unwrap();
    let session = EditorSession::default();
    let fb = renderer.paint(&session);

    assert_eq!(export(fb, dir.path().join("frame.png")).unwrap(), ExportFormat::Png);
    assert!(matches!(
        export(fb, dir.path().join("frame.tiff")),
        Err(Error::UnsupportedExportFormat(_))
    ));
}

#[test]
fn test_config_drives_session() {
    let config = Config::parse(
        "canvas:\n  width: 120\n  height: 90\nstyle:\n  tool: midpoint_circle\n  thickness: 2\nview:\n  show_grid: false\n",
    )
    .unwrap();
    let session = EditorSession::new(
        Style::from(&config.style),
        ViewOptions::from(&config.view),
    );
    assert_eq!(session.style().kind, PrimitiveKind::MidpointCircle);
    assert_eq!(session.style().thickness, 2);
    assert!(!session.view().show_grid);

    let mut renderer = Renderer::new(
        config.canvas.width,
        config.canvas.height,
        config.canvas.background,
        config.canvas.grid_size,
    )
    .unwrap();
    assert_eq!(renderer.paint(&session).width(), 120);
}
