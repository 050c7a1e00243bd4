//! Scene painting.
//!
//! The [`Renderer`] owns the framebuffer and repaints it from scratch out of
//! an [`EditorSession`]: background, optional grid and axes, committed
//! figures in insertion order, then the pending figure.

use crate::color::Color;
use crate::document::Figure;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::render::canvas::{draw_axes, draw_grid, Canvas};
use crate::render::primitives::rasterize_with;
use crate::session::EditorSession;

/// Paint one figure onto any canvas.
pub fn paint_figure<C: Canvas + ?Sized>(canvas: &mut C, figure: &Figure) {
    let [a, b] = figure.anchors();
    let (color, thickness) = (figure.color(), figure.thickness());
    rasterize_with(figure.kind(), a, b, |p| canvas.set_pixel(p.x, p.y, color, thickness));
}

/// Paint the figures of a session (committed, then pending) onto any canvas.
///
/// A pending figure with one anchor paints that anchor; if the pointer
/// position is known it also paints the figure the next click would commit.
pub fn paint_figures<C: Canvas + ?Sized>(canvas: &mut C, session: &EditorSession) {
    for figure in session.document().figures() {
        paint_figure(canvas, figure);
    }

    if let Some(pending) = session.document().pending() {
        if let Some(anchor) = pending.anchor() {
            let style = pending.style();
            canvas.set_pixel(anchor.x, anchor.y, style.color, style.thickness);
        }
        if let Some(preview) = session.preview() {
            paint_figure(canvas, &preview);
        }
    }
}

/// Framebuffer-backed scene renderer.
#[derive(Debug, Clone)]
pub struct Renderer {
    fb: Framebuffer,
    background: Color,
    grid_size: u32,
}

impl Renderer {
    /// Create a renderer with a canvas of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32, background: Color, grid_size: u32) -> Result<Self> {
        let mut fb = Framebuffer::new(width, height)?;
        fb.clear(background.to_rgba());
        Ok(Self { fb, background, grid_size })
    }

    /// The most recently painted frame.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Background color.
    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Repaint the whole frame from the session state.
    pub fn paint(&mut self, session: &EditorSession) -> &Framebuffer {
        let view = session.view();
        self.fb.clear(self.background.to_rgba());

        if view.show_grid {
            draw_grid(&mut self.fb, self.grid_size, Color::GRID);
        }
        if view.show_axes {
            draw_axes(&mut self.fb, Color::AXES);
        }

        paint_figures(&mut self.fb, session);
        log::trace!("repainted {} figures", session.document().figures().len());
        &self.fb
    }
}
