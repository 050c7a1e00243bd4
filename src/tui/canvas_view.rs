//! Framebuffer view for the terminal.
//!
//! Each terminal cell shows two vertically stacked samples using the upper
//! half block (`▀`): foreground is the top sample, background the bottom.
//! The framebuffer is usually larger than the cell grid, so each sample
//! covers a block of pixels; the pixel that differs most from the canvas
//! background wins, which keeps 1 px strokes visible after downscaling.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color as TermColor;
use ratatui::widgets::Widget;

/// Mapping between a terminal area and framebuffer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasMapping {
    area: Rect,
    fb_width: u32,
    fb_height: u32,
}

impl CanvasMapping {
    /// Map `fb_width` x `fb_height` pixels onto `area`.
    #[must_use]
    pub fn new(area: Rect, fb_width: u32, fb_height: u32) -> Self {
        Self { area, fb_width, fb_height }
    }

    /// The terminal area.
    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Pixel under the centre of a terminal cell, if the cell lies inside
    /// the area.
    #[must_use]
    pub fn cell_to_pixel(&self, column: u16, row: u16) -> Option<(u32, u32)> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || row < a.y || column >= a.x + a.width || row >= a.y + a.height {
            return None;
        }
        let cx = f64::from(column - a.x) + 0.5;
        let cy = f64::from(row - a.y) + 0.5;
        let px = (cx * f64::from(self.fb_width) / f64::from(a.width)) as u32;
        let py = (cy * f64::from(self.fb_height) / f64::from(a.height)) as u32;
        Some((px.min(self.fb_width.saturating_sub(1)), py.min(self.fb_height.saturating_sub(1))))
    }

    /// World point under a terminal cell.
    #[must_use]
    pub fn cell_to_world(&self, column: u16, row: u16) -> Option<Point> {
        let (px, py) = self.cell_to_pixel(column, row)?;
        let viewport = Viewport::new(self.fb_width, self.fb_height);
        Some(viewport.screen_to_world(px as i32, py as i32))
    }

    /// Pixel span `[start, end)` covered by sample `index` of `count` along
    /// an axis of `len` pixels. Never empty.
    fn span(index: u32, count: u32, len: u32) -> (u32, u32) {
        let start = (u64::from(index) * u64::from(len) / u64::from(count)) as u32;
        let end = (u64::from(index + 1) * u64::from(len) / u64::from(count)) as u32;
        let start = start.min(len.saturating_sub(1));
        (start, end.max(start + 1))
    }
}

/// Sample the pixel in `[x0, x1) x [y0, y1)` that differs most from
/// `background`.
#[must_use]
pub fn sample_block(
    fb: &Framebuffer,
    (x0, x1): (u32, u32),
    (y0, y1): (u32, u32),
    background: Rgba,
) -> Rgba {
    let mut best = background;
    let mut best_distance = 0;
    for y in y0..y1.min(fb.height()) {
        for x in x0..x1.min(fb.width()) {
            if let Some(p) = fb.get_pixel(x, y) {
                let d = p.distance(background);
                if d > best_distance {
                    best = p;
                    best_distance = d;
                }
            }
        }
    }
    best
}

/// Widget that draws a framebuffer with half blocks.
pub struct CanvasView<'a> {
    fb: &'a Framebuffer,
    background: Rgba,
}

impl<'a> CanvasView<'a> {
    /// Create a view of `fb` whose canvas background is `background`.
    #[must_use]
    pub fn new(fb: &'a Framebuffer, background: Rgba) -> Self {
        Self { fb, background }
    }
}

fn term_color(c: Rgba) -> TermColor {
    TermColor::Rgb(c.r, c.g, c.b)
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let (w, h) = (self.fb.width(), self.fb.height());
        let rows = u32::from(area.height) * 2;

        for cy in 0..area.height {
            let top = CanvasMapping::span(u32::from(cy) * 2, rows, h);
            let bottom = CanvasMapping::span(u32::from(cy) * 2 + 1, rows, h);
            for cx in 0..area.width {
                let xs = CanvasMapping::span(u32::from(cx), u32::from(area.width), w);
                let fg = sample_block(self.fb, xs, top, self.background);
                let bg = sample_block(self.fb, xs, bottom, self.background);
                if let Some(cell) = buf.cell_mut((area.x + cx, area.y + cy)) {
                    cell.set_char('▀').set_fg(term_color(fg)).set_bg(term_color(bg));
                }
            }
        }
    }
}
