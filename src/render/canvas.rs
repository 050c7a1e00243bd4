//! Paint target abstraction.
//!
//! The rasterizer produces world-space pixel coordinates; a [`Canvas`] turns
//! each one into paint. The framebuffer implementation maps world space
//! (origin at the centre, y up) to raster space and stamps a square
//! footprint whose side is the figure thickness.

use crate::color::{Color, Rgba};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Anything that can receive logical pixels in world coordinates.
pub trait Canvas {
    /// Paint one logical pixel at world `(x, y)` with a square footprint of
    /// side `footprint` (values below 1 are treated as 1).
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, footprint: u32);

    /// Paint every pixel in `points` with the same color and footprint.
    fn plot_all(&mut self, points: &[Point], color: Color, footprint: u32) {
        for p in points {
            self.set_pixel(p.x, p.y, color, footprint);
        }
    }
}

/// Offsets covered by a footprint of side `size` along one axis.
///
/// Odd sizes are centred on the pixel; even sizes extend one further toward
/// positive offsets. `1 -> 0..=0`, `2 -> 0..=1`, `3 -> -1..=1`, `5 -> -2..=2`.
#[must_use]
pub fn footprint_span(size: u32) -> (i32, i32) {
    let size = size.max(1) as i32;
    let lo = -((size - 1) / 2);
    (lo, lo + size - 1)
}

impl Canvas for Framebuffer {
    fn set_pixel(&mut self, x: i32, y: i32, color: Color, footprint: u32) {
        let viewport = self.viewport();
        let rgba = color.to_rgba();
        let (sx, sy) = viewport.world_to_screen(Point::new(x, y));
        let (lo, hi) = footprint_span(footprint);

        // World y up means raster y runs the other way; the square is
        // symmetric for odd sizes and only shifts for even ones.
        for oy in lo..=hi {
            for ox in lo..=hi {
                let px = sx + i64::from(ox);
                let py = sy - i64::from(oy);
                if let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) {
                    Framebuffer::set_pixel(self, px, py, rgba);
                }
            }
        }
    }
}

/// Draw the reference grid: lines every `spacing` world units across the
/// whole canvas, starting from the left and bottom edges.
pub fn draw_grid(fb: &mut Framebuffer, spacing: u32, color: Color) {
    if spacing == 0 {
        return;
    }
    let rgba = color.to_rgba();
    let viewport = fb.viewport();
    let (hw, hh) = viewport.half_extents();
    let step = spacing as usize;

    for wx in (-hw..=hw).step_by(step) {
        let (sx, _) = viewport.world_to_screen(Point::new(wx, 0));
        vertical_rule(fb, sx, rgba);
    }
    for wy in (-hh..=hh).step_by(step) {
        let (_, sy) = viewport.world_to_screen(Point::new(0, wy));
        horizontal_rule(fb, sy, rgba);
    }
}

/// Draw the X and Y axes through the world origin.
pub fn draw_axes(fb: &mut Framebuffer, color: Color) {
    let rgba = color.to_rgba();
    let (sx, sy) = fb.viewport().world_to_screen(Point::ORIGIN);
    horizontal_rule(fb, sy, rgba);
    vertical_rule(fb, sx, rgba);
}

fn vertical_rule(fb: &mut Framebuffer, sx: i64, color: Rgba) {
    if let Ok(x) = u32::try_from(sx) {
        let height = fb.height();
        fb.fill_rect(x, 0, 1, height, color);
    }
}

fn horizontal_rule(fb: &mut Framebuffer, sy: i64, color: Rgba) {
    if let Ok(y) = u32::try_from(sy) {
        let width = fb.width();
        fb.fill_rect(0, y, width, 1, color);
    }
}
