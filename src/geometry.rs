//! World-space geometry.
//!
//! World coordinates are integers with the origin at the canvas centre and
//! the y axis pointing up. The framebuffer uses the usual raster layout
//! (origin top-left, y down); [`Viewport`] converts between the two.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point with integer world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate (up is positive).
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }

    /// Offset by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size canvas mapping between world and framebuffer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half extents `(W/2, H/2)` using integer division.
    #[must_use]
    pub const fn half_extents(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Convert a world point to framebuffer coordinates.
    ///
    /// The result may lie outside the framebuffer; callers clip.
    #[must_use]
    pub fn world_to_screen(&self, p: Point) -> (i64, i64) {
        let (hw, hh) = self.half_extents();
        (i64::from(p.x) + i64::from(hw), i64::from(hh) - i64::from(p.y))
    }

    /// Convert framebuffer coordinates to a world point.
    #[must_use]
    pub fn screen_to_world(&self, sx: i32, sy: i32) -> Point {
        let (hw, hh) = self.half_extents();
        Point::new(sx - hw, hh - sy)
    }

    /// Whether a world point maps inside the framebuffer.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let (sx, sy) = self.world_to_screen(p);
        sx >= 0 && sy >= 0 && sx < i64::from(self.width) && sy < i64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0, 0);
        let p2 = Point::new(3, 4);
        assert!((p1.distance(p2) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(-3, 7).to_string(), "(-3, 7)");
    }

    #[test]
    fn test_viewport_origin_is_centre() {
        let vp = Viewport::new(800, 600);
        assert_eq!(vp.world_to_screen(Point::ORIGIN), (400, 300));
        assert_eq!(vp.screen_to_world(400, 300), Point::ORIGIN);
    }

    #[test]
    fn test_viewport_y_up() {
        let vp = Viewport::new(800, 600);
        // Screen top-left is world (-400, 300).
        assert_eq!(vp.screen_to_world(0, 0), Point::new(-400, 300));
        // Positive world y moves up the screen.
        let (_, sy) = vp.world_to_screen(Point::new(0, 10));
        assert_eq!(sy, 290);
    }

    #[test]
    fn test_viewport_round_trip() {
        let vp = Viewport::new(801, 599);
        for &(sx, sy) in &[(0, 0), (800, 598), (123, 456)] {
            let world = vp.screen_to_world(sx, sy);
            assert_eq!(vp.world_to_screen(world), (i64::from(sx), i64::from(sy)));
        }
    }

    #[test]
    fn test_viewport_contains() {
        let vp = Viewport::new(800, 600);
        assert!(vp.contains(Point::new(-400, 300)));
        assert!(vp.contains(Point::new(399, -299)));
        assert!(!vp.contains(Point::new(400, 0)));
        assert!(!vp.contains(Point::new(0, 301)));
    }
}
