//! Scan-conversion of the supported primitives.
//!
//! Every algorithm is a pure function from anchor geometry to integer pixel
//! coordinates. The `*_with` variants stream pixels into a callback; the
//! plain variants collect them. Pixels are reported in emission order and
//! may repeat (the symmetric algorithms revisit axis points).
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." *CACM* 20(2).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   *IEEE CG&A* 4(9).

use crate::geometry::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// The closed set of primitives the editor can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Slope-intercept line scan.
    #[default]
    DirectLine,
    /// Digital differential analyzer line.
    DdaLine,
    /// Angle-stepping circle (approximate).
    IncrementalCircle,
    /// Integer midpoint circle with 8-way symmetry.
    MidpointCircle,
    /// Two-region midpoint ellipse with 4-way symmetry.
    MidpointEllipse,
}

impl PrimitiveKind {
    /// All kinds, in tool-number order.
    pub const ALL: [Self; 5] = [
        Self::DirectLine,
        Self::DdaLine,
        Self::IncrementalCircle,
        Self::MidpointCircle,
        Self::MidpointEllipse,
    ];

    /// Number of anchor points a committed figure of this kind holds.
    ///
    /// For circles and ellipses the second anchor defines the radius or
    /// semi-axes rather than a second endpoint.
    #[must_use]
    pub const fn anchors_required(self) -> usize {
        match self {
            Self::DirectLine
            | Self::DdaLine
            | Self::IncrementalCircle
            | Self::MidpointCircle
            | Self::MidpointEllipse => 2,
        }
    }

    /// Human-readable tool name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DirectLine => "Line (direct)",
            Self::DdaLine => "Line (DDA)",
            Self::IncrementalCircle => "Circle (incremental)",
            Self::MidpointCircle => "Circle (midpoint)",
            Self::MidpointEllipse => "Ellipse (midpoint)",
        }
    }

    /// Tool from its 1-based shortcut number.
    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Rasterize a primitive from its two anchors, streaming pixels to `plot`.
///
/// This is the single dispatch point over [`PrimitiveKind`]. For circles the
/// radius is the rounded distance between the anchors; for the ellipse the
/// semi-axes are the absolute coordinate deltas.
pub fn rasterize_with(kind: PrimitiveKind, a: Point, b: Point, plot: impl FnMut(Point)) {
    match kind {
        PrimitiveKind::DirectLine => direct_line_with(a, b, plot),
        PrimitiveKind::DdaLine => dda_line_with(a, b, plot),
        PrimitiveKind::IncrementalCircle => incremental_circle_with(a, radius_between(a, b), plot),
        PrimitiveKind::MidpointCircle => midpoint_circle_with(a, radius_between(a, b), plot),
        PrimitiveKind::MidpointEllipse => {
            let (rx, ry) = semi_axes(a, b);
            midpoint_ellipse_with(a, rx, ry, plot);
        }
    }
}

/// Rasterize a primitive from its two anchors into a pixel list.
#[must_use]
pub fn rasterize(kind: PrimitiveKind, a: Point, b: Point) -> Vec<Point> {
    let mut out = Vec::new();
    rasterize_with(kind, a, b, |p| out.push(p));
    out
}

/// Circle radius defined by a centre and a point on the circle, rounded to
/// the nearest integer.
#[must_use]
pub fn radius_between(center: Point, edge: Point) -> i32 {
    center.distance(edge).round() as i32
}

/// Ellipse semi-axes `(|dx|, |dy|)` defined by a centre and a corner point.
#[must_use]
pub fn semi_axes(center: Point, corner: Point) -> (i32, i32) {
    ((corner.x - center.x).abs(), (corner.y - center.y).abs())
}

// ============================================================================
// Lines
// ============================================================================

/// Slope-intercept line from `p1` to `p2`.
///
/// Vertical lines are special-cased. Otherwise the driving axis is `x` when
/// `|m| <= 1` and `y` when steeper, so steep lines have no gaps.
pub fn direct_line_with(p1: Point, p2: Point, mut plot: impl FnMut(Point)) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx == 0 {
        for y in p1.y.min(p2.y)..=p1.y.max(p2.y) {
            plot(Point::new(p1.x, y));
        }
        return;
    }

    let m = dy as f32 / dx as f32;
    let b = p1.y as f32 - m * p1.x as f32;

    if m.abs() <= 1.0 {
        for x in p1.x.min(p2.x)..=p1.x.max(p2.x) {
            plot(Point::new(x, (m * x as f32 + b).round() as i32));
        }
    } else {
        for y in p1.y.min(p2.y)..=p1.y.max(p2.y) {
            plot(Point::new(((y as f32 - b) / m).round() as i32, y));
        }
    }
}

/// Slope-intercept line, collected.
#[must_use]
pub fn direct_line(p1: Point, p2: Point) -> Vec<Point> {
    let mut out = Vec::new();
    direct_line_with(p1, p2, |p| out.push(p));
    out
}

/// DDA line: `max(|dx|, |dy|) + 1` evenly spaced samples, each rounded.
pub fn dda_line_with(p1: Point, p2: Point, mut plot: impl FnMut(Point)) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        plot(p1);
        return;
    }

    let x_inc = dx as f32 / steps as f32;
    let y_inc = dy as f32 / steps as f32;
    let mut x = p1.x as f32;
    let mut y = p1.y as f32;

    for _ in 0..=steps {
        plot(Point::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }
}

/// DDA line, collected.
#[must_use]
pub fn dda_line(p1: Point, p2: Point) -> Vec<Point> {
    let mut out = Vec::new();
    dda_line_with(p1, p2, |p| out.push(p));
    out
}

// ============================================================================
// Circles
// ============================================================================

/// Angle-stepping circle.
///
/// Steps the angle by `1/radius` radians over `[0, 2π)`. This is an
/// approximate legacy method: small radii show gaps and repeated pixels.
/// A radius of zero (or less) plots only the centre.
///
/// Emits exactly `ceil(2π·radius)` samples. The angle of sample `i` is
/// `i / radius`, computed from the index rather than accumulated, so the
/// loop stays bounded for radii where `1/radius` is below the f32 spacing
/// near 2π.
pub fn incremental_circle_with(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius <= 0 {
        plot(center);
        return;
    }

    let r = radius as f32;
    let step = 1.0 / r;
    let samples = (TAU * f64::from(radius)).ceil() as u64;

    for i in 0..samples {
        let angle = i as f32 * step;
        plot(Point::new(
            center.x + (r * angle.cos()).round() as i32,
            center.y + (r * angle.sin()).round() as i32,
        ));
    }
}

/// Angle-stepping circle, collected.
#[must_use]
pub fn incremental_circle(center: Point, radius: i32) -> Vec<Point> {
    let mut out = Vec::new();
    incremental_circle_with(center, radius, |p| out.push(p));
    out
}

/// Integer midpoint circle.
///
/// Walks the second octant from `(0, r)` and emits all eight reflections of
/// every visited offset, including the starting one. Negative radii plot
/// nothing.
pub fn midpoint_circle_with(center: Point, radius: i32, mut plot: impl FnMut(Point)) {
    if radius < 0 {
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    plot_octants(center, x, y, &mut plot);

    while y > x {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        plot_octants(center, x, y, &mut plot);
    }
}

/// Integer midpoint circle, collected.
#[must_use]
pub fn midpoint_circle(center: Point, radius: i32) -> Vec<Point> {
    let mut out = Vec::new();
    midpoint_circle_with(center, radius, |p| out.push(p));
    out
}

#[inline]
fn plot_octants(c: Point, x: i32, y: i32, plot: &mut impl FnMut(Point)) {
    plot(c.offset(x, y));
    plot(c.offset(-x, y));
    plot(c.offset(x, -y));
    plot(c.offset(-x, -y));
    plot(c.offset(y, x));
    plot(c.offset(-y, x));
    plot(c.offset(y, -x));
    plot(c.offset(-y, -x));
}

// ============================================================================
// Ellipse
// ============================================================================

/// Two-region midpoint ellipse with semi-axes `rx` and `ry`.
///
/// Region 1 (slope magnitude <= 1) steps `x` until `px >= py`; region 2
/// steps `y` down to zero. Each step emits the four quadrant reflections.
/// The starting offset `(0, ry)` is not emitted; only offsets reached by a
/// step are. Degenerate axes (`rx <= 0` or `ry <= 0`) emit nothing.
pub fn midpoint_ellipse_with(center: Point, rx: i32, ry: i32, mut plot: impl FnMut(Point)) {
    if rx <= 0 || ry <= 0 {
        return;
    }

    let rx2 = i64::from(rx) * i64::from(rx);
    let ry2 = i64::from(ry) * i64::from(ry);
    let two_rx2 = 2 * rx2;
    let two_ry2 = 2 * ry2;

    let mut x: i64 = 0;
    let mut y: i64 = i64::from(ry);
    let mut px: i64 = 0;
    let mut py: i64 = two_rx2 * y;

    // Region 1
    let mut p = (ry2 as f64 - (rx2 * i64::from(ry)) as f64 + 0.25 * rx2 as f64).round() as i64;
    while px < py {
        x += 1;
        px += two_ry2;
        if p < 0 {
            p += ry2 + px;
        } else {
            y -= 1;
            py -= two_rx2;
            p += ry2 + px - py;
        }
        plot_quadrants(center, x, y, &mut plot);
    }

    // Region 2
    let xh = x as f64 + 0.5;
    let ym = (y - 1) as f64;
    p = (ry2 as f64 * xh * xh + rx2 as f64 * ym * ym - (rx2 * ry2) as f64).round() as i64;
    while y > 0 {
        y -= 1;
        py -= two_rx2;
        if p > 0 {
            p += rx2 - py;
        } else {
            x += 1;
            px += two_ry2;
            p += rx2 - py + px;
        }
        plot_quadrants(center, x, y, &mut plot);
    }
}

/// Two-region midpoint ellipse, collected.
#[must_use]
pub fn midpoint_ellipse(center: Point, rx: i32, ry: i32) -> Vec<Point> {
    let mut out = Vec::new();
    midpoint_ellipse_with(center, rx, ry, |p| out.push(p));
    out
}

#[inline]
fn plot_quadrants(c: Point, x: i64, y: i64, plot: &mut impl FnMut(Point)) {
    let (x, y) = (x as i32, y as i32);
    plot(c.offset(x, y));
    plot(c.offset(-x, y));
    plot(c.offset(x, -y));
    plot(c.offset(-x, -y));
}

// ============================================================================
// Tests
// ============================================================================
