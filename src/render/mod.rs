//! Rasterization and scene painting.
//!
//! # Algorithms
//!
//! - **Direct line**: `y = m*x + b` evaluated per column, per row for steep
//!   or vertical lines
//! - **DDA line**: incremental stepping along the major axis
//! - **Incremental circle**: parametric sampling at a fixed angular step
//! - **Midpoint circle**: integer decision variable with 8-way symmetry
//! - **Midpoint ellipse**: two-region decision variables with 4-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." CACM 20(2).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   IEEE CG&A 4(9).

pub mod canvas;
pub mod primitives;
pub mod scene;

pub use canvas::{draw_axes, draw_grid, footprint_span, Canvas};
pub use primitives::{rasterize, rasterize_with, PrimitiveKind};
pub use scene::{paint_figure, paint_figures, Renderer};
