//! # raster-cad
//!
//! A minimal 2D raster CAD editor built around classic scan-conversion
//! algorithms.
//!
//! Figures are defined by two anchor points and rasterized into integer
//! world-space pixels by one of five algorithms: a direct slope-intercept
//! line, a DDA line, an angle-stepping circle, a midpoint circle and a
//! two-region midpoint ellipse. Committed figures live in a [`Document`]
//! with linear undo/redo, and an [`EditorSession`] holds the current tool,
//! color and thickness.
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_cad::prelude::*;
//!
//! let mut session = EditorSession::default();
//! session.apply(Command::SelectTool(PrimitiveKind::MidpointCircle));
//! session.apply(Command::PointerDown(Point::new(0, 0)));
//! session.apply(Command::PointerDown(Point::new(0, 40)));
//!
//! let mut renderer = Renderer::new(200, 200, Color::WHITE, 20)?;
//! let fb = renderer.paint(&session);
//! assert_eq!(fb.get_pixel(100, 60), Some(Rgba::BLACK));
//! # Ok::<(), raster_cad::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `tui` (default): terminal editor front end (`ratatui` + `crossterm`)
//!   and the `raster-cad` binary
//!
//! ## References
//!
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital
//!   display of circular arcs." CACM 20(2).
//! - Van Aken, J. R. (1984). "An Efficient Ellipse-Drawing Algorithm."
//!   IEEE CG&A 4(9).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the drawing palette.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// World points and the world/raster mapping.
pub mod geometry;

// ============================================================================
// Editing Modules
// ============================================================================

/// Figures, pending figures and the undoable document.
pub mod document;

/// Per-session tool, style and view state.
pub mod session;

// ============================================================================
// Rendering Modules
// ============================================================================

pub mod render;

/// Output encoders (PPM, PNG).
pub mod output;

// ============================================================================
// Ambient Modules
// ============================================================================

/// YAML configuration.
pub mod config;

/// Error types.
pub mod error;

/// Logger setup.
pub mod logging;

/// Terminal editor front end.
#[cfg(feature = "tui")]
#[cfg_attr(docsrs, doc(cfg(feature = "tui")))]
pub mod tui;

pub use color::{Color, Rgba};
pub use document::{Document, Figure, PendingFigure, Style};
pub use error::{Error, Result};
pub use framebuffer::Framebuffer;
pub use geometry::{Point, Viewport};
pub use session::{Command, EditorSession, ViewOptions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::color::{Color, Rgba};
    pub use crate::config::Config;
    pub use crate::document::{Document, Figure, Style};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Viewport};
    pub use crate::output::{export, ExportFormat};
    pub use crate::render::{rasterize, Canvas, PrimitiveKind, Renderer};
    pub use crate::session::{Command, EditorSession, ViewOptions};
}
