//! Terminal editor front end.
//!
//! Drives an [`EditorSession`](crate::session::EditorSession) from crossterm
//! keyboard and mouse events and shows the framebuffer with ratatui.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use raster_cad::config::Config;
//! use raster_cad::tui::App;
//!
//! let mut app = App::new(&Config::default())?;
//! app.run()?;
//! ```

pub mod app;
pub mod canvas_view;
pub mod input;
pub mod menu;

pub use app::App;
pub use canvas_view::{CanvasMapping, CanvasView};
pub use input::{Action, InputHandler};
pub use menu::{Menu, MenuEntry, MenuRow};
