//! Configuration for the editor.
//!
//! YAML configuration with precedence: CLI > file > defaults. Every key is
//! optional; missing sections take their defaults.

use crate::color::Color;
use crate::document::Style;
use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use crate::render::primitives::PrimitiveKind;
use crate::session::ViewOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canvas geometry and background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color.
    pub background: Color,
    /// Grid spacing in world units.
    pub grid_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { width: 800, height: 600, background: Color::WHITE, grid_size: 20 }
    }
}

/// Initial view toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Show the reference grid.
    pub show_grid: bool,
    /// Show the X/Y axes.
    pub show_axes: bool,
    /// Show pointer coordinates.
    pub show_coords: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let view = ViewOptions::default();
        Self { show_grid: view.show_grid, show_axes: view.show_axes, show_coords: view.show_coords }
    }
}

impl From<&ViewConfig> for ViewOptions {
    fn from(config: &ViewConfig) -> Self {
        Self {
            show_grid: config.show_grid,
            show_axes: config.show_axes,
            show_coords: config.show_coords,
        }
    }
}

/// Initial drawing style.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Initial tool.
    pub tool: PrimitiveKind,
    /// Initial stroke color.
    pub color: Color,
    /// Initial stroke thickness in pixels.
    pub thickness: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = Style::default();
        Self { tool: style.kind, color: style.color, thickness: style.thickness }
    }
}

impl From<&StyleConfig> for Style {
    fn from(config: &StyleConfig) -> Self {
        Style::new(config.tool, config.color, config.thickness)
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Target file; the extension picks the encoder.
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("output.ppm") }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Initial view toggles.
    #[serde(default)]
    pub view: ViewConfig,

    /// Initial drawing style.
    #[serde(default)]
    pub style: StyleConfig,

    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging settings, passed to [`init_logging`](crate::logging::init_logging).
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            view: ViewConfig::default(),
            style: StyleConfig::default(),
            export: ExportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`<config dir>/raster-cad/config.yaml`).
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("raster-cad").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 {
            return Err(invalid("canvas.width", "must be at least 1"));
        }
        if self.canvas.height == 0 {
            return Err(invalid("canvas.height", "must be at least 1"));
        }
        if self.canvas.grid_size == 0 {
            return Err(invalid("canvas.grid_size", "must be at least 1"));
        }
        if self.style.thickness == 0 {
            return Err(invalid("style.thickness", "must be at least 1"));
        }
        if !self.canvas.background.is_normalized() {
            return Err(invalid("canvas.background", "channels must lie in [0, 1]"));
        }
        if !self.style.color.is_normalized() {
            return Err(invalid("style.color", "channels must lie in [0, 1]"));
        }
        Ok(())
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(Error::ConfigNotFound(_)) => Self::default(),
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid { key: key.to_string(), message: message.to_string() }
}
