//! raster-cad - terminal raster CAD editor.
//!
//! Draw lines, circles and ellipses with the mouse, undo/redo them and
//! export the canvas as PPM or PNG.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use clap::Parser;
use raster_cad::config::Config;
use raster_cad::logging::init_logging;
use raster_cad::tui::App;
use std::path::PathBuf;

/// raster-cad: minimal 2D raster CAD editor
#[derive(Parser, Debug)]
#[command(name = "raster-cad")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Terminal raster CAD editor with classic scan-conversion algorithms", long_about = None)]
struct Cli {
    /// Config file path (default: <config dir>/raster-cad/config.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Export target (.ppm or .png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "raster_cad=trace"
    #[arg(long)]
    log_filter: Option<String>,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> raster_cad::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default_path().map(Config::load_or_default).unwrap_or_default(),
        };

        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
        if let Some(output) = &self.output {
            config.export.path.clone_from(output);
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
        if let Some(filter) = &self.log_filter {
            config.logging.filter = Some(filter.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Without a file the terminal UI would draw over log output.
    if config.logging.file.is_some() {
        init_logging(config.logging.clone())?;
    }

    let mut app = App::new(&config)?;
    app.run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "canvas:\n  width: 320\n  height: 200\n").unwrap();

        let cli = Cli::parse_from([
            "raster-cad",
            "--config",
            path.to_str().unwrap(),
            "--height",
            "100",
            "--output",
            "shot.png",
            "--log-filter",
            "debug",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 100);
        assert_eq!(config.export.path, PathBuf::from("shot.png"));
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_rejects_zero_width() {
        let cli = Cli::parse_from(["raster-cad", "--width", "0"]);
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_cli_missing_config_is_error() {
        let cli = Cli::parse_from(["raster-cad", "--config", "/nonexistent/raster-cad.yaml"]);
        assert!(cli.resolve_config().is_err());
    }
}
