//! Logger initialization.
//!
//! The crate logs through the `log` facade; this module installs the
//! `env_logger` backend once per process. While the terminal UI owns the
//! screen, output must go to a file or it would corrupt the display.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

/// Logger configuration, read from the `logging` section of the config file.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "raster_cad=debug").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Explicit filter. Takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    /// Append log records to this file instead of stderr. Required to see
    /// logs while the terminal UI is running.
    pub file: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Filter precedence: `config.filter`, then `RUST_LOG`, then `info`.
/// Subsequent calls are ignored.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened. The logger is not
/// installed in that case.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let target = match &config.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            env_logger::Target::Pipe(Box::new(file))
        }
        None => env_logger::Target::Stderr,
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        if config.file.is_some() {
            builder.write_style(env_logger::WriteStyle::Never);
        }
        builder.target(target);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
    Ok(())
}
