//! Output encoders (PPM, PNG).

mod png_encoder;
mod ppm;

pub use png_encoder::PngEncoder;
pub use ppm::PpmEncoder;

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::path::Path;

/// Image formats the editor can export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Binary PPM (P6).
    Ppm,
    /// PNG with alpha.
    Png,
}

impl ExportFormat {
    /// Pick the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedExportFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match ext.to_ascii_lowercase().as_str() {
            "ppm" => Ok(Self::Ppm),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedExportFormat(ext.to_string())),
        }
    }
}

/// Write the framebuffer to `path`, choosing the encoder by extension.
///
/// # Errors
///
/// Returns an error for an unknown extension or if writing fails. A failed
/// export leaves nothing else changed.
pub fn export(fb: &Framebuffer, path: impl AsRef<Path>) -> Result<ExportFormat> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Ppm => PpmEncoder::write_to_file(fb, path)?,
        ExportFormat::Png => PngEncoder::write_to_file(fb, path)?,
    }
    log::info!("exported {}x{} image to {}", fb.width(), fb.height(), path.display());
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ExportFormat::from_path(Path::new("a.ppm")).unwrap(), ExportFormat::Ppm);
        assert_eq!(ExportFormat::from_path(Path::new("dir/a.PNG")).unwrap(), ExportFormat::Png);
        assert!(matches!(
            ExportFormat::from_path(Path::new("a.jpg")),
            Err(Error::UnsupportedExportFormat(ext)) if ext == "jpg"
        ));
        assert!(ExportFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(8, 6).unwrap();

        let ppm = dir.path().join("out.ppm");
        assert_eq!(export(&fb, &ppm).unwrap(), ExportFormat::Ppm);
        assert!(std::fs::read(&ppm).unwrap().starts_with(b"P6\n8 6\n255\n"));

        let png = dir.path().join("out.png");
        assert_eq!(export(&fb, &png).unwrap(), ExportFormat::Png);
        assert!(std::fs::read(&png).unwrap().starts_with(&[137, 80, 78, 71]));
    }

    #[test]
    fn test_export_unsupported_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();
        let path = dir.path().join("out.bmp");
        assert!(export(&fb, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_export_bad_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fb = Framebuffer::new(2, 2).unwrap();
        let err = export(&fb, dir.path().join("missing/out.ppm")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
