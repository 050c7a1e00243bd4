//! Binary PPM (P6) encoder.
//!
//! Takes pixels in capture order (bottom row first) and writes the rows
//! bottom-to-top so the file reads top-down like any other image.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PPM encoder for captured RGB pixels.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Write a framebuffer to a PPM file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::encode(fb.width(), fb.height(), &fb.capture_rgb(), &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to PPM bytes.
    ///
    /// # Errors
    ///
    /// Never fails for a well-formed framebuffer; the signature matches the
    /// other encoders.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb.width(), fb.height(), &fb.capture_rgb(), &mut buffer)?;
        Ok(buffer)
    }

    /// Encode `width * height` RGB triples given bottom row first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `rgb` is not exactly
    /// `width * height * 3` bytes, or an I/O error from `out`.
    pub fn encode<W: Write>(width: u32, height: u32, rgb: &[u8], out: &mut W) -> Result<()> {
        let stride = width as usize * 3;
        if width == 0 || height == 0 || rgb.len() != stride * height as usize {
            return Err(Error::InvalidDimensions { width, height });
        }

        write!(out, "P6\n{width} {height}\n255\n")?;
        for row in rgb.chunks_exact(stride).rev() {
            out.write_all(row)?;
        }
        Ok(())
    }
}
