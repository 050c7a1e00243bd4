//! Color types.
//!
//! Figures carry a [`Color`] with floating-point channels in `[0, 1]`; the
//! framebuffer stores 8-bit [`Rgba`]. Conversion happens once, at paint time.

use serde::{Deserialize, Serialize};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Sum of absolute per-channel differences (alpha ignored).
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

/// Drawing color with three floating-point channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Yellow, the default for the custom palette slot.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0);
    /// Grid line grey.
    pub const GRID: Self = Self::new(0.8, 0.8, 0.8);
    /// Axis line grey.
    pub const AXES: Self = Self::new(0.5, 0.5, 0.5);

    /// Selectable drawing colors, in menu order.
    pub const PALETTE: [(&'static str, Self); 5] = [
        ("Black", Self::BLACK),
        ("Red", Self::RED),
        ("Green", Self::GREEN),
        ("Blue", Self::BLUE),
        ("Custom (yellow)", Self::YELLOW),
    ];

    /// Create a new color. Channels are stored as given.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Whether every channel lies in `[0, 1]`.
    #[must_use]
    pub fn is_normalized(self) -> bool {
        [self.r, self.g, self.b].iter().all(|c| (0.0..=1.0).contains(c))
    }

    /// Quantize to an opaque 8-bit color, clamping out-of-range channels.
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba::rgb(q(self.r), q(self.g), q(self.b))
    }

    /// Palette index of this color, if it is one of [`Color::PALETTE`].
    #[must_use]
    pub fn palette_index(self) -> Option<usize> {
        Self::PALETTE.iter().position(|(_, c)| *c == self)
    }

    /// Display name: palette name or `rgb(r, g, b)`.
    #[must_use]
    pub fn name(self) -> String {
        match self.palette_index() {
            Some(i) => Self::PALETTE[i].0.to_string(),
            None => {
                let Rgba { r, g, b, .. } = self.to_rgba();
                format!("rgb({r}, {g}, {b})")
            }
        }
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rgba_array_conversion() {
        let color = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(color.to_array()), color);
    }

    #[test]
    fn test_color_quantization() {
        assert_eq!(Color::BLACK.to_rgba(), Rgba::BLACK);
        assert_eq!(Color::WHITE.to_rgba(), Rgba::WHITE);
        assert_eq!(Color::RED.to_rgba(), Rgba::RED);
        assert_eq!(Color::GRID.to_rgba(), Rgba::rgb(204, 204, 204));
        assert_eq!(Color::AXES.to_rgba(), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_color_quantization_clamps() {
        let wild = Color::new(-0.5, 2.0, 0.5);
        assert_eq!(wild.to_rgba(), Rgba::rgb(0, 255, 128));
        assert!(!wild.is_normalized());
        assert!(Color::GRID.is_normalized());
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(Color::BLUE.palette_index(), Some(3));
        assert_eq!(Color::BLUE.name(), "Blue");
        assert_eq!(Color::GRID.palette_index(), None);
        assert_eq!(Color::GRID.name(), "rgb(204, 204, 204)");
    }

    #[test]
    fn test_color_channels() {
        let c = Color::new(0.25, 0.5, 0.75);
        assert_relative_eq!(c.r, 0.25);
        assert_relative_eq!(c.g, 0.5);
        assert_relative_eq!(c.b, 0.75);
    }

    #[test]
    fn test_rgba_distance() {
        assert_eq!(Rgba::WHITE.distance(Rgba::WHITE), 0);
        assert_eq!(Rgba::WHITE.distance(Rgba::BLACK), 765);
        assert_eq!(Rgba::RED.distance(Rgba::BLUE), 510);
    }
}
