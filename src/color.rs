//! Color type used for strokes and backgrounds.

use crate::error::{Error, Result};

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
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
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

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    ///
    /// The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other shape or non-hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use tally_viz::color::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#ff0000").unwrap(), Rgba::RED);
    /// assert_eq!(Rgba::from_hex("00000080").unwrap(), Rgba::new(0, 0, 0, 128));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_string()))
        };

        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK.to_array(), [0, 0, 0, 255]);
        assert_eq!(Rgba::WHITE.to_array(), [255, 255, 255, 255]);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_from_hex_rgb() {
        assert_eq!(Rgba::from_hex("#1a2b3c").unwrap(), Rgba::rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(Rgba::from_hex("FFFFFF").unwrap(), Rgba::WHITE);
    }

    #[test]
    fn test_from_hex_rgba() {
        assert_eq!(Rgba::from_hex("#0000ff80").unwrap(), Rgba::new(0, 0, 255, 128));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(Rgba::from_hex("").is_err());
        assert!(Rgba::from_hex("#fff").is_err());
        assert!(Rgba::from_hex("#gg0000").is_err());
        assert!(Rgba::from_hex("#ééé").is_err());
    }
}
