//! RGB color type
//!
//! sRGB with 8-bit channels is the native representation of the screen: every
//! other color space in this crate is derived from it. The type also handles
//! the packed 24-bit form used by the color role registry's profile storage
//! and the `#RRGGBB` hex notation used by pickers and swatch displays.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color in the sRGB color space with 8-bit channels.
///
/// This is the exchange type of the crate: all conversions start from or end
/// at `Rgb`, and the color role registry stores `Rgb` values.
///
/// # Example
///
/// ```
/// use colorlab::Rgb;
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(red.to_string(), "#FF0000");
///
/// let parsed: Rgb = "#F00".parse().unwrap();
/// assert_eq!(parsed, red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack into a single 24-bit value (`0x00RRGGBB`).
    ///
    /// This is the form the registry writes to the profile store, one
    /// integer per color role.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack from a 24-bit value (`0x00RRGGBB`).
    ///
    /// Bits above the low 24 are ignored.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Rgb {
    /// Format as uppercase `#RRGGBB`, the notation used by the magnifier
    /// swatch and color picker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            // Byte length below would lie about digit count
            return Err(ParseColorError::InvalidLength);
        }

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
