//! YIQ color type
//!
//! NTSC luma/chroma representation. Luma spans the full [0, 255] range;
//! the in-phase and quadrature channels are signed, with practical ranges
//! of [-152, 152] and [-133, 133].

use super::rgb::Rgb;

/// A color in the YIQ (NTSC) color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yiq {
    /// Luma (0..=255)
    pub y: u8,
    /// In-phase chroma (-152..=152)
    pub i: i16,
    /// Quadrature chroma (-133..=133)
    pub q: i16,
}

impl Yiq {
    /// Create a new Yiq color.
    #[inline]
    pub const fn new(y: u8, i: i16, q: i16) -> Self {
        Self { y, i, q }
    }
}

impl From<Rgb> for Yiq {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64;
        let g = rgb.g as f64;
        let b = rgb.b as f64;

        Self {
            y: (0.299 * r + 0.587 * g + 0.114 * b).round() as u8,
            i: (0.596 * r - 0.275 * g - 0.321 * b).round() as i16,
            q: (0.212 * r - 0.523 * g + 0.311 * b).round() as i16,
        }
    }
}
