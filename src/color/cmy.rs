//! CMY and CMYK subtractive color types
//!
//! Print-oriented representations shown by the magnifier's color readout.
//! CMY is the straight complement of RGB; CMYK extracts the shared black
//! component so that mixed inks are reported the way printers think of them.

use super::rgb::Rgb;

/// A color in the CMY (cyan, magenta, yellow) color space.
///
/// Each channel is the complement of the corresponding RGB channel, so the
/// conversion is its own inverse: `255 - (255 - r) == r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmy {
    /// Cyan channel (0..=255)
    pub cyan: u8,
    /// Magenta channel (0..=255)
    pub magenta: u8,
    /// Yellow channel (0..=255)
    pub yellow: u8,
}

impl Cmy {
    /// Create a new Cmy color.
    #[inline]
    pub const fn new(cyan: u8, magenta: u8, yellow: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
        }
    }
}

impl From<Rgb> for Cmy {
    fn from(rgb: Rgb) -> Self {
        Self {
            cyan: 255 - rgb.r,
            magenta: 255 - rgb.g,
            yellow: 255 - rgb.b,
        }
    }
}

/// A color in the CMYK (cyan, magenta, yellow, black) color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cmyk {
    /// Cyan channel (0..=255)
    pub cyan: u8,
    /// Magenta channel (0..=255)
    pub magenta: u8,
    /// Yellow channel (0..=255)
    pub yellow: u8,
    /// Black channel (0..=255)
    pub black: u8,
}

impl Cmyk {
    /// Create a new Cmyk color.
    #[inline]
    pub const fn new(cyan: u8, magenta: u8, yellow: u8, black: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            black,
        }
    }
}

impl From<Rgb> for Cmyk {
    /// Convert by extracting the shared black component from the CMY form.
    ///
    /// Black is `min(cyan, magenta, yellow)`. Pure black (black == 255) is
    /// returned as `(0, 0, 0, 255)` directly, which also avoids the zero
    /// denominator in the rescaling step. The remaining channels are
    /// rescaled to use the full range: `round(255 * (c - black) / (255 - black))`.
    fn from(rgb: Rgb) -> Self {
        let cmy = Cmy::from(rgb);
        let black = cmy.cyan.min(cmy.magenta).min(cmy.yellow);

        if black == 255 {
            return Self::new(0, 0, 0, 255);
        }

        let denom = 255.0 - black as f64;
        let scale = |channel: u8| (255.0 * (channel - black) as f64 / denom).round() as u8;

        Self {
            cyan: scale(cmy.cyan),
            magenta: scale(cmy.magenta),
            yellow: scale(cmy.yellow),
            black,
        }
    }
}
