//! HSL color type
//!
//! Hue/saturation/lightness decomposition of RGB. The public type carries
//! the integer form shown to users (degrees and percent); the conversions
//! themselves run on double-precision fractions and round only when
//! producing the final integer components. The registry's color
//! interpolation reuses the fraction-level helpers so a color survives a
//! round trip exactly.

use super::rgb::Rgb;

/// A color in the HSL color space.
///
/// `hue` is in degrees `[0, 360)`, `saturation` and `lightness` in percent
/// `[0, 100]`.
///
/// # Example
///
/// ```
/// use colorlab::{Hsl, Rgb};
///
/// let hsl = Hsl::from(Rgb::new(255, 0, 0));
/// assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (0, 100, 50));
/// assert_eq!(Rgb::from(hsl), Rgb::new(255, 0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees (0..360)
    pub hue: u16,
    /// Saturation in percent (0..=100)
    pub saturation: u8,
    /// Lightness in percent (0..=100)
    pub lightness: u8,
}

impl Hsl {
    /// Create a new Hsl color.
    ///
    /// # Panics (debug only)
    /// Debug-asserts that hue is below 360 and saturation/lightness are at
    /// most 100.
    #[inline]
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        debug_assert!(hue < 360, "hue {hue} out of range 0..360");
        debug_assert!(saturation <= 100, "saturation {saturation} out of range 0..=100");
        debug_assert!(lightness <= 100, "lightness {lightness} out of range 0..=100");
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

/// Decompose an RGB color into HSL fractions, each in `[0.0, 1.0]`.
///
/// The achromatic case (max == min) yields hue 0 and saturation 0. Hue is
/// computed from whichever channel holds the maximum, in sixths of a
/// revolution, normalized into [0, 1).
pub(crate) fn rgb_to_fractions(rgb: Rgb) -> (f64, f64, f64) {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    if max == min {
        // Achromatic; hue is really undefined
        return (0.0, 0.0, lightness);
    }

    let delta = max - min;
    let saturation = if lightness < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let mut hue = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    hue /= 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }

    (hue, saturation, lightness)
}

/// Two-breakpoint piecewise hue-to-channel helper.
///
/// `m1`/`m2` are the interpolation factors derived from lightness and
/// saturation; the returned channel value is in `[0.0, 1.0]`.
fn hue_to_channel(m1: f64, m2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }
    if 6.0 * h < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if 2.0 * h < 1.0 {
        m2
    } else if 3.0 * h < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

/// Recompose an RGB color from HSL fractions.
///
/// Rounding happens once, on the final channel values; the intermediate
/// math stays in double precision so the composition inverts
/// [`rgb_to_fractions`] exactly.
pub(crate) fn fractions_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    if saturation == 0.0 {
        let v = (lightness * 255.0).round() as u8;
        return Rgb::new(v, v, v);
    }

    let m2 = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let m1 = 2.0 * lightness - m2;

    Rgb::new(
        (hue_to_channel(m1, m2, hue + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_channel(m1, m2, hue) * 255.0).round() as u8,
        (hue_to_channel(m1, m2, hue - 1.0 / 3.0) * 255.0).round() as u8,
    )
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (h, s, l) = rgb_to_fractions(rgb);
        // A hue that rounds up to a full revolution wraps back to 0
        let hue = ((h * 360.0).round() as u16) % 360;
        Self {
            hue,
            saturation: (s * 100.0).round() as u8,
            lightness: (l * 100.0).round() as u8,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        fractions_to_rgb(
            hsl.hue as f64 / 360.0,
            hsl.saturation as f64 / 100.0,
            hsl.lightness as f64 / 100.0,
        )
    }
}
