//! CIE 1931 XYZ color type
//!
//! Device-independent tristimulus values, D65-referenced and expressed as
//! percentages (Y = 100 for the reference white). This is the stepping
//! stone between sRGB and CIE Lab.

use super::rgb::Rgb;

/// sRGB to XYZ conversion matrix (D65), row major.
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// A color in the CIE 1931 XYZ color space (D65, percentage scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value, roughly 0..=100
    pub x: f64,
    /// Y tristimulus value (luminance), roughly 0..=100
    pub y: f64,
    /// Z tristimulus value, roughly 0..=100
    pub z: f64,
}

impl Xyz {
    /// Create a new Xyz color.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Inverse sRGB companding: gamma-encoded channel fraction to linear light.
#[inline]
fn linearize(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        // Normalize, linearize, scale to percentage, then apply the matrix
        let r = linearize(rgb.r as f64 / 255.0) * 100.0;
        let g = linearize(rgb.g as f64 / 255.0) * 100.0;
        let b = linearize(rgb.b as f64 / 255.0) * 100.0;

        Self {
            x: SRGB_TO_XYZ[0][0] * r + SRGB_TO_XYZ[0][1] * g + SRGB_TO_XYZ[0][2] * b,
            y: SRGB_TO_XYZ[1][0] * r + SRGB_TO_XYZ[1][1] * g + SRGB_TO_XYZ[1][2] * b,
            z: SRGB_TO_XYZ[2][0] * r + SRGB_TO_XYZ[2][1] * g + SRGB_TO_XYZ[2][2] * b,
        }
    }
}
