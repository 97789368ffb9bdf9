//! CIE L\*a\*b\* color type
//!
//! Perceptually oriented opponent-color space used by the difference engine
//! and the named-color matcher. Derived from XYZ against the D65 reference
//! white.

use super::rgb::Rgb;
use super::xyz::Xyz;

/// D65 reference white in XYZ percentage scale.
const D65_WHITE: (f64, f64, f64) = (95.047, 100.000, 108.883);

/// Breakpoint between the cube-root and linear segments of the Lab
/// companding function (CIE epsilon, 216/24389 rounded as published).
const EPSILON: f64 = 0.008856;

/// Slope of the linear segment (CIE kappa / 116, 903.3/116 as published).
const KAPPA_OVER_116: f64 = 903.3 / 116.0;

/// A color in the CIE L\*a\*b\* color space.
///
/// `l` is lightness in `[0, 100]`; `a` (green-red) and `b` (blue-yellow)
/// are unbounded in principle but stay within roughly ±150 for colors that
/// originate on a screen.
///
/// # Example
///
/// ```
/// use colorlab::{Lab, Rgb};
///
/// let lab = Lab::from(Rgb::new(255, 0, 0));
/// assert!((lab.l - 53.2408).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness (0..=100)
    pub l: f64,
    /// Green-red opponent axis
    pub a: f64,
    /// Blue-yellow opponent axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// Lab companding function.
#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_OVER_116 * t + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / D65_WHITE.0);
        let fy = f(xyz.y / D65_WHITE.1);
        let fz = f(xyz.z / D65_WHITE.2);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    /// Composition of RGB -> XYZ -> Lab.
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
        assert!(
            (actual - expected).abs() < tol,
            "{what}: expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_red_reference_vector() {
        // Published reference vector, 4 decimal places
        let lab = Lab::from(Rgb::new(255, 0, 0));
        assert_close(lab.l, 53.2408, 1e-4, "red L");
        assert_close(lab.a, 80.0925, 1e-4, "red a");
        assert_close(lab.b, 67.2032, 1e-4, "red b");
    }

    #[test]
    fn test_white_and_black_endpoints() {
        let white = Lab::from(Rgb::new(255, 255, 255));
        assert_close(white.l, 100.0, 1e-3, "white L");
        assert_close(white.a, 0.0, 1e-2, "white a");
        assert_close(white.b, 0.0, 1e-2, "white b");

        let black = Lab::from(Rgb::new(0, 0, 0));
        assert_close(black.l, 0.0, 1e-9, "black L");
        assert_close(black.a, 0.0, 1e-9, "black a");
        assert_close(black.b, 0.0, 1e-9, "black b");
    }

    #[test]
    fn test_grays_are_neutral() {
        for v in [32u8, 64, 128, 200] {
            let lab = Lab::from(Rgb::new(v, v, v));
            assert_close(lab.a, 0.0, 1e-2, "gray a");
            assert_close(lab.b, 0.0, 1e-2, "gray b");
        }
    }

    #[test]
    fn test_linear_segment_below_epsilon() {
        // rgb(1,1,1) produces XYZ components far below epsilon, exercising
        // the linear branch of the companding function
        let lab = Lab::from(Rgb::new(1, 1, 1));
        assert!(lab.l > 0.0 && lab.l < 1.0, "near-black L was {}", lab.l);
    }

    #[test]
    fn test_matches_palette_crate() {
        use palette::{IntoColor, Lab as PaletteLab, Srgb};

        // palette uses the same sRGB/D65 pipeline; agree within f32 noise
        let test_colors: [(u8, u8, u8); 6] = [
            (255, 0, 0),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 255),
            (128, 128, 128),
            (135, 40, 230),
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(Rgb::new(r, g, b));
            let theirs: PaletteLab = Srgb::new(
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
            )
            .into_color();

            assert_close(ours.l, theirs.l as f64, 0.05, "palette L");
            assert_close(ours.a, theirs.a as f64, 0.05, "palette a");
            assert_close(ours.b, theirs.b as f64, 0.05, "palette b");
        }
    }
}
