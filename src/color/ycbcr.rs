//! YCbCr color type
//!
//! Studio-swing luma/chroma representation (ITU-R BT.601 with head/footroom):
//! luma occupies [16, 235] and the chroma channels [16, 240].

use super::rgb::Rgb;

/// A color in the YCbCr color space (studio swing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YCbCr {
    /// Luma (16..=235)
    pub y: u8,
    /// Blue-difference chroma (16..=240)
    pub cb: u8,
    /// Red-difference chroma (16..=240)
    pub cr: u8,
}

impl YCbCr {
    /// Create a new YCbCr color.
    #[inline]
    pub const fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }
}

impl From<Rgb> for YCbCr {
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f64;
        let g = rgb.g as f64;
        let b = rgb.b as f64;

        Self {
            y: (0.257 * r + 0.504 * g + 0.098 * b + 16.0).round() as u8,
            cb: (-0.148 * r - 0.291 * g + 0.439 * b + 128.0).round() as u8,
            cr: (0.439 * r - 0.368 * g - 0.071 * b + 128.0).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_sits_at_footroom() {
        assert_eq!(YCbCr::from(Rgb::new(0, 0, 0)), YCbCr::new(16, 128, 128));
    }

    #[test]
    fn test_white_sits_at_headroom() {
        // 0.859 * 255 + 16 = 235.045; chroma coefficients cancel to zero
        assert_eq!(
            YCbCr::from(Rgb::new(255, 255, 255)),
            YCbCr::new(235, 128, 128)
        );
    }

    #[test]
    fn test_primaries() {
        // red: y = 0.257*255 + 16 = 81.535, cb = -0.148*255 + 128 = 90.26,
        // cr = 0.439*255 + 128 = 239.945 (the chroma ceiling)
        assert_eq!(YCbCr::from(Rgb::new(255, 0, 0)), YCbCr::new(82, 90, 240));
        // blue: y = 0.098*255 + 16 = 40.99, cb = 0.439*255 + 128 = 239.945
        assert_eq!(YCbCr::from(Rgb::new(0, 0, 255)), YCbCr::new(41, 240, 110));
    }

    #[test]
    fn test_channels_stay_in_studio_range() {
        let extremes = [
            Rgb::new(0, 0, 0),
            Rgb::new(255, 255, 255),
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
        ];
        for rgb in extremes {
            let ycbcr = YCbCr::from(rgb);
            assert!((16..=235).contains(&ycbcr.y), "y out of range for {rgb}");
            assert!((16..=240).contains(&ycbcr.cb), "cb out of range for {rgb}");
            assert!((16..=240).contains(&ycbcr.cr), "cr out of range for {rgb}");
        }
    }
}
