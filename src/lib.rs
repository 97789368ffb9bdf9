//! Color science engine for screen measurement tools
//!
//! Everything a pixel readout needs once it has grabbed an RGB value from
//! the screen: conversions into the color spaces users ask to see (CMY,
//! CMYK, HSL, YCbCr, YIQ, XYZ, CIE Lab), a perceptual difference metric
//! (CIEDE2000), a matcher that names a color after its closest CSS keyword,
//! and a registry of UI color roles with HSL-space interpolation and
//! profile persistence.
//!
//! The crate is pure computation. It does no screen capture and no drawing;
//! callers hand it [`Rgb`] values and get numbers, names and colors back.
//!
//! # Example
//!
//! ```
//! use colorlab::{color_difference, ColorMatcher, Hsl, Lab, Rgb};
//!
//! let grabbed = Rgb::new(210, 105, 30);
//!
//! // Show it in another space
//! let hsl = Hsl::from(grabbed);
//! assert_eq!(hsl.hue, 25);
//!
//! // Name it
//! let mut matcher = ColorMatcher::extended();
//! assert_eq!(matcher.find(grabbed).name, "chocolate");
//!
//! // Compare it against another grab
//! let other = Rgb::new(205, 133, 63);
//! let diff = color_difference(Lab::from(grabbed), Lab::from(other));
//! assert!(diff < 15.0);
//! ```

pub mod color;
pub mod difference;
pub mod error;
pub mod palette;
pub mod registry;


pub use color::{Cmy, Cmyk, Hsl, Lab, Rgb, Xyz, YCbCr, Yiq};
pub use difference::color_difference;
pub use error::ParseColorError;
pub use palette::{ColorMatcher, NamedColor};
pub use registry::{interpolate_color, ColorRegistry, ColorRole, ProfileStore};
