//! Color types and conversions
//!
//! One type per color space, converted through `From` impls. `Rgb` is the
//! exchange type; every other space is derived from it (and HSL converts
//! back). All conversions are pure and total: inputs are range-limited by
//! their types, so nothing here can fail.
//!
//! # Example
//!
//! ```
//! use colorlab::{Cmyk, Hsl, Lab, Rgb};
//!
//! let rgb = Rgb::new(255, 0, 0);
//! let hsl = Hsl::from(rgb);
//! let cmyk = Cmyk::from(rgb);
//! let lab = Lab::from(rgb);
//!
//! assert_eq!(hsl.hue, 0);
//! assert_eq!(cmyk.black, 0);
//! assert!(lab.l > 50.0);
//! ```

mod cmy;
mod hsl;
mod lab;
mod rgb;
mod xyz;
mod ycbcr;
mod yiq;

pub(crate) use hsl::{fractions_to_rgb, rgb_to_fractions};

pub use cmy::{Cmy, Cmyk};
pub use hsl::Hsl;
pub use lab::Lab;
pub use rgb::Rgb;
pub use xyz::Xyz;
pub use ycbcr::YCbCr;
pub use yiq::Yiq;
