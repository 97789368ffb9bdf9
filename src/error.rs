//! Error types.
//!
//! Almost everything in this crate is total: conversions, the difference
//! engine, matching and the registry are defined for their entire input
//! domain and cannot fail. The one fallible surface is parsing a color from
//! a hex string.

use std::num::ParseIntError;

use thiserror::Error;

/// Error returned when parsing a hex color string fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after
    /// stripping '#').
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered.
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_error_display() {
        let error = ParseColorError::InvalidLength;
        assert_eq!(
            error.to_string(),
            "invalid hex color length (expected 3 or 6 characters)"
        );

        let int_err = u8::from_str_radix("zz", 16).unwrap_err();
        let error = ParseColorError::InvalidHex(int_err);
        assert!(error.to_string().starts_with("invalid hex character:"));
    }
}
