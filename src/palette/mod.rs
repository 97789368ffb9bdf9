//! Named-color matching
//!
//! A [`ColorMatcher`] wraps a fixed table of named reference colors and maps
//! an arbitrary RGB color to the perceptually closest entry using the
//! CIEDE2000 difference. Every entry's Lab value is computed once at
//! construction, so a lookup costs one RGB-to-Lab conversion plus a linear
//! scan. The matcher remembers its most recent query, which makes repeated
//! lookups of the same color (the common case when tracking a pointer over
//! a flat region) free.
//!
//! # Example
//!
//! ```
//! use colorlab::{ColorMatcher, Rgb};
//!
//! let mut matcher = ColorMatcher::basic();
//! assert_eq!(matcher.find(Rgb::new(250, 5, 5)).name, "red");
//! ```

use crate::color::{Lab, Rgb};
use crate::difference::color_difference;

mod tables;

/// A named reference color with its precomputed Lab value.
#[derive(Debug, Clone, Copy)]
pub struct NamedColor {
    /// CSS keyword for this color.
    pub name: &'static str,
    /// The keyword's defined RGB value.
    pub rgb: Rgb,
    /// Lab value of `rgb`, computed when the matcher is built.
    pub lab: Lab,
}

/// Matches colors against a fixed table of named reference colors.
#[derive(Debug, Clone)]
pub struct ColorMatcher {
    entries: Vec<NamedColor>,
    /// Last query and the index it resolved to.
    memo: Option<(Rgb, usize)>,
}

impl ColorMatcher {
    fn from_table(table: &[(&'static str, u8, u8, u8)]) -> Self {
        let entries = table
            .iter()
            .map(|&(name, r, g, b)| {
                let rgb = Rgb::new(r, g, b);
                NamedColor {
                    name,
                    rgb,
                    lab: Lab::from(rgb),
                }
            })
            .collect();
        Self {
            entries,
            memo: None,
        }
    }

    /// Matcher over the 16 basic color keywords.
    pub fn basic() -> Self {
        Self::from_table(tables::BASIC)
    }

    /// Matcher over the full extended keyword list.
    pub fn extended() -> Self {
        Self::from_table(tables::EXTENDED)
    }

    /// Number of reference colors in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The reference colors, in table order.
    #[inline]
    pub fn entries(&self) -> &[NamedColor] {
        &self.entries
    }

    /// Find the table entry perceptually closest to `rgb`.
    ///
    /// An exact RGB match wins outright. Otherwise the entry with the
    /// smallest CIEDE2000 difference is returned, the earliest entry on a
    /// tie. The result is memoized, so asking for the same color twice in a
    /// row skips the scan.
    pub fn find(&mut self, rgb: Rgb) -> &NamedColor {
        if let Some((memo_rgb, index)) = self.memo {
            if memo_rgb == rgb {
                return &self.entries[index];
            }
        }

        let index = match self.entries.iter().position(|e| e.rgb == rgb) {
            Some(exact) => exact,
            None => self.scan(Lab::from(rgb)),
        };

        self.memo = Some((rgb, index));
        &self.entries[index]
    }

    /// Linear scan for the entry with the smallest difference to `lab`.
    fn scan(&self, lab: Lab) -> usize {
        let mut best_index = 0;
        let mut best_diff = f64::INFINITY;
        for (i, entry) in self.entries.iter().enumerate() {
            let diff = color_difference(lab, entry.lab);
            if diff < best_diff {
                best_diff = diff;
                best_index = i;
            }
        }
        best_index
    }
}
