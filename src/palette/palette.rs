//! Fixed 16-entry palette with nearest-entry matching.
//!
//! [`Palette`] wraps an array of exactly [`PALETTE_SIZE`] colors, so the
//! "always exactly 16 entries" invariant holds structurally rather than by
//! convention. Matching is a deterministic linear scan: with 16 entries a
//! scan beats any spatial index, and the strict `<` comparison makes the
//! lowest index win on exact distance ties.

use super::error::PaletteError;
use crate::color::Rgb;

/// Number of entries in every palette. The palette index is the "4-bit
/// code" used throughout the crate.
pub const PALETTE_SIZE: usize = 16;

/// An ordered, fixed-size sequence of exactly 16 colors.
///
/// Unused slots are zero (black). A palette is owned by the result of a
/// transformation and replaced wholesale by each new transformation; there
/// is no incremental merging.
///
/// # Example
///
/// ```
/// use quant16::{Palette, Rgb};
///
/// let palette = Palette::from_colors(&[Rgb::WHITE, Rgb::new(255, 0, 0)]).unwrap();
/// assert_eq!(palette[0], Rgb::WHITE);
/// assert_eq!(palette[1], Rgb::new(255, 0, 0));
/// // Unused slots are black
/// assert_eq!(palette[15], Rgb::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from a full array of 16 entries.
    #[inline]
    pub const fn from_entries(entries: [Rgb; PALETTE_SIZE]) -> Self {
        Self { entries }
    }

    /// Create a palette from up to 16 colors, zero-filling the tail.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::TooManyColors`] (carrying the observed count)
    /// if more than 16 colors are supplied.
    pub fn from_colors(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.len() > PALETTE_SIZE {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }
        let mut entries = [Rgb::BLACK; PALETTE_SIZE];
        entries[..colors.len()].copy_from_slice(colors);
        Ok(Self { entries })
    }

    /// Build a palette by evaluating `f` for each 4-bit code 0..16.
    ///
    /// This is how the image-independent palettes (imposed and grey ramp)
    /// are constructed.
    pub fn from_fn(mut f: impl FnMut(u8) -> Rgb) -> Self {
        let mut entries = [Rgb::BLACK; PALETTE_SIZE];
        for (code, entry) in entries.iter_mut().enumerate() {
            *entry = f(code as u8);
        }
        Self { entries }
    }

    /// All 16 entries in order.
    #[inline]
    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Iterate over the entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().copied()
    }

    /// Index of the entry closest to `target` by Euclidean RGB distance.
    ///
    /// Linear scan over all 16 entries; on an exact distance tie the lowest
    /// index wins (strict `<` never replaces an equal best).
    ///
    /// # Example
    ///
    /// ```
    /// use quant16::{Palette, Rgb};
    ///
    /// let palette = Palette::from_colors(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
    /// assert_eq!(palette.nearest_color(Rgb::new(200, 200, 200)), 1);
    /// ```
    pub fn nearest_color(&self, target: Rgb) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, entry) in self.entries.iter().enumerate() {
            let dist = target.distance_squared(*entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }

    /// Index of the entry closest to the grey level `target` by absolute
    /// difference.
    ///
    /// Entries are compared through their red channel; grey palettes are
    /// achromatic so any channel carries the level. Same scan and tie-break
    /// discipline as [`nearest_color`](Self::nearest_color).
    pub fn nearest_grey(&self, target: u8) -> usize {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;
        for (i, entry) in self.entries.iter().enumerate() {
            let dist = (target as i32 - entry.r as i32).unsigned_abs();
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }
        best_idx
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = Rgb;

    #[inline]
    fn index(&self, idx: usize) -> &Rgb {
        &self.entries[idx]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Rgb;
    type IntoIter = std::slice::Iter<'a, Rgb>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
