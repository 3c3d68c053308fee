//! Dedicated (exact) palette strategy.
//!
//! Collects every distinct color of the image in first-encounter order. An
//! image that already fits in 16 colors gets an exact palette and an
//! unchanged pixel buffer; anything richer is rejected with the observed
//! distinct-color count.

use std::collections::HashSet;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::{Palette, PaletteError};

/// The dedicated-palette strategy.
///
/// Scans the buffer once, row-major, recording each distinct RGB color the
/// first time it appears. The scan always runs to completion so the error
/// carries the *full* distinct count, not just "more than 16".
///
/// # Errors
///
/// [`PaletteError::TooManyColors`] when the image holds more than 16
/// distinct colors. The failure is atomic: nothing is published until the
/// result is fully built.
pub fn dedicated_palette(original: &PixelBuffer) -> Result<QuantizedImage, PaletteError> {
    let mut seen = HashSet::new();
    let mut colors: Vec<Rgb> = Vec::new();

    for &px in original.pixels() {
        if seen.insert(px.to_bytes()) {
            colors.push(px);
        }
    }

    let palette = Palette::from_colors(&colors)?;
    // Every pixel is already a palette entry, so the transformed buffer is
    // the original verbatim.
    Ok(QuantizedImage::new(original.clone(), palette))
}
