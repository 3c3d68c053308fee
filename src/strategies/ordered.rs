//! Ordered (Bayer) dithering strategies.
//!
//! Both variants threshold pixel intensities against the tiled 4x4 table
//! from [`bayer`](super::bayer) and emit pure 0/255 channels, simulating
//! intermediate tones spatially. They differ in what they threshold:
//!
//! - the **color** variant first quantizes each pixel through the imposed
//!   2-1-1-bit palette, then thresholds each channel independently;
//! - the **greyscale** variant thresholds the raw red channel and drives
//!   all three output channels from that single comparison. It deliberately
//!   skips the luminance computation; red alone decides.

use super::bayer::threshold_at;
use super::uniform::{expand_color, expand_grey, reduce_color};
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::Palette;

/// Threshold one 8-bit channel against a Bayer cell: strictly greater
/// saturates, otherwise the channel clears.
#[inline]
fn binarize(value: u8, threshold: i32) -> u8 {
    if value as i32 > threshold {
        255
    } else {
        0
    }
}

/// The color ordered-dithering strategy.
///
/// Each pixel is first quantized with the imposed palette
/// (`expand_color(reduce_color(p))`), then every channel of the quantized
/// value is binarized against the pixel's Bayer threshold. The palette is
/// the same fixed 16-entry imposed palette as the imposed-palette strategy.
pub fn ordered_color(original: &PixelBuffer) -> QuantizedImage {
    let buffer = original.map_positioned(|x, y, px| {
        let quantized = expand_color(reduce_color(px));
        let threshold = threshold_at(x, y);
        Rgb::new(
            binarize(quantized.r, threshold),
            binarize(quantized.g, threshold),
            binarize(quantized.b, threshold),
        )
    });
    QuantizedImage::new(buffer, Palette::from_fn(expand_color))
}

/// The greyscale ordered-dithering strategy.
///
/// The *original, unquantized* red channel is compared against the Bayer
/// threshold; the pixel becomes white or black accordingly. Green and blue
/// never participate in the comparison. The palette is the 16-step grey
/// ramp even though the output pixels are purely binary.
pub fn ordered_grey(original: &PixelBuffer) -> QuantizedImage {
    let buffer = original.map_positioned(|x, y, px| {
        if px.r as i32 > threshold_at(x, y) {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    });
    QuantizedImage::new(buffer, Palette::from_fn(expand_grey))
}
