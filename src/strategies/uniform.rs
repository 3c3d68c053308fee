//! Uniform (image-independent) bit-depth reduction.
//!
//! Two fixed reductions from 24-bit color to a 4-bit code, plus their
//! expansions back to display colors:
//!
//! - **Color**: 2 bits red, 1 bit green, 1 bit blue, packed as
//!   `(r << 2) | (g << 1) | b`. Red gets the extra bit because the eye
//!   resolves more red gradation than the single on/off step gives.
//! - **Grey**: a 1-of-16 luminance level.
//!
//! The imposed-palette and greyscale strategies apply reduce-then-expand to
//! every pixel; their palettes are simply the expansion of every code 0..16,
//! so they are total functions of the input and never fail.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::Palette;

/// Reduce a color to its 4-bit code: 2-bit red, 1-bit green, 1-bit blue.
///
/// Each channel is scaled to its target range with round-to-nearest, so the
/// channel midpoint flips the bit: green 127 stays off, green 128 turns on.
///
/// # Example
///
/// ```
/// use quant16::{strategies::uniform, Rgb};
///
/// assert_eq!(uniform::reduce_color(Rgb::BLACK), 0b0000);
/// assert_eq!(uniform::reduce_color(Rgb::WHITE), 0b1111);
/// assert_eq!(uniform::reduce_color(Rgb::new(255, 0, 255)), 0b1101);
/// ```
#[inline]
pub fn reduce_color(c: Rgb) -> u8 {
    let r = (c.r as f32 * 3.0 / 255.0).round() as u8;
    let g = (c.g as f32 / 255.0).round() as u8;
    let b = (c.b as f32 / 255.0).round() as u8;
    (r << 2) | (g << 1) | b
}

/// Expand a 4-bit color code back to a display color.
///
/// The 2-bit red field maps to 0/85/170/255, the 1-bit green and blue
/// fields to 0/255. Inverse of [`reduce_color`] on its own output.
#[inline]
pub fn expand_color(code: u8) -> Rgb {
    let r = (code >> 2) & 0b11;
    let g = (code >> 1) & 0b1;
    let b = code & 0b1;
    Rgb::new(r * 85, g * 255, b * 255)
}

/// Reduce a color to a 4-bit grey level (0..=15) by luminance.
///
/// Uses `round(luminance * 15 / 255)` on the standard
/// `0.299R + 0.587G + 0.114B` weighting.
#[inline]
pub fn reduce_grey(c: Rgb) -> u8 {
    let lum = 0.299 * c.r as f32 + 0.587 * c.g as f32 + 0.114 * c.b as f32;
    (lum * 15.0 / 255.0).round() as u8
}

/// Expand a 4-bit grey level to a display color: `level * 255 / 15`
/// replicated across all three channels.
#[inline]
pub fn expand_grey(level: u8) -> Rgb {
    Rgb::splat(level * 17)
}

/// The imposed-palette strategy: quantize every pixel through the fixed
/// 2-1-1-bit reduction.
///
/// The palette is image-independent: entry `i` is `expand_color(i)`.
pub fn imposed_palette(original: &PixelBuffer) -> QuantizedImage {
    let buffer = original.map(|px| expand_color(reduce_color(px)));
    QuantizedImage::new(buffer, Palette::from_fn(expand_color))
}

/// The greyscale strategy: quantize every pixel to one of 16 grey levels.
///
/// The palette is the fixed grey ramp: entry `i` is `expand_grey(i)`.
pub fn greyscale(original: &PixelBuffer) -> QuantizedImage {
    let buffer = original.map(|px| expand_grey(reduce_grey(px)));
    QuantizedImage::new(buffer, Palette::from_fn(expand_grey))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PALETTE_SIZE;

    #[test]
    fn test_reduce_color_extremes() {
        assert_eq!(reduce_color(Rgb::BLACK), 0);
        assert_eq!(reduce_color(Rgb::WHITE), 15);
    }

    #[test]
    fn test_reduce_color_channel_rounding() {
        // Green/blue flip at the midpoint
        assert_eq!(reduce_color(Rgb::new(0, 127, 0)), 0b000);
        assert_eq!(reduce_color(Rgb::new(0, 128, 0)), 0b010);
        assert_eq!(reduce_color(Rgb::new(0, 0, 127)), 0b000);
        assert_eq!(reduce_color(Rgb::new(0, 0, 128)), 0b001);
        // Red rounds to the nearest of four steps: 42 -> 0, 43 -> 1
        assert_eq!(reduce_color(Rgb::new(42, 0, 0)), 0b0000);
        assert_eq!(reduce_color(Rgb::new(43, 0, 0)), 0b0100);
        assert_eq!(reduce_color(Rgb::new(170, 0, 0)), 0b1000);
    }

    #[test]
    fn test_expand_color_codes() {
        assert_eq!(expand_color(0b0000), Rgb::BLACK);
        assert_eq!(expand_color(0b1111), Rgb::WHITE);
        assert_eq!(expand_color(0b0100), Rgb::new(85, 0, 0));
        assert_eq!(expand_color(0b1000), Rgb::new(170, 0, 0));
        assert_eq!(expand_color(0b0011), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_color_code_round_trip() {
        // reduce(expand(code)) == code for every 4-bit code
        for code in 0..16u8 {
            assert_eq!(
                reduce_color(expand_color(code)),
                code,
                "code {code} should round-trip through expansion"
            );
        }
    }

    #[test]
    fn test_reduce_grey_extremes_and_rounding() {
        assert_eq!(reduce_grey(Rgb::BLACK), 0);
        assert_eq!(reduce_grey(Rgb::WHITE), 15);
        // Grey 8 is luminance 8; 8 * 15 / 255 = 0.47 rounds to 0,
        // grey 9 gives 0.53 which rounds to 1
        assert_eq!(reduce_grey(Rgb::splat(8)), 0);
        assert_eq!(reduce_grey(Rgb::splat(9)), 1);
    }

    #[test]
    fn test_grey_level_round_trip() {
        for level in 0..16u8 {
            assert_eq!(
                reduce_grey(expand_grey(level)),
                level,
                "grey level {level} should round-trip through expansion"
            );
        }
    }

    #[test]
    fn test_imposed_palette_entries() {
        let buf = PixelBuffer::from_pixels(vec![Rgb::BLACK], 1, 1).unwrap();
        let result = imposed_palette(&buf);
        for code in 0..PALETTE_SIZE {
            assert_eq!(result.palette()[code], expand_color(code as u8));
        }
    }

    #[test]
    fn test_imposed_palette_pixels_are_palette_entries() {
        let pixels = vec![
            Rgb::new(100, 200, 30),
            Rgb::new(250, 10, 250),
            Rgb::new(60, 60, 60),
            Rgb::new(0, 255, 128),
        ];
        let buf = PixelBuffer::from_pixels(pixels, 2, 2).unwrap();
        let result = imposed_palette(&buf);
        for &px in result.buffer().pixels() {
            assert!(
                result.palette().iter().any(|entry| entry == px),
                "pixel {px:?} is not a palette entry"
            );
        }
    }

    #[test]
    fn test_greyscale_produces_achromatic_pixels() {
        let pixels = vec![Rgb::new(200, 10, 90), Rgb::new(12, 240, 3)];
        let buf = PixelBuffer::from_pixels(pixels, 2, 1).unwrap();
        let result = greyscale(&buf);
        for &px in result.buffer().pixels() {
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
            assert_eq!(px.r % 17, 0, "grey values sit on the 17-step ramp");
        }
    }

    #[test]
    fn test_greyscale_palette_is_ascending_ramp() {
        let buf = PixelBuffer::from_pixels(vec![Rgb::BLACK], 1, 1).unwrap();
        let result = greyscale(&buf);
        let palette = result.palette();
        for i in 1..PALETTE_SIZE {
            assert!(palette[i].r > palette[i - 1].r);
        }
        assert_eq!(palette[15], Rgb::WHITE);
    }
}
