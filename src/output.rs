//! Output type of the quantization pipeline.
//!
//! [`QuantizedImage`] pairs the transformed pixel buffer with the palette
//! that produced it. Both are created together, wholesale, by a single
//! strategy run; there is no partially-updated state.

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

/// The result of one successful transformation: a transformed buffer plus
/// the 16-entry palette it draws from.
///
/// # Example
///
/// ```
/// use quant16::{strategies::uniform, PixelBuffer, Rgb};
///
/// let buf = PixelBuffer::from_pixels(vec![Rgb::new(220, 10, 10); 4], 2, 2).unwrap();
/// let result = uniform::imposed_palette(&buf);
///
/// assert_eq!(result.buffer().width(), 2);
/// assert_eq!(result.palette().entries().len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedImage {
    buffer: PixelBuffer,
    palette: Palette,
}

impl QuantizedImage {
    /// Pair a transformed buffer with its palette.
    pub(crate) fn new(buffer: PixelBuffer, palette: Palette) -> Self {
        Self { buffer, palette }
    }

    /// The transformed pixel buffer.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// The palette the transformed buffer draws from.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Derive the 4-bit code of every pixel, row-major.
    ///
    /// Each code is the index of the nearest palette entry. For every
    /// strategy the transformed pixels are themselves palette entries, so
    /// "nearest" is an exact match and the mapping is lossless. This is the
    /// export surface for an indexed persistence format.
    pub fn to_indices(&self) -> Vec<u8> {
        self.buffer
            .pixels()
            .iter()
            .map(|&px| self.palette.nearest_color(px) as u8)
            .collect()
    }

    /// Consume the result, yielding the buffer and palette.
    pub fn into_parts(self) -> (PixelBuffer, Palette) {
        (self.buffer, self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_accessors() {
        let buf = PixelBuffer::from_pixels(vec![Rgb::WHITE; 2], 2, 1).unwrap();
        let palette = Palette::from_colors(&[Rgb::WHITE]).unwrap();
        let result = QuantizedImage::new(buf.clone(), palette);
        assert_eq!(result.buffer(), &buf);
        assert_eq!(result.palette()[0], Rgb::WHITE);
    }

    #[test]
    fn test_to_indices_exact_palette_pixels() {
        let palette =
            Palette::from_colors(&[Rgb::new(1, 2, 3), Rgb::new(200, 0, 0), Rgb::WHITE]).unwrap();
        let pixels = vec![Rgb::WHITE, Rgb::new(1, 2, 3), Rgb::new(200, 0, 0)];
        let buf = PixelBuffer::from_pixels(pixels, 3, 1).unwrap();
        let result = QuantizedImage::new(buf, palette);
        assert_eq!(result.to_indices(), vec![2, 0, 1]);
    }

    #[test]
    fn test_into_parts() {
        let buf = PixelBuffer::from_pixels(vec![Rgb::BLACK], 1, 1).unwrap();
        let palette = Palette::default();
        let (b, p) = QuantizedImage::new(buf.clone(), palette).into_parts();
        assert_eq!(b, buf);
        assert_eq!(p, palette);
    }
}
