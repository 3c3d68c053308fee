//! Pixel buffer type and validation.
//!
//! [`PixelBuffer`] is the input and output medium for every transformation:
//! a rectangular width x height grid of [`Rgb`] samples stored row-major.
//! All structural invariants (non-empty, no ragged rows, length matching the
//! dimensions) are enforced at construction so the strategies never have to
//! re-check them.

use thiserror::Error;

use crate::color::Rgb;

/// Error type for pixel buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The raw input's channel depth cannot be represented. Only 3-channel
    /// RGB and 4-channel RGBA (alpha ignored) inputs are supported.
    #[error("unsupported pixel format: {channels} channels per pixel (expected 3 or 4)")]
    UnsupportedPixelFormat {
        /// Observed channels per pixel
        channels: usize,
    },

    /// Pixel data length does not match the declared dimensions.
    #[error("pixel data holds {len} samples, dimensions require {width}x{height} = {expected}")]
    DimensionMismatch {
        /// Observed sample count
        len: usize,
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// `width * height`
        expected: usize,
    },

    /// The buffer would contain no pixels.
    #[error("image must contain at least one pixel")]
    EmptyImage,

    /// A row has a different length than the first row.
    #[error("row {row} has {len} pixels, expected {width}")]
    RaggedRow {
        /// Index of the offending row
        row: usize,
        /// Observed length of that row
        len: usize,
        /// Expected width (length of row 0)
        width: usize,
    },
}

/// A rectangular grid of RGB samples.
///
/// Pixels are stored row-major: the sample at `(x, y)` lives at index
/// `y * width + x`. The buffer is immutable once constructed; every
/// transformation derives a fresh buffer instead of mutating its input.
///
/// # Example
///
/// ```
/// use quant16::{PixelBuffer, Rgb};
///
/// let pixels = vec![Rgb::BLACK, Rgb::WHITE, Rgb::WHITE, Rgb::BLACK];
/// let buf = PixelBuffer::from_pixels(pixels, 2, 2).unwrap();
///
/// assert_eq!(buf.width(), 2);
/// assert_eq!(buf.height(), 2);
/// assert_eq!(buf.pixel(1, 0), Rgb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Create a buffer from row-major samples and explicit dimensions.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptyImage`] if `width` or `height` is zero
    /// - [`BufferError::DimensionMismatch`] if `pixels.len() != width * height`
    pub fn from_pixels(pixels: Vec<Rgb>, width: usize, height: usize) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyImage);
        }
        let expected = width * height;
        if pixels.len() != expected {
            return Err(BufferError::DimensionMismatch {
                len: pixels.len(),
                width,
                height,
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from raw interleaved bytes as produced by a bitmap
    /// decoder.
    ///
    /// `channels` selects the input layout: 3 for `[R, G, B, ...]`, 4 for
    /// `[R, G, B, A, ...]`. The alpha byte is ignored.
    ///
    /// # Errors
    ///
    /// - [`BufferError::UnsupportedPixelFormat`] for any other channel count
    /// - [`BufferError::EmptyImage`] / [`BufferError::DimensionMismatch`] as
    ///   in [`from_pixels`](Self::from_pixels)
    ///
    /// # Example
    ///
    /// ```
    /// use quant16::{PixelBuffer, Rgb};
    ///
    /// // 1x2 RGBA input; alpha is dropped
    /// let raw = [255, 0, 0, 128, 0, 0, 255, 128];
    /// let buf = PixelBuffer::from_raw(&raw, 1, 2, 4).unwrap();
    /// assert_eq!(buf.pixel(0, 0), Rgb::new(255, 0, 0));
    /// assert_eq!(buf.pixel(0, 1), Rgb::new(0, 0, 255));
    /// ```
    pub fn from_raw(
        raw: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self, BufferError> {
        if channels != 3 && channels != 4 {
            return Err(BufferError::UnsupportedPixelFormat { channels });
        }
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyImage);
        }
        let expected = width * height;
        if raw.len() != expected * channels {
            return Err(BufferError::DimensionMismatch {
                len: raw.len() / channels,
                width,
                height,
                expected,
            });
        }
        let pixels = raw
            .chunks_exact(channels)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from per-row sample vectors.
    ///
    /// # Errors
    ///
    /// - [`BufferError::EmptyImage`] if there are no rows or row 0 is empty
    /// - [`BufferError::RaggedRow`] if any row differs in length from row 0
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self, BufferError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(BufferError::EmptyImage);
        }
        let width = rows[0].len();
        for (row, samples) in rows.iter().enumerate() {
            if samples.len() != width {
                return Err(BufferError::RaggedRow {
                    row,
                    len: samples.len(),
                    width,
                });
            }
        }
        let pixels = rows.iter().flatten().copied().collect();
        Ok(Self {
            width,
            height: rows.len(),
            pixels,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// All samples in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over `((x, y), sample)` in row-major order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = ((usize, usize), Rgb)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .map(|(i, &px)| ((i % self.width, i / self.width), px))
    }

    /// Flatten to interleaved RGB bytes for the rendering collaborator.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_raw_rgb(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            raw.extend_from_slice(&px.to_bytes());
        }
        raw
    }

    /// Build a new buffer of the same dimensions by mapping every sample.
    pub(crate) fn map(&self, f: impl FnMut(Rgb) -> Rgb) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Build a new buffer of the same dimensions by mapping every sample
    /// together with its coordinates.
    pub(crate) fn map_positioned(&self, mut f: impl FnMut(usize, usize, Rgb) -> Rgb) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            pixels: self
                .pixels
                .iter()
                .enumerate()
                .map(|(i, &px)| f(i % self.width, i / self.width, px))
                .collect(),
        }
    }
}
