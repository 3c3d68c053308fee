//! Quantization engine: strategy dispatch and result state.
//!
//! [`Quantizer`] owns the original pixel buffer and the current
//! transformation result. Every transform re-derives from the original
//! buffer (never from a prior result) and swaps the finished
//! [`QuantizedImage`] into the result slot wholesale, so a failed transform
//! leaves the previous state fully intact.

use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::error::QuantizeError;
use crate::output::QuantizedImage;
use crate::strategies::{dedicated, median_cut, ordered, uniform};

/// The closed set of transformations the engine can apply.
///
/// `None` is the identity: it clears any existing result and returns the
/// engine to the untransformed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transformation {
    /// Identity; clears the current result
    #[default]
    None,
    /// Fixed 2-1-1-bit reduction with an image-independent palette
    ImposedPalette,
    /// Exact palette of the image's distinct colors (fails above 16)
    DedicatedPalette,
    /// 16-level luminance ramp
    Greyscale,
    /// Ordered Bayer dithering of the imposed-palette quantization
    Dithering,
    /// Ordered Bayer dithering of the red channel to black/white
    DitheringGreyscale,
    /// Median-cut palette derived from the color population
    MedianCut,
    /// Median-cut palette derived from the luminance population
    MedianCutGreyscale,
}

/// Orchestrates the quantization strategies over one original image.
///
/// The engine is single-threaded and synchronous; it provides no internal
/// locking, so concurrent transforms on one instance require external
/// serialization (which `&mut self` already enforces in safe Rust).
///
/// # Example
///
/// ```
/// use quant16::{PixelBuffer, Quantizer, Rgb, Transformation};
///
/// let buf = PixelBuffer::from_pixels(vec![Rgb::new(30, 90, 210); 9], 3, 3).unwrap();
/// let mut quantizer = Quantizer::new(buf);
///
/// quantizer.transform(Transformation::Greyscale).unwrap();
/// assert!(quantizer.is_transformed());
///
/// quantizer.transform(Transformation::None).unwrap();
/// assert!(!quantizer.is_transformed());
/// ```
#[derive(Debug, Clone)]
pub struct Quantizer {
    original: PixelBuffer,
    result: Option<QuantizedImage>,
    current: Transformation,
}

impl Quantizer {
    /// Create an engine over an original buffer, in the untransformed state.
    pub fn new(original: PixelBuffer) -> Self {
        Self {
            original,
            result: None,
            current: Transformation::None,
        }
    }

    /// The original buffer every transform derives from.
    #[inline]
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// The current result, if a transformation has been applied.
    #[inline]
    pub fn result(&self) -> Option<&QuantizedImage> {
        self.result.as_ref()
    }

    /// The transformation that produced the current result.
    #[inline]
    pub fn current(&self) -> Transformation {
        self.current
    }

    /// Whether a transformation result is present.
    #[inline]
    pub fn is_transformed(&self) -> bool {
        self.result.is_some()
    }

    /// Apply a transformation to the original buffer.
    ///
    /// On success the fresh result replaces any previous one and
    /// [`current()`](Self::current) reports `transformation`. On failure
    /// (only possible for [`Transformation::DedicatedPalette`]) the
    /// previous result and current transformation are left untouched.
    pub fn transform(&mut self, transformation: Transformation) -> Result<(), QuantizeError> {
        debug!(
            ?transformation,
            width = self.original.width(),
            height = self.original.height(),
            "applying transformation"
        );

        let result = match transformation {
            Transformation::None => {
                self.result = None;
                self.current = Transformation::None;
                return Ok(());
            }
            Transformation::ImposedPalette => uniform::imposed_palette(&self.original),
            Transformation::DedicatedPalette => {
                match dedicated::dedicated_palette(&self.original) {
                    Ok(result) => result,
                    Err(err) => {
                        warn!(%err, "dedicated palette rejected image");
                        return Err(err.into());
                    }
                }
            }
            Transformation::Greyscale => uniform::greyscale(&self.original),
            Transformation::Dithering => ordered::ordered_color(&self.original),
            Transformation::DitheringGreyscale => ordered::ordered_grey(&self.original),
            Transformation::MedianCut => median_cut::median_cut_color(&self.original),
            Transformation::MedianCutGreyscale => median_cut::median_cut_grey(&self.original),
        };

        self.result = Some(result);
        self.current = transformation;
        debug!(?transformation, "transformation complete");
        Ok(())
    }
}
