//! Unified error type for the quant16 public API.
//!
//! [`QuantizeError`] wraps the crate's error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::palette::PaletteError;

/// Unified error type for the quant16 public API.
///
/// # Example
///
/// ```
/// use quant16::{PixelBuffer, QuantizeError, Quantizer, Transformation};
///
/// fn quantize(raw: &[u8], w: usize, h: usize) -> Result<Quantizer, QuantizeError> {
///     let buffer = PixelBuffer::from_raw(raw, w, h, 3)?;
///     let mut quantizer = Quantizer::new(buffer);
///     quantizer.transform(Transformation::MedianCut)?;
///     Ok(quantizer)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantizeError {
    /// Input buffer construction failed (bad dimensions or pixel format)
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),

    /// Palette construction failed (too many distinct colors)
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),
}
