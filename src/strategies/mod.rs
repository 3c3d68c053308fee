//! The seven quantization strategies.
//!
//! Each strategy is a pure function from the original [`PixelBuffer`] to a
//! fresh [`QuantizedImage`] (transformed buffer + 16-entry palette):
//!
//! - [`uniform::imposed_palette`]: fixed 2-1-1-bit reduction, image-independent palette
//! - [`uniform::greyscale`]: fixed 16-level luminance ramp
//! - [`dedicated::dedicated_palette`]: exact palette of up to 16 distinct colors (fallible)
//! - [`ordered::ordered_color`] / [`ordered::ordered_grey`]: 4x4 Bayer dithering
//! - [`median_cut::median_cut_color`] / [`median_cut::median_cut_grey`]:
//!   recursive population splitting into 16 representative buckets
//!
//! Only the dedicated-palette strategy can fail; all others are total
//! functions of the input.
//!
//! [`PixelBuffer`]: crate::PixelBuffer
//! [`QuantizedImage`]: crate::QuantizedImage

pub mod bayer;
pub mod dedicated;
pub mod median_cut;
pub mod ordered;
pub mod uniform;
