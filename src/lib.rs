//! quant16: 16-color quantization and palette construction
//!
//! This library reduces 24-bit truecolor raster images to a fixed 16-entry
//! palette using several distinct strategies, from fixed bit-depth
//! reduction to recursive median-cut palette derivation.
//!
//! # Quick Start
//!
//! The [`Quantizer`] engine is the primary entry point:
//!
//! ```
//! use quant16::{PixelBuffer, Quantizer, Rgb, Transformation};
//!
//! let pixels = vec![Rgb::new(120, 200, 40); 64];
//! let buffer = PixelBuffer::from_pixels(pixels, 8, 8).unwrap();
//!
//! let mut quantizer = Quantizer::new(buffer);
//! quantizer.transform(Transformation::MedianCut).unwrap();
//!
//! let result = quantizer.result().unwrap();
//! assert_eq!(result.palette().entries().len(), 16);
//! ```
//!
//! Individual strategies are also available as pure functions under
//! [`strategies`] when the stateful engine is not needed.
//!
//! # Strategies
//!
//! Seven transformations are available via [`Transformation`]:
//!
//! - **ImposedPalette**: fixed 2-1-1-bit reduction (2 bits red, 1 bit each
//!   green/blue), image-independent palette, never fails
//! - **DedicatedPalette**: exact palette of the image's distinct colors;
//!   fails with the observed count when the image holds more than 16
//! - **Greyscale**: 16-level luminance ramp
//! - **Dithering** / **DitheringGreyscale**: ordered dithering against a
//!   tiled 4x4 Bayer threshold table
//! - **MedianCut** / **MedianCutGreyscale**: recursive spatial partitioning
//!   of the pixel population into 16 representative buckets, then
//!   nearest-entry reassignment of every pixel
//!
//! # Pipeline Overview
//!
//! ```text
//! decoded RGB pixels        (from the bitmap collaborator)
//!     |
//!     v
//! PixelBuffer               (validated: non-empty, rectangular)
//!     |
//!     v
//! Quantizer::transform(strategy)
//!     |
//!     +--> uniform reducer   (imposed palette / greyscale)
//!     +--> dedicated scan    (exact palette, fallible)
//!     +--> Bayer thresholds  (ordered dithering)
//!     +--> median cutter     (palette from population, nearest reassign)
//!     |
//!     v
//! QuantizedImage            (transformed buffer + 16-entry palette)
//!     |
//!     v
//! caller                    (display, swatch rendering, persistence)
//! ```
//!
//! # Design Notes
//!
//! - The palette is an array of exactly 16 entries ([`Palette`]), never a
//!   dynamic collection: the size invariant holds structurally.
//! - Every transform re-derives from the *original* buffer and replaces the
//!   result wholesale; a failed transform leaves prior state intact.
//! - All distances are plain RGB (squared Euclidean) or grey-level
//!   (absolute difference). No gamma handling, no perceptual color space;
//!   the 16-entry target palette does not reward the extra machinery.
//! - Nearest-entry matching is a deterministic linear scan with a
//!   first-minimum tie-break, so results are reproducible bit for bit.

pub mod buffer;
pub mod color;
pub mod engine;
pub mod error;
pub mod output;
pub mod palette;
pub mod strategies;


pub use buffer::{BufferError, PixelBuffer};
pub use color::Rgb;
pub use engine::{Quantizer, Transformation};
pub use error::QuantizeError;
pub use output::QuantizedImage;
pub use palette::{Palette, PaletteError, PALETTE_SIZE};
