//! Palette types and nearest-entry matching
//!
//! This module provides the fixed 16-entry [`Palette`] and its validation
//! error.

mod error;
mod palette;

pub use error::PaletteError;
pub use palette::{Palette, PALETTE_SIZE};
