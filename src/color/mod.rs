//! Color types
//!
//! This module provides the [`Rgb`] sample type used for pixels and palette
//! entries throughout the crate.

mod rgb;

pub use rgb::Rgb;
