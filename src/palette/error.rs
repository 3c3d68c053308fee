//! Error types for palette construction.

use thiserror::Error;

/// Error type for palette validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// More distinct colors were supplied than the 16 fixed slots can hold.
    ///
    /// Carries the full observed count for diagnostics, so the message can
    /// say "19 in the image" rather than just "too many".
    #[error("a palette supports at most 16 colors ({count} supplied)")]
    TooManyColors {
        /// Number of distinct colors observed
        count: usize,
    },
}
