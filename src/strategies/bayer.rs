//! 4x4 Bayer matrix and its normalized threshold table.
//!
//! The pattern values 1..=16 are spread so that neighbouring cells are as
//! far apart in rank as possible, which is what keeps ordered dithering
//! from showing obvious banding. Normalization stretches the ranks over the
//! 8-bit intensity range and centers each cell on its step:
//! `threshold = rank * (256 / 16) - (256 / 16) / 2`, i.e. `rank * 16 - 8`.
//!
//! The normalized table is process-wide, immutable and computed once; a
//! `OnceLock` handles the lazy initialization without further
//! synchronization.

use std::sync::OnceLock;

/// Side length of the Bayer pattern.
pub const BAYER_SIZE: usize = 4;

/// The canonical 4x4 Bayer rank pattern.
pub const BAYER_PATTERN: [[i32; BAYER_SIZE]; BAYER_SIZE] = [
    [6, 14, 8, 16],
    [10, 2, 12, 4],
    [7, 15, 5, 13],
    [11, 3, 9, 1],
];

static THRESHOLDS: OnceLock<[[i32; BAYER_SIZE]; BAYER_SIZE]> = OnceLock::new();

/// The normalized threshold table, spanning 8..=248 across the pattern.
pub fn thresholds() -> &'static [[i32; BAYER_SIZE]; BAYER_SIZE] {
    THRESHOLDS.get_or_init(|| {
        let factor = 256 / (BAYER_SIZE * BAYER_SIZE) as i32;
        let mut table = BAYER_PATTERN;
        for row in table.iter_mut() {
            for value in row.iter_mut() {
                *value = *value * factor - factor / 2;
            }
        }
        table
    })
}

/// The threshold governing the pixel at `(x, y)`.
///
/// The pattern tiles the image: the cell is selected by
/// `(y mod 4, x mod 4)`.
#[inline]
pub fn threshold_at(x: usize, y: usize) -> i32 {
    thresholds()[y % BAYER_SIZE][x % BAYER_SIZE]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_is_a_permutation_of_ranks() {
        let mut seen = [false; 17];
        for row in &BAYER_PATTERN {
            for &v in row {
                assert!((1..=16).contains(&v));
                assert!(!seen[v as usize], "rank {v} appears twice");
                seen[v as usize] = true;
            }
        }
    }

    #[test]
    fn test_threshold_normalization() {
        // rank 1 -> 8, rank 16 -> 248, step 16 between consecutive ranks
        let t = thresholds();
        assert_eq!(t[3][3], 8); // rank 1
        assert_eq!(t[0][3], 248); // rank 16
        assert_eq!(t[0][0], 6 * 16 - 8);
        let mut values: Vec<i32> = t.iter().flatten().copied().collect();
        values.sort_unstable();
        for (i, v) in values.iter().enumerate() {
            assert_eq!(*v, 8 + 16 * i as i32);
        }
    }

    #[test]
    fn test_threshold_at_tiles_the_pattern() {
        assert_eq!(threshold_at(0, 0), threshold_at(4, 0));
        assert_eq!(threshold_at(0, 0), threshold_at(0, 4));
        assert_eq!(threshold_at(2, 3), threshold_at(6, 7));
        // Indexing is (y mod 4, x mod 4): rank at row 1, column 2 is 12
        assert_eq!(threshold_at(2, 1), 12 * 16 - 8);
    }
}
