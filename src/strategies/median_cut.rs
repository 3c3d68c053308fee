//! Median-cut palette construction, color and greyscale variants.
//!
//! The partitioner copies the pixel population into one flat working array
//! (colors, or 8-bit luminances for the grey variant) and recurses over
//! index ranges of that array: pick the widest axis, sort the range by it,
//! split at the upper median, recurse. At depth 0 a range is a leaf and its
//! arithmetic mean becomes the next palette entry, appended arena-style
//! through a bucket counter. Depth is fixed at 4, so every run emits
//! exactly 16 entries.
//!
//! After the palette is built, every original pixel is reassigned to its
//! nearest entry (Euclidean RGB for color, absolute luminance difference
//! for grey), which is where the O(W*H*16) bulk of the runtime goes.

use tracing::trace;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::{Palette, PALETTE_SIZE};

/// Recursion depth; 2^4 = 16 leaves, one per palette slot.
const CUT_DEPTH: u32 = 4;

/// Channel chosen as the split axis for one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitAxis {
    Red,
    Green,
    Blue,
}

/// The color median-cut strategy.
pub fn median_cut_color(original: &PixelBuffer) -> QuantizedImage {
    let palette = ColorCutter::new(original).build_palette();
    let buffer = original.map(|px| palette[palette.nearest_color(px)]);
    QuantizedImage::new(buffer, palette)
}

/// The greyscale median-cut strategy.
///
/// Operates on the luminance of every pixel; the finished palette holds 16
/// achromatic entries. Assignment recomputes each pixel's luminance rather
/// than reusing the (sorted) working array.
pub fn median_cut_grey(original: &PixelBuffer) -> QuantizedImage {
    let palette = GreyCutter::new(original).build_palette();
    let buffer = original.map(|px| palette[palette.nearest_grey(px.luminance())]);
    QuantizedImage::new(buffer, palette)
}

/// Working state for the color variant: the flat color population plus the
/// arena-style output slots.
struct ColorCutter {
    colors: Vec<Rgb>,
    entries: [Rgb; PALETTE_SIZE],
    buckets: usize,
}

impl ColorCutter {
    fn new(original: &PixelBuffer) -> Self {
        Self {
            colors: original.pixels().to_vec(),
            entries: [Rgb::BLACK; PALETTE_SIZE],
            buckets: 0,
        }
    }

    fn build_palette(mut self) -> Palette {
        self.cut(0, self.colors.len(), CUT_DEPTH);
        debug_assert_eq!(self.buckets, PALETTE_SIZE);
        Palette::from_entries(self.entries)
    }

    /// Recursively partition the half-open range `[start, end)`.
    fn cut(&mut self, start: usize, end: usize, depth: u32) {
        if depth > 0 {
            if end > start {
                let axis = self.widest_axis(start, end);
                trace!(start, end, ?axis, depth, "splitting bucket");
                self.sort_range(start, end, axis);
            }
            // Upper median: equivalent to (start + end_inclusive + 1) / 2
            // on inclusive bounds. An empty range splits into two empty
            // halves, which the leaf fallback below absorbs.
            let mid = (start + end) / 2;
            self.cut(start, mid, depth - 1);
            self.cut(mid, end, depth - 1);
            return;
        }

        let entry = if end > start {
            let count = (end - start) as u32;
            let mut sum_r = 0u32;
            let mut sum_g = 0u32;
            let mut sum_b = 0u32;
            for px in &self.colors[start..end] {
                sum_r += px.r as u32;
                sum_g += px.g as u32;
                sum_b += px.b as u32;
            }
            Rgb::new(
                (sum_r / count) as u8,
                (sum_g / count) as u8,
                (sum_b / count) as u8,
            )
        } else {
            self.empty_leaf_fallback()
        };

        self.entries[self.buckets] = entry;
        self.buckets += 1;
    }

    /// Representative for a leaf whose range is empty (population smaller
    /// than 16): duplicate the previous entry, or fall back to the first
    /// pixel when no entry exists yet.
    fn empty_leaf_fallback(&self) -> Rgb {
        if self.buckets > 0 {
            self.entries[self.buckets - 1]
        } else {
            self.colors[0]
        }
    }

    /// The channel with the greatest max-min spread over the range.
    /// Ties break by channel priority red > green > blue.
    fn widest_axis(&self, start: usize, end: usize) -> SplitAxis {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for px in &self.colors[start..end] {
            for (c, &v) in px.to_bytes().iter().enumerate() {
                min[c] = min[c].min(v);
                max[c] = max[c].max(v);
            }
        }
        let spread = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];
        if spread[0] >= spread[1] && spread[0] >= spread[2] {
            SplitAxis::Red
        } else if spread[1] >= spread[2] {
            SplitAxis::Green
        } else {
            SplitAxis::Blue
        }
    }

    fn sort_range(&mut self, start: usize, end: usize, axis: SplitAxis) {
        let range = &mut self.colors[start..end];
        match axis {
            SplitAxis::Red => range.sort_by_key(|px| px.r),
            SplitAxis::Green => range.sort_by_key(|px| px.g),
            SplitAxis::Blue => range.sort_by_key(|px| px.b),
        }
    }
}

/// Working state for the greyscale variant: scalar luminances, single axis.
struct GreyCutter {
    greys: Vec<u8>,
    entries: [Rgb; PALETTE_SIZE],
    buckets: usize,
}

impl GreyCutter {
    fn new(original: &PixelBuffer) -> Self {
        Self {
            greys: original.pixels().iter().map(|px| px.luminance()).collect(),
            entries: [Rgb::BLACK; PALETTE_SIZE],
            buckets: 0,
        }
    }

    fn build_palette(mut self) -> Palette {
        self.cut(0, self.greys.len(), CUT_DEPTH);
        debug_assert_eq!(self.buckets, PALETTE_SIZE);
        Palette::from_entries(self.entries)
    }

    fn cut(&mut self, start: usize, end: usize, depth: u32) {
        if depth > 0 {
            // Single axis: ascending sort, no axis choice needed.
            self.greys[start..end].sort_unstable();
            let mid = (start + end) / 2;
            self.cut(start, mid, depth - 1);
            self.cut(mid, end, depth - 1);
            return;
        }

        let entry = if end > start {
            let count = (end - start) as u32;
            let sum: u32 = self.greys[start..end].iter().map(|&g| g as u32).sum();
            Rgb::splat((sum / count) as u8)
        } else if self.buckets > 0 {
            self.entries[self.buckets - 1]
        } else {
            Rgb::splat(self.greys[0])
        };

        self.entries[self.buckets] = entry;
        self.buckets += 1;
    }
}
