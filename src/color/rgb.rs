//! 8-bit RGB sample type
//!
//! `Rgb` is the pixel unit for the whole crate: input buffers, transformed
//! buffers and palette entries all use it. Alpha is dropped at decode time
//! by the bitmap collaborator, so it never appears here.

/// A color with 8-bit red, green and blue channels.
///
/// This is a plain device-RGB sample. No gamma handling and no perceptual
/// color space is involved anywhere in the crate; distances are computed
/// directly on channel values.
///
/// # Example
///
/// ```
/// use quant16::Rgb;
///
/// let c = Rgb::new(255, 128, 0);
/// assert_eq!(c.to_bytes(), [255, 128, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, also the zero-fill value for unused palette slots.
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Pure white.
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grey color with all three channels set to `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use quant16::Rgb;
    /// assert_eq!(Rgb::splat(85), Rgb::new(85, 85, 85));
    /// ```
    #[inline]
    pub const fn splat(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Create a color from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        }
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Perceived brightness as an 8-bit grey level.
    ///
    /// Computed as the weighted sum `0.299·R + 0.587·G + 0.114·B`,
    /// truncated to an integer. The weights sum to 1.0, so the result is
    /// always in range.
    ///
    /// # Example
    ///
    /// ```
    /// use quant16::Rgb;
    ///
    /// assert_eq!(Rgb::BLACK.luminance(), 0);
    /// assert_eq!(Rgb::WHITE.luminance(), 255);
    /// // Green dominates the weighting
    /// assert!(Rgb::new(0, 255, 0).luminance() > Rgb::new(255, 0, 0).luminance());
    /// ```
    #[inline]
    pub fn luminance(self) -> u8 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) as u8
    }

    /// Squared Euclidean distance to another color.
    ///
    /// Squared form is sufficient for nearest-entry comparison and avoids
    /// the square root. Maximum value is `3 * 255^2 = 195075`, well inside
    /// `u32`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_bytes_round_trip() {
        let c = Rgb::new(12, 34, 56);
        assert_eq!(Rgb::from_bytes(c.to_bytes()), c);
        assert_eq!(Rgb::from_bytes([255, 0, 128]), Rgb::new(255, 0, 128));
        assert_eq!(Rgb::splat(7), Rgb::new(7, 7, 7));
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(Rgb::BLACK.luminance(), 0);
        assert_eq!(Rgb::WHITE.luminance(), 255);
    }

    #[test]
    fn test_luminance_channel_weights() {
        // 0.299 / 0.587 / 0.114 of 255, truncated
        assert_eq!(Rgb::new(255, 0, 0).luminance(), 76);
        assert_eq!(Rgb::new(0, 255, 0).luminance(), 149);
        assert_eq!(Rgb::new(0, 0, 255).luminance(), 29);
    }

    #[test]
    fn test_luminance_is_monotone_in_grey() {
        let mut prev = 0;
        for v in 0..=255u8 {
            let lum = Rgb::splat(v).luminance();
            assert!(
                lum >= prev,
                "luminance of grey {} ({}) dropped below previous ({})",
                v,
                lum,
                prev
            );
            prev = lum;
        }
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(Rgb::BLACK.distance_squared(Rgb::BLACK), 0);
        assert_eq!(Rgb::BLACK.distance_squared(Rgb::WHITE), 3 * 255 * 255);
        // Symmetric
        let a = Rgb::new(10, 200, 30);
        let b = Rgb::new(250, 5, 130);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
    }
}
