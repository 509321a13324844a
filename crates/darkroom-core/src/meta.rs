//! Source metadata from the RAW ingestion stage.
//!
//! The kernel consumes a decoded linear [`ImageBuf`](crate::ImageBuf); it does
//! not read sensor data itself. What survives from ingestion is a handful of
//! scalars describing how the raw samples were normalized. The correction
//! stages treat these as opaque provenance — they are never re-derived or
//! validated here.

/// A single color-filter-array site color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfaColor {
    /// Red site
    Red,
    /// Green site
    Green,
    /// Blue site
    Blue,
}

/// 2x2 color-filter-array layout, row-major.
///
/// Describes the sensor mosaic the (external) demosaic stage consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfaPattern(pub [[CfaColor; 2]; 2]);

impl CfaPattern {
    /// The common RGGB Bayer layout.
    pub const RGGB: Self = Self([
        [CfaColor::Red, CfaColor::Green],
        [CfaColor::Green, CfaColor::Blue],
    ]);

    /// Returns the filter color at mosaic position (x, y).
    #[inline]
    pub fn color_at(&self, x: u32, y: u32) -> CfaColor {
        self.0[(y % 2) as usize][(x % 2) as usize]
    }
}

/// Capture and normalization scalars carried alongside an image buffer.
///
/// `black_level` / `white_level` describe the raw sample range the ingestion
/// stage mapped onto the buffer's `[0, 1]` linear range; `iso` and
/// `exposure_time` are capture provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMetadata {
    /// Sensor ISO sensitivity
    pub iso: u32,
    /// Exposure time in seconds
    pub exposure_time: f32,
    /// Raw sample value mapped to 0.0
    pub black_level: f32,
    /// Raw sample value mapped to 1.0
    pub white_level: f32,
    /// Sensor color-filter-array layout
    pub cfa: CfaPattern,
}

impl SourceMetadata {
    /// Maps a raw sensor sample into the buffer's normalized linear range.
    ///
    /// This documents the ingestion contract: `black_level → 0.0`,
    /// `white_level → 1.0`, clamped below zero. Degenerate levels
    /// (white ≤ black) yield 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use darkroom_core::{CfaPattern, SourceMetadata};
    ///
    /// let meta = SourceMetadata {
    ///     iso: 100,
    ///     exposure_time: 1.0 / 125.0,
    ///     black_level: 512.0,
    ///     white_level: 16383.0,
    ///     cfa: CfaPattern::RGGB,
    /// };
    /// assert_eq!(meta.normalize_sample(512.0), 0.0);
    /// assert!((meta.normalize_sample(16383.0) - 1.0).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn normalize_sample(&self, raw: f32) -> f32 {
        let range = self.white_level - self.black_level;
        if range <= 0.0 {
            return 0.0;
        }
        ((raw - self.black_level) / range).max(0.0)
    }
}
