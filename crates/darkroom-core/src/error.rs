//! Error types for darkroom-core operations.
//!
//! The color-science hot path is total: out-of-domain numbers are clamped and
//! every division is epsilon-guarded, so per-pixel code has no error channel.
//! [`Error`] covers the remaining fallible boundary, buffer construction from
//! caller-supplied data.
//!
//! # Usage
//!
//! ```rust
//! use darkroom_core::{Error, Result};
//!
//! fn check_planes(r: usize, g: usize, b: usize) -> Result<()> {
//!     if r != g || r != b {
//!         return Err(Error::plane_mismatch(r, g, b));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or validating image buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Channel planes have differing lengths.
    ///
    /// An [`ImageBuf`](crate::ImageBuf) requires all three planes to hold
    /// exactly `width * height` samples.
    #[error("channel planes differ in length: r={r_len}, g={g_len}, b={b_len}")]
    PlaneMismatch {
        /// Red plane length
        r_len: usize,
        /// Green plane length
        g_len: usize,
        /// Blue plane length
        b_len: usize,
    },

    /// Plane length does not match the stated dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::PlaneMismatch`] error.
    #[inline]
    pub fn plane_mismatch(r_len: usize, g_len: usize, b_len: usize) -> Self {
        Self::PlaneMismatch { r_len, g_len, b_len }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds { x, y, width, height }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
