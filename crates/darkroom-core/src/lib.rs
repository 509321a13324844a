//! # darkroom-core
//!
//! Core types for the darkroom photo-processing kernel.
//!
//! This crate provides the foundational types shared by the color-science
//! crates:
//!
//! - [`ImageBuf`] - Planar floating-point RGB buffer in linear light
//! - [`SourceMetadata`] - Provenance scalars from the (external) RAW ingestion stage
//! - [`luminance`] - Rec.709 luminance helper and weight constants
//! - [`Error`], [`Result`] - Unified error type
//!
//! ## Design Philosophy
//!
//! The kernel is "never throw in the hot path": per-pixel arithmetic is total
//! (clamped domains, epsilon-guarded divisions) and has no error channel.
//! [`Error`] exists only at buffer construction boundaries, where a caller
//! can hand over mismatched plane lengths.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of darkroom-rs and has no internal
//! dependencies. The other crates depend on it:
//!
//! ```text
//! darkroom-core (this crate)
//!    ^
//!    |
//!    +-- darkroom-math (vectors, matrices, interpolation)
//!    +-- darkroom-locus (blackbody chromaticity)
//!    +-- darkroom-ops (white balance, three-way grading)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod luma;
pub mod meta;

pub use error::*;
pub use image::*;
pub use luma::{luminance, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
pub use meta::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use darkroom_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::ImageBuf;
    pub use crate::luma::{luminance, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
    pub use crate::meta::{CfaColor, CfaPattern, SourceMetadata};
}
