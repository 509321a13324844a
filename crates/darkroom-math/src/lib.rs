//! # darkroom-math
//!
//! Math utilities for the darkroom color kernel.
//!
//! This crate provides the numeric primitives the color-science crates build
//! on:
//!
//! - [`Vec3`] - 3D vectors for RGB/XYZ/LMS triplets
//! - [`Mat3`] - 3x3 matrices for colorimetric transforms
//! - Interpolation utilities ([`lerp`], [`smoothstep`], [`saturate`])
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use darkroom_math::{Mat3, Vec3};
//!
//! let xyz_to_rgb = Mat3::from_rows([
//!     [3.2404542, -1.5371385, -0.4985314],
//!     [-0.9692660, 1.8760108, 0.0415560],
//!     [0.0556434, -0.2040259, 1.0572252],
//! ]);
//!
//! let xyz = Vec3::new(0.95047, 1.0, 1.08883);
//! let rgb = xyz_to_rgb * xyz;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - SIMD math interop ([`Mat3::to_glam`], [`Vec3::to_glam`])

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;
mod mat3;
mod vec3;

pub use interp::*;
pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat3 as GlamMat3, Vec3 as GlamVec3};
}
