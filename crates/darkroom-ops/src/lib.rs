//! # darkroom-ops
//!
//! Per-pixel color corrections for the darkroom kernel.
//!
//! Two independent stages operate in place on a planar
//! [`ImageBuf`](darkroom_core::ImageBuf):
//!
//! - [`white_balance`] - temperature/tint correction with luminance
//!   preservation
//! - [`grading`] - luminance-weighted shadow/midtone/highlight color offsets
//!
//! [`pipeline`] chains them in the one order the pipeline supports:
//! white balance first, so grading sees the corrected luminance.
//!
//! # Hot-path policy
//!
//! No operation here fails, blocks, or allocates per pixel. Out-of-range
//! parameters are clamped, every division is epsilon-guarded, and all global
//! scalars (scale factors, matrices, Gaussian parameters) are precomputed
//! once per buffer invocation.
//!
//! # Example
//!
//! ```rust
//! use darkroom_core::ImageBuf;
//! use darkroom_ops::white_balance::{self, WhiteBalanceParams};
//!
//! let mut img = ImageBuf::filled(8, 8, [0.5, 0.5, 0.5]);
//! let params = WhiteBalanceParams { temperature: -50.0, tint: 0.0 };
//! white_balance::apply(&mut img, &params);
//!
//! let [r, g, b] = img.pixel(0, 0);
//! assert!(r > g && g > b); // warm cast
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Row-parallel buffer application via rayon (default)
//! - `serde` - Serialize/Deserialize on the parameter records

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod grading;
pub mod pipeline;
pub mod white_balance;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use grading::GradingParams;
pub use pipeline::Pipeline;
pub use white_balance::WhiteBalanceParams;
