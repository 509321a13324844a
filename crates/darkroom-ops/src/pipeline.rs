//! Fixed-order correction pipeline.
//!
//! One buffer pass per enabled stage, always white balance first: grading
//! region weights are computed from luminance, and they must see the
//! luminance the white-balanced image actually has.

use darkroom_core::ImageBuf;
use tracing::debug;

use crate::grading::{self, GradingParams};
use crate::white_balance::{self, WhiteBalanceParams};

/// Full correction settings for one image.
///
/// # Example
///
/// ```rust
/// use darkroom_core::ImageBuf;
/// use darkroom_ops::{GradingParams, Pipeline, WhiteBalanceParams};
///
/// let pipeline = Pipeline {
///     white_balance: WhiteBalanceParams { temperature: -30.0, tint: 5.0 },
///     grading: GradingParams {
///         shadows: [0.0, 0.0, 0.02],
///         ..GradingParams::identity()
///     },
/// };
///
/// let mut img = ImageBuf::filled(16, 16, [0.4, 0.4, 0.4]);
/// pipeline.apply(&mut img);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pipeline {
    /// Temperature and tint correction, applied first
    pub white_balance: WhiteBalanceParams,
    /// Three-way color grading, applied second
    pub grading: GradingParams,
}

impl Pipeline {
    /// A pipeline that changes nothing.
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Returns `true` if every stage is a no-op.
    pub fn is_neutral(&self) -> bool {
        self.white_balance.is_neutral() && self.grading.is_identity()
    }

    /// Runs all enabled stages on the buffer in place, sequentially.
    ///
    /// Neutral stages are skipped entirely rather than applied as
    /// identities.
    pub fn apply(&self, img: &mut ImageBuf) {
        if self.is_neutral() {
            return;
        }
        debug!(width = img.width(), height = img.height(), "running pipeline");

        white_balance::apply(img, &self.white_balance);
        grading::apply(img, &self.grading);
    }
}
