//! White-balance correction.
//!
//! Maps a user-facing temperature shift and tint shift (each in
//! `[-100, 100]`, 0 = no change) onto per-channel multiplicative correction
//! factors relative to a fixed 6500 K reference illuminant, then applies
//! them while preserving each pixel's Rec.709 luminance. White balance
//! moves chroma, never exposure.
//!
//! # Shift-to-Kelvin mapping
//!
//! Warm requests (`shift < 0`) interpolate the target temperature
//! **logarithmically** between 6500 K and 2000 K: perceived warmth changes
//! non-linearly with Kelvin, and log interpolation tracks perception at the
//! low end. Cool requests (`shift >= 0`) interpolate **linearly** between
//! 6500 K and 10000 K, where the response is close enough to linear.

use darkroom_core::ImageBuf;
use darkroom_locus::{illuminant_rgb, EPSILON, TEMP_MAX_K, TEMP_MIN_K};
use darkroom_math::{lerp, Vec3};
use tracing::debug;

/// Reference illuminant the shifts are relative to: the pipeline's neutral
/// point, 6500 K.
pub const REFERENCE_KELVIN: f32 = 6500.0;

/// Target temperature at full warm shift (-100).
pub const WARM_LIMIT_KELVIN: f32 = 2000.0;

/// Target temperature at full cool shift (+100).
pub const COOL_LIMIT_KELVIN: f32 = 10_000.0;

/// Shifts below this magnitude count as "no change".
pub const SHIFT_EPSILON: f32 = 0.01;

/// Clamp range for temperature scale factors.
const TEMP_SCALE_RANGE: (f32, f32) = (0.3, 3.0);

/// Clamp range for red/blue tint scale factors.
const TINT_RB_RANGE: (f32, f32) = (0.7, 1.5);

/// Clamp range for the green tint scale factor.
const TINT_G_RANGE: (f32, f32) = (0.5, 1.5);

/// White-balance parameters.
///
/// Both shifts live in `[-100, 100]`; out-of-range values are clamped, never
/// rejected. Negative temperature warms the image, positive cools it.
/// Negative tint pushes green, positive pushes magenta.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhiteBalanceParams {
    /// Temperature shift in [-100, 100]
    pub temperature: f32,
    /// Tint shift in [-100, 100]
    pub tint: f32,
}

impl WhiteBalanceParams {
    /// Parameters that change nothing.
    pub fn neutral() -> Self {
        Self { temperature: 0.0, tint: 0.0 }
    }

    /// Returns `true` if both shifts are below [`SHIFT_EPSILON`].
    pub fn is_neutral(&self) -> bool {
        self.temperature.abs() < SHIFT_EPSILON && self.tint.abs() < SHIFT_EPSILON
    }

    /// Combined per-channel correction scale (temperature times tint).
    ///
    /// Precompute this once per buffer invocation; it is constant across
    /// pixels.
    pub fn scale(&self) -> Vec3 {
        temperature_scale(self.temperature).mul_elem(tint_scale(self.tint))
    }
}

impl Default for WhiteBalanceParams {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Ratio with an epsilon-guarded denominator (identity on degenerate input).
#[inline]
fn safe_ratio(num: f32, den: f32) -> f32 {
    if den.abs() < EPSILON {
        1.0
    } else {
        num / den
    }
}

/// Per-channel scale factors for a temperature shift in `[-100, 100]`.
///
/// The shift picks a target illuminant (log-interpolated toward 2000 K when
/// warming, linearly toward 10000 K when cooling); the scale is the ratio of
/// the target's luminance-normalized RGB to the 6500 K reference's, clamped
/// to `[0.3, 3.0]` per channel.
///
/// # Example
///
/// ```rust
/// use darkroom_ops::white_balance::temperature_scale;
///
/// let warm = temperature_scale(-50.0);
/// assert!(warm.x > 1.0); // boost red
/// assert!(warm.z < 1.0); // cut blue
/// ```
pub fn temperature_scale(shift: f32) -> Vec3 {
    let shift = shift.clamp(-100.0, 100.0);

    let target_kelvin = if shift < 0.0 {
        let t = -shift / 100.0;
        lerp(REFERENCE_KELVIN.ln(), WARM_LIMIT_KELVIN.ln(), t).exp()
    } else {
        lerp(REFERENCE_KELVIN, COOL_LIMIT_KELVIN, shift / 100.0)
    };
    let target_kelvin = target_kelvin.clamp(TEMP_MIN_K, TEMP_MAX_K);

    let base = illuminant_rgb(REFERENCE_KELVIN);
    let target = illuminant_rgb(target_kelvin);

    Vec3::new(
        safe_ratio(target.x, base.x),
        safe_ratio(target.y, base.y),
        safe_ratio(target.z, base.z),
    )
    .clamp(TEMP_SCALE_RANGE.0, TEMP_SCALE_RANGE.1)
}

/// Per-channel scale factors for a tint shift in `[-100, 100]`.
///
/// Tint moves along the green-magenta axis, independent of the temperature
/// model. Negative shifts boost green (`+0.5|t|`) and cut red/blue
/// (`-0.3|t|`); positive shifts boost red/blue and cut green, both by
/// `0.4 t`. Outputs are clamped to `[0.7, 1.5]` for red/blue and
/// `[0.5, 1.5]` for green.
pub fn tint_scale(shift: f32) -> Vec3 {
    let tint = (shift / 100.0).clamp(-1.0, 1.0);
    if tint.abs() < EPSILON {
        return Vec3::ONE;
    }

    let (r, g, b) = if tint < 0.0 {
        let a = -tint;
        (1.0 - 0.3 * a, 1.0 + 0.5 * a, 1.0 - 0.3 * a)
    } else {
        (1.0 + 0.4 * tint, 1.0 - 0.4 * tint, 1.0 + 0.4 * tint)
    };

    Vec3::new(
        r.clamp(TINT_RB_RANGE.0, TINT_RB_RANGE.1),
        g.clamp(TINT_G_RANGE.0, TINT_G_RANGE.1),
        b.clamp(TINT_RB_RANGE.0, TINT_RB_RANGE.1),
    )
}

/// Applies a precomputed correction scale to one pixel, preserving its
/// Rec.709 luminance.
///
/// The central invariant of this stage: after scaling, the pixel is rescaled
/// by `original / adjusted` luminance (both epsilon-guarded), so only chroma
/// shifts, never exposure. Channels are clamped non-negative on exit.
#[inline]
pub fn apply_pixel(rgb: [f32; 3], scale: Vec3) -> [f32; 3] {
    let px = Vec3::from_array(rgb);
    let original = px.luminance();

    let mut out = px.mul_elem(scale);

    let adjusted = out.luminance();
    if original > EPSILON && adjusted > EPSILON {
        out = out * (original / adjusted);
    }

    out.max_zero().to_array()
}

/// Applies white balance to a whole buffer in place.
///
/// No-op when both shifts are below [`SHIFT_EPSILON`]. The combined scale is
/// computed once; the per-pixel loop reads only that scalar triple.
///
/// # Example
///
/// ```rust
/// use darkroom_core::ImageBuf;
/// use darkroom_ops::white_balance::{apply, WhiteBalanceParams};
///
/// let mut img = ImageBuf::filled(4, 4, [0.5, 0.5, 0.5]);
/// apply(&mut img, &WhiteBalanceParams { temperature: 0.0, tint: 0.0 });
/// assert_eq!(img.pixel(0, 0), [0.5, 0.5, 0.5]); // identity
/// ```
pub fn apply(img: &mut ImageBuf, params: &WhiteBalanceParams) {
    if params.is_neutral() {
        return;
    }

    debug!(
        width = img.width(),
        height = img.height(),
        temperature = params.temperature,
        tint = params.tint,
        "applying white balance"
    );

    let scale = params.scale();
    let (r, g, b) = img.planes_mut();
    for i in 0..r.len() {
        let [ro, go, bo] = apply_pixel([r[i], g[i], b[i]], scale);
        r[i] = ro;
        g[i] = go;
        b[i] = bo;
    }
}
