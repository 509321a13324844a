//! Three-way color grading.
//!
//! Adds per-channel color offsets to shadows, midtones, and highlights,
//! weighted per pixel by smooth Gaussian membership functions over Rec.709
//! luminance. The three weights always sum to exactly 1, so regions blend
//! seamlessly with no banding at their boundaries.
//!
//! The weighted offset is blended in a compressed LMS cone space rather
//! than raw RGB: the pixel's cone response is passed through a signed cube
//! root and the offset is added there, so a given offset produces a similar
//! relative change at any exposure instead of swamping the dark end.

use darkroom_core::ImageBuf;
use darkroom_locus::{EPSILON, SRGB_TO_XYZ};
use darkroom_math::{Mat3, Vec3};
use tracing::debug;

/// Gaussian width shared by all three region membership functions.
pub const REGION_WIDTH: f32 = 0.25;

/// How far a full-scale balance shift moves the shadow and highlight
/// centers.
const BALANCE_REACH: f32 = 0.25;

/// Hunt-Pointer-Estevez XYZ to LMS cone response matrix (D65 normalized).
const HPE_XYZ_TO_LMS: Mat3 = Mat3::from_rows([
    [0.38971, 0.68898, -0.07868],
    [-0.22981, 1.18340, 0.04641],
    [0.0, 0.0, 1.0],
]);

/// Three-way grading parameters.
///
/// Offsets are per-channel color nudges applied in the compressed cone
/// domain, each component in `[-1, 1]`; typical magnitudes are well under
/// 1.0. `blending` in `[0, 1]` scales the whole effect,
/// `balance` in `[-1, 1]` shifts the shadow/highlight crossovers (negative
/// widens shadow coverage, positive widens highlight coverage).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradingParams {
    /// RGB offset applied to dark pixels
    pub shadows: [f32; 3],
    /// RGB offset applied to mid-luminance pixels
    pub midtones: [f32; 3],
    /// RGB offset applied to bright pixels
    pub highlights: [f32; 3],
    /// Overall effect strength in [0, 1]
    pub blending: f32,
    /// Region crossover shift in [-1, 1]
    pub balance: f32,
}

impl GradingParams {
    /// Parameters that change nothing.
    pub fn identity() -> Self {
        Self {
            shadows: [0.0; 3],
            midtones: [0.0; 3],
            highlights: [0.0; 3],
            blending: 1.0,
            balance: 0.0,
        }
    }

    /// Returns `true` if applying these parameters would be a no-op.
    pub fn is_identity(&self) -> bool {
        let zero = |v: &[f32; 3]| v.iter().all(|c| c.abs() < EPSILON);
        self.blending.abs() < EPSILON
            || (zero(&self.shadows) && zero(&self.midtones) && zero(&self.highlights))
    }
}

impl Default for GradingParams {
    fn default() -> Self {
        Self::identity()
    }
}

/// Region membership weights for a pixel of the given luminance.
///
/// Returns `(shadow, midtone, highlight)` Gaussian weights normalized to
/// sum to exactly 1. `balance` moves the shadow and highlight centers
/// toward or away from the midpoint; the midtone center stays at 0.5.
pub fn region_weights(luminance: f32, balance: f32) -> (f32, f32, f32) {
    let lum = luminance.clamp(0.0, 1.0);
    let balance = balance.clamp(-1.0, 1.0);

    let shadow_center = 0.0 - BALANCE_REACH * balance;
    let mid_center = 0.5;
    let highlight_center = 1.0 - BALANCE_REACH * balance;

    let gauss = |center: f32| {
        let d = (lum - center) / REGION_WIDTH;
        (-d * d).exp()
    };

    let s = gauss(shadow_center);
    let m = gauss(mid_center);
    let h = gauss(highlight_center);
    let sum = s + m + h;

    (s / sum, m / sum, h / sum)
}

/// Signed cube root, odd-symmetric around zero.
#[inline]
fn signed_cbrt(v: f32) -> f32 {
    v.signum() * v.abs().cbrt()
}

#[inline]
fn compress(v: Vec3) -> Vec3 {
    v.map(signed_cbrt)
}

#[inline]
fn expand(v: Vec3) -> Vec3 {
    v.map(|c| c * c * c)
}

/// Precomputed grading state for one buffer pass.
///
/// Folds the RGB-to-LMS transform chain and the blending-scaled offsets
/// into constants so the per-pixel loop does two matrix transforms, three
/// Gaussians, and a handful of multiply-adds.
pub struct GradingKernel {
    rgb_to_lms: Mat3,
    lms_to_rgb: Mat3,
    shadows: Vec3,
    midtones: Vec3,
    highlights: Vec3,
    balance: f32,
}

impl GradingKernel {
    /// Builds the kernel from grading parameters.
    pub fn new(params: &GradingParams) -> Self {
        let rgb_to_lms = HPE_XYZ_TO_LMS.mul_mat(&SRGB_TO_XYZ);
        // HPE and the sRGB matrix are both non-singular, so is their product
        let lms_to_rgb = rgb_to_lms.inverse().unwrap_or(Mat3::IDENTITY);

        let blending = params.blending.clamp(0.0, 1.0);
        let offset = |v: [f32; 3]| Vec3::from_array(v).clamp(-1.0, 1.0) * blending;
        Self {
            rgb_to_lms,
            lms_to_rgb,
            shadows: offset(params.shadows),
            midtones: offset(params.midtones),
            highlights: offset(params.highlights),
            balance: params.balance.clamp(-1.0, 1.0),
        }
    }

    /// Grades a single pixel.
    #[inline]
    pub fn apply_pixel(&self, rgb: [f32; 3]) -> [f32; 3] {
        let px = Vec3::from_array(rgb);
        let (ws, wm, wh) = region_weights(px.luminance(), self.balance);

        let offset = self.shadows * ws + self.midtones * wm + self.highlights * wh;

        // The offset is a delta in the compressed cone domain
        let lms = compress(self.rgb_to_lms.transform(px));
        let lms_offset = self.rgb_to_lms.transform(offset);
        let graded = self.lms_to_rgb.transform(expand(lms + lms_offset));

        graded.max_zero().to_array()
    }
}

/// Applies three-way grading to a whole buffer in place.
///
/// No-op for identity parameters. Highlights above 1.0 are left unbounded;
/// only the lower bound is clamped, so specular energy survives for later
/// tone mapping.
pub fn apply(img: &mut ImageBuf, params: &GradingParams) {
    if params.is_identity() {
        return;
    }

    debug!(
        width = img.width(),
        height = img.height(),
        blending = params.blending,
        balance = params.balance,
        "applying three-way grading"
    );

    let kernel = GradingKernel::new(params);
    let (r, g, b) = img.planes_mut();
    for i in 0..r.len() {
        let [ro, go, bo] = kernel.apply_pixel([r[i], g[i], b[i]]);
        r[i] = ro;
        g[i] = go;
        b[i] = bo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-4;

    #[test]
    fn test_weights_partition_of_unity() {
        for i in 0..=100 {
            let lum = i as f32 / 100.0;
            for balance in [-1.0, -0.4, 0.0, 0.4, 1.0] {
                let (s, m, h) = region_weights(lum, balance);
                assert!(
                    (s + m + h - 1.0).abs() < 1e-6,
                    "weights sum to {} at lum {lum} balance {balance}",
                    s + m + h
                );
                assert!(s >= 0.0 && m >= 0.0 && h >= 0.0);
            }
        }
    }

    #[test]
    fn test_weights_region_extremes() {
        let (s, _, _) = region_weights(0.0, 0.0);
        assert!(s > 0.95, "shadow weight at black is {s}");

        let (_, _, h) = region_weights(1.0, 0.0);
        assert!(h > 0.95, "highlight weight at white is {h}");

        let (s, m, h) = region_weights(0.5, 0.0);
        assert!(m > s && m > h, "midtone not dominant at 0.5");
        assert!((s - h).abs() < 1e-6, "symmetric at 0.5");
    }

    #[test]
    fn test_weights_balance_shifts_coverage() {
        // Negative balance widens shadows: a 0.3-luminance pixel reads
        // more shadow than with neutral balance
        let (s_neutral, _, _) = region_weights(0.3, 0.0);
        let (s_wide, _, _) = region_weights(0.3, -0.8);
        assert!(s_wide > s_neutral);

        let (_, _, h_neutral) = region_weights(0.7, 0.0);
        let (_, _, h_wide) = region_weights(0.7, 0.8);
        assert!(h_wide > h_neutral);
    }

    #[test]
    fn test_weights_out_of_range_luminance_clamped() {
        assert_eq!(region_weights(-0.5, 0.0), region_weights(0.0, 0.0));
        assert_eq!(region_weights(3.7, 0.0), region_weights(1.0, 0.0));
    }

    #[test]
    fn test_identity_params_detected() {
        assert!(GradingParams::identity().is_identity());
        assert!(GradingParams { blending: 0.0, shadows: [0.2, 0.0, 0.0], ..GradingParams::identity() }
            .is_identity());
        assert!(!GradingParams { midtones: [0.0, 0.1, 0.0], ..GradingParams::identity() }
            .is_identity());
    }

    #[test]
    fn test_zero_offsets_round_trip_exact() {
        let kernel = GradingKernel::new(&GradingParams::identity());
        for px in [[0.0, 0.0, 0.0], [0.5, 0.5, 0.5], [0.9, 0.1, 0.4], [1.8, 0.6, 0.2]] {
            let out = kernel.apply_pixel(px);
            for (a, b) in px.iter().zip(out.iter()) {
                assert!((a - b).abs() < 1e-3, "{px:?} -> {out:?}");
            }
        }
    }

    #[test]
    fn test_shadow_offset_targets_dark_pixels() {
        let params = GradingParams { shadows: [0.1, 0.0, 0.0], ..GradingParams::identity() };
        let kernel = GradingKernel::new(&params);

        let dark = kernel.apply_pixel([0.05, 0.05, 0.05]);
        let bright = kernel.apply_pixel([0.9, 0.9, 0.9]);

        let dark_shift = dark[0] - 0.05;
        let bright_shift = bright[0] - 0.9;
        assert!(dark_shift > 0.0);
        assert!(
            dark_shift > bright_shift * 2.0,
            "shadow offset leaked into highlights: {dark_shift} vs {bright_shift}"
        );
    }

    #[test]
    fn test_blending_scales_effect() {
        let full = GradingKernel::new(&GradingParams {
            midtones: [0.0, 0.1, 0.0],
            blending: 1.0,
            ..GradingParams::identity()
        });
        let half = GradingKernel::new(&GradingParams {
            midtones: [0.0, 0.1, 0.0],
            blending: 0.5,
            ..GradingParams::identity()
        });

        let px = [0.5, 0.5, 0.5];
        let full_shift = full.apply_pixel(px)[1] - 0.5;
        let half_shift = half.apply_pixel(px)[1] - 0.5;
        assert!(full_shift > half_shift);
        assert!(half_shift > 0.0);
    }

    #[test]
    fn test_out_of_range_offsets_clamped() {
        // An offset beyond [-1, 1] grades exactly like its clamped value
        let wild = GradingKernel::new(&GradingParams {
            shadows: [5.0, 0.0, 0.0],
            highlights: [0.0, 0.0, -7.5],
            ..GradingParams::identity()
        });
        let clamped = GradingKernel::new(&GradingParams {
            shadows: [1.0, 0.0, 0.0],
            highlights: [0.0, 0.0, -1.0],
            ..GradingParams::identity()
        });

        for px in [[0.05, 0.05, 0.05], [0.5, 0.5, 0.5], [0.95, 0.95, 0.95]] {
            let a = wild.apply_pixel(px);
            let b = clamped.apply_pixel(px);
            for (ca, cb) in a.iter().zip(b.iter()) {
                assert!((ca - cb).abs() < 1e-6, "{px:?}: {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_no_negative_output() {
        let params = GradingParams {
            shadows: [-0.5, -0.5, -0.5],
            midtones: [-0.5, -0.5, -0.5],
            highlights: [-0.5, -0.5, -0.5],
            ..GradingParams::identity()
        };
        let kernel = GradingKernel::new(&params);
        let out = kernel.apply_pixel([0.02, 0.01, 0.03]);
        assert!(out.iter().all(|&c| c >= 0.0), "{out:?}");
    }

    #[test]
    fn test_highlights_not_clamped_above_one() {
        let params = GradingParams { highlights: [0.3, 0.3, 0.3], ..GradingParams::identity() };
        let kernel = GradingKernel::new(&params);
        let out = kernel.apply_pixel([1.5, 1.5, 1.5]);
        assert!(out[0] > 1.5, "highlight energy was clamped: {out:?}");
    }

    #[test]
    fn test_buffer_identity_noop() {
        let mut img = ImageBuf::filled(3, 3, [0.4, 0.3, 0.2]);
        apply(&mut img, &GradingParams::identity());
        assert_eq!(img.pixel(1, 1), [0.4, 0.3, 0.2]);
    }

    #[test]
    fn test_buffer_applies_offsets() {
        let mut img = ImageBuf::filled(2, 2, [0.5, 0.5, 0.5]);
        let params = GradingParams { midtones: [0.05, 0.0, -0.05], ..GradingParams::identity() };
        apply(&mut img, &params);
        let [r, _, b] = img.pixel(0, 0);
        assert!(r > 0.5 + TOLERANCE);
        assert!(b < 0.5 - TOLERANCE);
    }
}
