//! # darkroom-locus
//!
//! Blackbody (Planckian) locus chromaticity estimation and
//! chromaticity-to-RGB conversion.
//!
//! This crate turns an illuminant temperature in Kelvin into a CIE-xy
//! chromaticity coordinate, and a chromaticity into a luminance-normalized
//! linear-sRGB triple. The white-balance stage in `darkroom-ops` builds its
//! per-channel correction factors from these two conversions.
//!
//! # Why piecewise fits?
//!
//! No single polynomial tracks the blackbody locus accurately from candle
//! light (1000 K) to sky blue (100000 K). Each temperature range gets its own
//! cubic fit; because independently fitted segments disagree slightly at
//! their nominal boundaries, a smoothstep cross-fade inside a transition
//! window above each boundary keeps `x(T)` continuous — a hard `if/else`
//! switch would show up as banding while a user drags a temperature slider.
//!
//! # Usage
//!
//! ```rust
//! use darkroom_locus::{temperature_to_chromaticity, chromaticity_to_rgb, normalize_luminance};
//!
//! let c = temperature_to_chromaticity(6500.0);
//! let rgb = normalize_luminance(chromaticity_to_rgb(c));
//! // D65 is the sRGB white point, so the triple is near-neutral
//! assert!((rgb.x - 1.0).abs() < 0.1);
//! ```
//!
//! # Dependencies
//!
//! - [`darkroom-math`] - Vec3/Mat3, smoothstep, Rec.709 luminance
//!
//! # Used By
//!
//! - `darkroom-ops` - White-balance scale calculation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use darkroom_math::{lerp, smoothstep01, Mat3, Vec3};

/// Lowest temperature the locus fits cover, in Kelvin.
pub const TEMP_MIN_K: f32 = 1000.0;

/// Highest temperature the locus fits cover, in Kelvin.
pub const TEMP_MAX_K: f32 = 100_000.0;

/// Epsilon below which a chromaticity `y` or a luminance counts as zero.
///
/// Guards every division in this crate; the hot path never fails.
pub const EPSILON: f32 = 1e-4;

/// CIE-1931-like chromaticity coordinate.
///
/// Both components are clamped to `[0, 1]` on construction. Transient value,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    /// x coordinate in [0, 1]
    pub x: f32,
    /// y coordinate in [0, 1]
    pub y: f32,
}

impl Chromaticity {
    /// Creates a chromaticity, clamping both components to `[0, 1]`.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
        }
    }
}

// ============================================================================
// Piecewise locus fits
// ============================================================================

/// One segment of a piecewise polynomial fit.
///
/// Segments form an ordered table; a segment owns the temperature range up to
/// `upper`, and `blend` is the width of the cross-fade window *above* that
/// boundary, inside which this segment is smoothstep-blended with the next.
struct FitSegment {
    /// Upper temperature bound of this segment, in Kelvin
    upper: f32,
    /// Cross-fade window width above `upper`, in Kelvin (0 = hard boundary)
    blend: f32,
    /// Polynomial coefficients, highest order first
    coeffs: [f32; 4],
}

/// x(T) fits: cubics in `1/T`, coefficients for `u = 1000/T`:
/// `x = c3*u^3 + c2*u^2 + c1*u + c0`.
///
/// Candle/incandescent and ultra-high segments are the Kim et al. Planckian
/// approximation; the warm-daylight and cool-sky segments are the CIE
/// daylight-locus cubics.
const X_FITS: &[FitSegment] = &[
    // candle / incandescent, <= 4000 K
    FitSegment {
        upper: 4000.0,
        blend: 500.0,
        coeffs: [-0.2661239, -0.2343589, 0.8776956, 0.179910],
    },
    // warm daylight, 4000..7000 K
    FitSegment {
        upper: 7000.0,
        blend: 1000.0,
        coeffs: [-4.6070, 2.9678, 0.09911, 0.244063],
    },
    // cool sky, 7000..25000 K
    FitSegment {
        upper: 25000.0,
        blend: 5000.0,
        coeffs: [-2.0064, 1.9018, 0.24748, 0.237040],
    },
    // ultra-high, >= 25000 K
    FitSegment {
        upper: f32::INFINITY,
        blend: 0.0,
        coeffs: [-3.0258469, 2.1070379, 0.2226347, 0.24039],
    },
];

/// y(x) fits, gated by temperature: cubics in `x`
/// (`y = c3*x^3 + c2*x^2 + c1*x + c0`).
///
/// The top segment is a single quadratic (leading coefficient zero); the
/// cubic fitted for mid temperatures drifts toward purple above ~7000 K.
const Y_FITS: &[FitSegment] = &[
    // deep warm, <= 2222 K
    FitSegment {
        upper: 2222.0,
        blend: 778.0,
        coeffs: [-1.1063814, -1.34811020, 2.18555832, -0.20219683],
    },
    // warm, 2222..4000 K
    FitSegment {
        upper: 4000.0,
        blend: 1000.0,
        coeffs: [-0.9549476, -1.37418593, 2.09137015, -0.16748867],
    },
    // daylight, 4000..7000 K
    FitSegment {
        upper: 7000.0,
        blend: 1000.0,
        coeffs: [3.0817580, -5.87338670, 3.75112997, -0.37001483],
    },
    // sky, >= 7000 K (quadratic)
    FitSegment {
        upper: f32::INFINITY,
        blend: 0.0,
        coeffs: [0.0, -3.0, 2.87, -0.275],
    },
];

/// Evaluates an ordered segment table at `kelvin`, cross-fading between
/// neighboring fits inside the transition window above each boundary.
///
/// `eval` maps a segment's coefficients to a value (the y-fits evaluate in
/// `x`, not temperature, so evaluation is the caller's business; gating and
/// blending are not).
fn eval_fits(fits: &[FitSegment], kelvin: f32, eval: impl Fn(&[f32; 4]) -> f32) -> f32 {
    let idx = fits
        .iter()
        .position(|seg| kelvin <= seg.upper)
        .unwrap_or(fits.len() - 1);

    if idx > 0 {
        let boundary = fits[idx - 1].upper;
        let window = fits[idx - 1].blend;
        if window > 0.0 && kelvin < boundary + window {
            let t = smoothstep01((kelvin - boundary) / window);
            return lerp(eval(&fits[idx - 1].coeffs), eval(&fits[idx].coeffs), t);
        }
    }
    eval(&fits[idx].coeffs)
}

/// Evaluates a cubic with coefficients ordered highest-first (Horner form).
#[inline]
fn eval_cubic(c: &[f32; 4], v: f32) -> f32 {
    ((c[0] * v + c[1]) * v + c[2]) * v + c[3]
}

/// Converts an illuminant temperature in Kelvin to a CIE-xy chromaticity.
///
/// The temperature is clamped to `[1000, 100000]` K — out-of-domain inputs
/// are never rejected. `x` comes from four cubic-in-`1/T` fits with
/// smoothstep cross-fades at the 4000 K and 7000 K boundaries; `y` comes
/// from temperature-gated polynomials in `x`. Both outputs are clamped to
/// `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use darkroom_locus::temperature_to_chromaticity;
///
/// let d65 = temperature_to_chromaticity(6500.0);
/// assert!((d65.x - 0.3127).abs() < 0.01);
/// assert!((d65.y - 0.3290).abs() < 0.01);
///
/// // Warm light sits at higher x
/// let candle = temperature_to_chromaticity(2000.0);
/// assert!(candle.x > d65.x);
/// ```
pub fn temperature_to_chromaticity(kelvin: f32) -> Chromaticity {
    let t = kelvin.clamp(TEMP_MIN_K, TEMP_MAX_K);

    let u = 1000.0 / t;
    let x = eval_fits(X_FITS, t, |c| eval_cubic(c, u));
    let y = eval_fits(Y_FITS, t, |c| eval_cubic(c, x));

    Chromaticity::new(x, y)
}

// ============================================================================
// Chromaticity to RGB
// ============================================================================

/// XYZ (D65) to linear sRGB matrix.
pub const XYZ_TO_SRGB: Mat3 = Mat3::from_rows([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Linear sRGB to XYZ (D65) matrix.
pub const SRGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// Converts xy chromaticity to XYZ with `Y = 1`.
///
/// Below the [`EPSILON`] guard on `y`, X and Z collapse to zero instead of
/// blowing up the division.
#[inline]
pub fn xy_to_xyz(c: Chromaticity) -> Vec3 {
    if c.y < EPSILON {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(c.x / c.y, 1.0, (1.0 - c.x - c.y) / c.y)
    }
}

/// Converts a chromaticity to an unnormalized linear-sRGB triple.
///
/// The result can contain negative or greater-than-one components for
/// chromaticities outside the sRGB gamut; callers normalize and clamp as
/// needed (see [`normalize_luminance`]).
#[inline]
pub fn chromaticity_to_rgb(c: Chromaticity) -> Vec3 {
    XYZ_TO_SRGB * xy_to_xyz(c)
}

/// Rescales an RGB triple so its Rec.709 luminance is exactly 1.
///
/// Illuminants converted from the locus differ in absolute brightness;
/// normalizing luminance makes them comparable purely by chrominance, which
/// is what the white-balance ratio needs. Triples with near-zero luminance
/// are returned unchanged.
///
/// # Example
///
/// ```rust
/// use darkroom_locus::normalize_luminance;
/// use darkroom_math::Vec3;
///
/// let v = normalize_luminance(Vec3::new(2.0, 1.0, 0.5));
/// assert!((v.luminance() - 1.0).abs() < 1e-5);
/// ```
#[inline]
pub fn normalize_luminance(rgb: Vec3) -> Vec3 {
    let lum = rgb.luminance();
    if lum > EPSILON {
        rgb / lum
    } else {
        rgb
    }
}

/// Converts a temperature straight to a luminance-normalized RGB triple.
///
/// Convenience composition of the three conversions above; this is the form
/// the white-balance scale calculator consumes.
#[inline]
pub fn illuminant_rgb(kelvin: f32) -> Vec3 {
    normalize_luminance(chromaticity_to_rgb(temperature_to_chromaticity(kelvin)))
}
