//! Interpolation utilities for the color kernel.
//!
//! - Linear interpolation ([`lerp`], [`inverse_lerp`])
//! - Smooth cross-fades ([`smoothstep`], [`smoothstep01`])
//! - Clamping ([`saturate`])
//!
//! The locus fits use [`smoothstep`] to cross-fade between independently
//! fitted polynomial segments so a temperature sweep never shows a jump.

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Example
///
/// ```rust
/// use darkroom_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Degenerate ranges return 0.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Clamps a value to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Hermite smoothstep interpolation.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and smoothly
/// interpolates between using a cubic polynomial.
///
/// # Formula
///
/// `t * t * (3 - 2 * t)` where `t = (x - edge0) / (edge1 - edge0)`
///
/// # Properties
///
/// - First derivative is zero at both edges (smooth transition)
/// - Continuous but second derivative is not smooth
///
/// # Example
///
/// ```rust
/// use darkroom_math::smoothstep;
///
/// assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// ```
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate(inverse_lerp(edge0, edge1, x));
    t * t * (3.0 - 2.0 * t)
}

/// Smoothstep over a pre-normalized parameter in [0, 1].
///
/// `3t^2 - 2t^3` with the input clamped to [0, 1].
#[inline]
pub fn smoothstep01(t: f32) -> f32 {
    let t = saturate(t);
    t * t * (3.0 - 2.0 * t)
}
