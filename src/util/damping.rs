//! Frame-rate independent smoothing and angle helpers.
//!
//! Every damped value in the camera follows the same curve:
//!
//!   `value += (target - value) * (1 - exp(-rate * dt))`
//!
//! which converges on `target` without overshoot for any positive `rate`.
//! Angular variants take the short way around the ±π seam.

use std::f32::consts::{PI, TAU};

/// Fraction of the remaining distance covered after `dt` seconds at `rate`.
#[inline]
fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Exponentially damp `current` toward `target`.
///
/// Returns `current` unchanged when `dt == 0` and `target` as `dt → ∞`.
/// The result always lies between `current` and `target` inclusive.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let value = current + (target - current) * smoothing_factor(rate, dt);
    // Rounding in `target - current` can push the sum one ulp past the
    // target; min/max (not clamp) so NaN inputs propagate instead of
    // panicking.
    if current <= target {
        value.max(current).min(target)
    } else {
        value.max(target).min(current)
    }
}

/// Signed shortest angular distance from `from` to `to`, in `(-π, π]`.
#[inline]
#[must_use]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let diff = to - from;
    let delta = diff.sin().atan2(diff.cos());
    if delta <= -PI {
        delta + TAU
    } else {
        delta
    }
}

/// Damp an angle toward `target` along the shortest arc.
#[inline]
#[must_use]
pub fn damp_angle(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + shortest_angle_delta(current, target) * smoothing_factor(rate, dt)
}

/// Wrap an angle into `(-π, π]`.
///
/// Only used on render-ready values; accumulating targets stay unbounded.
#[inline]
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Linear interpolation between `a` and `b`.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Position of `value` within `[a, b]` as a fraction (unclamped).
///
/// Callers must not pass a zero-width range; options validation rejects
/// those at load time.
#[inline]
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    (value - a) / (b - a)
}
