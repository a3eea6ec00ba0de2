//! Floating-point tolerance used by elimination.
//!
//! Elimination divides by pivot coefficients, so derived values drift away
//! from the exact rationals they stand for. Every "is this zero" and "is this
//! one" decision goes through this module so pivot selection stays stable on
//! borderline systems.

/// Absolute tolerance for zero tests on derived coefficients.
pub const EPSILON: f64 = 1e-9;

/// Returns true if `value` is zero within [`EPSILON`].
#[inline]
#[must_use]
pub fn is_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Flushes values within [`EPSILON`] of zero to exactly `0.0`.
#[inline]
#[must_use]
pub fn snap(value: f64) -> f64 {
    if is_zero(value) {
        0.0
    } else {
        value
    }
}
