//! The Poisson probability mass function over goal counts.

use crate::factorial::Factorial;

/// Probability of exactly `k` goals at mean rate `lambda`.
///
/// Rates are clamped at zero: a negative or non-finite `lambda` behaves as
/// zero, concentrating all mass at `k = 0`. Degraded upstream inputs thus
/// yield a total distribution rather than `NaN`s.
#[inline]
pub fn pmf(k: u8, lambda: f64, factorial: &impl Factorial) -> f64 {
    let lambda = if lambda.is_finite() {
        f64::max(lambda, 0.0)
    } else {
        0.0
    };
    lambda.powi(k as i32) * f64::exp(-lambda) / factorial.get(k) as f64
}
