//! Stability penalty on the denominator sections.
//!
//! A section `1 + b z + b' z²` has both poles inside the unit circle iff
//! `(b, b')` lies strictly inside the triangle `|b'| < 1`, `b' > |b| - 1`.
//! Sections outside the triangle add `b² + b'²` to the penalty; a lone
//! first-order section `1 + b z` adds `b²` when `|b| >= 1`.

/// True when the second-order denominator section `(b, b')` is outside the stability triangle.
#[inline]
pub fn is_unstable_pair(b: f64, b2: f64) -> bool {
    b2.abs() >= 1.0 || b2 <= b.abs() - 1.0
}

/// Penalty for an even denominator order: pairs start right after the numerator.
pub(crate) fn judge_stability_even(n_order: usize, opt_order: usize, coef: &[f64]) -> f64 {
    let mut penalty = 0.0;
    for m in (n_order + 1..opt_order).step_by(2) {
        if is_unstable_pair(coef[m], coef[m + 1]) {
            penalty += coef[m] * coef[m] + coef[m + 1] * coef[m + 1];
        }
    }
    penalty
}

/// Penalty for an odd denominator order: the lone first-order coefficient comes first.
pub(crate) fn judge_stability_odd(n_order: usize, opt_order: usize, coef: &[f64]) -> f64 {
    let mut penalty = 0.0;

    let lone = coef[n_order + 1];
    if lone.abs() >= 1.0 {
        penalty += lone * lone;
    }
    for m in (n_order + 2..opt_order).step_by(2) {
        if is_unstable_pair(coef[m], coef[m + 1]) {
            penalty += coef[m] * coef[m] + coef[m + 1] * coef[m + 1];
        }
    }
    penalty
}
