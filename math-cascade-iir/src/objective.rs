//! Composite optimization objective.
//!
//! The objective is `max_error + RIPPLE_WEIGHT·max_ripple² + STABILITY_WEIGHT·penalty`,
//! where `max_error` is the largest `|desired - H|` over pass and stop
//! samples and `max_ripple` is the largest transition-band `|H|` above the
//! ripple threshold (0 when there is none).

use ndarray::Array1;
use rayon::prelude::*;
use serde::Serialize;

use crate::filter_param::FilterParam;

/// Weight of the stability penalty
pub const STABILITY_WEIGHT: f64 = 100.0;
/// Weight of the squared transition-band overshoot
pub const RIPPLE_WEIGHT: f64 = 100.0;

/// Components of the objective for one coefficient vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObjectiveTerms {
    /// Largest approximation error over pass and stop bands
    pub max_error: f64,
    /// Largest transition-band magnitude above the threshold, or 0
    pub max_ripple: f64,
    /// Stability penalty of the denominator sections
    pub stability_penalty: f64,
}

impl ObjectiveTerms {
    /// Weighted sum of the three terms
    pub fn total(&self) -> f64 {
        self.max_error
            + RIPPLE_WEIGHT * self.max_ripple * self.max_ripple
            + STABILITY_WEIGHT * self.stability_penalty
    }
}

/// Parallel evaluation configuration
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation
    pub enabled: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl FilterParam {
    /// Objective components of `coef`.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn evaluate_terms(&self, coef: &[f64]) -> ObjectiveTerms {
        let stability_penalty = self.judge_stability(coef);
        let freq = self.freq_res(coef);

        let mut max_error = 0.0;
        let mut max_ripple = 0.0;
        for ((band, grid), res) in self.bands().iter().zip(self.grids()).zip(freq.iter()) {
            if band.band_type().is_approximation() {
                for (desired, h) in grid.desired.iter().zip(res.iter()) {
                    let error = (desired - h).norm();
                    if max_error < error {
                        max_error = error;
                    }
                }
            } else {
                for h in res {
                    let ripple = h.norm();
                    if ripple > self.threshold_ripple() && ripple > max_ripple {
                        max_ripple = ripple;
                    }
                }
            }
        }

        ObjectiveTerms {
            max_error,
            max_ripple,
            stability_penalty,
        }
    }

    /// Objective value of `coef`; smaller is better.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn evaluate(&self, coef: &[f64]) -> f64 {
        self.evaluate_terms(coef).total()
    }

    /// Evaluates independent candidates, in parallel unless disabled or fewer than 4.
    ///
    /// # Panics
    ///
    /// Panics if any candidate has the wrong length.
    pub fn evaluate_batch(&self, candidates: &[Vec<f64>], config: &ParallelConfig) -> Vec<f64> {
        if !config.enabled || candidates.len() < 4 {
            return candidates.iter().map(|coef| self.evaluate(coef)).collect();
        }

        // global rayon pool
        candidates.par_iter().map(|coef| self.evaluate(coef)).collect()
    }

    /// Objective as a closure over `Array1<f64>`, for ndarray-based optimizers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math_audio_cascade_iir::{FilterParam, parse_bands};
    /// use ndarray::Array1;
    ///
    /// let bands = parse_bands("LPF(0.2:0.3)").unwrap();
    /// let param = FilterParam::new(2, 2, bands, 200, 50, 5.0).unwrap();
    /// let f = param.objective();
    /// let x = Array1::from_vec(vec![0.5, 0.0, 0.0, 0.0, 0.0]);
    /// assert!(f(&x) >= 0.0);
    /// ```
    pub fn objective(&self) -> impl Fn(&Array1<f64>) -> f64 + Send + Sync + '_ {
        move |x: &Array1<f64>| match x.as_slice() {
            Some(coef) => self.evaluate(coef),
            None => self.evaluate(&x.to_vec()),
        }
    }
}
