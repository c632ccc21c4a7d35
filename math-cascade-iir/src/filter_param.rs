//! Filter parameters: orders, bands and the precomputed band grids.
//!
//! A [`FilterParam`] is built once per design problem and then queried many
//! times with different coefficient vectors. All evaluators are pure
//! functions of the stored grids and the caller's coefficients.

use num_complex::Complex64;
use rand::Rng;

use crate::band::Band;
use crate::error::{CascadeError, Result};
use crate::family::ParityFamily;
use crate::grid::{BandGrid, check_coverage, split_counts};
use crate::group_delay::group_delay_res;
use crate::init::{init_coef, init_stable_coef};
use crate::response::freq_res;
use crate::roots::{self, SectionRoots};
use crate::stability::{judge_stability_even, judge_stability_odd};

/// Transition-band magnitude above which overshoot is penalized
pub const THRESHOLD_RIPPLE: f64 = 1.0;

/// Orders, bands and precomputed samples of one filter design problem.
///
/// # Coefficient layout
///
/// Every evaluator takes a flat slice of length `1 + N + M`
/// ([`total_order`](Self::total_order)):
///
/// - `coef[0]`: gain `a0`
/// - `coef[1..=N]`: numerator sections, a lone first-order coefficient first when N is odd
/// - `coef[N+1..=N+M]`: denominator sections, same convention for M
///
/// # Example
///
/// ```rust
/// use math_audio_cascade_iir::{FilterParam, ParityFamily, parse_bands};
///
/// let bands = parse_bands("LPF(0.2:0.3)").unwrap();
/// let param = FilterParam::new(8, 2, bands, 200, 50, 5.0).unwrap();
/// assert_eq!(param.family(), ParityFamily::SE);
/// assert_eq!(param.sample_counts(), &[101, 50, 100]);
///
/// let coef = vec![0.0; param.total_order()];
/// assert_eq!(param.judge_stability(&coef), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FilterParam {
    n_order: usize,
    m_order: usize,
    opt_order: usize,
    bands: Vec<Band>,
    nsplit_approx: usize,
    nsplit_transition: usize,
    group_delay: f64,
    threshold_ripple: f64,
    family: ParityFamily,
    split: Vec<usize>,
    grids: Vec<BandGrid>,
}

impl FilterParam {
    /// Builds the grids for `bands` and selects the parity family.
    ///
    /// # Arguments
    /// * `n_order` - Numerator order N
    /// * `m_order` - Denominator order M
    /// * `bands` - Contiguous bands covering [0, 0.5], or a single band anywhere in it
    /// * `nsplit_approx` - Sample budget shared by pass and stop bands
    /// * `nsplit_transition` - Sample budget shared by transition bands
    /// * `group_delay` - Target group delay in samples
    ///
    /// # Errors
    ///
    /// Returns `CascadeError::InvalidOrder` when `1 + N + M` overflows, and
    /// `CascadeError::NoBands`, `CascadeError::BandGap` or
    /// `CascadeError::BandCoverage` when the band list is unusable.
    pub fn new(
        n_order: usize,
        m_order: usize,
        bands: Vec<Band>,
        nsplit_approx: usize,
        nsplit_transition: usize,
        group_delay: f64,
    ) -> Result<Self> {
        let opt_order = n_order
            .checked_add(m_order)
            .and_then(|order| order.checked_add(1))
            .ok_or(CascadeError::InvalidOrder {
                n: n_order,
                m: m_order,
            })?;
        check_coverage(&bands)?;

        let split = split_counts(&bands, nsplit_approx, nsplit_transition);
        let grids: Vec<BandGrid> = bands
            .iter()
            .zip(split.iter())
            .map(|(band, &nsplit)| {
                if nsplit == 0 {
                    log::warn!("{} received no samples", band);
                }
                BandGrid::new(band, nsplit, group_delay)
            })
            .collect();

        let family = ParityFamily::from_orders(n_order, m_order);
        log::debug!(
            "FilterParam: N={}, M={}, family {}, samples per band {:?}",
            n_order,
            m_order,
            family,
            split
        );

        Ok(Self {
            n_order,
            m_order,
            opt_order,
            bands,
            nsplit_approx,
            nsplit_transition,
            group_delay,
            threshold_ripple: THRESHOLD_RIPPLE,
            family,
            split,
            grids,
        })
    }

    /// Builds parameters over a single band, which may sit anywhere in [0, 0.5].
    pub fn single_band(
        n_order: usize,
        m_order: usize,
        band: Band,
        nsplit_approx: usize,
        nsplit_transition: usize,
        group_delay: f64,
    ) -> Result<Self> {
        Self::new(
            n_order,
            m_order,
            vec![band],
            nsplit_approx,
            nsplit_transition,
            group_delay,
        )
    }

    /// Numerator order N
    pub fn numerator_order(&self) -> usize {
        self.n_order
    }

    /// Denominator order M
    pub fn denominator_order(&self) -> usize {
        self.m_order
    }

    /// Length of a coefficient vector, `1 + N + M`
    pub fn total_order(&self) -> usize {
        self.opt_order
    }

    /// Sample budget of pass and stop bands
    pub fn nsplit_approx(&self) -> usize {
        self.nsplit_approx
    }

    /// Sample budget of transition bands
    pub fn nsplit_transition(&self) -> usize {
        self.nsplit_transition
    }

    /// Target group delay
    pub fn group_delay(&self) -> f64 {
        self.group_delay
    }

    /// Ripple threshold for transition bands
    pub fn threshold_ripple(&self) -> f64 {
        self.threshold_ripple
    }

    /// Bands in construction order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of samples of each band
    pub fn sample_counts(&self) -> &[usize] {
        &self.split
    }

    /// Parity family selected from N and M
    pub fn family(&self) -> ParityFamily {
        self.family
    }

    /// Precomputed samples of each band
    pub fn grids(&self) -> &[BandGrid] {
        &self.grids
    }

    fn check_len(&self, coef: &[f64]) {
        assert_eq!(
            coef.len(),
            self.opt_order,
            "coefficient vector has length {} but N={}, M={} needs {}",
            coef.len(),
            self.n_order,
            self.m_order,
            self.opt_order
        );
    }

    /// Complex response at every sample, one vector per band.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn freq_res(&self, coef: &[f64]) -> Vec<Vec<Complex64>> {
        self.check_len(coef);
        freq_res(self.family, self.n_order, self.opt_order, &self.grids, coef)
    }

    /// Group delay at every sample, one vector per band.
    ///
    /// A lone first-order section with a zero coefficient gives non-finite values.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn group_delay_res(&self, coef: &[f64]) -> Vec<Vec<f64>> {
        self.check_len(coef);
        group_delay_res(self.family, self.n_order, self.opt_order, &self.grids, coef)
    }

    /// Stability penalty of the denominator sections; 0 when all are stable.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn judge_stability(&self, coef: &[f64]) -> f64 {
        self.check_len(coef);
        if self.family.odd_denominator() {
            judge_stability_odd(self.n_order, self.opt_order, coef)
        } else {
            judge_stability_even(self.n_order, self.opt_order, coef)
        }
    }

    /// Classified roots of each denominator section.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn pole_sections(&self, coef: &[f64]) -> Vec<SectionRoots> {
        self.check_len(coef);
        roots::sections(
            coef,
            self.n_order + 1,
            self.opt_order,
            self.family.odd_denominator(),
        )
    }

    /// Classified roots of each numerator section.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn zero_sections(&self, coef: &[f64]) -> Vec<SectionRoots> {
        self.check_len(coef);
        roots::sections(coef, 1, self.n_order + 1, self.family.odd_numerator())
    }

    /// Poles of the cascade. A repeated real root is listed once.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn pole_res(&self, coef: &[f64]) -> Vec<Complex64> {
        roots::flatten(&self.pole_sections(coef))
    }

    /// Zeros of the cascade. A repeated real root is listed once.
    ///
    /// # Panics
    ///
    /// Panics if `coef.len() != self.total_order()`.
    pub fn zero_res(&self, coef: &[f64]) -> Vec<Complex64> {
        roots::flatten(&self.zero_sections(coef))
    }

    /// Random coefficient vector: `a0` in `[-|a0|, |a0|]`, numerator in
    /// `[-|a|, |a|]`, denominator in `[-|b|, |b|]`.
    pub fn init_coef(&self, a0: f64, a: f64, b: f64) -> Vec<f64> {
        self.init_coef_with_rng(a0, a, b, &mut rand::rng())
    }

    /// [`init_coef`](Self::init_coef) with a caller-supplied generator
    pub fn init_coef_with_rng<R: Rng + ?Sized>(
        &self,
        a0: f64,
        a: f64,
        b: f64,
        rng: &mut R,
    ) -> Vec<f64> {
        init_coef(self.n_order, self.m_order, a0, a, b, rng)
    }

    /// Random coefficient vector whose denominator sections are all stable.
    pub fn init_stable_coef(&self, a0: f64, a: f64) -> Vec<f64> {
        self.init_stable_coef_with_rng(a0, a, &mut rand::rng())
    }

    /// [`init_stable_coef`](Self::init_stable_coef) with a caller-supplied generator
    pub fn init_stable_coef_with_rng<R: Rng + ?Sized>(
        &self,
        a0: f64,
        a: f64,
        rng: &mut R,
    ) -> Vec<f64> {
        init_stable_coef(self.n_order, self.m_order, a0, a, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::band::BandType;
    use approx::assert_abs_diff_eq;

    fn lpf(left: f64, right: f64) -> Vec<Band> {
        vec![
            Band::new(BandType::Pass, 0.0, left).unwrap(),
            Band::new(BandType::Transition, left, right).unwrap(),
            Band::new(BandType::Stop, right, 0.5).unwrap(),
        ]
    }

    #[test]
    fn test_new_lowpass() {
        let param = FilterParam::new(8, 2, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        assert_eq!(param.total_order(), 11);
        assert_eq!(param.family(), ParityFamily::SE);
        assert_eq!(param.sample_counts(), &[101, 50, 100]);
        assert_eq!(param.grids().len(), 3);
        for (grid, &count) in param.grids().iter().zip(param.sample_counts()) {
            assert_eq!(grid.len(), count);
        }
        assert_eq!(param.threshold_ripple(), 1.0);
        assert_eq!(param.group_delay(), 5.0);
    }

    #[test]
    fn test_new_rejects_gap() {
        let bands = vec![
            Band::new(BandType::Pass, 0.0, 0.2).unwrap(),
            Band::new(BandType::Stop, 0.25, 0.5).unwrap(),
        ];
        let err = FilterParam::new(4, 4, bands, 200, 50, 5.0).unwrap_err();
        assert!(matches!(err, CascadeError::BandGap { index: 1, .. }));
        assert!(err.is_band_error());
    }

    #[test]
    fn test_new_rejects_overflowing_orders() {
        let err = FilterParam::new(usize::MAX, 1, lpf(0.2, 0.3), 200, 50, 5.0).unwrap_err();
        assert!(matches!(
            err,
            CascadeError::InvalidOrder {
                n: usize::MAX,
                m: 1
            }
        ));
        assert!(FilterParam::new(usize::MAX, 0, lpf(0.2, 0.3), 200, 50, 5.0).is_err());
    }

    #[test]
    fn test_single_band() {
        let band = Band::new(BandType::Pass, 0.1, 0.3).unwrap();
        let param = FilterParam::single_band(3, 2, band, 1000, 0, 0.0).unwrap();
        assert_eq!(param.family(), ParityFamily::NO);
        assert_eq!(param.grids().len(), 1);
        assert_eq!(param.grids()[0].len(), param.sample_counts()[0]);
    }

    #[test]
    fn test_identity_response() {
        // all section coefficients zero: H = a0 everywhere, no group delay
        let param = FilterParam::new(4, 4, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        let mut coef = vec![0.0; param.total_order()];
        coef[0] = 0.5;
        for band in param.freq_res(&coef) {
            for h in band {
                assert_abs_diff_eq!(h.re, 0.5, epsilon = 1e-15);
                assert_abs_diff_eq!(h.im, 0.0, epsilon = 1e-15);
            }
        }
        for band in param.group_delay_res(&coef) {
            assert!(band.iter().all(|&gd| gd == 0.0));
        }
    }

    #[test]
    fn test_roots_follow_order_parity() {
        // N = 3 (lone zero + pair), M = 2 (one pair)
        let param = FilterParam::new(3, 2, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        let coef = [1.0, 0.5, 0.0, 0.25, -1.0, 0.5];
        let zeros = param.zero_sections(&coef);
        assert_eq!(zeros[0], SectionRoots::FirstOrder(-0.5));
        assert_eq!(zeros[1], SectionRoots::ComplexConjugate(Complex64::new(0.0, 0.5)));
        assert_eq!(param.zero_res(&coef).len(), 3);

        let poles = param.pole_sections(&coef);
        assert_eq!(poles.len(), 1);
        assert_eq!(poles[0], SectionRoots::ComplexConjugate(Complex64::new(0.5, 0.5)));
    }

    #[test]
    fn test_stability_dispatch_by_denominator_parity() {
        let even = FilterParam::new(2, 2, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        assert_abs_diff_eq!(even.judge_stability(&[1.0, 0.0, 0.0, 0.0, 2.0]), 4.0, epsilon = 1e-15);

        let odd = FilterParam::new(2, 1, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        assert_abs_diff_eq!(odd.judge_stability(&[1.0, 0.0, 0.0, -1.5]), 2.25, epsilon = 1e-15);
        assert_eq!(odd.judge_stability(&[1.0, 0.0, 0.0, 0.5]), 0.0);
    }

    #[test]
    #[should_panic(expected = "coefficient vector has length")]
    fn test_wrong_length_panics() {
        let param = FilterParam::new(2, 2, lpf(0.2, 0.3), 200, 50, 5.0).unwrap();
        param.freq_res(&[1.0, 0.0]);
    }

    #[test]
    fn test_filter_param_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<FilterParam>();
    }
}
