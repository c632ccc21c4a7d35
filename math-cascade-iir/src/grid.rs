//! Band grid construction.
//!
//! The grid builder turns a band list into per-band sample sequences that all
//! evaluators share: the fundamental phasor `e^{-jω}`, the second harmonic
//! `e^{-j2ω}` and the desired complex response at every sampled frequency.

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::band::{Band, BandType, format_bands};
use crate::error::{CascadeError, Result};

/// Tolerance used when comparing adjacent band edges
pub const EDGE_TOLERANCE: f64 = 1.0e-10;

/// Precomputed samples for one band
#[derive(Debug, Clone, PartialEq)]
pub struct BandGrid {
    /// Fundamental phasors `e^{-j2πf}`
    pub csw: Vec<Complex64>,
    /// Second-harmonic phasors `e^{-j4πf}`
    pub csw2: Vec<Complex64>,
    /// Desired response (empty for transition bands)
    pub desired: Vec<Complex64>,
}

impl BandGrid {
    /// Builds the samples of `band` split into `nsplit` points.
    pub fn new(band: &Band, nsplit: usize, group_delay: f64) -> Self {
        Self {
            csw: gen_csw(band, nsplit),
            csw2: gen_csw2(band, nsplit),
            desired: gen_desire_res(band, nsplit, group_delay),
        }
    }

    /// Number of sampled frequencies
    pub fn len(&self) -> usize {
        self.csw.len()
    }

    /// True when the band received no samples
    pub fn is_empty(&self) -> bool {
        self.csw.is_empty()
    }
}

/// Checks that a multi-band list starts at 0, ends at 0.5 and has no gaps.
///
/// A single band is accepted anywhere inside [0, 0.5].
pub fn check_coverage(bands: &[Band]) -> Result<()> {
    if bands.is_empty() {
        return Err(CascadeError::NoBands);
    }
    if bands.len() < 2 {
        return Ok(());
    }

    let mut expected = 0.0;
    for (index, band) in bands.iter().enumerate() {
        if (band.left() - expected).abs() > EDGE_TOLERANCE {
            return Err(CascadeError::BandGap {
                index,
                expected,
                found: band.left(),
                bands: format_bands(bands),
            });
        }
        expected = band.right();
    }

    if (expected - 0.5).abs() > EDGE_TOLERANCE {
        return Err(CascadeError::BandCoverage {
            found: expected,
            bands: format_bands(bands),
        });
    }
    Ok(())
}

/// Distributes the sample budgets across bands proportionally to their width.
///
/// Pass and stop bands share `nsplit_approx`, transition bands share
/// `nsplit_transition`. The first band always gets one extra sample.
pub fn split_counts(
    bands: &[Band],
    nsplit_approx: usize,
    nsplit_transition: usize,
) -> Vec<usize> {
    let mut approx_range = 0.0;
    let mut transition_range = 0.0;
    for band in bands {
        if band.band_type().is_approximation() {
            approx_range += band.width();
        } else {
            transition_range += band.width();
        }
    }

    let mut split: Vec<usize> = bands
        .iter()
        .map(|band| {
            if band.band_type().is_approximation() {
                (nsplit_approx as f64 * band.width() / approx_range) as usize
            } else {
                (nsplit_transition as f64 * band.width() / transition_range) as usize
            }
        })
        .collect();
    if let Some(first) = split.first_mut() {
        *first += 1;
    }
    split
}

/// Normalized frequencies `left + i·width/nsplit` for `i < nsplit`
pub(crate) fn sample_frequencies(band: &Band, nsplit: usize) -> impl Iterator<Item = f64> {
    let step = band.width() / nsplit as f64;
    let left = band.left();
    (0..nsplit).map(move |i| left + step * i as f64)
}

/// Fundamental complex sinusoid `e^{-j2πf}` over the band
pub fn gen_csw(band: &Band, nsplit: usize) -> Vec<Complex64> {
    sample_frequencies(band, nsplit)
        .map(|f| Complex64::from_polar(1.0, -2.0 * PI * f))
        .collect()
}

/// Second harmonic `e^{-j4πf}` over the band
pub fn gen_csw2(band: &Band, nsplit: usize) -> Vec<Complex64> {
    sample_frequencies(band, nsplit)
        .map(|f| Complex64::from_polar(1.0, -4.0 * PI * f))
        .collect()
}

/// Desired response: linear phase of slope `group_delay` in pass bands, zero
/// in stop bands, nothing in transition bands.
pub fn gen_desire_res(band: &Band, nsplit: usize, group_delay: f64) -> Vec<Complex64> {
    match band.band_type() {
        BandType::Pass => {
            let ang = -2.0 * PI * group_delay;
            sample_frequencies(band, nsplit)
                .map(|f| Complex64::from_polar(1.0, ang * f))
                .collect()
        }
        BandType::Stop => vec![Complex64::new(0.0, 0.0); nsplit],
        BandType::Transition => Vec::new(),
    }
}
