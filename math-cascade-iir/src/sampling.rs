//! Response samples for plotting.
//!
//! Renderers do not reuse the optimization grid: they ask for a dense
//! single-band grid over the range they want to draw.

use ndarray::Array1;
use serde::Serialize;
use std::f64::consts::PI;

use crate::band::{Band, BandType};
use crate::error::Result;
use crate::filter_param::FilterParam;
use crate::grid::sample_frequencies;

/// Sample budget of a rendered range
pub const RENDER_RESOLUTION: usize = 1000;

/// Response values and the angular frequencies they were taken at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseSamples {
    /// Normalized angular frequency `2πf` of each sample
    pub omega: Array1<f64>,
    /// Magnitude or magnitude in dB
    pub values: Array1<f64>,
}

impl ResponseSamples {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.omega.len()
    }

    /// True when there are no samples
    pub fn is_empty(&self) -> bool {
        self.omega.is_empty()
    }
}

fn magnitude_samples(
    param: &FilterParam,
    coef: &[f64],
    left: f64,
    right: f64,
) -> Result<(Array1<f64>, Array1<f64>)> {
    let band = Band::new(BandType::Pass, left, right)?;
    let render = FilterParam::single_band(
        param.numerator_order(),
        param.denominator_order(),
        band,
        RENDER_RESOLUTION,
        0,
        param.group_delay(),
    )?;
    let nsplit = render.sample_counts()[0];

    let omega: Array1<f64> = sample_frequencies(&band, nsplit).map(|f| 2.0 * PI * f).collect();
    let magnitude: Array1<f64> = render
        .freq_res(coef)
        .into_iter()
        .flatten()
        .map(|h| h.norm())
        .collect();
    log::debug!("sampled {} points over [{}, {}]", magnitude.len(), left, right);
    Ok((omega, magnitude))
}

/// `|H|` over `[left, right]` at [`RENDER_RESOLUTION`] + 1 points.
///
/// # Errors
///
/// `InvalidBand` when the range is not inside [0, 0.5] or is empty.
///
/// # Panics
///
/// Panics if `coef.len() != param.total_order()`.
pub fn amplitude_samples(
    param: &FilterParam,
    coef: &[f64],
    left: f64,
    right: f64,
) -> Result<ResponseSamples> {
    let (omega, values) = magnitude_samples(param, coef, left, right)?;
    Ok(ResponseSamples { omega, values })
}

/// `20·log10|H|` over `[left, right]` at [`RENDER_RESOLUTION`] + 1 points.
///
/// # Errors
///
/// `InvalidBand` when the range is not inside [0, 0.5] or is empty.
///
/// # Panics
///
/// Panics if `coef.len() != param.total_order()`.
pub fn magnitude_db_samples(
    param: &FilterParam,
    coef: &[f64],
    left: f64,
    right: f64,
) -> Result<ResponseSamples> {
    let (omega, magnitude) = magnitude_samples(param, coef, left, right)?;
    Ok(ResponseSamples {
        omega,
        values: magnitude.mapv(|m| 20.0 * m.log10()),
    })
}
