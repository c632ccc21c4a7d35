//! Group delay of the cascade for each parity family.
//!
//! The group delay of a product is the sum of the section delays and the
//! delay of a ratio is numerator minus denominator, so each sample is a sum
//! of per-section terms. A second-order section `(c, c')` contributes
//! `(c z + 2 c' z²) / (1 + c z + c' z²)`; a first-order section `c`
//! contributes `(1 + c z) / (c z)`. Only the real part is reported.

use num_complex::Complex64;

use crate::family::ParityFamily;
use crate::grid::BandGrid;

#[inline]
fn first_order_gd(c: f64, z: Complex64) -> Complex64 {
    (1.0 + c * z) / (c * z)
}

#[inline]
fn second_order_gd(c: f64, c2: f64, z: Complex64, z2: Complex64) -> Complex64 {
    (c * z + 2.0 * c2 * z2) / (1.0 + c * z + c2 * z2)
}

fn second_order_sum(
    coef: &[f64],
    range: std::ops::Range<usize>,
    z: Complex64,
    z2: Complex64,
) -> Complex64 {
    range
        .step_by(2)
        .map(|k| second_order_gd(coef[k], coef[k + 1], z, z2))
        .sum()
}

/// Evaluates the group delay of `coef` on every grid sample.
pub(crate) fn group_delay_res(
    family: ParityFamily,
    n_order: usize,
    opt_order: usize,
    grids: &[BandGrid],
    coef: &[f64],
) -> Vec<Vec<f64>> {
    grids
        .iter()
        .map(|grid| {
            grid.csw
                .iter()
                .zip(grid.csw2.iter())
                .map(|(&z, &z2)| match family {
                    ParityFamily::SE => group_delay_se(n_order, opt_order, coef, z, z2),
                    ParityFamily::SO => group_delay_so(n_order, opt_order, coef, z, z2),
                    ParityFamily::NO => group_delay_no(n_order, opt_order, coef, z, z2),
                    ParityFamily::MO => group_delay_mo(n_order, opt_order, coef, z, z2),
                })
                .collect()
        })
        .collect()
}

fn group_delay_se(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> f64 {
    let second_over = second_order_sum(coef, 1..n_order, z, z2);
    let second_under = second_order_sum(coef, n_order + 1..opt_order, z, z2);
    (second_over - second_under).re
}

fn group_delay_so(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> f64 {
    let prime_over = first_order_gd(coef[1], z);
    let prime_under = first_order_gd(coef[n_order + 1], z);
    let prime_gd = prime_over - prime_under;

    let second_over = second_order_sum(coef, 2..n_order, z, z2);
    let second_under = second_order_sum(coef, n_order + 2..opt_order, z, z2);
    (prime_gd + second_over - second_under).re
}

fn group_delay_no(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> f64 {
    let prime_gd = first_order_gd(coef[1], z);

    let second_over = second_order_sum(coef, 2..n_order, z, z2);
    let second_under = second_order_sum(coef, n_order + 1..opt_order, z, z2);
    (prime_gd + second_over - second_under).re
}

fn group_delay_mo(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> f64 {
    // lone section sits in the denominator, so it is subtracted
    let prime_gd = -first_order_gd(coef[n_order + 1], z);

    let second_over = second_order_sum(coef, 1..n_order, z, z2);
    let second_under = second_order_sum(coef, n_order + 2..opt_order, z, z2);
    (prime_gd + second_over - second_under).re
}
