//! Frequency response of the cascade for each parity family.
//!
//! With `z = e^{-jω}` the transfer function is
//!
//! ```text
//! H(z) = a0 · Π (1 + a_n z + a_{n+1} z²) / Π (1 + b_m z + b_{m+1} z²)
//! ```
//!
//! and an odd order contributes one extra `(1 + c z)` factor on its side.
//! The four variants are kept as separate functions so each can be checked
//! against its formula on its own.

use num_complex::Complex64;

use crate::family::ParityFamily;
use crate::grid::BandGrid;

#[inline]
fn first_order(c: f64, z: Complex64) -> Complex64 {
    1.0 + c * z
}

#[inline]
fn second_order(c: f64, c2: f64, z: Complex64, z2: Complex64) -> Complex64 {
    1.0 + c * z + c2 * z2
}

/// Evaluates the response of `coef` on every grid sample.
pub(crate) fn freq_res(
    family: ParityFamily,
    n_order: usize,
    opt_order: usize,
    grids: &[BandGrid],
    coef: &[f64],
) -> Vec<Vec<Complex64>> {
    grids
        .iter()
        .map(|grid| {
            grid.csw
                .iter()
                .zip(grid.csw2.iter())
                .map(|(&z, &z2)| match family {
                    ParityFamily::SE => freq_res_se(n_order, opt_order, coef, z, z2),
                    ParityFamily::SO => freq_res_so(n_order, opt_order, coef, z, z2),
                    ParityFamily::NO => freq_res_no(n_order, opt_order, coef, z, z2),
                    ParityFamily::MO => freq_res_mo(n_order, opt_order, coef, z, z2),
                })
                .collect()
        })
        .collect()
}

/// Even numerator, even denominator
fn freq_res_se(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> Complex64 {
    let mut nume = Complex64::new(1.0, 0.0);
    let mut deno = Complex64::new(1.0, 0.0);

    for n in (1..n_order).step_by(2) {
        nume *= second_order(coef[n], coef[n + 1], z, z2);
    }
    for m in (n_order + 1..opt_order).step_by(2) {
        deno *= second_order(coef[m], coef[m + 1], z, z2);
    }
    coef[0] * (nume / deno)
}

/// Odd numerator, odd denominator
fn freq_res_so(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> Complex64 {
    let mut nume = first_order(coef[1], z);
    let mut deno = first_order(coef[n_order + 1], z);

    for n in (2..n_order).step_by(2) {
        nume *= second_order(coef[n], coef[n + 1], z, z2);
    }
    for m in (n_order + 2..opt_order).step_by(2) {
        deno *= second_order(coef[m], coef[m + 1], z, z2);
    }
    coef[0] * (nume / deno)
}

/// Odd numerator, even denominator
fn freq_res_no(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> Complex64 {
    let mut nume = first_order(coef[1], z);
    let mut deno = Complex64::new(1.0, 0.0);

    for n in (2..n_order).step_by(2) {
        nume *= second_order(coef[n], coef[n + 1], z, z2);
    }
    for m in (n_order + 1..opt_order).step_by(2) {
        deno *= second_order(coef[m], coef[m + 1], z, z2);
    }
    coef[0] * (nume / deno)
}

/// Even numerator, odd denominator
fn freq_res_mo(
    n_order: usize,
    opt_order: usize,
    coef: &[f64],
    z: Complex64,
    z2: Complex64,
) -> Complex64 {
    let mut nume = Complex64::new(1.0, 0.0);
    let mut deno = first_order(coef[n_order + 1], z);

    for n in (1..n_order).step_by(2) {
        nume *= second_order(coef[n], coef[n + 1], z, z2);
    }
    for m in (n_order + 2..opt_order).step_by(2) {
        deno *= second_order(coef[m], coef[m + 1], z, z2);
    }
    coef[0] * (nume / deno)
}
