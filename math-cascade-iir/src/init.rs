//! Random starting points for coefficient searches

use rand::Rng;

/// Uniform coefficients in `[-|a0|, |a0|]`, `[-|a|, |a|]` and `[-|b|, |b|]`
/// for the gain, the N numerator and the M denominator coefficients.
pub(crate) fn init_coef<R: Rng + ?Sized>(
    n_order: usize,
    m_order: usize,
    a0: f64,
    a: f64,
    b: f64,
    rng: &mut R,
) -> Vec<f64> {
    let (a0, a, b) = (a0.abs(), a.abs(), b.abs());
    let mut coef = Vec::with_capacity(1 + n_order + m_order);

    coef.push(rng.random_range(-a0..=a0));
    for _ in 0..n_order {
        coef.push(rng.random_range(-a..=a));
    }
    for _ in 0..m_order {
        coef.push(rng.random_range(-b..=b));
    }
    coef
}

/// Like [`init_coef`] but every denominator section is drawn inside the
/// stability triangle: `b'` in `[-1+ε, 1)`, then `b` in `[-(b'+1)+ε, b'+1)`.
pub(crate) fn init_stable_coef<R: Rng + ?Sized>(
    n_order: usize,
    m_order: usize,
    a0: f64,
    a: f64,
    rng: &mut R,
) -> Vec<f64> {
    let (a0, a) = (a0.abs(), a.abs());
    let eps = f64::EPSILON;
    let mut coef = Vec::with_capacity(1 + n_order + m_order);

    coef.push(rng.random_range(-a0..=a0));
    for _ in 0..n_order {
        coef.push(rng.random_range(-a..=a));
    }
    if m_order % 2 == 1 {
        coef.push(rng.random_range(-1.0 + eps..1.0));
    }
    for _ in 0..m_order / 2 {
        let b2: f64 = rng.random_range(-1.0 + eps..1.0);
        let b1: f64 = rng.random_range(-(b2 + 1.0) + eps..b2 + 1.0);
        coef.push(b1);
        coef.push(b2);
    }
    coef
}
