//! Poles and zeros of the cascade sections.
//!
//! Each second-order section `1 + c z + c' z²` is solved as the quadratic
//! `x² + c x + c'`, classified by the sign of `c² - 4c'` with a dead zone of
//! [`DISCRIMINANT_TOLERANCE`] around zero.

use num_complex::Complex64;

/// Discriminants within this distance of zero are treated as a double root
pub const DISCRIMINANT_TOLERANCE: f64 = 1.0e-10;

/// Roots of one section, tagged by how they were obtained
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SectionRoots {
    /// Root `-c` of a lone first-order section
    FirstOrder(f64),
    /// Complex-conjugate pair; the stored root has a positive imaginary part
    ComplexConjugate(Complex64),
    /// Two distinct real roots, `(-c + √disc)/2` first
    RealDistinct(f64, f64),
    /// One repeated real root `-c/2`
    RepeatedReal(f64),
}

impl SectionRoots {
    /// Classifies the roots of `x² + c x + c'`.
    pub fn from_quadratic(c: f64, c2: f64) -> Self {
        let disc = c * c - 4.0 * c2;
        if disc < -DISCRIMINANT_TOLERANCE {
            SectionRoots::ComplexConjugate(Complex64::new(-0.5 * c, 0.5 * disc.abs().sqrt()))
        } else if disc > DISCRIMINANT_TOLERANCE {
            let disc_sqrt = disc.sqrt();
            SectionRoots::RealDistinct(0.5 * (-c + disc_sqrt), 0.5 * (-c - disc_sqrt))
        } else {
            SectionRoots::RepeatedReal(-0.5 * c)
        }
    }

    /// Number of roots reported for this section (a repeated root counts once).
    pub fn count(&self) -> usize {
        match self {
            SectionRoots::FirstOrder(_) | SectionRoots::RepeatedReal(_) => 1,
            SectionRoots::ComplexConjugate(_) | SectionRoots::RealDistinct(_, _) => 2,
        }
    }

    /// Appends the roots of this section to `out`.
    pub fn extend_into(&self, out: &mut Vec<Complex64>) {
        match *self {
            SectionRoots::FirstOrder(r) | SectionRoots::RepeatedReal(r) => {
                out.push(Complex64::new(r, 0.0));
            }
            SectionRoots::ComplexConjugate(r) => {
                out.push(r);
                out.push(r.conj());
            }
            SectionRoots::RealDistinct(r1, r2) => {
                out.push(Complex64::new(r1, 0.0));
                out.push(Complex64::new(r2, 0.0));
            }
        }
    }
}

/// Classifies the sections of `coef[start..end]`.
///
/// When `odd` is set, `coef[start]` is a lone first-order coefficient and the
/// pairs begin at `start + 1`.
pub(crate) fn sections(coef: &[f64], start: usize, end: usize, odd: bool) -> Vec<SectionRoots> {
    let mut out = Vec::with_capacity((end - start).div_ceil(2));
    let mut k = start;
    if odd {
        out.push(SectionRoots::FirstOrder(-coef[start]));
        k += 1;
    }
    while k + 1 < end {
        out.push(SectionRoots::from_quadratic(coef[k], coef[k + 1]));
        k += 2;
    }
    out
}

/// Flattens classified sections into a root list.
pub fn flatten(sections: &[SectionRoots]) -> Vec<Complex64> {
    let mut roots = Vec::with_capacity(sections.iter().map(SectionRoots::count).sum());
    for s in sections {
        s.extend_into(&mut roots);
    }
    roots
}
