//! Parity families of the cascade transfer function

use std::fmt;

/// Formula family selected by the parity of the numerator order N and the
/// denominator order M.
///
/// An odd order leaves one coefficient that forms a first-order section; the
/// family records which side(s) carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ParityFamily {
    /// N even, M even: second-order sections only
    SE,
    /// N odd, M odd: a first-order section on both sides
    SO,
    /// N odd, M even: a first-order numerator section
    NO,
    /// N even, M odd: a first-order denominator section
    MO,
}

impl ParityFamily {
    /// Selects the family for numerator order `n` and denominator order `m`.
    pub fn from_orders(n: usize, m: usize) -> Self {
        match (n % 2 == 1, m % 2 == 1) {
            (false, false) => ParityFamily::SE,
            (false, true) => ParityFamily::MO,
            (true, false) => ParityFamily::NO,
            (true, true) => ParityFamily::SO,
        }
    }

    /// True when the numerator carries a first-order section.
    pub fn odd_numerator(&self) -> bool {
        matches!(self, ParityFamily::SO | ParityFamily::NO)
    }

    /// True when the denominator carries a first-order section.
    pub fn odd_denominator(&self) -> bool {
        matches!(self, ParityFamily::SO | ParityFamily::MO)
    }
}

impl fmt::Display for ParityFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParityFamily::SE => "SE (even/even)",
            ParityFamily::SO => "SO (odd/odd)",
            ParityFamily::NO => "NO (odd/even)",
            ParityFamily::MO => "MO (even/odd)",
        };
        f.write_str(name)
    }
}
