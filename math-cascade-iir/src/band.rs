//! Frequency bands on the normalized axis [0, 0.5]

use std::fmt;

use crate::error::{CascadeError, Result};

/// Role of a band in the approximation problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum BandType {
    /// Pass band: the response should follow a unit-magnitude linear phase
    Pass,
    /// Stop band: the response should vanish
    Stop,
    /// Transition band: only overshoot above the ripple threshold is penalized
    Transition,
}

impl BandType {
    /// Returns the name used when printing bands (e.g., "PassBand").
    pub fn long_name(&self) -> &'static str {
        match self {
            BandType::Pass => "PassBand",
            BandType::Stop => "StopBand",
            BandType::Transition => "TransitionBand",
        }
    }

    /// Pass and stop bands are compared against a desired response.
    pub fn is_approximation(&self) -> bool {
        matches!(self, BandType::Pass | BandType::Stop)
    }
}

/// One frequency sub-interval and its role.
///
/// Edges are normalized frequencies (cycles per sample), so the whole axis
/// is [0, 0.5].
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Band {
    band_type: BandType,
    left: f64,
    right: f64,
}

impl Band {
    /// Creates a band after checking `0 <= left < right <= 0.5`.
    ///
    /// # Errors
    ///
    /// Returns `CascadeError::InvalidBand` if the edges are out of range,
    /// not increasing, or not finite.
    ///
    /// # Example
    ///
    /// ```rust
    /// use math_audio_cascade_iir::{Band, BandType};
    ///
    /// let band = Band::new(BandType::Pass, 0.0, 0.2).expect("valid band");
    /// assert!((band.width() - 0.2).abs() < 1e-12);
    /// assert!(Band::new(BandType::Stop, 0.3, 0.2).is_err());
    /// ```
    pub fn new(band_type: BandType, left: f64, right: f64) -> Result<Self> {
        // NaN edges fail every comparison below
        if !(0.0..=0.5).contains(&left) || !(0.0..=0.5).contains(&right) || left >= right {
            return Err(CascadeError::InvalidBand { left, right });
        }
        Ok(Self {
            band_type,
            left,
            right,
        })
    }

    /// Role of the band
    pub fn band_type(&self) -> BandType {
        self.band_type
    }

    /// Left edge
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Width of the band (right - left)
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:6.3}, {:6.3})",
            self.band_type.long_name(),
            self.left,
            self.right
        )
    }
}

/// Renders a band list one band per line, as used in error diagnostics.
pub fn format_bands(bands: &[Band]) -> String {
    bands
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
