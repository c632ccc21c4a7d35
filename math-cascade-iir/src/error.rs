//! Error types for cascade IIR filter construction and input parsing.
//!
//! Every failure that can originate from external input (band lists,
//! filter-spec strings, desired-response tables) is reported through
//! [`CascadeError`]. Coefficient vectors of the wrong length are caller bugs
//! and are reported by panicking evaluators instead.

use thiserror::Error;

/// Errors that can occur while building filter parameters or parsing their inputs.
#[derive(Debug, Error)]
pub enum CascadeError {
    /// Band edges are outside [0, 0.5] or not strictly increasing.
    #[error("invalid band edges: [{left}, {right}] (must satisfy 0 <= left < right <= 0.5)")]
    InvalidBand {
        /// Left edge (normalized frequency)
        left: f64,
        /// Right edge (normalized frequency)
        right: f64,
    },

    /// The total order `1 + N + M` does not fit in `usize`.
    #[error("filter orders N={n}, M={m} are too large")]
    InvalidOrder {
        /// Numerator order
        n: usize,
        /// Denominator order
        m: usize,
    },

    /// No band was supplied.
    #[error("at least one band is required")]
    NoBands,

    /// A band does not start where the previous band ends, or the first band does not start at 0.
    #[error("band {index} starts at {found} but must start at {expected}\n{bands}")]
    BandGap {
        /// Index of the offending band
        index: usize,
        /// Expected left edge
        expected: f64,
        /// Actual left edge
        found: f64,
        /// Rendered band list, one band per line
        bands: String,
    },

    /// The last band does not end at 0.5.
    #[error("last band ends at {found} but must end at 0.5\n{bands}")]
    BandCoverage {
        /// Actual right edge of the last band
        found: f64,
        /// Rendered band list, one band per line
        bands: String,
    },

    /// Filter-spec text could not be split into a type tag and edges.
    #[error("malformed filter spec: \"{input}\"")]
    MalformedFilterSpec {
        /// The rejected text
        input: String,
    },

    /// Filter type is unknown or has no band generator.
    #[error("unsupported filter type: \"{input}\" (only LPF is implemented)")]
    UnsupportedFilterType {
        /// The rejected text
        input: String,
    },

    /// Wrong number of band edges for the filter type.
    #[error("filter spec \"{input}\" has {got} edges, expected {expected}")]
    EdgeCount {
        /// The rejected text
        input: String,
        /// Number of edges required by the filter type
        expected: usize,
        /// Number of edges found
        got: usize,
    },

    /// A desired-response table row could not be parsed.
    #[error("line {line}: {message}")]
    MalformedRow {
        /// 1-based line number in the table
        line: usize,
        /// Description of the problem
        message: String,
    },

    /// Reading a table failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for cascade IIR operations.
pub type Result<T> = std::result::Result<T, CascadeError>;

impl CascadeError {
    /// Returns `true` if this error concerns band edges or band coverage.
    pub fn is_band_error(&self) -> bool {
        matches!(
            self,
            CascadeError::InvalidBand { .. }
                | CascadeError::NoBands
                | CascadeError::BandGap { .. }
                | CascadeError::BandCoverage { .. }
        )
    }

    /// Returns `true` if this error comes from the filter-spec mini-language.
    pub fn is_filter_spec_error(&self) -> bool {
        matches!(
            self,
            CascadeError::MalformedFilterSpec { .. }
                | CascadeError::UnsupportedFilterType { .. }
                | CascadeError::EdgeCount { .. }
        )
    }

    /// Returns `true` if this error comes from reading a desired-response table.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CascadeError::MalformedRow { .. } | CascadeError::Io(_)
        )
    }
}
