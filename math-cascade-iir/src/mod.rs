//! Evaluation kernel for cascade-form IIR filter design.
//!
//! A cascade IIR filter is a gain times a ratio of products of first- and
//! second-order sections. Given a flat coefficient vector, this crate
//! computes the filter's frequency response and group delay on a band grid,
//! a stability penalty on the denominator sections, and the scalar objective
//! that a coefficient optimizer minimizes.
//!
//! # Features
//!
//! - **Band grids**: per-band samples of `e^{-jω}`, `e^{-j2ω}` and the desired response
//! - **Four parity families**: separate formulas for odd/even numerator and denominator orders
//! - **Objective**: approximation error, transition overshoot and stability penalty
//! - **Roots**: classified poles and zeros of every section
//! - **Inputs**: `LPF(left:right)` spec strings and desired-response tables
//!
//! # Example
//!
//! ```rust
//! use math_audio_cascade_iir::{FilterParam, parse_bands};
//!
//! let bands = parse_bands("LPF(0.2:0.3)").unwrap();
//! let param = FilterParam::new(4, 4, bands, 200, 50, 5.0).unwrap();
//!
//! let coef = param.init_stable_coef(1.0, 1.0);
//! assert_eq!(param.judge_stability(&coef), 0.0);
//! assert!(param.evaluate(&coef) >= 0.0);
//! ```
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

// Module declarations
mod band;
mod desire;
mod error;
mod family;
mod filter_param;
mod filter_spec;
mod grid;
mod group_delay;
mod init;
mod objective;
mod response;
mod roots;
mod sampling;
mod stability;

// Re-export error types
pub use error::{CascadeError, Result};

// Re-export the filter model
pub use band::{Band, BandType, format_bands};
pub use family::ParityFamily;
pub use filter_param::{FilterParam, THRESHOLD_RIPPLE};
pub use grid::{
    BandGrid, EDGE_TOLERANCE, check_coverage, gen_csw, gen_csw2, gen_desire_res, split_counts,
};

// Re-export evaluation
pub use objective::{ObjectiveTerms, ParallelConfig, RIPPLE_WEIGHT, STABILITY_WEIGHT};
pub use roots::{DISCRIMINANT_TOLERANCE, SectionRoots, flatten};
pub use stability::is_unstable_pair;

// Re-export inputs and outputs
pub use desire::{parse_desire_table, read_desire_table};
pub use filter_spec::{FilterType, analyze_edges, analyze_type, gen_bands, parse_bands};
pub use sampling::{RENDER_RESOLUTION, ResponseSamples, amplitude_samples, magnitude_db_samples};
