//! Filter-spec strings such as `LPF(0.2:0.3)`.
//!
//! Spaces are dropped and every run of `(`, `)`, `,` and `:` acts as one
//! separator. The first token is the filter type, the remaining tokens are
//! band edges.

use std::fmt;
use std::str::FromStr;

use crate::band::{Band, BandType};
use crate::error::{CascadeError, Result};

/// Filter types understood by the spec parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FilterType {
    /// Low-pass filter
    Lpf,
    /// High-pass filter
    Hpf,
    /// Band-pass filter
    Bpf,
    /// Band-elimination filter
    Bef,
}

impl FilterType {
    /// Tag used in spec strings
    pub fn tag(&self) -> &'static str {
        match self {
            FilterType::Lpf => "LPF",
            FilterType::Hpf => "HPF",
            FilterType::Bpf => "BPF",
            FilterType::Bef => "BEF",
        }
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FilterType {
    type Err = CascadeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LPF" => Ok(FilterType::Lpf),
            "HPF" => Ok(FilterType::Hpf),
            "BPF" => Ok(FilterType::Bpf),
            "BEF" => Ok(FilterType::Bef),
            _ => Err(CascadeError::UnsupportedFilterType {
                input: s.to_string(),
            }),
        }
    }
}

fn tokenize(input: &str) -> Vec<&str> {
    input
        .split(|c: char| matches!(c, '(' | ')' | ',' | ':') || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Reads the filter type tag of `input`.
///
/// # Errors
///
/// `MalformedFilterSpec` when there is no edge after the tag,
/// `UnsupportedFilterType` when the tag is unknown.
pub fn analyze_type(input: &str) -> Result<FilterType> {
    let tokens = tokenize(input);
    if tokens.len() < 2 {
        return Err(CascadeError::MalformedFilterSpec {
            input: input.to_string(),
        });
    }
    tokens[0]
        .parse::<FilterType>()
        .map_err(|_| CascadeError::UnsupportedFilterType {
            input: input.to_string(),
        })
}

/// Reads the band edges of `input`.
///
/// # Errors
///
/// `MalformedFilterSpec` when there are no edges or one does not parse.
pub fn analyze_edges(input: &str) -> Result<Vec<f64>> {
    let malformed = || CascadeError::MalformedFilterSpec {
        input: input.to_string(),
    };

    let tokens = tokenize(input);
    if tokens.len() < 2 {
        return Err(malformed());
    }
    tokens[1..]
        .iter()
        .map(|token| token.parse::<f64>().map_err(|_| malformed()))
        .collect()
}

/// Generates the band list of a filter type.
///
/// Only low-pass is supported: pass `[0, left]`, transition `[left, right]`
/// and stop `[right, 0.5]`.
///
/// # Errors
///
/// `UnsupportedFilterType` for anything but [`FilterType::Lpf`], and
/// `InvalidBand` when the edges do not satisfy `0 < left < right < 0.5`.
pub fn gen_bands(filter_type: FilterType, left: f64, right: f64) -> Result<Vec<Band>> {
    match filter_type {
        FilterType::Lpf => Ok(vec![
            Band::new(BandType::Pass, 0.0, left)?,
            Band::new(BandType::Transition, left, right)?,
            Band::new(BandType::Stop, right, 0.5)?,
        ]),
        FilterType::Hpf | FilterType::Bpf | FilterType::Bef => {
            Err(CascadeError::UnsupportedFilterType {
                input: filter_type.to_string(),
            })
        }
    }
}

/// Parses a spec string straight into its band list.
///
/// # Example
///
/// ```rust
/// use math_audio_cascade_iir::{BandType, parse_bands};
///
/// let bands = parse_bands("LPF(0.2 : 0.3)").unwrap();
/// assert_eq!(bands.len(), 3);
/// assert_eq!(bands[1].band_type(), BandType::Transition);
/// assert!(parse_bands("HPF(0.2:0.3)").is_err());
/// ```
pub fn parse_bands(input: &str) -> Result<Vec<Band>> {
    let filter_type = analyze_type(input)?;
    let edges = analyze_edges(input)?;

    match filter_type {
        FilterType::Lpf => {
            if edges.len() != 2 {
                return Err(CascadeError::EdgeCount {
                    input: input.to_string(),
                    expected: 2,
                    got: edges.len(),
                });
            }
            gen_bands(filter_type, edges[0], edges[1])
        }
        FilterType::Hpf | FilterType::Bpf | FilterType::Bef => {
            Err(CascadeError::UnsupportedFilterType {
                input: input.to_string(),
            })
        }
    }
}
