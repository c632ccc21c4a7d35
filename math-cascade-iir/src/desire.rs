//! Desired-response tables.
//!
//! A table is comma-separated text with one header row followed by rows of
//!
//! ```text
//! No,Numerator,Denominator,State,GroupDelay,NsplitApprox,NsplitTransition
//! 0,8,2,LPF(0.2:0.3),5.0,200,50
//! ```
//!
//! `No` is not read: rows are returned in file order. `State` is a
//! filter-spec string whose edges are separated by `:`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{CascadeError, Result};
use crate::filter_param::FilterParam;
use crate::filter_spec::parse_bands;

const COLUMNS: usize = 7;

fn column<T: FromStr>(fields: &[&str], index: usize, name: &str, line: usize) -> Result<T> {
    let raw = fields[index].trim();
    raw.parse::<T>().map_err(|_| CascadeError::MalformedRow {
        line,
        message: format!("cannot parse {} from \"{}\"", name, raw),
    })
}

fn parse_row(text: &str, line: usize) -> Result<FilterParam> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() < COLUMNS {
        return Err(CascadeError::MalformedRow {
            line,
            message: format!("expected {} columns, found {}", COLUMNS, fields.len()),
        });
    }

    let n_order: usize = column(&fields, 1, "Numerator", line)?;
    let m_order: usize = column(&fields, 2, "Denominator", line)?;
    let bands = parse_bands(fields[3]).map_err(|e| CascadeError::MalformedRow {
        line,
        message: e.to_string(),
    })?;
    let group_delay: f64 = column(&fields, 4, "GroupDelay", line)?;
    let nsplit_approx: usize = column(&fields, 5, "NsplitApprox", line)?;
    let nsplit_transition: usize = column(&fields, 6, "NsplitTransition", line)?;

    FilterParam::new(
        n_order,
        m_order,
        bands,
        nsplit_approx,
        nsplit_transition,
        group_delay,
    )
    .map_err(|e| CascadeError::MalformedRow {
        line,
        message: e.to_string(),
    })
}

/// Parses a desired-response table from any buffered reader.
///
/// # Errors
///
/// `MalformedRow` with the 1-based line number for a bad row, `Io` when
/// reading fails.
///
/// # Example
///
/// ```rust
/// use math_audio_cascade_iir::parse_desire_table;
/// use std::io::Cursor;
///
/// let table = "No,Numerator,Denominator,State,GroupDelay,NsplitApprox,NsplitTransition\n\
///              0,8,2,LPF(0.2:0.3),5.0,200,50\n";
/// let params = parse_desire_table(Cursor::new(table)).unwrap();
/// assert_eq!(params.len(), 1);
/// assert_eq!(params[0].total_order(), 11);
/// ```
pub fn parse_desire_table<R: BufRead>(reader: R) -> Result<Vec<FilterParam>> {
    let mut params = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        // header
        if index == 0 {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        params.push(parse_row(&line, index + 1)?);
    }
    log::debug!("read {} desired responses", params.len());
    Ok(params)
}

/// Reads a desired-response table from a file.
///
/// # Errors
///
/// Same as [`parse_desire_table`], plus `Io` when the file cannot be opened.
pub fn read_desire_table<P: AsRef<Path>>(path: P) -> Result<Vec<FilterParam>> {
    let path = path.as_ref();
    log::info!("reading desired responses from {}", path.display());
    let file = File::open(path)?;
    parse_desire_table(BufReader::new(file))
}
