//! Command-line front end for cascade IIR filter parameters.
//!
//! Usage:
//!     cascade_iir show desire.csv
//!     cascade_iir evaluate desire.csv --row 0 --coefs 0.0187,1.97,1.12,...
//!     cascade_iir response desire.csv --row 0 --coefs ... --db
//!     cascade_iir init desire.csv --row 0 --stable --count 4

use clap::{Parser, Subcommand};
use math_audio_cascade_iir::{
    FilterParam, ResponseSamples, amplitude_samples, magnitude_db_samples, read_desire_table,
};
use num_complex::Complex64;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "cascade_iir",
    about = "Inspect and evaluate cascade IIR filter designs from a desired-response table"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every desired response of the table
    Show {
        /// Desired-response table (CSV)
        table: PathBuf,
    },

    /// Print the objective terms, poles and zeros of a coefficient vector
    Evaluate {
        /// Desired-response table (CSV)
        table: PathBuf,

        /// Row of the table (0-based, header excluded)
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// Coefficients a0,a1,...,aN,b1,...,bM
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        coefs: Vec<f64>,
    },

    /// Print the magnitude response over a frequency range
    Response {
        /// Desired-response table (CSV)
        table: PathBuf,

        /// Row of the table (0-based, header excluded)
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// Coefficients a0,a1,...,aN,b1,...,bM
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        coefs: Vec<f64>,

        /// Left edge of the range (normalized frequency)
        #[arg(long, default_value_t = 0.0)]
        left: f64,

        /// Right edge of the range (normalized frequency)
        #[arg(long, default_value_t = 0.5)]
        right: f64,

        /// Print 20·log10|H| instead of |H|
        #[arg(long)]
        db: bool,

        /// Print JSON instead of "omega value" lines
        #[arg(long)]
        json: bool,
    },

    /// Print random starting coefficient vectors
    Init {
        /// Desired-response table (CSV)
        table: PathBuf,

        /// Row of the table (0-based, header excluded)
        #[arg(long, default_value_t = 0)]
        row: usize,

        /// Draw denominator sections inside the stability triangle
        #[arg(long)]
        stable: bool,

        /// Bound of the gain a0
        #[arg(long, default_value_t = 1.0)]
        a0: f64,

        /// Bound of the numerator coefficients
        #[arg(long, default_value_t = 1.0)]
        a: f64,

        /// Bound of the denominator coefficients (ignored with --stable)
        #[arg(long, default_value_t = 1.0)]
        b: f64,

        /// Number of vectors to print
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(msg) = run(cli) {
        eprintln!("Error: {msg}");
        process::exit(2);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Show { table } => {
            let params = load_table(&table)?;
            for (i, param) in params.iter().enumerate() {
                print_param(i, param);
            }
            Ok(())
        }
        Command::Evaluate { table, row, coefs } => {
            let param = load_row(&table, row)?;
            check_coefs(&param, &coefs)?;
            print_evaluation(&param, &coefs);
            Ok(())
        }
        Command::Response {
            table,
            row,
            coefs,
            left,
            right,
            db,
            json,
        } => {
            let param = load_row(&table, row)?;
            check_coefs(&param, &coefs)?;
            let samples = if db {
                magnitude_db_samples(&param, &coefs, left, right)
            } else {
                amplitude_samples(&param, &coefs, left, right)
            }
            .map_err(|e| e.to_string())?;
            print_samples(&samples, json)
        }
        Command::Init {
            table,
            row,
            stable,
            a0,
            a,
            b,
            count,
        } => {
            let param = load_row(&table, row)?;
            for _ in 0..count {
                let coef = if stable {
                    param.init_stable_coef(a0, a)
                } else {
                    param.init_coef(a0, a, b)
                };
                println!("{}", format_coefs(&coef));
            }
            Ok(())
        }
    }
}

fn load_table(path: &Path) -> Result<Vec<FilterParam>, String> {
    read_desire_table(path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn load_row(path: &Path, row: usize) -> Result<FilterParam, String> {
    let mut params = load_table(path)?;
    let rows = params.len();
    if row >= rows {
        return Err(format!(
            "row {row} not found in {} ({rows} rows)",
            path.display()
        ));
    }
    Ok(params.swap_remove(row))
}

fn check_coefs(param: &FilterParam, coefs: &[f64]) -> Result<(), String> {
    if coefs.len() != param.total_order() {
        return Err(format!(
            "expected {} coefficients for N={}, M={}, got {}",
            param.total_order(),
            param.numerator_order(),
            param.denominator_order(),
            coefs.len()
        ));
    }
    Ok(())
}

fn format_coefs(coef: &[f64]) -> String {
    coef.iter()
        .map(|c| format!("{c:.12}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn format_root(z: &Complex64) -> String {
    if z.im == 0.0 {
        format!("{:+.9}", z.re)
    } else {
        format!("{:+.9} {:+.9}j", z.re, z.im)
    }
}

fn print_param(index: usize, param: &FilterParam) {
    println!("Desired response #{index}");
    println!(
        "  order (numerator-denominator) : {}-{}",
        param.numerator_order(),
        param.denominator_order()
    );
    println!("  total order                   : {}", param.total_order());
    println!(
        "  nsplit (approx-transition)    : {}-{}",
        param.nsplit_approx(),
        param.nsplit_transition()
    );
    println!("  group delay                   : {}", param.group_delay());
    println!("  family                        : {}", param.family());
    println!("  samples per band              : {:?}", param.sample_counts());
    for band in param.bands() {
        println!("    {band}");
    }
}

fn print_evaluation(param: &FilterParam, coefs: &[f64]) {
    let terms = param.evaluate_terms(coefs);
    println!("Objective          : {:.12}", terms.total());
    println!("  max error        : {:.12}", terms.max_error);
    println!("  max ripple       : {:.12}", terms.max_ripple);
    println!("  stability penalty: {:.12}", terms.stability_penalty);

    println!("Poles:");
    for pole in param.pole_res(coefs) {
        println!("  {}  |p| = {:.9}", format_root(&pole), pole.norm());
    }
    println!("Zeros:");
    for zero in param.zero_res(coefs) {
        println!("  {}  |z| = {:.9}", format_root(&zero), zero.norm());
    }
}

fn print_samples(samples: &ResponseSamples, json: bool) -> Result<(), String> {
    if json {
        let text = serde_json::to_string_pretty(samples)
            .map_err(|e| format!("Failed to serialize samples: {e}"))?;
        println!("{text}");
    } else {
        for (omega, value) in samples.omega.iter().zip(samples.values.iter()) {
            println!("{omega:.9} {value:.9}");
        }
    }
    Ok(())
}
