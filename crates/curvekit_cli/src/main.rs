//! curvekit - command line front end for curvekit_core
//!
//! # Commands
//!
//! - `curvekit sort <file>` - Sort `x y` pairs by abscissa
//! - `curvekit spline <file>` - Evaluate a natural, clamped or Steffen spline
//! - `curvekit interp <file> --at ...` - Linear interpolation
//! - `curvekit approximate <file>` - Adaptive spline approximation of noisy data
//! - `curvekit solve <file>` - Solve a tridiagonal system given as `a b c r` rows
//! - `curvekit encode <text> <bin>` / `curvekit decode <bin>` - Binary layout conversion
//!
//! # Configuration
//!
//! Settings come from, lowest priority first: defaults, a TOML file given by
//! `--config`, `CURVEKIT_*` environment variables, command line flags.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::spline::{SplineChoice, SplineRequest};
use config::{build_config, CliArgs};
use output::{Output, OutputFormat};

/// Growable vectors, splines and curve approximation from the command line
#[derive(Parser)]
#[command(name = "curvekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides CURVEKIT_LOG_LEVEL
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Fractional digits of printed values
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort `x y` pairs by abscissa
    Sort {
        /// Two-column text file
        input: PathBuf,
    },

    /// Fit a spline and evaluate it with its slope
    Spline {
        /// Two-column text file
        input: PathBuf,

        /// Spline family
        #[arg(short, long, value_enum, default_value_t = SplineChoice::Natural)]
        kind: SplineChoice,

        /// First derivative at the first sample (clamped only)
        #[arg(long, allow_negative_numbers = true)]
        left_slope: Option<f64>,

        /// First derivative at the last sample (clamped only)
        #[arg(long, allow_negative_numbers = true)]
        right_slope: Option<f64>,

        /// Query points; defaults to the samples themselves
        #[arg(long, num_args = 1.., allow_negative_numbers = true, conflicts_with = "samples")]
        at: Vec<f64>,

        /// Number of evenly spaced query points across the domain
        #[arg(short = 'n', long)]
        samples: Option<usize>,
    },

    /// Linear interpolation at query points
    Interp {
        /// Two-column text file
        input: PathBuf,

        /// Query points
        #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
        at: Vec<f64>,
    },

    /// Approximate noisy data with a few spline anchors
    Approximate {
        /// Two-column text file
        input: PathBuf,

        /// Upper bound on the number of anchors
        #[arg(short, long)]
        max_anchors: Option<usize>,

        /// Smoothing window in samples
        #[arg(short, long)]
        window: Option<usize>,

        /// Segment metric (sum_of_squares, squared_signed_sum)
        #[arg(long)]
        metric: Option<String>,

        /// Also print the fitted curve at every sample
        #[arg(long)]
        curve: bool,
    },

    /// Solve a tridiagonal system given as `a b c r` rows
    Solve {
        /// Four-column text file
        input: PathBuf,
    },

    /// Convert numeric text into the binary layout
    Encode {
        /// Whitespace-separated text file
        input: PathBuf,

        /// Destination binary file
        output: PathBuf,

        /// Store as a grid with this many columns per row
        #[arg(long)]
        columns: Option<usize>,
    },

    /// Print the contents of a binary file
    Decode {
        /// Binary file written by `encode`
        input: PathBuf,

        /// The file holds a grid
        #[arg(long)]
        grid: bool,
    },
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            precision: self.precision,
            ..Default::default()
        };
        if let Commands::Approximate {
            max_anchors,
            window,
            metric,
            ..
        } = &self.command
        {
            args.max_anchors = *max_anchors;
            args.window = *window;
            args.metric = metric.clone();
        }
        args
    }
}

/// Initialise tracing subscriber
///
/// Logs go to stderr so stdout carries only results.
fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = build_config(&cli.config_args()).context("failed to load configuration")?;
    init_tracing(config.log_level.as_filter_str());
    info!("Log level: {}", config.log_level);

    let output = Output::new(cli.format, config.precision);

    let result = match cli.command {
        Commands::Sort { input } => commands::sort::run(&input, &output),
        Commands::Spline {
            input,
            kind,
            left_slope,
            right_slope,
            at,
            samples,
        } => {
            let request = SplineRequest {
                kind,
                left_slope,
                right_slope,
                at,
                samples,
            };
            commands::spline::run(&input, &request, &output)
        }
        Commands::Interp { input, at } => commands::interp::run(&input, &at, &output),
        Commands::Approximate { input, curve, .. } => {
            config.approximation.evaluate_curve |= curve;
            commands::approximate::run(&input, config.approximation, &output)
        }
        Commands::Solve { input } => commands::solve::run(&input, &output),
        Commands::Encode {
            input,
            output: destination,
            columns,
        } => commands::convert::encode(&input, &destination, columns),
        Commands::Decode { input, grid } => commands::convert::decode(&input, grid, &output),
    };
    result.context("command failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_approximate_flags_reach_config() {
        let cli = Cli::try_parse_from([
            "curvekit",
            "approximate",
            "data.txt",
            "--max-anchors",
            "7",
            "--metric",
            "signed",
            "--precision",
            "3",
        ])
        .unwrap();
        let args = cli.config_args();
        assert_eq!(args.max_anchors, Some(7));
        assert_eq!(args.metric.as_deref(), Some("signed"));
        assert_eq!(args.precision, Some(3));
    }

    #[test]
    fn test_spline_accepts_negative_points() {
        let cli = Cli::try_parse_from([
            "curvekit", "spline", "data.txt", "--kind", "clamped", "--left-slope", "-1.5",
            "--at", "-0.5", "0.25",
        ])
        .unwrap();
        match cli.command {
            Commands::Spline {
                kind, left_slope, at, ..
            } => {
                assert_eq!(kind, SplineChoice::Clamped);
                assert_eq!(left_slope, Some(-1.5));
                assert_eq!(at, vec![-0.5, 0.25]);
            }
            _ => panic!("expected spline command"),
        }
    }

    #[test]
    fn test_log_level_only_from_flag() {
        let cli = Cli::try_parse_from(["curvekit", "sort", "data.txt"]).unwrap();
        assert_eq!(cli.config_args().log_level, None);

        let cli =
            Cli::try_parse_from(["curvekit", "--log-level", "debug", "sort", "data.txt"]).unwrap();
        assert_eq!(cli.config_args().log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_at_conflicts_with_samples() {
        assert!(Cli::try_parse_from([
            "curvekit", "spline", "data.txt", "--at", "1", "--samples", "4",
        ])
        .is_err());
    }
}
