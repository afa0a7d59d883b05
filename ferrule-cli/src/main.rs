//! ferrule: command-line front end
//!
//! Evaluates the configured logistic curve and demonstrates `append`.
//!
//! ## Environment Variables
//! - `FERRULE_CONFIG`: Path to a `ferrule.toml`
//!
//! All of them may also come from a `.env` file in the working directory.
//! - `FERRULE_LOGISTIC_SUPREMUM` / `_STEEPNESS` / `_MIDPOINT`: curve overrides
//! - `RUST_LOG`: tracing filter (default: warn)

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ferrule_core::config::load_dotenv;
use ferrule_core::{FerruleConfig, LogisticCurve, append};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ferrule")]
#[command(version = "2026.10.16")]
#[command(about = "Logistic curve and sequence utilities", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "FERRULE_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the curve at each value
    Logistic {
        /// Input values
        #[arg(value_name = "X", required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Tabulate the curve over an interval
    Curve {
        /// Interval start
        #[arg(long, default_value_t = -6.0, allow_negative_numbers = true)]
        from: f64,

        /// Interval end
        #[arg(long, default_value_t = 6.0, allow_negative_numbers = true)]
        to: f64,

        /// Number of samples (>= 2)
        #[arg(long, default_value_t = 13)]
        steps: usize,
    },

    /// Append SOURCE onto DESTINATION and print the result
    Append {
        /// Comma-separated source values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        source: Vec<i64>,

        /// Comma-separated destination values
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        destination: Vec<i64>,
    },
}

/// Loads `.env` before clap resolves `env = ...` arguments
fn parse_cli<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    load_dotenv();
    Cli::try_parse_from(args)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = parse_cli(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let config = FerruleConfig::load(cli.config.as_deref())
        .context("failed to load configuration")?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Logistic { values } => {
            let curve = config.logistic.curve()?;
            for x in values {
                println!("{x}\t{}", curve.evaluate(x));
            }
        }
        Commands::Curve { from, to, steps } => {
            if steps < 2 {
                bail!("--steps must be at least 2, got {steps}");
            }
            let curve = config.logistic.curve()?;
            print_curve(&curve, from, to, steps);
        }
        Commands::Append {
            source,
            mut destination,
        } => {
            let len = append(&source, &mut destination)?;
            tracing::info!(len, "appended {} elements", source.len());
            let rendered: Vec<String> = destination.iter().map(|v| v.to_string()).collect();
            println!("{}", rendered.join(","));
        }
    }

    Ok(())
}

fn print_curve(curve: &LogisticCurve<f64>, from: f64, to: f64, steps: usize) {
    println!(
        "# L = {}, k = {}, x0 = {}",
        curve.supremum(),
        curve.steepness(),
        curve.midpoint()
    );
    for (x, y) in curve.sample(from, to, steps) {
        println!("{x:>12.6}\t{y:.12}\t{:.12}", curve.slope(x));
    }
}
