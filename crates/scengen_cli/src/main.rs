//! Scengen CLI - command-line scenario generation
//!
//! Operational entry point for the scengen scenario generator.
//!
//! # Commands
//!
//! - `scengen simulate --model bsm --paths 100` - draw independent paths
//!   from one configured model
//! - `scengen correlate --correlation 0.7` - draw jointly correlated
//!   equity/short-rate paths through a Gaussian copula
//!
//! Both commands write CSV to a file (`--output`) or stdout and accept a
//! `--seed` for reproducible runs.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::simulate::ModelArgs;
use commands::GridArgs;

/// Scengen scenario generator CLI
#[derive(Parser)]
#[command(name = "scengen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw independent sample paths from one model
    Simulate {
        #[command(flatten)]
        model: ModelArgs,

        #[command(flatten)]
        grid: GridArgs,

        /// Number of independent paths to draw
        #[arg(short, long, default_value = "1")]
        paths: usize,
    },

    /// Draw jointly correlated equity and short-rate paths
    Correlate {
        /// Gaussian copula correlation between the two series
        #[arg(short, long, default_value = "0.5")]
        correlation: f64,

        #[command(flatten)]
        grid: GridArgs,

        /// Number of joint samples to draw
        #[arg(short, long, default_value = "1")]
        paths: usize,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Simulate { model, grid, paths } => commands::simulate::run(&model, &grid, paths),
        Commands::Correlate {
            correlation,
            grid,
            paths,
        } => commands::correlate::run(correlation, &grid, paths),
    }
}
