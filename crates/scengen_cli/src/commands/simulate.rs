//! Simulate command implementation.
//!
//! Draws independent sample paths from one configured model and writes them
//! as CSV rows of `(path, step, time, value)`.

use clap::Args;
use tracing::info;

use scengen_engine::{ScenarioGenerator, ScenarioRng};
use scengen_models::equity::{BlackScholesMerton, ConstantElasticity};
use scengen_models::rates::{CoxIngersollRoss, Vasicek};
use scengen_models::Model;

use super::GridArgs;
use crate::{CliError, Result};

/// Model family selection and parameter flags.
///
/// Each family reads the subset of flags it needs; the rest are ignored.
#[derive(Args, Debug)]
pub struct ModelArgs {
    /// Model family: vasicek, cir, bsm, or cev
    #[arg(short, long, default_value = "bsm")]
    pub model: String,

    /// Risk-free rate (bsm, cev)
    #[arg(long, default_value = "0.01")]
    pub rate: f64,

    /// Continuous dividend yield (bsm, cev)
    #[arg(long, default_value = "0.0")]
    pub dividend_yield: f64,

    /// Volatility
    #[arg(long, default_value = "0.2")]
    pub volatility: f64,

    /// Initial level: spot price or short rate
    #[arg(long, default_value = "100.0")]
    pub initial: f64,

    /// Mean-reversion speed (vasicek, cir)
    #[arg(long, default_value = "0.1")]
    pub mean_reversion: f64,

    /// Long-term mean level (vasicek, cir)
    #[arg(long, default_value = "0.05")]
    pub long_term_mean: f64,

    /// Elasticity exponent (cev)
    #[arg(long, default_value = "0.5")]
    pub elasticity: f64,
}

impl ModelArgs {
    /// Build the selected model variant from the parameter flags.
    pub fn build(&self) -> Result<Model> {
        let model = match self.model.as_str() {
            "vasicek" => Vasicek::new(
                self.mean_reversion,
                self.long_term_mean,
                self.volatility,
                self.initial,
            )?
            .into(),
            "cir" => CoxIngersollRoss::new(
                self.mean_reversion,
                self.long_term_mean,
                self.volatility,
                self.initial,
            )?
            .into(),
            "bsm" => BlackScholesMerton::new(
                self.rate,
                self.dividend_yield,
                self.volatility,
                self.initial,
            )?
            .into(),
            "cev" => ConstantElasticity::new(
                self.rate,
                self.dividend_yield,
                self.volatility,
                self.elasticity,
                self.initial,
            )?
            .into(),
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "unknown model: {other}. Supported: vasicek, cir, bsm, cev"
                )))
            }
        };
        Ok(model)
    }
}

/// Run the simulate command.
pub fn run(model: &ModelArgs, grid: &GridArgs, paths: usize) -> Result<()> {
    info!("Starting simulation...");
    info!("  Model: {}", model.model);
    info!("  Grid: step {} up to {}", grid.timestep, grid.endtime);
    info!("  Paths: {}", paths);

    let rng = match grid.seed {
        Some(seed) => ScenarioRng::from_seed(seed),
        None => ScenarioRng::from_entropy(),
    };
    let mut generator =
        ScenarioGenerator::with_rng(grid.timestep, grid.endtime, model.build()?, rng)?;

    let mut writer = super::csv_writer(grid.output.as_deref())?;
    writer.write_record(["path", "step", "time", "value"])?;
    for path in 0..paths {
        for (step, value) in generator.path().into_iter().enumerate() {
            writer.write_record(&[
                path.to_string(),
                step.to_string(),
                (step as f64 * grid.timestep).to_string(),
                value.to_string(),
            ])?;
        }
    }
    writer.flush()?;

    info!("Simulation complete");
    Ok(())
}
