//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command.

use std::fs::File;
use std::io;

use clap::Args;

use crate::Result;

pub mod correlate;
pub mod simulate;

/// Time grid and output flags shared by all commands.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Grid step size in years
    #[arg(long, default_value = "1.0")]
    pub timestep: f64,

    /// Horizon in years
    #[arg(long, default_value = "30.0")]
    pub endtime: f64,

    /// Random seed; entropy-seeded when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output CSV file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,
}

/// CSV writer over the selected output sink.
pub(crate) fn csv_writer(output: Option<&str>) -> Result<csv::Writer<Box<dyn io::Write>>> {
    let sink: Box<dyn io::Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}
