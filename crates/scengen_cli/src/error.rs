//! CLI error type.

use thiserror::Error;

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error: argument problems plus everything the model and
/// engine layers can reject.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value the library layers never see, e.g. an unknown model name.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Rejected model parameters.
    #[error("model configuration: {0}")]
    Model(#[from] scengen_models::ModelError),

    /// Rejected time grid.
    #[error("generator configuration: {0}")]
    Generator(#[from] scengen_engine::GeneratorError),

    /// Rejected correlated group.
    #[error("correlated group: {0}")]
    Correlated(#[from] scengen_engine::CorrelatedError),

    /// Rejected correlation matrix.
    #[error("correlation matrix: {0}")]
    Correlation(#[from] scengen_engine::CorrelationError),

    /// Output file problems.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation problems.
    #[error("csv output: {0}")]
    Csv(#[from] csv::Error),
}
