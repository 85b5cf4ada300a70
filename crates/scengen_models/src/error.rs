//! Error types for model construction and closed-form distributions.

use thiserror::Error;

/// Model parameter and distribution errors.
///
/// All variants represent configuration mistakes caught before any path is
/// generated; nothing here is retried.
///
/// # Examples
///
/// ```
/// use scengen_models::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Mean reversion speed must be positive.
    #[error("mean reversion speed must be positive: a = {speed}")]
    InvalidMeanReversion {
        /// The rejected speed value
        speed: f64,
    },

    /// Long-term mean must be positive (CIR).
    #[error("long-term mean must be positive: b = {mean}")]
    InvalidLongTermMean {
        /// The rejected mean value
        mean: f64,
    },

    /// Volatility must be positive.
    #[error("volatility must be positive: \u{3c3} = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Initial level must be positive (price processes, CIR rates).
    #[error("initial level must be positive: got {level}")]
    InvalidInitialLevel {
        /// The rejected initial level
        level: f64,
    },

    /// Elasticity exponent must be non-negative.
    #[error("elasticity must be non-negative: \u{3b2} = {elasticity}")]
    InvalidElasticity {
        /// The rejected elasticity value
        elasticity: f64,
    },

    /// The closed-form terminal distribution is undefined for this horizon.
    #[error("terminal distribution is degenerate over horizon {horizon}")]
    DegenerateHorizon {
        /// The rejected horizon
        horizon: f64,
    },
}
