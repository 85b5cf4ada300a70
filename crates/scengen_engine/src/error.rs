//! Error types for generator and correlated-group construction.

use thiserror::Error;

/// Scenario generator configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeneratorError {
    /// Time step must be strictly positive.
    #[error("timestep must be positive: got {timestep}")]
    InvalidTimestep {
        /// The rejected timestep
        timestep: f64,
    },

    /// Horizon must be non-negative.
    #[error("endtime must be non-negative: got {endtime}")]
    InvalidEndtime {
        /// The rejected endtime
        endtime: f64,
    },
}

/// Correlated-group construction errors.
///
/// All of these fail before any `Correlated` object exists; a violated group
/// invariant is never silently coerced.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CorrelatedError {
    /// A correlated group needs at least one generator.
    #[error("correlated group is empty")]
    Empty,

    /// A generator's timestep differs from the first generator's.
    #[error("generator {index} timestep {found} differs from {expected}")]
    TimestepMismatch {
        /// Position of the offending generator
        index: usize,
        /// Timestep of the first generator
        expected: f64,
        /// Timestep of the offending generator
        found: f64,
    },

    /// A generator's endtime differs from the first generator's.
    #[error("generator {index} endtime {found} differs from {expected}")]
    EndtimeMismatch {
        /// Position of the offending generator
        index: usize,
        /// Endtime of the first generator
        expected: f64,
        /// Endtime of the offending generator
        found: f64,
    },

    /// Copula dimension does not match the number of generators.
    #[error("copula dimension {copula} does not match {generators} generators")]
    DimensionMismatch {
        /// Copula dimension
        copula: usize,
        /// Number of generators in the group
        generators: usize,
    },
}
