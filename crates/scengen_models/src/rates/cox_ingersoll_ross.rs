//! Cox-Ingersoll-Ross short-rate model.
//!
//! The CIR model adds a level-dependent diffusion to mean reversion:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * sqrt(r(t)) * dW(t)
//! ```
//! The continuous-time process stays strictly positive when the Feller
//! condition `2ab >= sigma^2` holds. The discretized step truncates the rate
//! at zero inside the square root so a discrete excursion below zero cannot
//! produce NaN.

use crate::distributions::normal_quantile;
use crate::economic::EconomicModel;
use crate::error::ModelError;

/// CIR short-rate model parameters.
///
/// # Discretization
///
/// Euler–Maruyama with truncation:
/// ```text
/// r(t+dt) = r(t) + a * (b - r(t)) * dt
///         + sigma * sqrt(max(r(t), 0)) * sqrt(dt) * quantile(u)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoxIngersollRoss {
    /// Mean reversion speed (a > 0)
    pub mean_reversion: f64,
    /// Long-term mean rate (b > 0)
    pub long_term_mean: f64,
    /// Volatility of the short rate (sigma > 0)
    pub volatility: f64,
    /// Initial short rate r(0) > 0
    pub initial_rate: f64,
}

impl CoxIngersollRoss {
    /// Create new CIR parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] unless all four parameters are strictly
    /// positive.
    pub fn new(
        mean_reversion: f64,
        long_term_mean: f64,
        volatility: f64,
        initial_rate: f64,
    ) -> Result<Self, ModelError> {
        if mean_reversion <= 0.0 {
            return Err(ModelError::InvalidMeanReversion {
                speed: mean_reversion,
            });
        }
        if long_term_mean <= 0.0 {
            return Err(ModelError::InvalidLongTermMean {
                mean: long_term_mean,
            });
        }
        if volatility <= 0.0 {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        if initial_rate <= 0.0 {
            return Err(ModelError::InvalidInitialLevel {
                level: initial_rate,
            });
        }

        Ok(Self {
            mean_reversion,
            long_term_mean,
            volatility,
            initial_rate,
        })
    }

    /// Whether the Feller condition `2ab >= sigma^2` is satisfied.
    ///
    /// When it holds, the continuous-time process remains strictly positive.
    pub fn satisfies_feller(&self) -> bool {
        2.0 * self.mean_reversion * self.long_term_mean >= self.volatility * self.volatility
    }

    /// The Feller ratio `2ab / sigma^2`; values >= 1 satisfy the condition.
    pub fn feller_ratio(&self) -> f64 {
        2.0 * self.mean_reversion * self.long_term_mean / (self.volatility * self.volatility)
    }
}

impl EconomicModel for CoxIngersollRoss {
    type Output = f64;

    fn initial_value(&self) -> f64 {
        self.initial_rate
    }

    fn next_value(&self, current: f64, _time: f64, timestep: f64, variate: f64) -> f64 {
        let shock = normal_quantile(variate);
        let drift = self.mean_reversion * (self.long_term_mean - current) * timestep;
        let diffusion = self.volatility * current.max(0.0).sqrt() * timestep.sqrt() * shock;
        current + drift + diffusion
    }
}
