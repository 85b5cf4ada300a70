//! Vasicek mean-reverting short-rate model.
//!
//! The Vasicek model describes short-rate dynamics as an Ornstein–Uhlenbeck
//! process:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * dW(t)
//! ```
//! where:
//! - a = mean reversion speed (must be positive)
//! - b = long-term mean level
//! - sigma = volatility (must be positive)
//!
//! ## Key Properties
//!
//! - **Mean reversion**: rates revert to `b` at speed `a`
//! - **Negative rates**: the diffusion is level-independent, so rates may
//!   cross zero

use crate::distributions::normal_quantile;
use crate::economic::EconomicModel;
use crate::error::ModelError;

/// Vasicek short-rate model parameters.
///
/// # Discretization
///
/// Euler–Maruyama step with an inverse-CDF shock:
/// ```text
/// r(t+dt) = r(t) + a * (b - r(t)) * dt + sigma * sqrt(dt) * quantile(u)
/// ```
///
/// # Examples
///
/// ```
/// use scengen_models::rates::Vasicek;
///
/// let model = Vasicek::new(0.136, 0.0168, 0.0119, 0.01).unwrap();
/// assert!(Vasicek::new(-0.1, 0.0168, 0.0119, 0.01).is_err());
/// let _ = model;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vasicek {
    /// Mean reversion speed (a > 0)
    pub mean_reversion: f64,
    /// Long-term mean level (b)
    pub long_term_mean: f64,
    /// Volatility of the short rate (sigma > 0)
    pub volatility: f64,
    /// Initial short rate r(0)
    pub initial_rate: f64,
}

impl Vasicek {
    /// Create new Vasicek parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if `mean_reversion` or `volatility` is not
    /// strictly positive. The long-term mean and initial rate may be any
    /// finite value, including negative rates.
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
        if volatility <= 0.0 {
            return Err(ModelError::InvalidVolatility { volatility });
        }

        Ok(Self {
            mean_reversion,
            long_term_mean,
            volatility,
            initial_rate,
        })
    }
}

impl EconomicModel for Vasicek {
    type Output = f64;

    fn initial_value(&self) -> f64 {
        self.initial_rate
    }

    fn next_value(&self, current: f64, _time: f64, timestep: f64, variate: f64) -> f64 {
        let shock = normal_quantile(variate);
        let drift = self.mean_reversion * (self.long_term_mean - current) * timestep;
        let diffusion = self.volatility * timestep.sqrt() * shock;
        current + drift + diffusion
    }
}
