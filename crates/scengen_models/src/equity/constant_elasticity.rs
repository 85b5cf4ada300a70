//! Constant Elasticity of Variance (CEV) equity model.
//!
//! Local volatility scales as a power of the price level:
//! ```text
//! dS = (r - q) * S * dt + sigma * S^beta * dW
//! ```
//! `beta = 1` recovers geometric Brownian motion; `beta < 1` produces the
//! leverage effect (volatility rises as the price falls). There is no exact
//! transition in general, so steps use Euler–Maruyama with the price
//! truncated at zero inside the power, mirroring the CIR square-root
//! treatment.

use crate::distributions::normal_quantile;
use crate::economic::EconomicModel;
use crate::error::ModelError;

/// CEV model parameters.
///
/// # Discretization
///
/// ```text
/// S(t+dt) = S(t) + (r - q) * S(t) * dt
///         + sigma * max(S(t), 0)^beta * sqrt(dt) * quantile(u)
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantElasticity {
    /// Risk-free rate (annualized, continuously compounded)
    pub rate: f64,
    /// Dividend/borrow yield (annualized, continuously compounded)
    pub dividend_yield: f64,
    /// Volatility scale (sigma > 0)
    pub volatility: f64,
    /// Elasticity exponent (beta >= 0)
    pub elasticity: f64,
    /// Initial price S(0) > 0
    pub initial_price: f64,
}

impl ConstantElasticity {
    /// Create new CEV parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if `volatility` or `initial_price` is not
    /// strictly positive, or if `elasticity` is negative.
    pub fn new(
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        elasticity: f64,
        initial_price: f64,
    ) -> Result<Self, ModelError> {
        if volatility <= 0.0 {
            return Err(ModelError::InvalidVolatility { volatility });
        }
        if elasticity < 0.0 {
            return Err(ModelError::InvalidElasticity { elasticity });
        }
        if initial_price <= 0.0 {
            return Err(ModelError::InvalidInitialLevel {
                level: initial_price,
            });
        }

        Ok(Self {
            rate,
            dividend_yield,
            volatility,
            elasticity,
            initial_price,
        })
    }
}

impl EconomicModel for ConstantElasticity {
    type Output = f64;

    fn initial_value(&self) -> f64 {
        self.initial_price
    }

    fn next_value(&self, current: f64, _time: f64, timestep: f64, variate: f64) -> f64 {
        let shock = normal_quantile(variate);
        let drift = (self.rate - self.dividend_yield) * current * timestep;
        let local_vol = self.volatility * current.max(0.0).powf(self.elasticity);
        current + drift + local_vol * timestep.sqrt() * shock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_valid() {
        let model = ConstantElasticity::new(0.05, 0.0, 0.2, 0.5, 100.0).unwrap();
        assert_eq!(model.elasticity, 0.5);
    }

    #[test]
    fn test_new_rejects_bad_parameters() {
        assert!(ConstantElasticity::new(0.05, 0.0, 0.0, 0.5, 100.0).is_err());
        assert_eq!(
            ConstantElasticity::new(0.05, 0.0, 0.2, -0.5, 100.0),
            Err(ModelError::InvalidElasticity { elasticity: -0.5 })
        );
        assert!(ConstantElasticity::new(0.05, 0.0, 0.2, 0.5, 0.0).is_err());
    }

    #[test]
    fn test_median_variate_is_pure_drift() {
        let model = ConstantElasticity::new(0.05, 0.01, 0.2, 0.5, 100.0).unwrap();
        let next = model.next_value(100.0, 0.0, 1.0, 0.5);
        assert_relative_eq!(next, 100.0 + 0.04 * 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_leverage_effect() {
        // beta < 1: relative shock size grows as the price falls.
        let model = ConstantElasticity::new(0.0, 0.0, 0.2, 0.5, 100.0).unwrap();
        let rel_high = (model.next_value(100.0, 0.0, 1.0, 0.9) - 100.0) / 100.0;
        let rel_low = (model.next_value(25.0, 0.0, 1.0, 0.9) - 25.0) / 25.0;
        assert!(rel_low > rel_high);
    }

    #[test]
    fn test_truncation_below_zero() {
        let model = ConstantElasticity::new(0.0, 0.0, 0.2, 0.5, 100.0).unwrap();
        let next = model.next_value(-1.0, 0.0, 1.0 / 252.0, 0.2);
        assert!(next.is_finite());
    }
}
