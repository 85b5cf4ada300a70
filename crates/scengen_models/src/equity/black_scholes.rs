//! Black-Scholes-Merton log-normal equity model.
//!
//! Asset price dynamics under the risk-neutral measure with a continuous
//! dividend (or borrow) yield:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//!
//! ## Log-space formulation
//!
//! Steps use the exact solution, so the discretization introduces no bias at
//! any step size:
//! ```text
//! S(t+dt) = S(t) * exp((r - q - 0.5*sigma^2)*dt + sigma*sqrt(dt)*dW)
//! ```
//! At any fixed horizon `T` the terminal price is log-normal with location
//! `ln(S0) + (r - q - 0.5*sigma^2)*T` and scale `sigma*sqrt(T)`, exposed via
//! [`BlackScholesMerton::price_distribution`] for statistical validation.

use statrs::distribution::LogNormal;

use crate::distributions::normal_quantile;
use crate::economic::EconomicModel;
use crate::error::ModelError;

/// Black-Scholes-Merton model parameters.
///
/// # Examples
///
/// ```
/// use scengen_models::equity::BlackScholesMerton;
/// use scengen_models::economic::EconomicModel;
///
/// let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
/// assert_eq!(model.initial_value(), 100.0);
///
/// // Median variate: pure drift step
/// let next = model.next_value(100.0, 0.0, 1.0, 0.5);
/// let expected = 100.0 * ((0.01 - 0.02 - 0.5 * 0.15 * 0.15) * 1.0f64).exp();
/// assert!((next - expected).abs() < 1e-10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholesMerton {
    /// Risk-free rate (annualized, continuously compounded)
    pub rate: f64,
    /// Dividend/borrow yield (annualized, continuously compounded)
    pub dividend_yield: f64,
    /// Volatility (sigma > 0, annualized)
    pub volatility: f64,
    /// Initial price S(0) > 0
    pub initial_price: f64,
}

impl BlackScholesMerton {
    /// Create new Black-Scholes-Merton parameters with validation.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] if `volatility` or `initial_price` is not
    /// strictly positive. `rate` and `dividend_yield` may be any finite
    /// value.
    pub fn new(
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        initial_price: f64,
    ) -> Result<Self, ModelError> {
        if volatility <= 0.0 {
            return Err(ModelError::InvalidVolatility { volatility });
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
            initial_price,
        })
    }

    /// Closed-form terminal-price distribution at the given horizon.
    ///
    /// Not used for simulation; it is the reference law that simulated
    /// terminal values are validated against.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DegenerateHorizon`] for a non-positive horizon,
    /// where the scale parameter collapses to zero.
    pub fn price_distribution(&self, horizon: f64) -> Result<LogNormal, ModelError> {
        if horizon <= 0.0 {
            return Err(ModelError::DegenerateHorizon { horizon });
        }

        let drift = self.rate - self.dividend_yield - 0.5 * self.volatility * self.volatility;
        let location = self.initial_price.ln() + drift * horizon;
        let scale = self.volatility * horizon.sqrt();
        LogNormal::new(location, scale).map_err(|_| ModelError::DegenerateHorizon { horizon })
    }
}

impl EconomicModel for BlackScholesMerton {
    type Output = f64;

    fn initial_value(&self) -> f64 {
        self.initial_price
    }

    fn next_value(&self, current: f64, _time: f64, timestep: f64, variate: f64) -> f64 {
        let shock = normal_quantile(variate);
        let sigma = self.volatility;
        let drift = (self.rate - self.dividend_yield - 0.5 * sigma * sigma) * timestep;
        let diffusion = sigma * timestep.sqrt() * shock;
        current * (drift + diffusion).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statrs::statistics::Distribution;

    #[test]
    fn test_new_valid() {
        let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
        assert_eq!(model.volatility, 0.15);
    }

    #[test]
    fn test_new_invalid_volatility() {
        assert_eq!(
            BlackScholesMerton::new(0.01, 0.02, 0.0, 100.0),
            Err(ModelError::InvalidVolatility { volatility: 0.0 })
        );
    }

    #[test]
    fn test_new_invalid_price() {
        assert!(BlackScholesMerton::new(0.01, 0.02, 0.15, -5.0).is_err());
    }

    #[test]
    fn test_negative_carry_allowed() {
        assert!(BlackScholesMerton::new(-0.005, 0.0, 0.15, 100.0).is_ok());
    }

    #[test]
    fn test_median_variate_is_pure_drift() {
        let model = BlackScholesMerton::new(0.05, 0.0, 0.2, 100.0).unwrap();
        let dt = 1.0 / 252.0;
        let next = model.next_value(100.0, 0.0, dt, 0.5);
        let expected = 100.0 * ((0.05 - 0.5 * 0.04) * dt).exp();
        assert_relative_eq!(next, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_prices_stay_positive() {
        let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
        // Even an extreme downside shock only shrinks the price.
        let next = model.next_value(100.0, 0.0, 1.0, 1e-9);
        assert!(next > 0.0);
        assert!(next < 100.0);
    }

    #[test]
    fn test_shock_direction() {
        let model = BlackScholesMerton::new(0.0, 0.0, 0.2, 100.0).unwrap();
        assert!(model.next_value(100.0, 0.0, 1.0, 0.9) > 100.0);
        assert!(model.next_value(100.0, 0.0, 1.0, 0.1) < 100.0);
    }

    #[test]
    fn test_price_distribution_moments() {
        let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
        let dist = model.price_distribution(30.0).unwrap();

        // E[S_T] = S0 * exp((r - q) * T)
        let expected_mean = 100.0 * ((0.01_f64 - 0.02) * 30.0).exp();
        assert_relative_eq!(dist.mean().unwrap(), expected_mean, epsilon = 1e-8);
    }

    #[test]
    fn test_price_distribution_rejects_zero_horizon() {
        let model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap();
        assert_eq!(
            model.price_distribution(0.0),
            Err(ModelError::DegenerateHorizon { horizon: 0.0 })
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn transitions_stay_positive_and_finite(
                r in -0.05..0.1f64,
                q in -0.05..0.1f64,
                sigma in 1e-3..1.0f64,
                s in 1e-3..1e4f64,
                u in 1e-6..1.0f64,
            ) {
                prop_assume!(u < 1.0 - 1e-6);
                let model = BlackScholesMerton::new(r, q, sigma, s).unwrap();
                let next = model.next_value(s, 0.0, 1.0 / 252.0, u);
                prop_assert!(next.is_finite());
                prop_assert!(next > 0.0);
            }
        }
    }
}
