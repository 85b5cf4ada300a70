//! Static dispatch enum over all model variants.
//!
//! The model family is closed, so dispatch goes through `match` expressions
//! rather than trait objects. The enum is what allows a correlated group to
//! mix families — a short-rate generator and an equity generator share the
//! element type `ScenarioGenerator<Model>`.
//!
//! ## Example
//!
//! ```
//! use scengen_models::{EconomicModel, Model};
//! use scengen_models::rates::Vasicek;
//! use scengen_models::equity::BlackScholesMerton;
//!
//! let rates: Model = Vasicek::new(0.136, 0.0168, 0.0119, 0.01).unwrap().into();
//! let equity: Model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0).unwrap().into();
//!
//! assert_eq!(rates.name(), "Vasicek");
//! assert_eq!(equity.initial_value(), 100.0);
//! ```

use crate::economic::EconomicModel;
use crate::equity::{BlackScholesMerton, ConstantElasticity};
use crate::rates::{CoxIngersollRoss, Vasicek};

/// Closed tagged variant over every supported model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Model {
    /// Vasicek mean-reverting short rate
    Vasicek(Vasicek),
    /// Cox-Ingersoll-Ross short rate
    CoxIngersollRoss(CoxIngersollRoss),
    /// Black-Scholes-Merton log-normal equity
    BlackScholesMerton(BlackScholesMerton),
    /// Constant Elasticity of Variance equity
    ConstantElasticity(ConstantElasticity),
}

impl Model {
    /// Variant name for logging and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Model::Vasicek(_) => "Vasicek",
            Model::CoxIngersollRoss(_) => "CoxIngersollRoss",
            Model::BlackScholesMerton(_) => "BlackScholesMerton",
            Model::ConstantElasticity(_) => "ConstantElasticity",
        }
    }
}

impl EconomicModel for Model {
    type Output = f64;

    fn initial_value(&self) -> f64 {
        match self {
            Model::Vasicek(m) => m.initial_value(),
            Model::CoxIngersollRoss(m) => m.initial_value(),
            Model::BlackScholesMerton(m) => m.initial_value(),
            Model::ConstantElasticity(m) => m.initial_value(),
        }
    }

    fn initial_value_at(&self, timestep: f64) -> f64 {
        match self {
            Model::Vasicek(m) => m.initial_value_at(timestep),
            Model::CoxIngersollRoss(m) => m.initial_value_at(timestep),
            Model::BlackScholesMerton(m) => m.initial_value_at(timestep),
            Model::ConstantElasticity(m) => m.initial_value_at(timestep),
        }
    }

    fn next_value(&self, current: f64, time: f64, timestep: f64, variate: f64) -> f64 {
        match self {
            Model::Vasicek(m) => m.next_value(current, time, timestep, variate),
            Model::CoxIngersollRoss(m) => m.next_value(current, time, timestep, variate),
            Model::BlackScholesMerton(m) => m.next_value(current, time, timestep, variate),
            Model::ConstantElasticity(m) => m.next_value(current, time, timestep, variate),
        }
    }
}

impl From<Vasicek> for Model {
    fn from(model: Vasicek) -> Self {
        Model::Vasicek(model)
    }
}

impl From<CoxIngersollRoss> for Model {
    fn from(model: CoxIngersollRoss) -> Self {
        Model::CoxIngersollRoss(model)
    }
}

impl From<BlackScholesMerton> for Model {
    fn from(model: BlackScholesMerton) -> Self {
        Model::BlackScholesMerton(model)
    }
}

impl From<ConstantElasticity> for Model {
    fn from(model: ConstantElasticity) -> Self {
        Model::ConstantElasticity(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let v: Model = Vasicek::new(0.1, 0.02, 0.01, 0.01).unwrap().into();
        let c: Model = CoxIngersollRoss::new(0.1, 0.05, 0.05, 0.03).unwrap().into();
        let b: Model = BlackScholesMerton::new(0.01, 0.02, 0.15, 100.0)
            .unwrap()
            .into();
        let e: Model = ConstantElasticity::new(0.05, 0.0, 0.2, 0.5, 100.0)
            .unwrap()
            .into();

        assert_eq!(v.name(), "Vasicek");
        assert_eq!(c.name(), "CoxIngersollRoss");
        assert_eq!(b.name(), "BlackScholesMerton");
        assert_eq!(e.name(), "ConstantElasticity");
    }

    #[test]
    fn test_delegation_matches_concrete_variant() {
        let concrete = Vasicek::new(0.136, 0.0168, 0.0119, 0.01).unwrap();
        let wrapped: Model = concrete.into();

        assert_eq!(wrapped.initial_value(), concrete.initial_value());
        assert_eq!(wrapped.initial_value_at(0.5), concrete.initial_value_at(0.5));
        assert_eq!(
            wrapped.next_value(0.01, 0.0, 1.0, 0.3),
            concrete.next_value(0.01, 0.0, 1.0, 0.3)
        );
    }
}
