//! EconomicModel trait for unified stochastic process interface.
//!
//! Every model variant exposes three operations: its starting level, an
//! optional step-size-aware starting level, and a one-step transition that
//! maps a uniform(0,1) variate to the next process value. The surrounding
//! scenario generator owns the `(time, value)` cursor and the random source;
//! models themselves are immutable parameter structs.
//!
//! ## Variate contract
//!
//! Transitions consume a raw uniform variate, not a normal shock. Each
//! variant applies its own inverse-CDF transform (see
//! [`crate::distributions::normal_quantile`]), so a single copula-sampled
//! matrix of uniforms can drive models from different families.

/// Unified interface for stochastic process models.
///
/// # Dispatch
///
/// The family of variants is closed. Use the [`Model`](crate::Model) enum for
/// collections that mix variants; avoid `Box<dyn EconomicModel>`.
///
/// # Example
///
/// ```
/// use scengen_models::economic::EconomicModel;
/// use scengen_models::rates::Vasicek;
///
/// let model = Vasicek::new(0.136, 0.0168, 0.0119, 0.01).unwrap();
/// assert_eq!(model.initial_value(), 0.01);
///
/// // One step with the median variate: drift only
/// let next = model.next_value(0.01, 0.0, 1.0, 0.5);
/// assert!((next - (0.01 + 0.136 * (0.0168 - 0.01))).abs() < 1e-12);
/// ```
pub trait EconomicModel {
    /// The type of values the model emits.
    ///
    /// Used to type the surrounding lazy sequence without running it.
    type Output: Copy + PartialOrd + std::fmt::Debug;

    /// The process's starting level.
    fn initial_value(&self) -> Self::Output;

    /// The starting level given the first step size.
    ///
    /// Defaults to [`initial_value`](Self::initial_value). Variants whose
    /// published initial observation is itself a one-step forward quantity
    /// (e.g. a curve-fitted short-rate model) override this.
    fn initial_value_at(&self, timestep: f64) -> Self::Output {
        let _ = timestep;
        self.initial_value()
    }

    /// Advance the process one step.
    ///
    /// # Arguments
    ///
    /// * `current` - Current process value
    /// * `time` - Elapsed time at which `current` was observed
    /// * `timestep` - Step size (dt > 0)
    /// * `variate` - Uniform draw, strictly inside (0, 1)
    ///
    /// # Panics
    ///
    /// Panics if `variate` lies at or beyond the open unit interval. The
    /// computation is deterministic given its inputs, so this is a
    /// programming error, never retried.
    fn next_value(
        &self,
        current: Self::Output,
        time: f64,
        timestep: f64,
        variate: f64,
    ) -> Self::Output;
}
