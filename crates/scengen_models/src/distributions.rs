//! Standard normal quantile and CDF helpers.
//!
//! Model transitions consume uniform(0,1) variates and map them to
//! process-appropriate shocks through the inverse standard-normal CDF. The
//! Gaussian copula needs the forward CDF to map correlated normals back to
//! uniform marginals. Both directions are thin wrappers over `statrs`.

use statrs::distribution::{ContinuousCDF, Normal};

fn standard_normal() -> Normal {
    // Unit parameters cannot fail validation.
    Normal::new(0.0, 1.0).expect("standard normal is well-formed")
}

/// Standard normal quantile (inverse CDF), Φ⁻¹.
///
/// # Panics
///
/// Panics if `variate` is not strictly inside (0, 1). A variate at or beyond
/// the boundary would map to an infinite shock; per the error model this is
/// a fatal domain failure, not a recoverable condition.
///
/// # Examples
///
/// ```
/// use scengen_models::distributions::normal_quantile;
///
/// assert!((normal_quantile(0.5)).abs() < 1e-12);
/// assert!(normal_quantile(0.975) > 1.9);
/// assert!(normal_quantile(0.025) < -1.9);
/// ```
pub fn normal_quantile(variate: f64) -> f64 {
    assert!(
        variate > 0.0 && variate < 1.0,
        "variate {variate} lies outside the open unit interval"
    );
    standard_normal().inverse_cdf(variate)
}

/// Standard normal CDF, Φ.
pub fn normal_cdf(x: f64) -> f64 {
    standard_normal().cdf(x)
}
