//! Equity price stochastic models.
//!
//! # Models
//!
//! ## Black-Scholes-Merton
//!
//! Log-normal dynamics with a dividend/borrow yield, stepped with the exact
//! transition:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//!
//! ## Constant Elasticity of Variance
//!
//! Local volatility scaling as a power of the price level:
//! ```text
//! dS = (r - q) * S * dt + sigma * S^beta * dW
//! ```

pub mod black_scholes;
pub mod constant_elasticity;

pub use black_scholes::BlackScholesMerton;
pub use constant_elasticity::ConstantElasticity;
