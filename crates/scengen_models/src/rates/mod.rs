//! Short-rate stochastic models.
//!
//! # Models
//!
//! ## Vasicek
//!
//! Mean-reverting Ornstein–Uhlenbeck dynamics; rates may go negative:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * dW(t)
//! ```
//!
//! ## Cox-Ingersoll-Ross
//!
//! Mean reversion with level-dependent diffusion; non-negative when the
//! Feller condition holds:
//! ```text
//! dr(t) = a * (b - r(t)) * dt + sigma * sqrt(r(t)) * dW(t)
//! ```

pub mod cox_ingersoll_ross;
pub mod vasicek;

pub use cox_ingersoll_ross::CoxIngersollRoss;
pub use vasicek::Vasicek;
