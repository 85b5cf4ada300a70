//! # Scengen Models
//!
//! Economic process models for Monte Carlo scenario generation.
//!
//! This crate provides:
//! - The [`EconomicModel`] trait: initial value plus a one-step transition
//!   driven by a uniform(0,1) variate
//! - Short-rate models ([`rates::Vasicek`], [`rates::CoxIngersollRoss`])
//! - Equity models ([`equity::BlackScholesMerton`],
//!   [`equity::ConstantElasticity`])
//! - The closed [`Model`] enum for static dispatch over all variants
//!
//! ## Design Principles
//!
//! - **Immutable parameter structs**: a model value carries no mutable state;
//!   the surrounding generator owns the `(time, value)` cursor
//! - **Enum-based dispatch** for heterogeneous model collections, not
//!   `Box<dyn Trait>`
//! - **Validated construction**: constructors return `Result` and reject
//!   degenerate parameters before any simulation starts

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod economic;
pub mod equity;
pub mod error;
pub mod model_enum;
pub mod rates;

pub use economic::EconomicModel;
pub use error::ModelError;
pub use model_enum::Model;
