//! # budget_api - HTTP service for the budget estimator
//!
//! Wraps [`budget_core::BudgetCalculator`] in an axum router. The catalog is
//! loaded once in [`api::serve`] and shared read-only by every request.

pub mod api;
pub mod config;

pub use config::{Config, ConfigError};
