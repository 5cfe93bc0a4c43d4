//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Request` - Input parameters (JSON-serializable)
//! - `*Response` - Calculation results (JSON-serializable)
//! - `calculate(..) -> Result<*Response, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`budget`] - Area and cost estimate for a curtain or blind opening

pub mod budget;

pub use budget::{BudgetCalculator, BudgetRequest, BudgetResponse};
