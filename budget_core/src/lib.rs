//! # budget_core - Curtain & Blinds Budget Engine
//!
//! `budget_core` holds the business rules of the estimator: validating an
//! opening request, resolving the covering material, converting cm² to m²
//! and rounding money for presentation. Front-ends (the HTTP service and
//! the CLI) are thin wrappers around [`BudgetCalculator`].
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions of the request plus an immutable catalog
//! - **JSON-First**: Requests, responses and errors are all serde types
//! - **Rich Errors**: Structured error kinds with stable codes
//! - **Injected Data**: The catalog is built once and passed in, not global
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use budget_core::{BudgetCalculator, BudgetRequest, CalcError, MaterialCatalog};
//!
//! let calculator = BudgetCalculator::new(Arc::new(MaterialCatalog::builtin()));
//!
//! let quote = calculator.calculate(&BudgetRequest::new(300.0, 200.0, "linho")).unwrap();
//! assert_eq!(quote.total, 540.0);
//!
//! let err = calculator.calculate(&BudgetRequest::new(300.0, 200.0, "seda")).unwrap_err();
//! assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
//! assert!(matches!(err, CalcError::MaterialNotFound { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Budget request/response and the calculator
//! - [`materials`] - Material records and the catalog
//! - [`catalog_io`] - Loading catalogs from TOML/JSON files
//! - [`units`] - Unit newtypes and display rounding
//! - [`messages`] - Localized user-facing error messages
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog_io;
pub mod errors;
pub mod materials;
pub mod messages;
pub mod units;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/materials_data.rs"));
}

// Re-export commonly used types at crate root for convenience
pub use calculations::{BudgetCalculator, BudgetRequest, BudgetResponse};
pub use catalog_io::{load_catalog, load_catalog_or_builtin};
pub use errors::{CalcError, CalcResult, CatalogError, CatalogResult};
pub use materials::{Material, MaterialCatalog};
pub use messages::Locale;
