//! HTTP API for the budget estimator.
//!
//! ## Endpoints
//!
//! - `POST /api/calculate` - Calculate area and cost for an opening
//! - `GET /api/materials` - List the material catalog
//! - `GET /api/health` - Health check

mod routes;
pub mod types;

pub use routes::{app, serve, ApiError, AppState};
pub use types::*;
