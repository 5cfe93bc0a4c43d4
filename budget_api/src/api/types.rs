//! API request and response types.
//!
//! The budget request/response bodies are `budget_core` types; only the
//! envelope types live here.

use serde::{Deserialize, Serialize};

/// Body of every 400 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Localized, fixed message for the error kind
    pub message: String,

    /// Stable error code (`INVALID_PARAMETERS` or `MATERIAL_NOT_FOUND`)
    pub code: String,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    pub version: String,

    /// Number of materials in the loaded catalog
    pub materials: usize,
}
