//! # Error Types
//!
//! Structured error types for budget_core. Calculation failures are always
//! client-input errors; catalog failures only happen while loading the
//! material table at startup.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::errors::{CalcError, CalcResult};
//!
//! fn validate_width(width_cm: Option<f64>) -> CalcResult<f64> {
//!     match width_cm {
//!         Some(w) if w > 0.0 => Ok(w),
//!         _ => Err(CalcError::invalid_parameters("widthCm", "Width must be present and positive")),
//!     }
//! }
//!
//! assert!(validate_width(Some(0.0)).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Result type alias for catalog construction and loading
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Structured error type for budget calculations.
///
/// There are exactly two kinds. Both are recovered at the caller boundary
/// (HTTP 400, CLI exit code) and are never turned into a zero result.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A dimension is missing or not positive, or the material id is missing.
    ///
    /// `field` names the first failing field for diagnostics. Callers get
    /// the same message regardless of which field failed.
    #[error("Invalid parameters for calculation: '{field}' - {reason}")]
    InvalidParameters { field: String, reason: String },

    /// The material id is well-formed but not in the catalog
    #[error("Material not found: {material_id}")]
    MaterialNotFound { material_id: String },
}

impl CalcError {
    /// Create an InvalidParameters error
    pub fn invalid_parameters(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidParameters {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_id: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_id: material_id.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameters { .. } => "INVALID_PARAMETERS",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
        }
    }
}

/// Errors raised while building or loading a material catalog.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Catalog file contents could not be decoded
    #[error("Parse error in '{path}': {reason}")]
    ParseError { path: String, reason: String },

    /// Catalog file extension is neither .toml nor .json
    #[error("Unsupported catalog format for '{path}' (expected .toml or .json)")]
    UnsupportedFormat { path: String },

    /// Catalog has no materials
    #[error("Material catalog is empty")]
    Empty,

    /// A material has an empty id
    #[error("Material '{name}' has an empty id")]
    EmptyId { name: String },

    /// Two materials share an id
    #[error("Duplicate material id: {id}")]
    DuplicateId { id: String },

    /// Price is zero, negative, or not finite
    #[error("Material '{id}' has invalid price per square meter: {price}")]
    InvalidPrice { id: String, price: String },
}

impl CatalogError {
    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::ParseError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::FileError { .. } => "FILE_ERROR",
            CatalogError::ParseError { .. } => "PARSE_ERROR",
            CatalogError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            CatalogError::Empty => "EMPTY_CATALOG",
            CatalogError::EmptyId { .. } => "EMPTY_ID",
            CatalogError::DuplicateId { .. } => "DUPLICATE_ID",
            CatalogError::InvalidPrice { .. } => "INVALID_PRICE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_parameters("widthCm", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidParameters\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_parameters("heightCm", "missing").error_code(),
            "INVALID_PARAMETERS"
        );
        assert_eq!(
            CalcError::material_not_found("veludo").error_code(),
            "MATERIAL_NOT_FOUND"
        );
        assert_eq!(
            CatalogError::DuplicateId { id: "linho".into() }.error_code(),
            "DUPLICATE_ID"
        );
    }

    #[test]
    fn test_display() {
        let error = CalcError::material_not_found("veludo");
        assert_eq!(error.to_string(), "Material not found: veludo");
    }
}
