//! # User-Facing Messages
//!
//! The two calculation failures map to fixed strings. Callers match on
//! [`CalcError::error_code`], never on the text, so translations can change
//! freely.
//!
//! ```rust
//! use budget_core::errors::CalcError;
//! use budget_core::messages::Locale;
//!
//! let err = CalcError::material_not_found("veludo");
//! assert_eq!(err.user_message(Locale::PtBr), "Material não encontrado");
//! assert_eq!(err.user_message(Locale::En), "Material not found");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

/// Language for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::PtBr, Locale::En];

    /// BCP 47 tag
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }

    /// Parse common spellings ("pt-BR", "pt_br", "pt", "en-US", ...)
    pub fn from_str_flexible(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "pt-br" | "pt" => Some(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Some(Locale::En),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_str_flexible(s).ok_or_else(|| {
            format!("unsupported locale '{}' (expected pt-BR or en)", s)
        })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl CalcError {
    /// The fixed message shown to the end user for this error kind.
    ///
    /// Independent of the failing field or the requested material id.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (CalcError::InvalidParameters { .. }, Locale::PtBr) => "Parâmetros inválidos para cálculo",
            (CalcError::InvalidParameters { .. }, Locale::En) => "Invalid parameters for calculation",
            (CalcError::MaterialNotFound { .. }, Locale::PtBr) => "Material não encontrado",
            (CalcError::MaterialNotFound { .. }, Locale::En) => "Material not found",
        }
    }
}
