//! Configuration for the budget service.
//!
//! Configuration is read from environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `BUDGET_CATALOG_PATH` - Optional. TOML or JSON material catalog. Defaults to the built-in catalog.
//! - `BUDGET_LOCALE` - Optional. Language of error messages (`pt-BR` or `en`). Defaults to `pt-BR`.

use std::path::PathBuf;

use budget_core::Locale;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,

    pub port: u16,

    /// Replacement catalog file; `None` uses the built-in table
    pub catalog_path: Option<PathBuf>,

    pub locale: Locale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            catalog_path: None,
            locale: Locale::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or `BUDGET_LOCALE` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?,
            None => defaults.port,
        };

        let catalog_path = lookup("BUDGET_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let locale = match lookup("BUDGET_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .map_err(|e| ConfigError::InvalidValue("BUDGET_LOCALE".to_string(), e))?,
            None => defaults.locale,
        };

        Ok(Self {
            host,
            port,
            catalog_path,
            locale,
        })
    }

    /// `host:port` for binding
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
