//! # Catalog File I/O
//!
//! Loads a replacement material catalog at startup.
//!
//! ## File Formats
//!
//! TOML, the same layout as the built-in `data/materials.toml`:
//!
//! ```toml
//! [[materials]]
//! id = "blackout"
//! name = "Tecido Blackout"
//! price_per_square_meter = 120.0
//! ```
//!
//! JSON, either wrapped or as a bare array, with wire field names:
//!
//! ```json
//! [{ "id": "blackout", "name": "Tecido Blackout", "pricePerSquareMeter": 120 }]
//! ```
//!
//! Every loaded table goes through [`MaterialCatalog::new`], so a file with
//! duplicate ids or bad prices is rejected before anything is served.
//!
//! ## Example
//!
//! ```rust,no_run
//! use budget_core::catalog_io::load_catalog;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("materials.toml"))?;
//! println!("{} materials", catalog.len());
//! # Ok::<(), budget_core::errors::CatalogError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::errors::{CatalogError, CatalogResult};
use crate::materials::{Material, MaterialCatalog};

/// Supported catalog encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick a format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> CatalogResult<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(CatalogFormat::Toml),
            "json" => Ok(CatalogFormat::Json),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { materials: Vec<Material> },
    Bare(Vec<Material>),
}

impl CatalogFile {
    fn into_materials(self) -> Vec<Material> {
        match self {
            CatalogFile::Wrapped { materials } | CatalogFile::Bare(materials) => materials,
        }
    }
}

/// Parse and validate catalog contents.
///
/// `origin` only labels parse errors.
pub fn parse_catalog(contents: &str, format: CatalogFormat, origin: &str) -> CatalogResult<MaterialCatalog> {
    let file: CatalogFile = match format {
        CatalogFormat::Toml => {
            toml::from_str(contents).map_err(|e| CatalogError::parse_error(origin, e.to_string()))?
        }
        CatalogFormat::Json => {
            serde_json::from_str(contents).map_err(|e| CatalogError::parse_error(origin, e.to_string()))?
        }
    };

    MaterialCatalog::new(file.into_materials())
}

/// Load and validate a catalog file.
///
/// # Errors
///
/// * `CatalogError::UnsupportedFormat` - extension is not .toml/.json
/// * `CatalogError::FileError` - file could not be read
/// * `CatalogError::ParseError` - contents could not be decoded
/// * any validation error from [`MaterialCatalog::new`]
pub fn load_catalog(path: &Path) -> CatalogResult<MaterialCatalog> {
    let format = CatalogFormat::from_path(path)?;
    let shown = path.display().to_string();

    let contents = fs::read_to_string(path)
        .map_err(|e| CatalogError::file_error("read", shown.as_str(), e.to_string()))?;

    let catalog = parse_catalog(&contents, format, &shown)?;
    info!(path = %shown, materials = catalog.len(), "loaded material catalog");
    Ok(catalog)
}

/// Load `path` if given, otherwise fall back to the built-in catalog.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> CatalogResult<MaterialCatalog> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            let catalog = MaterialCatalog::builtin();
            info!(materials = catalog.len(), "using built-in material catalog");
            Ok(catalog)
        }
    }
}
