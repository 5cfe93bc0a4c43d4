//! # Materials Database
//!
//! Priced surface coverings (curtain fabrics, blinds) and the catalog that
//! holds them.
//!
//! ## Example
//!
//! ```rust
//! use budget_core::materials::MaterialCatalog;
//!
//! let catalog = MaterialCatalog::builtin();
//! let blackout = catalog.find_by_id("blackout").unwrap();
//! assert_eq!(blackout.name, "Tecido Blackout");
//! assert_eq!(blackout.price_per_square_meter, 120.0);
//!
//! // Lookups are exact: no trimming, no case folding
//! assert!(catalog.find_by_id("Blackout").is_none());
//! ```

pub mod catalog;

pub use catalog::MaterialCatalog;

use serde::{Deserialize, Serialize};

/// A priced surface covering.
///
/// ## JSON Example
///
/// ```json
/// { "id": "linho", "name": "Tecido Linho", "pricePerSquareMeter": 90.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Stable identifier, unique within a catalog
    pub id: String,

    /// Display name shown to the customer
    pub name: String,

    /// Unit price per square meter (> 0)
    #[serde(alias = "price_per_square_meter")]
    pub price_per_square_meter: f64,
}

impl Material {
    /// Create a new material record
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_per_square_meter: f64) -> Self {
        Material {
            id: id.into(),
            name: name.into(),
            price_per_square_meter,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
