//! Material catalog.
//!
//! Read-only after construction. Built once at startup and shared behind
//! an `Arc` by every caller; nothing in here mutates.

use std::collections::HashSet;

use super::Material;
use crate::errors::{CatalogError, CatalogResult};
use crate::generated::BUILTIN_MATERIALS;

/// Immutable lookup table of materials, in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// Build a catalog from a list of materials.
    ///
    /// # Errors
    ///
    /// * `CatalogError::Empty` - no materials
    /// * `CatalogError::EmptyId` - a material has an empty id
    /// * `CatalogError::DuplicateId` - two materials share an id
    /// * `CatalogError::InvalidPrice` - a price is not finite and positive
    pub fn new(materials: Vec<Material>) -> CatalogResult<Self> {
        if materials.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(materials.len());
        for mat in &materials {
            if mat.id.is_empty() {
                return Err(CatalogError::EmptyId {
                    name: mat.name.clone(),
                });
            }
            if !seen.insert(mat.id.as_str()) {
                return Err(CatalogError::DuplicateId { id: mat.id.clone() });
            }
            if !(mat.price_per_square_meter.is_finite() && mat.price_per_square_meter > 0.0) {
                return Err(CatalogError::InvalidPrice {
                    id: mat.id.clone(),
                    price: mat.price_per_square_meter.to_string(),
                });
            }
        }

        Ok(MaterialCatalog { materials })
    }

    /// The catalog compiled in from `data/materials.toml`.
    ///
    /// The build script already validated the table.
    pub fn builtin() -> Self {
        let materials = BUILTIN_MATERIALS
            .iter()
            .map(|&(id, name, price)| Material::new(id, name, price))
            .collect();
        MaterialCatalog { materials }
    }

    /// Find a material by exact id.
    ///
    /// Case-sensitive and untrimmed. An empty id never matches.
    pub fn find_by_id(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// All materials in definition order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for MaterialCatalog {
    fn default() -> Self {
        MaterialCatalog::builtin()
    }
}

impl<'a> IntoIterator for &'a MaterialCatalog {
    type Item = &'a Material;
    type IntoIter = std::slice::Iter<'a, Material>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
