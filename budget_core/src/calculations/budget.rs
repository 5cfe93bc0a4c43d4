//! # Budget Calculation
//!
//! Estimates the cost of covering an opening with a catalog material.
//!
//! ## Pipeline
//!
//! 1. Presence/positivity: width and height must be present, finite and `> 0`,
//!    material id must be present and non-empty. A zero dimension is the
//!    same failure as a missing one.
//! 2. Material resolution against the catalog (only after step 1 passes).
//! 3. `area_m2 = width_cm * height_cm / 10_000`
//! 4. `total = area_m2 * price_per_square_meter`, using the raw area
//! 5. `area_m2` and `total` are rounded to two decimals independently.
//!    The unit price passes through as-is.
//!
//! Because the total uses the raw area, a 1 cm x 1 cm opening reports an
//! area of `0.00` m² next to a non-zero total.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use budget_core::calculations::budget::{BudgetCalculator, BudgetRequest};
//! use budget_core::materials::MaterialCatalog;
//!
//! let calculator = BudgetCalculator::new(Arc::new(MaterialCatalog::builtin()));
//! let response = calculator
//!     .calculate(&BudgetRequest::new(200.0, 150.0, "blackout"))
//!     .unwrap();
//!
//! assert_eq!(response.material_name, "Tecido Blackout");
//! assert_eq!(response.area_m2, 3.0);
//! assert_eq!(response.total, 360.0);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{Material, MaterialCatalog};
use crate::units::{round2, Centimeters, SquareMeters};

/// Input for a budget estimate.
///
/// Every field is optional on the wire. Missing or `null` values decode
/// to `None` and are rejected by validation rather than by the decoder.
///
/// ## JSON Example
///
/// ```json
/// { "widthCm": 200, "heightCm": 150, "materialId": "blackout" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    /// Opening width in centimeters
    #[serde(default)]
    pub width_cm: Option<f64>,

    /// Opening height in centimeters
    #[serde(default)]
    pub height_cm: Option<f64>,

    /// Catalog id of the covering material
    #[serde(default)]
    pub material_id: Option<String>,
}

impl BudgetRequest {
    /// Create a fully populated request
    pub fn new(width_cm: f64, height_cm: f64, material_id: impl Into<String>) -> Self {
        BudgetRequest {
            width_cm: Some(width_cm),
            height_cm: Some(height_cm),
            material_id: Some(material_id.into()),
        }
    }

    /// Presence and positivity check.
    ///
    /// Fields are checked in order (width, height, material) and the first
    /// failure is reported.
    pub fn validate(&self) -> CalcResult<ValidatedRequest<'_>> {
        let width = positive_dimension("widthCm", self.width_cm)?;
        let height = positive_dimension("heightCm", self.height_cm)?;
        let material_id = match self.material_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            Some(_) => {
                return Err(CalcError::invalid_parameters(
                    "materialId",
                    "Material id must not be empty",
                ))
            }
            None => {
                return Err(CalcError::invalid_parameters(
                    "materialId",
                    "Material id is required",
                ))
            }
        };

        Ok(ValidatedRequest {
            width,
            height,
            material_id,
        })
    }
}

/// A request that passed the presence/positivity check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedRequest<'a> {
    pub width: Centimeters,
    pub height: Centimeters,
    pub material_id: &'a str,
}

impl ValidatedRequest<'_> {
    /// Unrounded opening area
    pub fn area(&self) -> SquareMeters {
        (self.width * self.height).into()
    }
}

fn positive_dimension(field: &str, value: Option<f64>) -> CalcResult<Centimeters> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(Centimeters(v)),
        Some(v) => Err(CalcError::invalid_parameters(
            field,
            format!("Must be a finite number greater than zero, got {}", v),
        )),
        None => Err(CalcError::invalid_parameters(field, "Value is required")),
    }
}

/// Estimate returned to the caller.
///
/// ## JSON Example
///
/// ```json
/// {
///   "materialName": "Tecido Blackout",
///   "areaM2": 3.0,
///   "pricePerM2": 120.0,
///   "total": 360.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResponse {
    /// Display name of the resolved material
    pub material_name: String,

    /// Opening area in m², rounded to two decimals for display
    pub area_m2: f64,

    /// Unit price of the material, unrounded
    pub price_per_m2: f64,

    /// Total cost, computed from the raw area then rounded to two decimals
    pub total: f64,
}

impl BudgetResponse {
    fn from_raw(material: &Material, area: SquareMeters) -> Self {
        let total = area.value() * material.price_per_square_meter;
        BudgetResponse {
            material_name: material.name.clone(),
            area_m2: round2(area.value()),
            price_per_m2: material.price_per_square_meter,
            total: round2(total),
        }
    }
}

/// Calculate a budget against an explicit catalog.
///
/// # Returns
///
/// * `Ok(BudgetResponse)` - Rounded estimate
/// * `Err(CalcError::InvalidParameters)` - Missing/non-positive dimension or missing material id
/// * `Err(CalcError::MaterialNotFound)` - Material id not in the catalog
pub fn calculate(catalog: &MaterialCatalog, request: &BudgetRequest) -> CalcResult<BudgetResponse> {
    let validated = request.validate().inspect_err(|e| {
        if let CalcError::InvalidParameters { field, reason } = e {
            debug!(code = e.error_code(), field = %field, reason = %reason, "budget request rejected");
        }
    })?;

    let material = catalog.find_by_id(validated.material_id).ok_or_else(|| {
        debug!(
            code = "MATERIAL_NOT_FOUND",
            material_id = validated.material_id,
            "budget request rejected"
        );
        CalcError::material_not_found(validated.material_id)
    })?;

    let response = BudgetResponse::from_raw(material, validated.area());
    debug!(
        material_id = %material.id,
        area_m2 = response.area_m2,
        total = response.total,
        "budget calculated"
    );
    Ok(response)
}

/// Calculator bound to an injected, shared catalog.
///
/// Cheap to clone; every clone shares the same catalog. Safe to call from
/// any number of threads at once.
#[derive(Debug, Clone)]
pub struct BudgetCalculator {
    catalog: Arc<MaterialCatalog>,
}

impl BudgetCalculator {
    pub fn new(catalog: Arc<MaterialCatalog>) -> Self {
        BudgetCalculator { catalog }
    }

    /// The catalog this calculator resolves materials against
    pub fn catalog(&self) -> &MaterialCatalog {
        &self.catalog
    }

    /// See [`calculate`]
    pub fn calculate(&self, request: &BudgetRequest) -> CalcResult<BudgetResponse> {
        calculate(&self.catalog, request)
    }
}

impl Default for BudgetCalculator {
    fn default() -> Self {
        BudgetCalculator::new(Arc::new(MaterialCatalog::builtin()))
    }
}
