use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Which address determines the taxing jurisdiction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxBasis {
    ShippingAddress,
    BillingAddress,
    StoreAddress,
}

/// Per-store tax settings, persisted as a JSON document.
///
/// Read once per calculation. When no document is stored for a store the
/// default applies: ship-to basis, no cross-province and no cross-country
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfiguration {
    pub tax_basis: TaxBasis,
    /// Collect tax when the customer's province/state differs from the
    /// store's
    #[serde(default)]
    pub collect_tax_if_different_province: bool,
    /// Collect tax across country borders, using the store's own
    /// jurisdiction
    #[serde(default)]
    pub collect_tax_if_different_country: bool,
}

impl TaxConfiguration {
    /// Parses a persisted settings document.
    ///
    /// A document that cannot be parsed is a configuration error, never a
    /// silent fallback to defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            AppError::Configuration(format!("Malformed tax configuration: {}", e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| AppError::Internal(format!("Failed to serialize tax configuration: {}", e)))
    }
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self {
            tax_basis: TaxBasis::ShippingAddress,
            collect_tax_if_different_province: false,
            collect_tax_if_different_country: false,
        }
    }
}
