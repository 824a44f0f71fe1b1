use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A percentage tax rate tied to a jurisdiction and a tax class.
///
/// A rate applies either within a zone (`zone_id`) or within a free-form
/// state/province string, never both. `piggyback` marks a compound rate:
/// its base is the previously taxed amount rather than the original
/// subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: i64,
    /// Unique rate code; same-code tax items are consolidated before
    /// being returned
    pub code: String,
    /// Percentage, e.g. 9.975 for 9.975%
    pub rate: Decimal,
    pub piggyback: bool,
    /// Application order within a jurisdiction; lower applies first
    pub priority: i32,
    pub country_code: String,
    pub zone_id: Option<i64>,
    pub state_province: Option<String>,
    pub tax_class_code: String,
    pub descriptions: Vec<TaxRateDescription>,
}

/// Human-readable label for a rate in one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRateDescription {
    pub language: String,
    pub name: String,
}

impl TaxRate {
    /// Validate that the rate is a usable percentage within a single
    /// jurisdiction dimension
    pub fn validate(&self) -> Result<()> {
        if self.rate < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Tax rate '{}' cannot be negative",
                self.code
            )));
        }

        if self.rate > Decimal::ONE_HUNDRED {
            return Err(AppError::validation(format!(
                "Tax rate '{}' cannot exceed 100%",
                self.code
            )));
        }

        if self.zone_id.is_none() && self.state_province.is_none() {
            return Err(AppError::validation(format!(
                "Tax rate '{}' must reference a zone or a state/province",
                self.code
            )));
        }

        Ok(())
    }

    /// Display label for a language: the requested language's name, else
    /// the first available name, else the rate code
    pub fn label_for(&self, language: &str) -> String {
        self.descriptions
            .iter()
            .find(|d| d.language == language)
            .or_else(|| self.descriptions.first())
            .map(|d| d.name.clone())
            .unwrap_or_else(|| self.code.clone())
    }
}
