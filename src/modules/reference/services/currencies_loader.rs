use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::reference::models::Currency;

const MAX_CURRENCY_SCALE: u32 = 4;

/// On-disk shape of the currencies reference document
#[derive(Debug, Deserialize)]
struct CurrenciesDocument {
    currencies: Vec<CurrencyRecord>,
}

#[derive(Debug, Deserialize)]
struct CurrencyRecord {
    code: String,
    name: String,
    scale: u32,
}

/// Parses and validates a currencies reference document.
///
/// Codes must be three upper-case ASCII letters and unique; scale is
/// capped at 4 decimal places.
pub fn load_currencies(json: &str) -> Result<Vec<Currency>> {
    let document: CurrenciesDocument = serde_json::from_str(json)
        .map_err(|e| AppError::Configuration(format!("Malformed currencies document: {}", e)))?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut currencies = Vec::with_capacity(document.currencies.len());

    for record in document.currencies {
        if record.code.len() != 3 || !record.code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(AppError::Configuration(format!(
                "Invalid currency code '{}'",
                record.code
            )));
        }

        if record.scale > MAX_CURRENCY_SCALE {
            return Err(AppError::Configuration(format!(
                "Currency '{}' scale {} exceeds maximum of {}",
                record.code, record.scale, MAX_CURRENCY_SCALE
            )));
        }

        if !seen.insert(record.code.clone()) {
            return Err(AppError::Configuration(format!(
                "Duplicate currency '{}'",
                record.code
            )));
        }

        currencies.push(Currency {
            code: record.code,
            name: record.name,
            scale: record.scale,
        });
    }

    info!(
        "Loaded {} currencies from reference document",
        currencies.len()
    );

    Ok(currencies)
}

/// Reads and parses a currencies reference document from disk
pub fn load_currencies_from_path(path: impl AsRef<Path>) -> Result<Vec<Currency>> {
    let json = fs::read_to_string(path)?;
    load_currencies(&json)
}
