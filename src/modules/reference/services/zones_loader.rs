use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::reference::models::Zone;

/// On-disk shape of the zones reference document
#[derive(Debug, Deserialize)]
struct ZonesDocument {
    zones: Vec<ZoneRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ZoneRecord {
    code: String,
    country_code: String,
    #[serde(default)]
    names: HashMap<String, String>,
}

/// Parses and validates a zones reference document.
///
/// Zone ids are assigned densely in document order, starting at 1.
/// Validation failures (blank codes, malformed country codes, duplicate
/// (country, zone) pairs) are configuration errors.
pub fn load_zones(json: &str) -> Result<Vec<Zone>> {
    let document: ZonesDocument = serde_json::from_str(json)
        .map_err(|e| AppError::Configuration(format!("Malformed zones document: {}", e)))?;

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut zones = Vec::with_capacity(document.zones.len());

    for (index, record) in document.zones.into_iter().enumerate() {
        if record.code.trim().is_empty() {
            return Err(AppError::Configuration(format!(
                "Zone at index {} has a blank code",
                index
            )));
        }

        if record.country_code.len() != 2
            || !record.country_code.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(AppError::Configuration(format!(
                "Zone '{}' has invalid country code '{}'",
                record.code, record.country_code
            )));
        }

        if !seen.insert((record.country_code.clone(), record.code.clone())) {
            return Err(AppError::Configuration(format!(
                "Duplicate zone '{}' for country '{}'",
                record.code, record.country_code
            )));
        }

        zones.push(Zone {
            id: (index + 1) as i64,
            code: record.code,
            country_code: record.country_code,
            names: record.names,
        });
    }

    info!("Loaded {} zones from reference document", zones.len());

    Ok(zones)
}

/// Reads and parses a zones reference document from disk
pub fn load_zones_from_path(path: impl AsRef<Path>) -> Result<Vec<Zone>> {
    let json = fs::read_to_string(path)?;
    load_zones(&json)
}
