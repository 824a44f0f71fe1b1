use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A geographic zone (province, state, territory) within a country.
///
/// Zones carry a numeric identity assigned at load time; jurisdiction
/// comparisons use that identity, not the display code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: i64,
    pub code: String,
    pub country_code: String,
    /// Display names keyed by language code
    pub names: HashMap<String, String>,
}

impl Zone {
    /// Returns the display name for a language, falling back to the zone code
    pub fn name_for(&self, language: &str) -> String {
        self.names
            .get(language)
            .cloned()
            .unwrap_or_else(|| self.code.clone())
    }
}
