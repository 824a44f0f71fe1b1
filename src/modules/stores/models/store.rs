use serde::{Deserialize, Serialize};

use crate::modules::customers::models::Address;
use crate::modules::reference::models::Zone;

/// Store snapshot: identity plus the address fields that anchor the
/// taxing jurisdiction when the store's own location governs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Store code, the key under which per-store settings are persisted
    pub code: String,
    pub country_code: String,
    pub zone: Option<Zone>,
    pub state_province: Option<String>,
    pub currency_code: String,
    pub default_language: String,
}

impl Store {
    /// The store's own location as an address, for store-basis taxation
    pub fn address(&self) -> Address {
        Address {
            country_code: self.country_code.clone(),
            zone: self.zone.clone(),
            state_province: self.state_province.clone(),
        }
    }
}
