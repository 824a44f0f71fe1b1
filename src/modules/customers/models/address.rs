use serde::{Deserialize, Serialize};

use crate::modules::reference::models::Zone;

/// A shipping or billing address, reduced to the fields that select a
/// taxing jurisdiction.
///
/// An address carries either a zone (where the country is divided into
/// known zones) or a free-form state/province string, or neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub country_code: String,
    pub zone: Option<Zone>,
    pub state_province: Option<String>,
}

impl Address {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            zone: None,
            state_province: None,
        }
    }

    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn with_state_province(mut self, state_province: impl Into<String>) -> Self {
        self.state_province = Some(state_province.into());
        self
    }
}
