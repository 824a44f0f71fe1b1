use tracing::debug;

use crate::modules::customers::models::Customer;
use crate::modules::reference::models::Zone;
use crate::modules::stores::models::Store;
use crate::modules::taxes::models::{TaxBasis, TaxConfiguration};

/// The single country + zone-or-state combination governing a calculation
#[derive(Debug, Clone, PartialEq)]
pub struct TaxJurisdiction {
    pub country_code: String,
    pub zone: Option<Zone>,
    pub state_province: Option<String>,
}

impl TaxJurisdiction {
    /// True when a non-blank state/province string was resolved and no
    /// zone takes precedence over it
    pub fn uses_state_province(&self) -> bool {
        self.zone.is_none() && self.has_state_province()
    }

    fn has_state_province(&self) -> bool {
        self.state_province
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

/// Picks the address that determines jurisdiction, or decides that no tax
/// applies.
///
/// Returns `None` for every no-tax outcome: the selected address is
/// missing, the customer's province differs from the store's while the
/// configuration disallows cross-province collection, or no zone and no
/// non-blank state/province remains after overrides.
pub fn resolve_tax_basis(
    config: &TaxConfiguration,
    customer: &Customer,
    store: &Store,
) -> Option<TaxJurisdiction> {
    let address = match config.tax_basis {
        TaxBasis::ShippingAddress => customer.shipping_address.clone(),
        TaxBasis::BillingAddress => customer.billing_address.clone(),
        TaxBasis::StoreAddress => Some(store.address()),
    };

    let Some(address) = address else {
        debug!("No address available for tax basis {:?}", config.tax_basis);
        return None;
    };

    let mut country_code = address.country_code;
    let mut zone = address.zone;
    let mut state_province = address.state_province;

    if !config.collect_tax_if_different_province {
        // Zone identity comparison takes precedence; the state/province
        // string comparison is case sensitive
        if let (Some(resolved), Some(store_zone)) = (zone.as_ref(), store.zone.as_ref()) {
            if resolved.id != store_zone.id {
                debug!(
                    "Zone {} differs from store zone {}, tax not collected",
                    resolved.code, store_zone.code
                );
                return None;
            }
        } else if let (Some(resolved), Some(store_state)) =
            (state_province.as_deref(), store.state_province.as_deref())
        {
            if resolved != store_state {
                debug!(
                    "State/province '{}' differs from store's '{}', tax not collected",
                    resolved, store_state
                );
                return None;
            }
        }
    }

    if config.collect_tax_if_different_country {
        country_code = store.country_code.clone();
        zone = store.zone.clone();
        state_province = store.state_province.clone();
    }

    let jurisdiction = TaxJurisdiction {
        country_code,
        zone,
        state_province,
    };

    if jurisdiction.zone.is_none() && !jurisdiction.has_state_province() {
        debug!("Neither zone nor state/province resolved, tax not collected");
        return None;
    }

    Some(jurisdiction)
}
