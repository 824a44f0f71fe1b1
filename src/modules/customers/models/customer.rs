use serde::{Deserialize, Serialize};

use crate::modules::customers::models::Address;

/// Customer snapshot as seen by the tax computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
}

impl Customer {
    pub fn new(
        billing_address: Option<Address>,
        shipping_address: Option<Address>,
    ) -> Self {
        Self {
            billing_address,
            shipping_address,
        }
    }

    /// True when the customer carries no address information at all
    pub fn has_no_address(&self) -> bool {
        self.billing_address.is_none() && self.shipping_address.is_none()
    }
}
