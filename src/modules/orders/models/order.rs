use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::round_money;
use crate::core::{AppError, Result};

/// A single product line in an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub description: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Tax class this item belongs to; items without one fall back to the
    /// store's default tax class
    pub tax_class_code: Option<String>,
}

impl OrderLineItem {
    /// Create a new line item with validation
    pub fn new(
        description: impl Into<String>,
        quantity: i32,
        unit_price: Decimal,
        tax_class_code: Option<String>,
    ) -> Result<Self> {
        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_class_code,
        })
    }

    /// Extended price: quantity × unit_price, normalized to monetary scale
    pub fn extended_price(&self) -> Decimal {
        round_money(Decimal::from(self.quantity) * self.unit_price)
    }
}

/// Order snapshot as seen by the tax computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub line_items: Vec<OrderLineItem>,
    pub shipping_cost: Decimal,
    pub handling_cost: Option<Decimal>,
}

impl OrderSummary {
    pub fn new(line_items: Vec<OrderLineItem>, shipping_cost: Decimal) -> Self {
        Self {
            line_items,
            shipping_cost,
            handling_cost: None,
        }
    }

    pub fn with_handling_cost(mut self, handling_cost: Decimal) -> Self {
        self.handling_cost = Some(handling_cost);
        self
    }
}
