use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed line of tax to display and charge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxItem {
    /// Code of the originating rate
    pub code: String,
    /// Localized display label
    pub label: String,
    /// Percentage that produced the amount
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Outcome of a tax computation.
///
/// `NoTax` is a valid result (missing jurisdiction, empty order, no
/// applicable rates), distinct from the error path: errors mean the
/// computation could not be carried out at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TaxComputation {
    NoTax,
    Computed(Vec<TaxItem>),
}

impl TaxComputation {
    pub fn is_no_tax(&self) -> bool {
        matches!(self, TaxComputation::NoTax)
    }

    /// The computed items, if any
    pub fn items(&self) -> Option<&[TaxItem]> {
        match self {
            TaxComputation::NoTax => None,
            TaxComputation::Computed(items) => Some(items),
        }
    }

    /// Sum of all computed tax amounts; zero for `NoTax`
    pub fn total(&self) -> Decimal {
        match self {
            TaxComputation::NoTax => Decimal::ZERO,
            TaxComputation::Computed(items) => items.iter().map(|i| i.amount).sum(),
        }
    }
}
