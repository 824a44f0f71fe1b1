use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency from the reference-data catalog with its decimal precision rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. "CAD"
    pub code: String,
    pub name: String,
    /// Number of decimal places amounts in this currency carry
    pub scale: u32,
}

impl Currency {
    /// Rounds an amount to this currency's scale
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale)
    }

    /// Formats an amount for display with the correct decimal places
    pub fn format_amount(&self, amount: Decimal) -> String {
        if self.scale == 0 {
            format!("{} {}", self.code, amount.round_dp(0))
        } else {
            format!(
                "{} {:.width$}",
                self.code,
                amount,
                width = self.scale as usize
            )
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}
