use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal scale used for all monetary amounts
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to `MONEY_SCALE` decimal places.
///
/// Uses half-up rounding (midpoint rounds away from zero), the convention
/// used for displayed order amounts, rather than the banker's rounding
/// `round_dp` would apply.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes `rate_percent`% of `base`, rounded to monetary scale.
pub fn percentage_of(base: Decimal, rate_percent: Decimal) -> Decimal {
    round_money(base * rate_percent / Decimal::ONE_HUNDRED)
}

/// Validates that an amount is a usable monetary value (non-negative,
/// at most `MONEY_SCALE` decimal places).
pub fn validate_amount(amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("Amount cannot be negative, got {}", amount));
    }

    if amount.scale() > MONEY_SCALE {
        return Err(format!(
            "Amounts must have at most {} decimal places, got {}",
            MONEY_SCALE,
            amount.scale()
        ));
    }

    Ok(())
}
