use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::percentage_of;
use crate::modules::taxes::models::{TaxItem, TaxRate};

/// Computes tax items for one tax-class bucket.
///
/// Rates apply in the order given. A plain rate taxes the original
/// subtotal. A piggyback rate taxes the running total carried forward from
/// earlier rates (subtotal plus tax computed so far), falling back to the
/// original subtotal while nothing has been taxed yet.
pub fn apply_tax_rates(subtotal: Decimal, rates: &[TaxRate], language: &str) -> Vec<TaxItem> {
    let mut items = Vec::with_capacity(rates.len());
    let mut base = subtotal;
    let mut running_total = Decimal::ZERO;

    for rate in rates {
        if rate.piggyback && running_total > Decimal::ZERO {
            base = running_total;
        }

        let amount = percentage_of(base, rate.rate);
        running_total = base + amount;

        debug!(
            "Applied rate {} ({}%) on base {}: tax {}",
            rate.code, rate.rate, base, amount
        );

        items.push(TaxItem {
            code: rate.code.clone(),
            label: rate.label_for(language),
            rate: rate.rate,
            amount,
        });
    }

    items
}
