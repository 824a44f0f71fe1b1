use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::core::money::round_money;
use crate::modules::orders::models::OrderSummary;

/// Partitions an order into taxable subtotals keyed by tax class code.
///
/// Line items without a class fall back to the default class. The default
/// bucket always exists and receives shipping and handling charges, whether
/// or not any merchandise belongs to it. Every contribution is normalized
/// to monetary scale before accumulation.
pub fn aggregate_by_tax_class(
    order: &OrderSummary,
    default_tax_class_code: &str,
) -> BTreeMap<String, Decimal> {
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();

    for item in &order.line_items {
        let code = item
            .tax_class_code
            .as_deref()
            .unwrap_or(default_tax_class_code);

        *buckets.entry(code.to_string()).or_insert(Decimal::ZERO) += item.extended_price();
    }

    let default_bucket = buckets
        .entry(default_tax_class_code.to_string())
        .or_insert(Decimal::ZERO);
    *default_bucket += round_money(order.shipping_cost);
    if let Some(handling) = order.handling_cost {
        *default_bucket += round_money(handling);
    }

    buckets
}
