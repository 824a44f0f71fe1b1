use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::modules::taxes::models::TaxItem;

/// Collapses same-code tax items into one reportable item per code.
///
/// The same rate code can surface from several tax-class buckets; each
/// code keeps one representative item with all amounts summed into it.
/// Output is sorted by code, so totals and display order are reproducible
/// regardless of bucket processing order.
pub fn consolidate_tax_items(items: Vec<TaxItem>) -> Vec<TaxItem> {
    let mut by_code: BTreeMap<String, TaxItem> = BTreeMap::new();

    for item in items {
        match by_code.entry(item.code.clone()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().amount += item.amount;
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }

    by_code.into_values().collect()
}
