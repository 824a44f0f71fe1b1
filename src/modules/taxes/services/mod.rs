pub mod basis_resolver;
pub mod class_aggregator;
pub mod item_consolidator;
pub mod rate_applier;
pub mod tax_service;

pub use basis_resolver::{resolve_tax_basis, TaxJurisdiction};
pub use class_aggregator::aggregate_by_tax_class;
pub use item_consolidator::consolidate_tax_items;
pub use rate_applier::apply_tax_rates;
pub use tax_service::TaxService;
