pub mod tax_class_repository;
pub mod tax_configuration_store;
pub mod tax_rate_repository;

pub use tax_class_repository::{InMemoryTaxClassRepository, TaxClassRepository};
pub use tax_configuration_store::{InMemoryTaxConfigurationStore, TaxConfigurationStore};
pub use tax_rate_repository::{InMemoryTaxRateRepository, TaxRateRepository};
