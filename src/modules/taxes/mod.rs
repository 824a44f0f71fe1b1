// Taxes module

pub mod models;
pub mod repositories;
pub mod services;

pub use models::{TaxBasis, TaxClass, TaxComputation, TaxConfiguration, TaxItem, TaxRate};
pub use repositories::{TaxClassRepository, TaxConfigurationStore, TaxRateRepository};
pub use services::TaxService;
