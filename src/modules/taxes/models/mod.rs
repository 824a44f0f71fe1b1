pub mod tax_class;
pub mod tax_configuration;
pub mod tax_item;
pub mod tax_rate;

pub use tax_class::TaxClass;
pub use tax_configuration::{TaxBasis, TaxConfiguration};
pub use tax_item::{TaxComputation, TaxItem};
pub use tax_rate::{TaxRate, TaxRateDescription};
