// Currency/zone reference data

pub mod models;
pub mod services;

pub use models::{Currency, Zone};
pub use services::{currencies_loader, zones_loader};
