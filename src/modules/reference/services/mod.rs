pub mod currencies_loader;
pub mod zones_loader;
