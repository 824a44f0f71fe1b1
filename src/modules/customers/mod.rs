// Customers module

pub mod models;

pub use models::{Address, Customer};
