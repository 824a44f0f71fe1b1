// Stores module

pub mod models;

pub use models::Store;
