// Orders module

pub mod models;

pub use models::{OrderLineItem, OrderSummary};
