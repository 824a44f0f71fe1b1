pub mod order;

pub use order::{OrderLineItem, OrderSummary};
