//! CommerceKit Order Tax Computation Library
//!
//! This library provides the tax-computation core of the CommerceKit
//! catalog/order-management backend: jurisdiction resolution, tax-class
//! aggregation, compound rate application, and tax-item consolidation.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::customers;
pub use modules::orders;
pub use modules::reference;
pub use modules::stores;
pub use modules::taxes;
