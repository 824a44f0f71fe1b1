pub mod address;
pub mod customer;

pub use address::Address;
pub use customer::Customer;
