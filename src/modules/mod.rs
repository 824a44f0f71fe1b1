pub mod customers;
pub mod orders;
pub mod reference;
pub mod stores;
pub mod taxes;
