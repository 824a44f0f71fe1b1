pub mod currency;
pub mod zone;

pub use currency::Currency;
pub use zone::Zone;
