pub mod currency;

pub use currency::{CurrencyDefinition, CurrencyType};
