#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod chains;
pub mod currency;
pub mod definitions;
pub mod error;
pub mod registry;
pub mod server;

pub use currency::WalletCurrency;
pub use definitions::DefinitionTable;
pub use error::{AddressError, RegistryError};
pub use registry::{SupportOptions, WalletCurrencyRegistry};
pub use server::ServerSettings;
