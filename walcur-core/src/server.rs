//! Access to the settings reported by the wallet server.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use walcur_sdk::config::ServerConfig;

/// Server-side settings the registry reads at query time.
///
/// The registry never caches these values, so an implementation backed by
/// mutable state is observed as it changes.
pub trait ServerSettings {
    /// Whether the server runs against the test networks.
    fn testnet(&self) -> bool;

    /// Currency codes the server currently allows, if it reported any.
    fn wallet_currencies(&self) -> Option<&[String]> {
        None
    }
}

impl ServerSettings for ServerConfig {
    fn testnet(&self) -> bool {
        self.testnet
    }

    fn wallet_currencies(&self) -> Option<&[String]> {
        self.wallets.as_deref()
    }
}

/// A bare testnet switch with no server currency list.
impl ServerSettings for AtomicBool {
    fn testnet(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl ServerSettings for bool {
    fn testnet(&self) -> bool {
        *self
    }
}

impl<T: ServerSettings + ?Sized> ServerSettings for Arc<T> {
    fn testnet(&self) -> bool {
        (**self).testnet()
    }

    fn wallet_currencies(&self) -> Option<&[String]> {
        (**self).wallet_currencies()
    }
}

impl<T: ServerSettings + ?Sized> ServerSettings for &T {
    fn testnet(&self) -> bool {
        (**self).testnet()
    }

    fn wallet_currencies(&self) -> Option<&[String]> {
        (**self).wallet_currencies()
    }
}
