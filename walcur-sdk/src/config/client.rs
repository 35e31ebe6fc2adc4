//! Client configuration.

/// Wallet currencies enabled on the client, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub wallet_currencies: Vec<String>,
}

impl ClientConfig {
    /// Create a new ClientConfig.
    pub fn new(wallet_currencies: Vec<String>) -> Self {
        Self { wallet_currencies }
    }
}
