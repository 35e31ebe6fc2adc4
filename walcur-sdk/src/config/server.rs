//! Server configuration.

/// Settings reported by the wallet server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Whether the server runs against the test networks.
    pub testnet: bool,
    /// Currency codes the server currently allows, if it reported any.
    pub wallets: Option<Vec<String>>,
}

impl ServerConfig {
    /// Create a new ServerConfig.
    pub fn new(testnet: bool, wallets: Option<Vec<String>>) -> Self {
        Self { testnet, wallets }
    }
}
