//! TOML file configuration structures.
//!
//! These structs directly map to the `walcur-config.toml` file format.

use serde::{Deserialize, Serialize};
use walcur_sdk::objects::CurrencyDefinition;

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub client: ClientConfig,
    #[serde(default)]
    pub currencies: Vec<CurrencyDefinition>,
}

/// Settings reported by the wallet server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub testnet: bool,
    /// Currency codes the server allows. Omit to accept every client currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallets: Option<Vec<String>>,
}

/// Client-side wallet settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Enabled wallet currency codes, in display order.
    pub wallet_currencies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use walcur_sdk::objects::CurrencyType;

    #[test]
    fn test_config_parsing() {
        let toml_str = r#"
[server]
testnet = true
wallets = ["BTC", "BCH"]

[client]
wallet_currencies = ["BCH", "BTC"]

[[currencies]]
code = "AED"
currency_type = "fiat"
divisibility = 2
name = "UAE Dirham"

[[currencies]]
code = "BTC"
currency_type = "crypto"
divisibility = 8
name = "Bitcoin"
testnet_code = "TBTC"
average_moderated_transaction_size = 184
supports_escrow_timeout = true
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.server.testnet);
        assert_eq!(config.server.wallets.as_deref().map(<[String]>::len), Some(2));
        assert_eq!(config.client.wallet_currencies, ["BCH", "BTC"]);
        assert_eq!(config.currencies.len(), 2);
        assert_eq!(config.currencies[0].currency_type, CurrencyType::Fiat);
    }

    #[test]
    fn test_server_section_is_optional() {
        let toml_str = r#"
[client]
wallet_currencies = []
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.server.testnet);
        assert!(config.server.wallets.is_none());
        assert!(config.currencies.is_empty());
    }

    #[test]
    fn test_client_section_is_required() {
        assert!(toml::from_str::<FileConfig>("[server]\ntestnet = false\n").is_err());
    }
}
