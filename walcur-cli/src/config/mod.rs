//! Configuration module for walcur.
//!
//! Handles loading configuration from TOML files and applying CLI and
//! environment overrides.

pub mod file;

use crate::config::file::FileConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walcur_core::{DefinitionTable, RegistryError, WalletCurrencyRegistry};
use walcur_sdk::config::{ClientConfig, ServerConfig};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Loaded configuration result containing all parts.
#[derive(Debug)]
pub struct LoadedConfig {
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub definitions: DefinitionTable,
}

impl LoadedConfig {
    /// Build the wallet currency registry from the loaded parts.
    pub fn into_registry(self) -> Result<WalletCurrencyRegistry<ServerConfig>, RegistryError> {
        WalletCurrencyRegistry::with_currencies(
            self.server,
            &self.client.wallet_currencies,
            &self.definitions,
        )
    }
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    testnet_override: Option<bool>,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, testnet_override: Option<bool>) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            testnet_override,
        }
    }

    /// Read, override, validate and build the configuration.
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(testnet) = self.testnet_override {
            file_config.server.testnet = testnet;
        }

        self.validate(&file_config)?;

        Ok(build_loaded_config(file_config))
    }

    fn validate(&self, config: &FileConfig) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for currency in &config.currencies {
            if !seen.insert(currency.code.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "currency {} is defined more than once",
                    currency.code
                )));
            }
        }
        if config.client.wallet_currencies.is_empty() {
            tracing::warn!("No wallet currencies enabled in the client config");
        }
        Ok(())
    }
}

fn build_loaded_config(file_config: FileConfig) -> LoadedConfig {
    LoadedConfig {
        server: ServerConfig::new(file_config.server.testnet, file_config.server.wallets),
        client: ClientConfig::new(file_config.client.wallet_currencies),
        definitions: DefinitionTable::with_builtin_capabilities(file_config.currencies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
[server]
testnet = false

[client]
wallet_currencies = ["BCH", "BTC", "XMR"]

[[currencies]]
code = "AED"
currency_type = "fiat"
divisibility = 2
name = "UAE Dirham"

[[currencies]]
code = "BCH"
currency_type = "crypto"
divisibility = 8
name = "Bitcoin Cash"
testnet_code = "TBCH"
average_moderated_transaction_size = 184
supports_escrow_timeout = true

[[currencies]]
code = "BTC"
currency_type = "crypto"
divisibility = 8
name = "Bitcoin"
testnet_code = "TBTC"
average_moderated_transaction_size = 184
supports_escrow_timeout = true
"#;

    #[test]
    fn test_load_builds_registry() {
        let loaded = ConfigLoader::new("unused.toml", None).load_str(CONFIG).unwrap();
        assert_eq!(loaded.client.wallet_currencies, ["BCH", "BTC", "XMR"]);
        assert_eq!(loaded.definitions.len(), 3);

        let registry = loaded.into_registry().unwrap();
        assert_eq!(registry.supported_wallet_currencies(None), ["BCH", "BTC"]);
    }

    #[test]
    fn test_testnet_override() {
        let loaded = ConfigLoader::new("unused.toml", Some(true)).load_str(CONFIG).unwrap();
        assert!(loaded.server.testnet);
        let registry = loaded.into_registry().unwrap();
        assert_eq!(registry.supported_wallet_currencies(None), ["TBCH", "TBTC"]);
    }

    #[test]
    fn test_duplicate_definitions_rejected() {
        let duplicated = format!(
            "{CONFIG}\n[[currencies]]\ncode = \"AED\"\ncurrency_type = \"fiat\"\ndivisibility = 2\nname = \"Dirham\"\n"
        );
        let err = ConfigLoader::new("unused.toml", None)
            .load_str(&duplicated)
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_malformed_definition_fails_registry() {
        let config = CONFIG.replace("average_moderated_transaction_size = 184\nsupports_escrow_timeout = true\n\n[[currencies]]\ncode = \"BTC\"", "\n[[currencies]]\ncode = \"BTC\"");
        let loaded = ConfigLoader::new("unused.toml", None).load_str(&config).unwrap();
        assert!(matches!(
            loaded.into_registry(),
            Err(RegistryError::MalformedDefinition { ref code, .. }) if code == "BCH"
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::new("/nonexistent/walcur-config.toml", None)
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
