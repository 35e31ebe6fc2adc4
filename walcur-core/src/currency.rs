//! Validated wallet currencies.

use crate::chains::ChainCapabilities;
use crate::definitions::DefinitionEntry;
use crate::error::RegistryError;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A crypto currency that is enabled on the client and fully defined.
///
/// Built by the registry from a [`DefinitionEntry`]; the required metadata
/// is checked once at that point so queries never see a partial entry.
#[derive(Debug, Clone)]
pub struct WalletCurrency {
    pub code: String,
    pub name: String,
    /// Code used on the test network. May be empty.
    pub testnet_code: String,
    pub coin_divisibility: u32,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    pub need_coin_link: Option<String>,
    pub block_time: Option<Duration>,
    pub fee_bump_transaction_size: Option<NonZeroU32>,
    pub average_moderated_transaction_size: NonZeroU32,
    pub supports_escrow_timeout: bool,
    capabilities: Arc<dyn ChainCapabilities>,
}

impl WalletCurrency {
    pub(crate) fn from_entry(entry: &DefinitionEntry) -> Result<Self, RegistryError> {
        let def = &entry.definition;
        if def.code.is_empty() {
            return Err(RegistryError::EmptyCode);
        }
        let average_moderated_transaction_size = match def.average_moderated_transaction_size {
            None => {
                return Err(RegistryError::malformed(
                    &def.code,
                    "missing average_moderated_transaction_size",
                ));
            }
            Some(size) => NonZeroU32::new(size).ok_or_else(|| {
                RegistryError::malformed(
                    &def.code,
                    "average_moderated_transaction_size must be greater than zero",
                )
            })?,
        };
        let fee_bump_transaction_size = match def.fee_bump_transaction_size {
            None => None,
            Some(size) => Some(NonZeroU32::new(size).ok_or_else(|| {
                RegistryError::malformed(
                    &def.code,
                    "fee_bump_transaction_size must be greater than zero",
                )
            })?),
        };
        let supports_escrow_timeout = def.supports_escrow_timeout.ok_or_else(|| {
            RegistryError::malformed(&def.code, "missing supports_escrow_timeout")
        })?;
        let capabilities = entry
            .capabilities
            .clone()
            .ok_or_else(|| RegistryError::MissingCapabilities(def.code.clone()))?;

        Ok(Self {
            code: def.code.clone(),
            name: def.name.clone(),
            testnet_code: def.testnet_code.clone(),
            coin_divisibility: def.divisibility,
            symbol: def.symbol.clone(),
            icon: def.icon.clone(),
            need_coin_link: def.need_coin_link.clone(),
            block_time: def.block_time.map(Duration::from_millis),
            fee_bump_transaction_size,
            average_moderated_transaction_size,
            supports_escrow_timeout,
            capabilities,
        })
    }

    /// The code to use on the selected network.
    pub fn code_for(&self, testnet: bool) -> &str {
        if testnet {
            &self.testnet_code
        } else {
            &self.code
        }
    }

    pub fn capabilities(&self) -> &dyn ChainCapabilities {
        self.capabilities.as_ref()
    }

    pub fn qr_code_text(&self, address: &str) -> String {
        self.capabilities.qr_code_text(address)
    }

    pub fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        self.capabilities.block_chain_address_url(address, testnet)
    }

    pub fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        self.capabilities.block_chain_tx_url(txid, testnet)
    }

    pub fn has_address_validator(&self) -> bool {
        self.capabilities.supports_address_validation()
    }

    /// Check an address with the chain's validator.
    ///
    /// Returns `None` when there is no validator or it could not decide.
    pub fn address_validity(&self, address: &str, testnet: bool) -> Option<bool> {
        if !self.has_address_validator() {
            return None;
        }
        match self.capabilities.validate_address(address, testnet) {
            Ok(valid) => Some(valid),
            Err(e) => {
                tracing::debug!(code = %self.code, "address validity undetermined: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{Bitcoin, Zcash};
    use crate::error::AddressError;
    use walcur_sdk::objects::CurrencyDefinition;

    #[derive(Debug)]
    struct NoValidator;

    impl ChainCapabilities for NoValidator {
        fn qr_code_text(&self, address: &str) -> String {
            address.to_owned()
        }

        fn block_chain_address_url(&self, address: &str, _testnet: bool) -> Result<Url, url::ParseError> {
            Url::parse(&format!("https://example.com/{address}"))
        }

        fn block_chain_tx_url(&self, txid: &str, _testnet: bool) -> Result<Url, url::ParseError> {
            Url::parse(&format!("https://example.com/{txid}"))
        }
    }

    fn entry(
        definition: CurrencyDefinition,
        capabilities: Option<Arc<dyn ChainCapabilities>>,
    ) -> DefinitionEntry {
        DefinitionEntry {
            definition,
            capabilities,
        }
    }

    fn btc() -> CurrencyDefinition {
        CurrencyDefinition::crypto("BTC", "Bitcoin", 8, "TBTC").with_escrow(184, true)
    }

    #[test]
    fn test_from_entry() {
        let mut def = btc();
        def.block_time = Some(600_000);
        def.fee_bump_transaction_size = Some(154);
        let currency = WalletCurrency::from_entry(&entry(def, Some(Arc::new(Bitcoin)))).unwrap();
        assert_eq!(currency.coin_divisibility, 8);
        assert_eq!(currency.block_time, Some(Duration::from_secs(600)));
        assert_eq!(currency.fee_bump_transaction_size.map(NonZeroU32::get), Some(154));
        assert_eq!(currency.average_moderated_transaction_size.get(), 184);
        assert!(currency.supports_escrow_timeout);
        assert_eq!(currency.code_for(false), "BTC");
        assert_eq!(currency.code_for(true), "TBTC");
    }

    #[test]
    fn test_rejects_malformed() {
        let missing_size = CurrencyDefinition::crypto("BTC", "Bitcoin", 8, "TBTC");
        assert!(matches!(
            WalletCurrency::from_entry(&entry(missing_size, Some(Arc::new(Bitcoin)))),
            Err(RegistryError::MalformedDefinition { .. })
        ));

        let zero_size = CurrencyDefinition::crypto("BTC", "Bitcoin", 8, "TBTC").with_escrow(0, true);
        assert!(matches!(
            WalletCurrency::from_entry(&entry(zero_size, Some(Arc::new(Bitcoin)))),
            Err(RegistryError::MalformedDefinition { .. })
        ));

        let mut zero_bump = btc();
        zero_bump.fee_bump_transaction_size = Some(0);
        assert!(matches!(
            WalletCurrency::from_entry(&entry(zero_bump, Some(Arc::new(Bitcoin)))),
            Err(RegistryError::MalformedDefinition { .. })
        ));

        let mut no_timeout = btc();
        no_timeout.supports_escrow_timeout = None;
        assert!(matches!(
            WalletCurrency::from_entry(&entry(no_timeout, Some(Arc::new(Bitcoin)))),
            Err(RegistryError::MalformedDefinition { .. })
        ));

        assert_eq!(
            WalletCurrency::from_entry(&entry(btc(), None)).unwrap_err(),
            RegistryError::MissingCapabilities("BTC".to_string())
        );

        let empty = CurrencyDefinition::crypto("", "Nothing", 8, "").with_escrow(1, false);
        assert_eq!(
            WalletCurrency::from_entry(&entry(empty, Some(Arc::new(Bitcoin)))).unwrap_err(),
            RegistryError::EmptyCode
        );
    }

    #[test]
    fn test_address_validity_returns_bool_or_undetermined() {
        let btc = WalletCurrency::from_entry(&entry(btc(), Some(Arc::new(Bitcoin)))).unwrap();
        assert_eq!(btc.address_validity("abcdefghijklmnop", false), Some(false));
        assert_eq!(btc.address_validity("", false), None);

        let zec_def = CurrencyDefinition::crypto("ZEC", "Zcash", 8, "TZEC").with_escrow(337, false);
        let zec = WalletCurrency::from_entry(&entry(zec_def, Some(Arc::new(Zcash)))).unwrap();
        assert_eq!(zec.address_validity("zs1abc", false), None);
        assert_eq!(
            zec.capabilities().validate_address("zs1abc", false),
            Err(AddressError::UnsupportedKind("shielded"))
        );
    }

    #[test]
    fn test_without_validator() {
        let def = CurrencyDefinition::crypto("XYZ", "Xyz", 2, "TXYZ").with_escrow(100, false);
        let currency = WalletCurrency::from_entry(&entry(def, Some(Arc::new(NoValidator)))).unwrap();
        assert!(!currency.has_address_validator());
        assert_eq!(currency.address_validity("anything", false), None);
        assert_eq!(
            currency.block_chain_tx_url("abc", false).unwrap().as_str(),
            "https://example.com/abc"
        );
        assert_eq!(currency.qr_code_text("addr"), "addr");
    }
}
