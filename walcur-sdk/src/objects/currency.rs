use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Whether a currency lives on a blockchain or is a national currency.
#[serde(rename_all = "lowercase")]
pub enum CurrencyType {
    Crypto,
    Fiat,
}

/// A currency definition as supplied by the definition table.
///
/// Fiat entries usually only carry the first five fields. Crypto entries
/// that are enabled on the client must also provide
/// `average_moderated_transaction_size` and `supports_escrow_timeout`,
/// which the registry checks when it activates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Mainnet currency code, e.g. `BTC`.
    pub code: String,
    pub currency_type: CurrencyType,
    /// Number of decimal places of the smallest unit.
    pub divisibility: u32,
    /// Human-readable name.
    pub name: String,
    /// Currency code used on the test network. Empty for fiat.
    #[serde(default)]
    pub testnet_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Link to a page explaining where to obtain the coin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub need_coin_link: Option<String>,
    /// Average block time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<u64>,
    /// Size in bytes of a fee-bump transaction, if fee bumping is supported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_bump_transaction_size: Option<u32>,
    /// Average size in bytes of a moderated (escrowed) transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_moderated_transaction_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_escrow_timeout: Option<bool>,
}

impl CurrencyDefinition {
    /// Create a fiat currency definition.
    pub fn fiat(code: impl Into<String>, name: impl Into<String>, divisibility: u32) -> Self {
        Self::bare(code.into(), CurrencyType::Fiat, name.into(), divisibility, String::new())
    }

    /// Create a crypto currency definition with no optional metadata.
    pub fn crypto(
        code: impl Into<String>,
        name: impl Into<String>,
        divisibility: u32,
        testnet_code: impl Into<String>,
    ) -> Self {
        Self::bare(
            code.into(),
            CurrencyType::Crypto,
            name.into(),
            divisibility,
            testnet_code.into(),
        )
    }

    fn bare(
        code: String,
        currency_type: CurrencyType,
        name: String,
        divisibility: u32,
        testnet_code: String,
    ) -> Self {
        Self {
            code,
            currency_type,
            divisibility,
            name,
            testnet_code,
            symbol: None,
            icon: None,
            need_coin_link: None,
            block_time: None,
            fee_bump_transaction_size: None,
            average_moderated_transaction_size: None,
            supports_escrow_timeout: None,
        }
    }

    /// Set the moderated-transaction metadata every enabled crypto
    /// currency needs.
    pub fn with_escrow(mut self, average_moderated_transaction_size: u32, supports_timeout: bool) -> Self {
        self.average_moderated_transaction_size = Some(average_moderated_transaction_size);
        self.supports_escrow_timeout = Some(supports_timeout);
        self
    }

    pub fn is_crypto(&self) -> bool {
        self.currency_type == CurrencyType::Crypto
    }
}
