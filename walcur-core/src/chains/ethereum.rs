use super::{ChainCapabilities, explorer_url};
use crate::error::AddressError;
use url::Url;

#[derive(Debug, Clone, Copy, Default)]
pub struct Ethereum;

impl ChainCapabilities for Ethereum {
    fn qr_code_text(&self, address: &str) -> String {
        format!("ethereum:{address}")
    }

    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        explorer_url(Self::explorer(testnet), &["address", address])
    }

    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        explorer_url(Self::explorer(testnet), &["tx", txid])
    }

    fn supports_address_validation(&self) -> bool {
        true
    }

    /// All-lowercase and all-uppercase hex carry no checksum and are accepted
    /// on shape alone. A mixed-case (EIP-55) address needs Keccak-256 to
    /// verify, so it is reported as undetermined rather than guessed at.
    fn validate_address(&self, address: &str, _testnet: bool) -> Result<bool, AddressError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AddressError::Empty);
        }
        let Some(hex) = address.strip_prefix("0x") else {
            return Ok(false);
        };
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(false);
        }
        let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
        if has_upper && has_lower {
            return Err(AddressError::UnsupportedKind("mixed-case checksum"));
        }
        Ok(true)
    }
}

impl Ethereum {
    fn explorer(testnet: bool) -> &'static str {
        if testnet {
            "https://sepolia.etherscan.io"
        } else {
            "https://etherscan.io"
        }
    }
}
