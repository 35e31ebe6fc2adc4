use super::{ChainCapabilities, explorer_url, is_base58check_address, is_segwit_address};
use crate::error::AddressError;
use url::Url;

/// P2PKH and P2SH version bytes.
pub(super) const MAINNET_VERSIONS: [u8; 2] = [0x00, 0x05];
pub(super) const TESTNET_VERSIONS: [u8; 2] = [0x6f, 0xc4];

#[derive(Debug, Clone, Copy, Default)]
pub struct Bitcoin;

impl ChainCapabilities for Bitcoin {
    fn qr_code_text(&self, address: &str) -> String {
        format!("bitcoin:{address}")
    }

    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://live.blockcypher.com/btc-testnet/address", &[address])
        } else {
            explorer_url("https://blockchair.com/bitcoin/address", &[address])
        }
    }

    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://live.blockcypher.com/btc-testnet/tx", &[txid])
        } else {
            explorer_url("https://blockchair.com/bitcoin/transaction", &[txid])
        }
    }

    fn supports_address_validation(&self) -> bool {
        true
    }

    fn validate_address(&self, address: &str, testnet: bool) -> Result<bool, AddressError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AddressError::Empty);
        }
        let (versions, hrp) = if testnet {
            (&TESTNET_VERSIONS[..], "tb")
        } else {
            (&MAINNET_VERSIONS[..], "bc")
        };
        Ok(is_base58check_address(address, versions) || is_segwit_address(address, hrp))
    }
}
