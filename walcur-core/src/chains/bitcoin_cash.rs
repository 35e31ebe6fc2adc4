use super::bitcoin::{MAINNET_VERSIONS, TESTNET_VERSIONS};
use super::{ChainCapabilities, explorer_url, is_base58check_address, strip_scheme};
use bech32::Fe32;
use crate::error::AddressError;
use url::Url;

const MAINNET_PREFIX: &str = "bitcoincash";
const TESTNET_PREFIX: &str = "bchtest";

/// Bitcoin Cash. Accepts cashaddr (with or without the network prefix) and
/// legacy base58 addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitcoinCash;

// Generator of cashaddr's 40-bit BCH code, which `bech32` does not ship.
const CASHADDR_GENERATOR: [u64; 5] = [
    0x98f2bc8e61,
    0x79b76d99e2,
    0xf33e5fb3c4,
    0xae2eabe2a8,
    0x1e4f43e470,
];

impl BitcoinCash {
    /// Check a 42-character cashaddr payload (P2PKH or P2SH, 160-bit hash)
    /// against the checksum for `prefix`.
    fn is_cashaddr_payload(prefix: &str, payload: &str) -> bool {
        let mixed_case = payload.chars().any(|c| c.is_ascii_uppercase())
            && payload.chars().any(|c| c.is_ascii_lowercase());
        if payload.len() != 42 || mixed_case {
            return false;
        }
        let Some(values) = payload
            .chars()
            .map(|c| Fe32::from_char(c.to_ascii_lowercase()).ok().map(Fe32::to_u8))
            .collect::<Option<Vec<u8>>>()
        else {
            return false;
        };
        // The first value carries the version: 0 for P2PKH, 1 for P2SH.
        if values.first().is_none_or(|version| *version > 1) {
            return false;
        }
        let prefix_values = prefix.bytes().map(|b| b & 0x1f);
        cashaddr_polymod(prefix_values.chain([0]).chain(values)) == 0
    }
}

fn cashaddr_polymod(values: impl IntoIterator<Item = u8>) -> u64 {
    let mut c: u64 = 1;
    for d in values {
        let c0 = c >> 35;
        c = ((c & 0x07_ffff_ffff) << 5) ^ u64::from(d);
        for (i, g) in CASHADDR_GENERATOR.iter().enumerate() {
            if (c0 >> i) & 1 == 1 {
                c ^= g;
            }
        }
    }
    c ^ 1
}

impl ChainCapabilities for BitcoinCash {
    fn qr_code_text(&self, address: &str) -> String {
        if strip_scheme(address, MAINNET_PREFIX).is_some() {
            address.to_owned()
        } else {
            format!("{MAINNET_PREFIX}:{address}")
        }
    }

    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            let address = strip_scheme(address, TESTNET_PREFIX).unwrap_or(address);
            let prefixed = format!("{TESTNET_PREFIX}:{address}");
            explorer_url("https://explorer.bitcoin.com/tbch/address", &[&prefixed])
        } else {
            explorer_url("https://blockchair.com/bitcoin-cash/address", &[address])
        }
    }

    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://explorer.bitcoin.com/tbch/tx", &[txid])
        } else {
            explorer_url("https://blockchair.com/bitcoin-cash/transaction", &[txid])
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
        let (own, other, versions) = if testnet {
            (TESTNET_PREFIX, MAINNET_PREFIX, &TESTNET_VERSIONS[..])
        } else {
            (MAINNET_PREFIX, TESTNET_PREFIX, &MAINNET_VERSIONS[..])
        };
        if strip_scheme(address, other).is_some() {
            return Ok(false);
        }
        let payload = strip_scheme(address, own).unwrap_or(address);
        Ok(Self::is_cashaddr_payload(own, payload) || is_base58check_address(payload, versions))
    }
}
