//! Blockchain-specific behavior of wallet currencies.
//!
//! Every crypto currency the registry activates carries one
//! [`ChainCapabilities`] implementation. The built-in ones cover the chains
//! the wallet ships with; callers can attach their own through
//! [`DefinitionTable::insert`](crate::DefinitionTable::insert).
//!
//! Base58check addresses are decoded with `bs58` and segwit addresses with
//! `bech32`, so a mistyped address fails its checksum. Cashaddr reuses the
//! `bech32` alphabet with its own checksum.

mod bitcoin;
mod bitcoin_cash;
mod ethereum;
mod litecoin;
mod zcash;

pub use bitcoin::Bitcoin;
pub use bitcoin_cash::BitcoinCash;
pub use ethereum::Ethereum;
pub use litecoin::Litecoin;
pub use zcash::Zcash;

use crate::error::AddressError;
use std::fmt::Debug;
use std::sync::Arc;
use url::Url;

/// Per-chain helpers exposed alongside a wallet currency.
pub trait ChainCapabilities: Debug + Send + Sync {
    /// Text to encode in a payment QR code for `address`.
    fn qr_code_text(&self, address: &str) -> String;

    /// Block explorer page for an address.
    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError>;

    /// Block explorer page for a transaction.
    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError>;

    /// Whether [`validate_address`](Self::validate_address) is implemented.
    fn supports_address_validation(&self) -> bool {
        false
    }

    /// Check whether `address` is well formed for this chain.
    ///
    /// An `Err` means validity could not be determined.
    fn validate_address(&self, _address: &str, _testnet: bool) -> Result<bool, AddressError> {
        Err(AddressError::Unsupported)
    }
}

/// Look up the built-in capabilities for a mainnet currency code.
pub fn builtin_capabilities(code: &str) -> Option<Arc<dyn ChainCapabilities>> {
    let capabilities: Arc<dyn ChainCapabilities> = match code {
        "BTC" => Arc::new(Bitcoin),
        "BCH" => Arc::new(BitcoinCash),
        "LTC" => Arc::new(Litecoin),
        "ZEC" => Arc::new(Zcash),
        "ETH" => Arc::new(Ethereum),
        _ => return None,
    };
    Some(capabilities)
}

/// Build an explorer URL by appending `segments` to `base`.
///
/// Segments are percent-encoded, so user input cannot change the host or
/// add query parameters.
pub(crate) fn explorer_url(base: &str, segments: &[&str]) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Decode a base58check string, returning the payload without its checksum.
///
/// `None` for bad characters or a checksum mismatch.
pub(crate) fn decode_base58check(address: &str) -> Option<Vec<u8>> {
    bs58::decode(address).with_check(None).into_vec().ok()
}

/// Base58check address with a one-byte version from `versions` and a
/// 20-byte hash.
pub(crate) fn is_base58check_address(address: &str, versions: &[u8]) -> bool {
    decode_base58check(address)
        .is_some_and(|payload| payload.len() == 21 && versions.contains(&payload[0]))
}

/// Segwit address with human-readable part `hrp`, checksum included.
pub(crate) fn is_segwit_address(address: &str, hrp: &str) -> bool {
    match bech32::segwit::decode(address) {
        Ok((decoded_hrp, _, _)) => decoded_hrp.as_str().eq_ignore_ascii_case(hrp),
        Err(_) => false,
    }
}

/// Strip a `scheme:` prefix, matching the scheme case-insensitively.
pub(crate) fn strip_scheme<'a>(address: &'a str, scheme: &str) -> Option<&'a str> {
    let (head, tail) = address.split_once(':')?;
    head.eq_ignore_ascii_case(scheme).then_some(tail)
}
