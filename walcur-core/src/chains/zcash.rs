use super::{ChainCapabilities, decode_base58check, explorer_url};
use crate::error::AddressError;
use url::Url;

/// Zcash. Only transparent addresses can be validated; shielded ones are
/// reported as undetermined.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zcash;

impl ChainCapabilities for Zcash {
    fn qr_code_text(&self, address: &str) -> String {
        format!("zcash:{address}")
    }

    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://explorer.testnet.z.cash/address", &[address])
        } else {
            explorer_url("https://explorer.zcha.in/accounts", &[address])
        }
    }

    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://explorer.testnet.z.cash/tx", &[txid])
        } else {
            explorer_url("https://explorer.zcha.in/transactions", &[txid])
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
        if address.starts_with('z') {
            return Err(AddressError::UnsupportedKind("shielded"));
        }
        let versions: [[u8; 2]; 2] = if testnet {
            [[0x1d, 0x25], [0x1c, 0xba]]
        } else {
            [[0x1c, 0xb8], [0x1c, 0xbd]]
        };
        Ok(decode_base58check(address).is_some_and(|payload| {
            payload.len() == 22 && versions.iter().any(|v| payload.starts_with(v))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_transparent() {
        assert_eq!(
            Zcash.validate_address("t1Hxw6JqWMnhDK5jRCieg5bFHM2qt7UtQvu", false),
            Ok(true)
        );
        assert_eq!(
            Zcash.validate_address("t1Hxw6JqWMnhDK5jRCieg5bFHM2qt7UtQvu", true),
            Ok(false)
        );
        assert_eq!(
            Zcash.validate_address("tm9ogR9KukTCiTKvrsSxQwFv2x1vhZTydav", true),
            Ok(true)
        );
    }

    #[test]
    fn test_mistyped_address_is_invalid() {
        assert_eq!(
            Zcash.validate_address("t1Hxw6JqWMnhDK5jRCieg5bFHM2qt7UtQvv", false),
            Ok(false)
        );
    }

    #[test]
    fn test_shielded_is_undetermined() {
        assert_eq!(
            Zcash.validate_address("zs1z7rejlpsa98s2rrrfkwmaxu53e4ue0ulcrw0h4x5g8jl04tak0d3mm47vdtahatqrlkngh9sly", false),
            Err(AddressError::UnsupportedKind("shielded"))
        );
    }
}
