use super::{ChainCapabilities, explorer_url, is_base58check_address, is_segwit_address};
use crate::error::AddressError;
use url::Url;

#[derive(Debug, Clone, Copy, Default)]
pub struct Litecoin;

impl ChainCapabilities for Litecoin {
    fn qr_code_text(&self, address: &str) -> String {
        format!("litecoin:{address}")
    }

    fn block_chain_address_url(&self, address: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://chain.so/address/LTCTEST", &[address])
        } else {
            explorer_url("https://blockchair.com/litecoin/address", &[address])
        }
    }

    fn block_chain_tx_url(&self, txid: &str, testnet: bool) -> Result<Url, url::ParseError> {
        if testnet {
            explorer_url("https://chain.so/tx/LTCTEST", &[txid])
        } else {
            explorer_url("https://blockchair.com/litecoin/transaction", &[txid])
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
            (&[0x6f, 0xc4, 0x3a][..], "tltc")
        } else {
            (&[0x30, 0x32, 0x05][..], "ltc")
        };
        Ok(is_base58check_address(address, versions) || is_segwit_address(address, hrp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(
            Litecoin.validate_address("LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", false),
            Ok(true)
        );
        assert_eq!(
            Litecoin.validate_address("ltc1qg42tkwuuxefutzxezdkdel39gfstuap288mfea", false),
            Ok(true)
        );
        assert_eq!(
            Litecoin.validate_address("LVg2kJoFNg45Nbpy53h7Fe1wKyeXVRhMH9", true),
            Ok(false)
        );
    }

    #[test]
    fn test_validate_testnet() {
        assert_eq!(
            Litecoin.validate_address("mfcHP2WMCVLsVZA8yrovmhMgxNFW9r98xw", true),
            Ok(true)
        );
        assert_eq!(
            Litecoin.validate_address("tltc1qqypqxpq9qcrsszg2pvxq6rs0zqg3yyc56ktcft", true),
            Ok(true)
        );
        assert_eq!(
            Litecoin.validate_address("ltc1qqypqxpq9qcrsszg2pvxq6rs0zqg3yyc5dyg36p", true),
            Ok(false)
        );
    }

    #[test]
    fn test_mistyped_address_is_invalid() {
        assert_eq!(
            Litecoin.validate_address("LKKHMBjCU89fyFNgSRprDoD8Jb25N8uWvd", false),
            Ok(true)
        );
        assert_eq!(
            Litecoin.validate_address("LKKHMBjCU89fyFNgSRprDoD8Jb25N8uWve", false),
            Ok(false)
        );
        assert_eq!(
            Litecoin.validate_address("ltc1qg42tkwuuxefutzxezdkdel39gfstuap288mfec", false),
            Ok(false)
        );
    }

    #[test]
    fn test_testnet_tx_url() {
        assert_eq!(
            Litecoin.block_chain_tx_url("ff00", true).unwrap().as_str(),
            "https://chain.so/tx/LTCTEST/ff00"
        );
    }
}
