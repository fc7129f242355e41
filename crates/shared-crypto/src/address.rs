//! # Account Addresses
//!
//! Bech32 text encoding of raw account addresses. Raw addresses for
//! secp256k1 accounts are derived in [`crate::ecdsa`].

use crate::CryptoError;
use bech32::{Bech32, Hrp};

/// Length of an account address derived from a public key.
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Encode raw address bytes as bech32 under `prefix`.
pub fn encode_bech32(prefix: &str, data: &[u8]) -> Result<String, CryptoError> {
    let hrp = Hrp::parse(prefix).map_err(|e| CryptoError::InvalidBech32(e.to_string()))?;
    bech32::encode::<Bech32>(hrp, data).map_err(|e| CryptoError::InvalidBech32(e.to_string()))
}

/// Decode a bech32 address, requiring the human-readable part to be `prefix`.
pub fn decode_bech32(prefix: &str, address: &str) -> Result<Vec<u8>, CryptoError> {
    let (hrp, data) =
        bech32::decode(address).map_err(|e| CryptoError::InvalidBech32(e.to_string()))?;

    let actual = hrp.to_lowercase();
    if actual != prefix.to_lowercase() {
        return Err(CryptoError::PrefixMismatch {
            expected: prefix.to_string(),
            actual,
        });
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bip173_empty_payload() {
        assert_eq!(decode_bech32("a", "a12uel5l").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_then_decode() {
        let raw = [0x42u8; ACCOUNT_ADDRESS_LEN];
        let encoded = encode_bech32("noble", &raw).unwrap();

        assert!(encoded.starts_with("noble1"));
        assert_eq!(decode_bech32("noble", &encoded).unwrap(), raw.to_vec());
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        let encoded = encode_bech32("cosmos", &[7u8; ACCOUNT_ADDRESS_LEN]).unwrap();

        assert!(matches!(
            decode_bech32("noble", &encoded),
            Err(CryptoError::PrefixMismatch { .. })
        ));
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let mut encoded = encode_bech32("noble", &[1u8; ACCOUNT_ADDRESS_LEN]).unwrap();
        let last = encoded.pop().unwrap();
        encoded.push(if last == 'q' { 'p' } else { 'q' });

        assert!(matches!(
            decode_bech32("noble", &encoded),
            Err(CryptoError::InvalidBech32(_))
        ));
    }
}
