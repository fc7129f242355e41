//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid signature format
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Bech32 encoding or decoding failed
    #[error("Invalid bech32 address: {0}")]
    InvalidBech32(String),

    /// Address has the wrong human-readable prefix
    #[error("Address prefix mismatch: expected {expected}, got {actual}")]
    PrefixMismatch {
        /// Expected human-readable part
        expected: String,
        /// Actual human-readable part
        actual: String,
    },
}
