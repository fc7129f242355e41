//! # Shared Crypto - Account Key Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 | Account keys, off-ledger attestations |
//! | `hashing` | SHA-256, RIPEMD-160 | Sign-doc digests, address derivation |
//! | `address` | bech32 | Human-readable account addresses |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization, high-S rejected on verify
//! - **Addresses**: `RIPEMD160(SHA256(compressed_pubkey))`, 20 bytes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use address::{decode_bech32, encode_bech32, ACCOUNT_ADDRESS_LEN};
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use hashing::{ripemd160, sha256, Hash};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
