//! # Domain Entities
//!
//! Core value types shared by every component.
//!
//! ## Type Decisions
//!
//! - `Amount = u128`: token amounts are non-negative and bounded by ledger
//!   supply; u128 covers every realistic fiat denomination in base units.
//! - `Address` and `Denom` are string newtypes. Addresses are compared as
//!   text, exactly as the ledger renders them (bech32).

use serde::{Deserialize, Serialize};
use shared_crypto::{
    decode_bech32, encode_bech32, sha256, CryptoError, Secp256k1PublicKey, ACCOUNT_ADDRESS_LEN,
};
use std::fmt;

/// Token amount in base units.
pub type Amount = u128;

/// Bech32 account address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Encode raw address bytes under the given bech32 prefix.
    pub fn from_raw(prefix: &str, raw: &[u8]) -> Result<Self, CryptoError> {
        encode_bech32(prefix, raw).map(Self)
    }

    /// Address the ledger assigns to the holder of `public_key`.
    pub fn from_public_key(
        prefix: &str,
        public_key: &Secp256k1PublicKey,
    ) -> Result<Self, CryptoError> {
        Self::from_raw(prefix, &public_key.to_account_address())
    }

    /// Address of the module account called `name`.
    pub fn for_module(prefix: &str, name: &str) -> Result<Self, CryptoError> {
        Self::from_raw(prefix, &sha256(name.as_bytes())[..ACCOUNT_ADDRESS_LEN])
    }

    /// Decode to raw bytes, checking checksum and prefix.
    pub fn to_raw(&self, prefix: &str) -> Result<Vec<u8>, CryptoError> {
        decode_bech32(prefix, &self.0)
    }

    /// Lossy conversion from stored key bytes.
    pub(crate) fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Longest denomination the ledger accepts, in bytes.
pub const MAX_DENOM_LEN: usize = 128;

/// Token denomination, e.g. `ueure`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denom(String);

impl Denom {
    pub fn new(denom: impl Into<String>) -> Self {
        Self(denom.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Non-empty and at most [`MAX_DENOM_LEN`] bytes.
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty() && self.0.len() <= MAX_DENOM_LEN
    }

    pub(crate) fn from_utf8_lossy(bytes: &[u8]) -> Self {
        Self(String::from_utf8_lossy(bytes).into_owned())
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Denom {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A single denomination and amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: Denom,
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: impl Into<Denom>, amount: Amount) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// A multi-denomination amount, as carried by one ledger transfer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    /// Build from coins; zero entries are dropped and duplicates merged.
    pub fn new(coins: impl IntoIterator<Item = Coin>) -> Self {
        let mut merged: Vec<Coin> = Vec::new();
        for coin in coins.into_iter().filter(|c| c.amount > 0) {
            match merged.iter_mut().find(|c| c.denom == coin.denom) {
                Some(existing) => existing.amount = existing.amount.saturating_add(coin.amount),
                None => merged.push(coin),
            }
        }
        merged.sort_by(|a, b| a.denom.cmp(&b.denom));
        Self(merged)
    }

    pub fn single(denom: impl Into<Denom>, amount: Amount) -> Self {
        Self::new([Coin::new(denom, amount)])
    }

    /// Amount of `denom` carried; zero when absent.
    pub fn amount_of(&self, denom: &Denom) -> Amount {
        self.0
            .iter()
            .find(|c| &c.denom == denom)
            .map_or(0, |c| c.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self::new([coin])
    }
}

/// An `(asset, account)` role membership, used in listings and genesis.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountEntry {
    pub denom: Denom,
    pub address: Address,
}

/// A mint allowance held by a system account for one asset.
#[serde_with::serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceEntry {
    pub denom: Denom,
    pub address: Address,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub allowance: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coins_amount_of() {
        let coins = Coins::new([Coin::new("ueure", 10), Coin::new("uusdc", 5)]);

        assert_eq!(coins.amount_of(&Denom::from("ueure")), 10);
        assert_eq!(coins.amount_of(&Denom::from("uusdc")), 5);
        assert_eq!(coins.amount_of(&Denom::from("ugbpe")), 0);
    }

    #[test]
    fn test_coins_drop_zero_and_merge_duplicates() {
        let coins = Coins::new([
            Coin::new("ueure", 0),
            Coin::new("uusdc", 3),
            Coin::new("uusdc", 4),
        ]);

        assert_eq!(coins.iter().count(), 1);
        assert_eq!(coins.amount_of(&Denom::from("uusdc")), 7);
        assert_eq!(coins.amount_of(&Denom::from("ueure")), 0);
    }

    #[test]
    fn test_address_from_public_key_round_trips_prefix() {
        let keypair = shared_crypto::Secp256k1KeyPair::generate();
        let address = Address::from_public_key("noble", &keypair.public_key()).unwrap();

        assert!(address.as_str().starts_with("noble1"));
        assert_eq!(
            address.to_raw("noble").unwrap(),
            keypair.public_key().to_account_address().to_vec()
        );
    }

    #[test]
    fn test_allowance_entry_serializes_amount_as_string() {
        let entry = AllowanceEntry {
            denom: "ueure".into(),
            address: "noble1abc".into(),
            allowance: 340_282_366_920_938_463_463_374_607_431_768_211_455,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json["allowance"],
            "340282366920938463463374607431768211455"
        );
    }
}
