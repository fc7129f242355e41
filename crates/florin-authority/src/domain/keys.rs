//! # State Tables and Key Encoding
//!
//! Every piece of persisted state lives in one of a fixed set of tables,
//! addressed by `(Table, key)`. Each table is independently namespaced.
//!
//! ## Key Layout
//!
//! | Table | Key | Value |
//! |-------|-----|-------|
//! | `AllowedDenoms` | denom | empty |
//! | `Owners`, `PendingOwners` | denom | address |
//! | `Admins`, `Systems` | len(denom) ‖ denom ‖ account | empty |
//! | `MintAllowances` | len(denom) ‖ denom ‖ account | u128 BE |
//! | `MaxMintAllowances` | denom | u128 BE |
//! | `DenylistOwner`, `DenylistPendingOwner` | empty | address |
//! | `DenylistAdmins`, `Adversaries` | address | empty |
//!
//! `len(denom)` is a big-endian u16, so a scan over `len(denom) ‖ denom`
//! yields exactly one asset's entries, never those of a denom sharing a
//! textual prefix.

use super::entities::{Address, Amount, Denom};
use super::errors::StoreError;

/// Independent state tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Table {
    AllowedDenoms,
    Owners,
    PendingOwners,
    Admins,
    Systems,
    MintAllowances,
    MaxMintAllowances,
    DenylistOwner,
    DenylistPendingOwner,
    DenylistAdmins,
    Adversaries,
}

/// Key of singleton items (deny-list owner and pending owner).
pub const SINGLETON_KEY: &[u8] = b"";

/// Marker value for set-like tables.
pub const PRESENT: &[u8] = b"";

const AMOUNT_LEN: usize = 16;

pub fn denom_key(denom: &Denom) -> Vec<u8> {
    denom.as_bytes().to_vec()
}

/// Prefix selecting every `(denom, *)` entry of a per-account table.
///
/// Denoms reaching the store are at most `MAX_DENOM_LEN` bytes, so the
/// length always fits the `u16` prefix.
pub fn denom_prefix(denom: &Denom) -> Vec<u8> {
    let bytes = denom.as_bytes();
    let len = u16::try_from(bytes.len()).unwrap_or(u16::MAX);
    let mut prefix = Vec::with_capacity(2 + bytes.len());
    prefix.extend_from_slice(&len.to_be_bytes());
    prefix.extend_from_slice(bytes);
    prefix
}

pub fn account_key(denom: &Denom, account: &Address) -> Vec<u8> {
    let mut key = denom_prefix(denom);
    key.extend_from_slice(account.as_bytes());
    key
}

/// Inverse of [`account_key`].
pub fn split_account_key(table: Table, key: &[u8]) -> Result<(Denom, Address), StoreError> {
    let corrupted = |reason: &str| StoreError::Corrupted {
        table,
        reason: reason.to_string(),
    };

    let (len, rest) = key
        .split_first_chunk::<2>()
        .ok_or_else(|| corrupted("key shorter than length prefix"))?;
    let len = usize::from(u16::from_be_bytes(*len));
    if rest.len() < len {
        return Err(corrupted("denom length exceeds key"));
    }
    let (denom, account) = rest.split_at(len);

    Ok((
        Denom::from_utf8_lossy(denom),
        Address::from_utf8_lossy(account),
    ))
}

pub fn encode_amount(amount: Amount) -> Vec<u8> {
    amount.to_be_bytes().to_vec()
}

pub fn decode_amount(table: Table, bytes: &[u8]) -> Result<Amount, StoreError> {
    let array: [u8; AMOUNT_LEN] = bytes.try_into().map_err(|_| StoreError::Corrupted {
        table,
        reason: format!("amount must be {} bytes, got {}", AMOUNT_LEN, bytes.len()),
    })?;
    Ok(Amount::from_be_bytes(array))
}

pub fn decode_address(table: Table, bytes: &[u8]) -> Result<Address, StoreError> {
    std::str::from_utf8(bytes)
        .map(Address::new)
        .map_err(|e| StoreError::Corrupted {
            table,
            reason: e.to_string(),
        })
}
