//! # Authority Errors
//!
//! Error taxonomy for every authorization outcome, plus the collaborator
//! failures (store, ledger) that abort a command.
//!
//! Every handler fails fast on the first violated precondition. A failed
//! command leaves no state change and emits no event.

use super::entities::{Address, Amount, Denom};
use super::keys::Table;
use std::fmt;
use thiserror::Error;

/// What an ownership operation applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OwnershipSubject {
    /// A controlled asset.
    Asset(Denom),
    /// The global deny-list.
    Denylist,
}

impl fmt::Display for OwnershipSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnershipSubject::Asset(denom) => write!(f, "denom {}", denom),
            OwnershipSubject::Denylist => f.write_str("deny-list"),
        }
    }
}

/// Errors that can occur while executing an authority command or query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorityError {
    // === Registry ===
    #[error("{0} is not a controlled denom")]
    UnknownAsset(Denom),

    #[error("{0} is already controlled")]
    AlreadyControlled(Denom),

    #[error("{denom} already has circulating supply {supply}")]
    NonZeroSupply { denom: Denom, supply: Amount },

    #[error("Signer is not authority: expected {expected}, got {actual}")]
    InvalidAuthority { expected: Address, actual: Address },

    // === Ownership ===
    #[error("There is no owner for {0}")]
    NoOwner(OwnershipSubject),

    #[error("Signer is not owner of {subject}: expected {expected}, got {actual}")]
    NotOwner {
        subject: OwnershipSubject,
        expected: Address,
        actual: Address,
    },

    #[error("Provided owner is the current owner of {0}")]
    SameOwner(OwnershipSubject),

    #[error("There is no pending owner for {0}")]
    NoPendingOwner(OwnershipSubject),

    #[error("Signer is not pending owner of {subject}: expected {expected}, got {actual}")]
    NotPendingOwner {
        subject: OwnershipSubject,
        expected: Address,
        actual: Address,
    },

    // === Roles ===
    #[error("{account} is not an admin of {subject}")]
    NotAdmin {
        subject: OwnershipSubject,
        account: Address,
    },

    #[error("{account} is not a system account of {denom}")]
    NotSystem { denom: Denom, account: Address },

    // === Allowances ===
    #[error("Allowance {requested} cannot be negative or greater than max {max}")]
    InvalidAllowance { requested: i128, max: Amount },

    #[error("Insufficient allowance: requested {requested}, available {available}")]
    InsufficientAllowance { requested: Amount, available: Amount },

    // === Attestation ===
    #[error("No public key known for {0}")]
    MissingPublicKey(Address),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Public key belongs to {derived}, not {claimed}")]
    AddressMismatch { claimed: Address, derived: Address },

    #[error("Invalid signature")]
    InvalidSignature,

    // === Transfer Gate ===
    #[error("{from} is blocked from sending {denom}")]
    Blocked { from: Address, denom: Denom },

    // === Stateless validation ===
    #[error("Invalid {field} address ({address}): {reason}")]
    InvalidAddress {
        field: &'static str,
        address: Address,
        reason: String,
    },

    #[error("Invalid denom: {0:?}")]
    InvalidDenom(String),

    #[error("{field} must be positive, got {amount}")]
    InvalidAmount { field: &'static str, amount: Amount },

    #[error("Invalid genesis state: {0}")]
    InvalidGenesis(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    // === Collaborators ===
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AuthorityError {
    /// Whether this error is an authorization refusal rather than a
    /// collaborator or encoding failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            AuthorityError::InvalidAuthority { .. }
                | AuthorityError::NoOwner(_)
                | AuthorityError::NotOwner { .. }
                | AuthorityError::NotPendingOwner { .. }
                | AuthorityError::NotAdmin { .. }
                | AuthorityError::NotSystem { .. }
        )
    }
}

/// Errors from the key-value store collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Lock poisoned")]
    LockPoisoned,

    #[error("Corrupted value in {table:?}: {reason}")]
    Corrupted { table: Table, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Errors from the balance ledger collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds: {address} holds {available}{denom}, needs {required}")]
    InsufficientFunds {
        address: String,
        denom: Denom,
        required: Amount,
        available: Amount,
    },

    #[error("Transfer restricted: {0}")]
    Restricted(String),

    #[error("Supply overflow for {0}")]
    Overflow(Denom),

    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}
