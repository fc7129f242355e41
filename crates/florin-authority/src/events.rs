//! # Authority Events
//!
//! Typed events emitted on successful state changes. Command events are
//! buffered in the command's transaction and only published on commit.
//! Transfer-gate decisions are published directly, since the gate runs
//! inside the ledger's own transfer.

use crate::domain::entities::{Address, Amount, Denom};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Every event published by the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "module", content = "event")]
pub enum AuthorityEvent {
    Asset(AssetEvent),
    Denylist(DenylistEvent),
}

impl From<AssetEvent> for AuthorityEvent {
    fn from(event: AssetEvent) -> Self {
        AuthorityEvent::Asset(event)
    }
}

impl From<DenylistEvent> for AuthorityEvent {
    fn from(event: DenylistEvent) -> Self {
        AuthorityEvent::Denylist(event)
    }
}

// =============================================================================
// ASSET EVENTS
// =============================================================================

/// Per-asset events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssetEvent {
    /// A denom was placed under this authority.
    DenomAllowed { denom: Denom, owner: Address },

    OwnershipTransferStarted {
        denom: Denom,
        previous_owner: Address,
        new_owner: Address,
    },

    OwnershipTransferred {
        denom: Denom,
        previous_owner: Option<Address>,
        new_owner: Address,
    },

    AdminAccountAdded { denom: Denom, account: Address },
    AdminAccountRemoved { denom: Denom, account: Address },
    SystemAccountAdded { denom: Denom, account: Address },
    SystemAccountRemoved { denom: Denom, account: Address },

    /// Allowance of `account` after a set or a mint.
    MintAllowance {
        denom: Denom,
        account: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: Amount,
    },

    MaxMintAllowance {
        denom: Denom,
        #[serde_as(as = "DisplayFromStr")]
        amount: Amount,
    },

    /// The full balance of `from` was moved to `to`.
    Recovered {
        denom: Denom,
        from: Address,
        to: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: Amount,
    },
}

// =============================================================================
// DENY-LIST EVENTS
// =============================================================================

/// Deny-list events.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DenylistEvent {
    OwnershipTransferStarted {
        previous_owner: Address,
        new_owner: Address,
    },

    OwnershipTransferred {
        previous_owner: Option<Address>,
        new_owner: Address,
    },

    AdminAccountAdded { account: Address },
    AdminAccountRemoved { account: Address },

    Ban { adversary: Address },
    Unban { friend: Address },

    /// Transfer-gate outcome for one controlled denom of a transfer.
    Decision {
        from: Address,
        to: Address,
        #[serde_as(as = "DisplayFromStr")]
        amount: Amount,
        valid: bool,
    },
}
