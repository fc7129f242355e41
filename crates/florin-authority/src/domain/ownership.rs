//! # Two-Phase Ownership
//!
//! Shared by every asset and by the deny-list.
//!
//! ```text
//!            transfer(new)              accept(pending)
//! Owned(o) ───────────────► Pending(o, new) ───────────────► Owned(new)
//!     ▲                          │   transfer(other)
//!     │                          └──────────► Pending(o, other)
//! ```
//!
//! At most one pending owner exists at a time; a new transfer replaces it.
//! A subject that never had an owner cannot start a transfer.

use super::entities::Address;
use super::errors::{AuthorityError, OwnershipSubject};

/// Ownership slots of one subject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ownership {
    pub owner: Option<Address>,
    pub pending_owner: Option<Address>,
}

/// Outcome of a successful ownership operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipTransition {
    pub previous_owner: Option<Address>,
    pub new_owner: Address,
    pub next: Ownership,
}

impl Ownership {
    pub fn owned(owner: Address) -> Self {
        Self {
            owner: Some(owner),
            pending_owner: None,
        }
    }

    /// Guard for owner-gated operations. Returns the current owner.
    pub fn ensure_owner(
        &self,
        subject: &OwnershipSubject,
        signer: &Address,
    ) -> Result<&Address, AuthorityError> {
        let owner = self
            .owner
            .as_ref()
            .ok_or_else(|| AuthorityError::NoOwner(subject.clone()))?;

        if signer != owner {
            return Err(AuthorityError::NotOwner {
                subject: subject.clone(),
                expected: owner.clone(),
                actual: signer.clone(),
            });
        }

        Ok(owner)
    }

    /// Nominate `new_owner`. Only the current owner may do this.
    pub fn begin_transfer(
        &self,
        subject: &OwnershipSubject,
        signer: &Address,
        new_owner: &Address,
    ) -> Result<OwnershipTransition, AuthorityError> {
        let owner = self.ensure_owner(subject, signer)?;

        if new_owner == owner {
            return Err(AuthorityError::SameOwner(subject.clone()));
        }

        Ok(OwnershipTransition {
            previous_owner: Some(owner.clone()),
            new_owner: new_owner.clone(),
            next: Ownership {
                owner: Some(owner.clone()),
                pending_owner: Some(new_owner.clone()),
            },
        })
    }

    /// Complete a pending transfer. Only the pending owner may do this.
    pub fn accept(
        &self,
        subject: &OwnershipSubject,
        signer: &Address,
    ) -> Result<OwnershipTransition, AuthorityError> {
        let pending = self
            .pending_owner
            .as_ref()
            .ok_or_else(|| AuthorityError::NoPendingOwner(subject.clone()))?;

        if signer != pending {
            return Err(AuthorityError::NotPendingOwner {
                subject: subject.clone(),
                expected: pending.clone(),
                actual: signer.clone(),
            });
        }

        Ok(OwnershipTransition {
            previous_owner: self.owner.clone(),
            new_owner: pending.clone(),
            next: Ownership::owned(pending.clone()),
        })
    }
}
