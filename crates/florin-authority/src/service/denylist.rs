//! Deny-list handlers.
//!
//! The deny-list is a sub-authority with its own two-phase ownership and a
//! single admin set. Admins ban and unban; the owner manages admins.

use super::AuthorityService;
use crate::commands::DenylistCommand;
use crate::domain::entities::Address;
use crate::domain::errors::{AuthorityError, OwnershipSubject};
use crate::events::DenylistEvent;
use crate::ports::outbound::{AccountStore, EventSink, KvStore, Ledger};
use crate::state::StateTransaction;
use tracing::info;

impl<S, L, A, E> AuthorityService<S, L, A, E>
where
    S: KvStore,
    L: Ledger,
    A: AccountStore,
    E: EventSink,
{
    pub(crate) fn dispatch_denylist(
        &self,
        tx: &mut StateTransaction<'_, S>,
        command: &DenylistCommand,
    ) -> Result<(), AuthorityError> {
        match command {
            DenylistCommand::TransferOwnership { signer, new_owner } => {
                let transition = tx.denylist_ownership()?.begin_transfer(
                    &OwnershipSubject::Denylist,
                    signer,
                    new_owner,
                )?;

                tx.set_denylist_ownership(&transition.next);
                tx.emit(DenylistEvent::OwnershipTransferStarted {
                    previous_owner: signer.clone(),
                    new_owner: transition.new_owner,
                });
                info!(
                    "[florin] Deny-list ownership transfer started: {} -> {}",
                    signer, new_owner
                );
            }

            DenylistCommand::AcceptOwnership { signer } => {
                let transition = tx
                    .denylist_ownership()?
                    .accept(&OwnershipSubject::Denylist, signer)?;

                tx.set_denylist_ownership(&transition.next);
                tx.emit(DenylistEvent::OwnershipTransferred {
                    previous_owner: transition.previous_owner,
                    new_owner: transition.new_owner,
                });
                info!("[florin] {} is now deny-list owner", signer);
            }

            DenylistCommand::AddAdminAccount { signer, account } => {
                ensure_denylist_owner(tx, signer)?;

                tx.set_denylist_admin(account);
                tx.emit(DenylistEvent::AdminAccountAdded {
                    account: account.clone(),
                });
                info!("[florin] Deny-list admin {} added", account);
            }

            DenylistCommand::RemoveAdminAccount { signer, account } => {
                ensure_denylist_owner(tx, signer)?;

                tx.remove_denylist_admin(account);
                tx.emit(DenylistEvent::AdminAccountRemoved {
                    account: account.clone(),
                });
                info!("[florin] Deny-list admin {} removed", account);
            }

            DenylistCommand::Ban { signer, adversary } => {
                ensure_denylist_admin(tx, signer)?;

                tx.set_adversary(adversary);
                tx.emit(DenylistEvent::Ban {
                    adversary: adversary.clone(),
                });
                info!("[florin] {} banned by {}", adversary, signer);
            }

            DenylistCommand::Unban { signer, friend } => {
                ensure_denylist_admin(tx, signer)?;

                tx.remove_adversary(friend);
                tx.emit(DenylistEvent::Unban {
                    friend: friend.clone(),
                });
                info!("[florin] {} unbanned by {}", friend, signer);
            }
        }

        Ok(())
    }
}

fn ensure_denylist_owner<S: KvStore + ?Sized>(
    tx: &StateTransaction<'_, S>,
    signer: &Address,
) -> Result<(), AuthorityError> {
    tx.denylist_ownership()?
        .ensure_owner(&OwnershipSubject::Denylist, signer)
        .map(|_| ())
}

fn ensure_denylist_admin<S: KvStore + ?Sized>(
    tx: &StateTransaction<'_, S>,
    signer: &Address,
) -> Result<(), AuthorityError> {
    if tx.is_denylist_admin(signer)? {
        Ok(())
    } else {
        Err(AuthorityError::NotAdmin {
            subject: OwnershipSubject::Denylist,
            account: signer.clone(),
        })
    }
}
