//! Admin and system account handlers.
//!
//! Adds and removes are idempotent: removing an account that was never a
//! member still succeeds and still emits the event.

use super::registry::ensure_allowed;
use super::AuthorityService;
use crate::domain::entities::{Address, Denom};
use crate::domain::errors::AuthorityError;
use crate::events::AssetEvent;
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
    pub(crate) fn add_admin_account(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        account: &Address,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        self.ensure_owner(tx, signer, denom)?;

        tx.set_admin(denom, account);
        tx.emit(AssetEvent::AdminAccountAdded {
            denom: denom.clone(),
            account: account.clone(),
        });

        info!("[florin] Admin {} added to {}", account, denom);
        Ok(())
    }

    pub(crate) fn remove_admin_account(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        account: &Address,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        self.ensure_owner(tx, signer, denom)?;

        tx.remove_admin(denom, account);
        tx.emit(AssetEvent::AdminAccountRemoved {
            denom: denom.clone(),
            account: account.clone(),
        });

        info!("[florin] Admin {} removed from {}", account, denom);
        Ok(())
    }

    pub(crate) fn add_system_account(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        account: &Address,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        self.ensure_owner(tx, signer, denom)?;

        tx.set_system(denom, account);
        tx.emit(AssetEvent::SystemAccountAdded {
            denom: denom.clone(),
            account: account.clone(),
        });

        info!("[florin] System account {} added to {}", account, denom);
        Ok(())
    }

    pub(crate) fn remove_system_account(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        account: &Address,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        self.ensure_owner(tx, signer, denom)?;

        tx.remove_system(denom, account);
        tx.emit(AssetEvent::SystemAccountRemoved {
            denom: denom.clone(),
            account: account.clone(),
        });

        info!("[florin] System account {} removed from {}", account, denom);
        Ok(())
    }
}

pub(crate) fn ensure_system<S: KvStore + ?Sized>(
    tx: &StateTransaction<'_, S>,
    denom: &Denom,
    signer: &Address,
) -> Result<(), AuthorityError> {
    if tx.is_system(denom, signer)? {
        Ok(())
    } else {
        Err(AuthorityError::NotSystem {
            denom: denom.clone(),
            account: signer.clone(),
        })
    }
}
