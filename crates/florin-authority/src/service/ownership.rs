//! Per-asset ownership handlers.

use super::registry::ensure_allowed;
use super::AuthorityService;
use crate::domain::entities::{Address, Denom};
use crate::domain::errors::{AuthorityError, OwnershipSubject};
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
    pub(crate) fn transfer_ownership(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        new_owner: &Address,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;

        let subject = OwnershipSubject::Asset(denom.clone());
        let transition = tx
            .ownership(denom)?
            .begin_transfer(&subject, signer, new_owner)?;

        tx.set_ownership(denom, &transition.next);
        tx.emit(AssetEvent::OwnershipTransferStarted {
            denom: denom.clone(),
            previous_owner: signer.clone(),
            new_owner: transition.new_owner,
        });

        info!(
            "[florin] Ownership transfer of {} started: {} -> {}",
            denom, signer, new_owner
        );
        Ok(())
    }

    pub(crate) fn accept_ownership(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;

        let subject = OwnershipSubject::Asset(denom.clone());
        let transition = tx.ownership(denom)?.accept(&subject, signer)?;

        tx.set_ownership(denom, &transition.next);
        tx.emit(AssetEvent::OwnershipTransferred {
            denom: denom.clone(),
            previous_owner: transition.previous_owner,
            new_owner: transition.new_owner,
        });

        info!("[florin] {} is now owner of {}", signer, denom);
        Ok(())
    }

    /// Owner guard for owner-gated asset operations.
    pub(crate) fn ensure_owner(
        &self,
        tx: &StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
    ) -> Result<Address, AuthorityError> {
        let subject = OwnershipSubject::Asset(denom.clone());
        tx.ownership(denom)?
            .ensure_owner(&subject, signer)
            .cloned()
    }
}
