//! Asset registry handlers.

use super::AuthorityService;
use crate::domain::entities::{Address, Denom};
use crate::domain::errors::AuthorityError;
use crate::domain::ownership::Ownership;
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
    /// Place `denom` under control with `owner` as its first owner.
    ///
    /// Only the registry authority may do this, and only while the denom has
    /// no circulating supply.
    pub(crate) fn allow_denom(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        owner: &Address,
    ) -> Result<(), AuthorityError> {
        if signer != &self.config.authority {
            return Err(AuthorityError::InvalidAuthority {
                expected: self.config.authority.clone(),
                actual: signer.clone(),
            });
        }

        if tx.is_allowed_denom(denom)? {
            return Err(AuthorityError::AlreadyControlled(denom.clone()));
        }

        let supply = self.ledger.supply(denom)?;
        if supply > 0 {
            return Err(AuthorityError::NonZeroSupply {
                denom: denom.clone(),
                supply,
            });
        }

        tx.set_allowed_denom(denom);
        tx.set_ownership(denom, &Ownership::owned(owner.clone()));
        tx.emit(AssetEvent::DenomAllowed {
            denom: denom.clone(),
            owner: owner.clone(),
        });

        info!("[florin] Denom {} allowed, owner {}", denom, owner);
        Ok(())
    }
}

/// Gate shared by every per-asset operation.
pub(crate) fn ensure_allowed<S: KvStore + ?Sized>(
    tx: &StateTransaction<'_, S>,
    denom: &Denom,
) -> Result<(), AuthorityError> {
    if tx.is_allowed_denom(denom)? {
        Ok(())
    } else {
        Err(AuthorityError::UnknownAsset(denom.clone()))
    }
}
