//! Mint allowance handlers.
//!
//! `0 <= allowance <= max` holds at the moment an allowance is set. Lowering
//! the max afterwards leaves existing allowances untouched.

use super::registry::ensure_allowed;
use super::AuthorityService;
use crate::domain::entities::{Address, Amount, Denom};
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
    pub(crate) fn set_max_mint_allowance(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        amount: Amount,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        self.ensure_owner(tx, signer, denom)?;

        tx.set_max_mint_allowance(denom, amount);
        tx.emit(AssetEvent::MaxMintAllowance {
            denom: denom.clone(),
            amount,
        });

        info!("[florin] Max mint allowance of {} set to {}", denom, amount);
        Ok(())
    }

    pub(crate) fn set_mint_allowance(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        account: &Address,
        amount: i128,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        if !tx.is_admin(denom, signer)? {
            return Err(AuthorityError::NotAdmin {
                subject: OwnershipSubject::Asset(denom.clone()),
                account: signer.clone(),
            });
        }

        let max = tx.max_mint_allowance(denom)?;
        let allowance = Amount::try_from(amount)
            .ok()
            .filter(|a| *a <= max)
            .ok_or(AuthorityError::InvalidAllowance {
                requested: amount,
                max,
            })?;

        tx.set_mint_allowance(denom, account, allowance);
        tx.emit(AssetEvent::MintAllowance {
            denom: denom.clone(),
            account: account.clone(),
            amount: allowance,
        });

        info!(
            "[florin] Mint allowance of {} for {} set to {}",
            denom, account, allowance
        );
        Ok(())
    }

    /// Debit `amount` from the allowance of `account`. Returns what remains.
    pub(crate) fn consume_mint_allowance(
        &self,
        tx: &mut StateTransaction<'_, S>,
        denom: &Denom,
        account: &Address,
        amount: Amount,
    ) -> Result<Amount, AuthorityError> {
        let available = tx.mint_allowance(denom, account)?;
        let remaining =
            available
                .checked_sub(amount)
                .ok_or(AuthorityError::InsufficientAllowance {
                    requested: amount,
                    available,
                })?;

        tx.set_mint_allowance(denom, account, remaining);
        Ok(remaining)
    }
}
