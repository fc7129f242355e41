//! Mint, burn and recover handlers.
//!
//! ```text
//! Mint:    system? ─► consume allowance ─► ledger.mint(module) ─► module → to
//! Burn:    system? ─► attestation(from) ─► from → module ─► ledger.burn(module)
//! Recover: system? ─► attestation(from) ─► balance(from) == 0 ? done : from → to
//! ```
//!
//! State writes are buffered until commit, and ledger calls come last, so a
//! refused command never reaches the ledger. Gate decisions raised by the
//! ledger calls are settled into the transaction right after them.

use super::registry::ensure_allowed;
use super::roles::ensure_system;
use super::AuthorityService;
use crate::domain::attestation::Attestation;
use crate::domain::entities::{Address, Amount, Coins, Denom};
use crate::domain::errors::AuthorityError;
use crate::events::AssetEvent;
use crate::ports::outbound::{AccountStore, EventSink, KvStore, Ledger};
use crate::state::StateTransaction;
use tracing::{debug, info};

impl<S, L, A, E> AuthorityService<S, L, A, E>
where
    S: KvStore,
    L: Ledger,
    A: AccountStore,
    E: EventSink,
{
    pub(crate) fn mint(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        to: &Address,
        amount: Amount,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        ensure_system(tx, denom, signer)?;

        let remaining = self.consume_mint_allowance(tx, denom, signer, amount)?;

        let coins = Coins::single(denom.clone(), amount);
        let module = &self.config.module_account;
        self.ledger.mint(module, &coins)?;
        self.ledger.send_from_module_to_account(module, to, &coins)?;
        self.settle_decisions(tx);

        tx.emit(AssetEvent::MintAllowance {
            denom: denom.clone(),
            account: signer.clone(),
            amount: remaining,
        });

        info!(
            "[florin] Minted {}{} to {} (allowance left {})",
            amount, denom, to, remaining
        );
        Ok(())
    }

    pub(crate) fn burn(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        from: &Address,
        amount: Amount,
        attestation: &Attestation,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        ensure_system(tx, denom, signer)?;
        self.verifier.verify(from, attestation)?;

        let coins = Coins::single(denom.clone(), amount);
        let module = &self.config.module_account;
        self.ledger
            .send_from_account_to_module(from, module, &coins)?;
        self.ledger.burn(module, &coins)?;
        self.settle_decisions(tx);

        info!("[florin] Burned {}{} from {}", amount, denom, from);
        Ok(())
    }

    pub(crate) fn recover(
        &self,
        tx: &mut StateTransaction<'_, S>,
        signer: &Address,
        denom: &Denom,
        from: &Address,
        to: &Address,
        attestation: &Attestation,
    ) -> Result<(), AuthorityError> {
        ensure_allowed(tx, denom)?;
        ensure_system(tx, denom, signer)?;
        self.verifier.verify(from, attestation)?;

        let balance = self.ledger.balance(from, denom)?;
        if balance == 0 {
            debug!("[florin] Nothing to recover from {} in {}", from, denom);
            return Ok(());
        }

        self.ledger
            .send(from, to, &Coins::single(denom.clone(), balance))?;
        self.settle_decisions(tx);

        tx.emit(AssetEvent::Recovered {
            denom: denom.clone(),
            from: from.clone(),
            to: to.clone(),
            amount: balance,
        });

        info!(
            "[florin] Recovered {}{} from {} to {}",
            balance, denom, from, to
        );
        Ok(())
    }
}
