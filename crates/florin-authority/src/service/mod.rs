//! # Authority Service
//!
//! Implements the authority API over injected collaborators.
//!
//! ## Architecture
//!
//! This service:
//! 1. Implements `AuthorityApi` for command execution and genesis
//! 2. Runs every command in its own `StateTransaction`
//! 3. Dispatches by exhaustive match on the closed `Command` enum
//! 4. Hands out the `TransferGate` the ledger installs as its send restriction
//!
//! Transfer decisions made by the gate during a command are held in a
//! `DecisionBuffer` shared with the gate and published with the command's
//! other events, or dropped with them if the command fails.
//!
//! Handlers are grouped by concern: `registry`, `ownership`, `roles`,
//! `allowance`, `supply` (mint/burn/recover) and `denylist`.

mod allowance;
mod attestation;
mod denylist;
mod gate;
mod genesis;
mod ownership;
mod queries;
mod registry;
mod roles;
mod supply;

pub use attestation::AttestationVerifier;
pub use gate::TransferGate;

use gate::DecisionBuffer;
pub use queries::{AuthorityQueries, OwnerView};

use crate::commands::{AssetCommand, Command};
use crate::config::{AuthorityConfig, ConfigError};
use crate::domain::errors::AuthorityError;
use crate::domain::genesis::GenesisState;
use crate::ports::inbound::AuthorityApi;
use crate::ports::outbound::{AccountStore, EventSink, KvStore, Ledger};
use crate::state::StateTransaction;
use std::sync::Arc;
use tracing::{debug, warn};

/// The authority service.
pub struct AuthorityService<S, L, A, E>
where
    S: KvStore,
    L: Ledger,
    A: AccountStore,
    E: EventSink,
{
    /// Committed state.
    pub(crate) store: Arc<S>,
    /// Balance ledger for supply checks and coin movements.
    pub(crate) ledger: Arc<L>,
    /// Destination of committed events.
    pub(crate) events: Arc<E>,
    /// Validated configuration.
    pub(crate) config: AuthorityConfig,
    /// Checks Burn/Recover attestations.
    pub(crate) verifier: AttestationVerifier<A>,
    /// Gate decisions of the command in flight.
    pub(crate) decisions: Arc<DecisionBuffer>,
}

impl<S, L, A, E> AuthorityService<S, L, A, E>
where
    S: KvStore,
    L: Ledger,
    A: AccountStore,
    E: EventSink,
{
    /// Create a service over the given collaborators.
    pub fn new(
        config: AuthorityConfig,
        store: Arc<S>,
        ledger: Arc<L>,
        accounts: Arc<A>,
        events: Arc<E>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let verifier = AttestationVerifier::new(
            accounts,
            config.bech32_prefix.clone(),
            config.declaration.clone(),
        );

        Ok(Self {
            store,
            ledger,
            events,
            config,
            verifier,
            decisions: Arc::new(DecisionBuffer::default()),
        })
    }

    pub fn config(&self) -> &AuthorityConfig {
        &self.config
    }

    /// Send restriction to install on the ledger.
    pub fn transfer_gate(&self) -> TransferGate<S, E> {
        TransferGate::with_decisions(
            Arc::clone(&self.store),
            Arc::clone(&self.events),
            Arc::clone(&self.decisions),
        )
    }

    /// Read-only view of committed state.
    pub fn queries(&self) -> AuthorityQueries<S> {
        AuthorityQueries::new(Arc::clone(&self.store), self.config.authority.clone())
    }

    /// Move decisions recorded so far into `tx`, keeping their order
    /// relative to the events the handler emits next.
    pub(crate) fn settle_decisions(&self, tx: &mut StateTransaction<'_, S>) {
        for decision in self.decisions.take() {
            tx.emit(decision);
        }
    }

    fn dispatch(
        &self,
        tx: &mut StateTransaction<'_, S>,
        command: &Command,
    ) -> Result<(), AuthorityError> {
        match command {
            Command::Asset(cmd) => self.dispatch_asset(tx, cmd),
            Command::Denylist(cmd) => self.dispatch_denylist(tx, cmd),
        }
    }

    fn dispatch_asset(
        &self,
        tx: &mut StateTransaction<'_, S>,
        command: &AssetCommand,
    ) -> Result<(), AuthorityError> {
        match command {
            AssetCommand::AllowDenom {
                signer,
                denom,
                owner,
            } => self.allow_denom(tx, signer, denom, owner),
            AssetCommand::TransferOwnership {
                signer,
                denom,
                new_owner,
            } => self.transfer_ownership(tx, signer, denom, new_owner),
            AssetCommand::AcceptOwnership { signer, denom } => {
                self.accept_ownership(tx, signer, denom)
            }
            AssetCommand::AddAdminAccount {
                signer,
                denom,
                account,
            } => self.add_admin_account(tx, signer, denom, account),
            AssetCommand::RemoveAdminAccount {
                signer,
                denom,
                account,
            } => self.remove_admin_account(tx, signer, denom, account),
            AssetCommand::AddSystemAccount {
                signer,
                denom,
                account,
            } => self.add_system_account(tx, signer, denom, account),
            AssetCommand::RemoveSystemAccount {
                signer,
                denom,
                account,
            } => self.remove_system_account(tx, signer, denom, account),
            AssetCommand::SetMaxMintAllowance {
                signer,
                denom,
                amount,
            } => self.set_max_mint_allowance(tx, signer, denom, *amount),
            AssetCommand::SetMintAllowance {
                signer,
                denom,
                account,
                amount,
            } => self.set_mint_allowance(tx, signer, denom, account, *amount),
            AssetCommand::Mint {
                signer,
                denom,
                to,
                amount,
            } => self.mint(tx, signer, denom, to, *amount),
            AssetCommand::Burn {
                signer,
                denom,
                from,
                amount,
                attestation,
            } => self.burn(tx, signer, denom, from, *amount, attestation),
            AssetCommand::Recover {
                signer,
                denom,
                from,
                to,
                attestation,
            } => self.recover(tx, signer, denom, from, to, attestation),
        }
    }
}

impl<S, L, A, E> AuthorityApi for AuthorityService<S, L, A, E>
where
    S: KvStore,
    L: Ledger,
    A: AccountStore,
    E: EventSink,
{
    fn execute(&self, command: &Command) -> Result<(), AuthorityError> {
        let mut tx = StateTransaction::new(self.store.as_ref());

        self.decisions.open();
        let result = command
            .validate_basic(&self.config.bech32_prefix)
            .and_then(|()| self.dispatch(&mut tx, command));
        let unsettled = self.decisions.close();

        match result {
            Ok(()) => {
                for decision in unsettled {
                    tx.emit(decision);
                }
                tx.commit(self.events.as_ref())?;
                debug!("[florin] {} committed", command.name());
                Ok(())
            }
            Err(e) => {
                warn!(
                    command = command.name(),
                    signer = %command.signer(),
                    unauthorized = e.is_unauthorized(),
                    discarded_decisions = unsettled.len(),
                    "[florin] Command rejected: {}",
                    e
                );
                Err(e)
            }
        }
    }

    fn init_genesis(&self, state: &GenesisState) -> Result<(), AuthorityError> {
        state.validate(&self.config.bech32_prefix)?;

        let mut tx = StateTransaction::new(self.store.as_ref());
        genesis::import(&mut tx, state);
        tx.commit(self.events.as_ref())?;
        Ok(())
    }

    fn export_genesis(&self) -> Result<GenesisState, AuthorityError> {
        let tx = StateTransaction::new(self.store.as_ref());
        Ok(genesis::export(&tx)?)
    }
}
