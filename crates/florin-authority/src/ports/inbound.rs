//! # Inbound Ports (Driving Ports)
//!
//! The API this library exposes to the command dispatcher and to the ledger.

use crate::commands::Command;
use crate::domain::entities::{Address, Coins};
use crate::domain::errors::AuthorityError;
use crate::domain::genesis::GenesisState;

/// Primary API of the authority core.
pub trait AuthorityApi {
    /// Execute one command.
    ///
    /// ## Atomicity
    ///
    /// Either every state write and event of the command is committed, or
    /// none is.
    ///
    /// ## Errors
    ///
    /// The first violated precondition, e.g. `UnknownAsset`, `NotOwner`,
    /// `InsufficientAllowance`.
    fn execute(&self, command: &Command) -> Result<(), AuthorityError>;

    /// Load a complete state snapshot into an empty store. Emits no events.
    fn init_genesis(&self, genesis: &GenesisState) -> Result<(), AuthorityError>;

    /// Snapshot the committed state.
    fn export_genesis(&self) -> Result<GenesisState, AuthorityError>;
}

/// Hook the ledger calls before moving coins between accounts.
pub trait SendRestriction: Send + Sync {
    /// Returns the recipient to credit, or the reason the transfer is refused.
    fn check(&self, from: &Address, to: &Address, coins: &Coins)
        -> Result<Address, AuthorityError>;
}
