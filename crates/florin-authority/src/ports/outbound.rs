//! # Outbound Ports (Driven Ports)
//!
//! Collaborators the authority depends on. None of them is implemented by
//! the core itself; `adapters/` carries in-memory versions.

use crate::domain::entities::{Address, Amount, Coins, Denom};
use crate::domain::errors::{LedgerError, StoreError};
use crate::domain::keys::Table;
use crate::events::AuthorityEvent;

/// A single write in an atomic batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOp {
    Put {
        table: Table,
        key: Vec<u8>,
        value: Vec<u8>,
    },
    Delete {
        table: Table,
        key: Vec<u8>,
    },
}

/// Table-addressed key-value store.
pub trait KvStore: Send + Sync {
    fn get(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// All entries of `table` whose key starts with `prefix`, in key order.
    fn scan(&self, table: Table, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError>;

    /// Apply every operation or none.
    fn apply(&self, batch: Vec<WriteOp>) -> Result<(), StoreError>;
}

/// Multi-asset balance ledger.
///
/// Module accounts are addressed by name.
pub trait Ledger: Send + Sync {
    fn mint(&self, module: &str, coins: &Coins) -> Result<(), LedgerError>;

    fn burn(&self, module: &str, coins: &Coins) -> Result<(), LedgerError>;

    fn balance(&self, address: &Address, denom: &Denom) -> Result<Amount, LedgerError>;

    fn supply(&self, denom: &Denom) -> Result<Amount, LedgerError>;

    /// Account-to-account transfer. Subject to the send restriction.
    fn send(&self, from: &Address, to: &Address, coins: &Coins) -> Result<(), LedgerError>;

    /// Subject to the send restriction.
    fn send_from_account_to_module(
        &self,
        from: &Address,
        module: &str,
        coins: &Coins,
    ) -> Result<(), LedgerError>;

    fn send_from_module_to_account(
        &self,
        module: &str,
        to: &Address,
        coins: &Coins,
    ) -> Result<(), LedgerError>;
}

/// Account book resolving addresses to their registered public keys.
pub trait AccountStore: Send + Sync {
    fn public_key(&self, address: &Address) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Destination of published events.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: AuthorityEvent);
}
