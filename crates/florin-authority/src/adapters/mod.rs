//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports.

pub mod account_store;
pub mod event_log;
pub mod memory_ledger;
pub mod memory_store;

pub use account_store::InMemoryAccountStore;
pub use event_log::InMemoryEventLog;
pub use memory_ledger::InMemoryLedger;
pub use memory_store::InMemoryKvStore;
