//! # Florin Authority
//!
//! Authorization and allowance-control core for fiat-backed token
//! denominations (`ueure`, `ugbpe`, ...) on a multi-asset ledger.
//!
//! ## Responsibilities
//!
//! - **Asset Registry**: which denominations this authority controls
//! - **Ownership**: two-phase ownership transfer per asset and for the deny-list
//! - **Roles**: per-asset admin (sets allowances) and system (mints/burns/recovers) accounts
//! - **Allowances**: owner-set cap plus per-system-account consumable mint budget
//! - **Deny-list**: banned senders, with its own owner and admin set
//! - **Transfer Gate**: the send restriction the ledger calls on every transfer
//! - **Attestations**: off-ledger signed declarations authorizing burn/recover
//!
//! ## Architecture
//!
//! Hexagonal layout:
//! - **Domain Layer** (`domain/`): Pure types, state machines, errors. No I/O.
//! - **Ports Layer** (`ports/`): Inbound API traits and outbound collaborator traits
//! - **State Layer** (`state/`): Transactional overlay and typed table accessors
//! - **Service Layer** (`service/`): Command handlers, queries, transfer gate
//! - **Adapters** (`adapters/`): In-memory store, ledger, account book, event log
//!
//! ```text
//! Command ──► AuthorityService::execute
//!                  │  validate_basic
//!                  │  StateTransaction (buffered writes + events)
//!                  │  handler: authorize ─► mutate ─► Ledger
//!                  ▼
//!             commit: KvStore::apply(batch) ─► EventSink::publish
//! ```
//!
//! ## Execution Model
//!
//! Commands are processed one at a time by the host. Each command either
//! commits all of its writes and events or none of them.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;
pub mod state;

// Re-export public API
pub use adapters::{InMemoryAccountStore, InMemoryEventLog, InMemoryKvStore, InMemoryLedger};
pub use commands::{AssetCommand, Command, DenylistCommand};
pub use config::{AuthorityConfig, ConfigError};
pub use domain::attestation::{Attestation, DEFAULT_DECLARATION};
pub use domain::entities::{
    AccountEntry, Address, AllowanceEntry, Amount, Coin, Coins, Denom, MAX_DENOM_LEN,
};
pub use domain::errors::{AuthorityError, LedgerError, OwnershipSubject, StoreError};
pub use domain::genesis::{DenylistGenesis, GenesisState};
pub use domain::keys::Table;
pub use domain::ownership::Ownership;
pub use events::{AssetEvent, AuthorityEvent, DenylistEvent};
pub use ports::inbound::{AuthorityApi, SendRestriction};
pub use ports::outbound::{AccountStore, EventSink, KvStore, Ledger, WriteOp};
pub use service::{AttestationVerifier, AuthorityQueries, AuthorityService, TransferGate};
pub use state::StateTransaction;
