//! # Ports Layer
//!
//! Defines the port traits for the authority core.
//!
//! ## Hexagonal Architecture
//!
//! - `inbound.rs` - Driving ports (command API, ledger send hook)
//! - `outbound.rs` - Driven ports (store, ledger, account book, event sink)

pub mod inbound;
pub mod outbound;
