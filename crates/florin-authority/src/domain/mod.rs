//! # Domain Layer
//!
//! Pure authorization logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod attestation;
pub mod entities;
pub mod errors;
pub mod genesis;
pub mod keys;
pub mod ownership;
