//! # State Layer
//!
//! Every command runs against a [`StateTransaction`]: a write-buffering
//! overlay over the [`KvStore`]. Reads see the command's own writes.
//! Events are buffered next to the writes.
//!
//! ```text
//! handler ──► put/delete/emit ──► overlay (BTreeMap + Vec<Event>)
//!                                      │
//!                      Ok  ──► commit: KvStore::apply(batch) ─► EventSink::publish
//!                      Err ──► drop: nothing reaches the store or the sink
//! ```
//!
//! Typed accessors live in `asset.rs` and `denylist.rs`.

mod asset;
mod denylist;

use crate::domain::errors::StoreError;
use crate::domain::keys::Table;
use crate::events::AuthorityEvent;
use crate::ports::outbound::{EventSink, KvStore, WriteOp};
use std::collections::BTreeMap;
use tracing::debug;

/// Buffered writes and events of one command.
pub struct StateTransaction<'a, S: KvStore + ?Sized> {
    store: &'a S,
    writes: BTreeMap<(Table, Vec<u8>), Option<Vec<u8>>>,
    events: Vec<AuthorityEvent>,
}

impl<'a, S: KvStore + ?Sized> StateTransaction<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            writes: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub fn get(&self, table: Table, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        match self.writes.get(&(table, key.to_vec())) {
            Some(buffered) => Ok(buffered.clone()),
            None => self.store.get(table, key),
        }
    }

    pub fn has(&self, table: Table, key: &[u8]) -> Result<bool, StoreError> {
        self.get(table, key).map(|v| v.is_some())
    }

    pub fn put(&mut self, table: Table, key: Vec<u8>, value: Vec<u8>) {
        self.writes.insert((table, key), Some(value));
    }

    pub fn delete(&mut self, table: Table, key: Vec<u8>) {
        self.writes.insert((table, key), None);
    }

    /// Prefix scan over the store merged with buffered writes, in key order.
    pub fn scan(&self, table: Table, prefix: &[u8]) -> Result<Vec<(Vec<u8>, Vec<u8>)>, StoreError> {
        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.store.scan(table, prefix)?.into_iter().collect();

        let buffered = self
            .writes
            .range((table, prefix.to_vec())..)
            .take_while(|((t, key), _)| *t == table && key.starts_with(prefix));

        for ((_, key), value) in buffered {
            match value {
                Some(value) => merged.insert(key.clone(), value.clone()),
                None => merged.remove(key),
            };
        }

        Ok(merged.into_iter().collect())
    }

    pub fn emit(&mut self, event: impl Into<AuthorityEvent>) {
        self.events.push(event.into());
    }

    pub fn pending_writes(&self) -> usize {
        self.writes.len()
    }

    pub fn pending_events(&self) -> &[AuthorityEvent] {
        &self.events
    }

    /// Apply buffered writes atomically, then publish buffered events.
    pub fn commit<E: EventSink + ?Sized>(self, sink: &E) -> Result<(), StoreError> {
        let batch: Vec<WriteOp> = self
            .writes
            .into_iter()
            .map(|((table, key), value)| match value {
                Some(value) => WriteOp::Put { table, key, value },
                None => WriteOp::Delete { table, key },
            })
            .collect();

        debug!(
            writes = batch.len(),
            events = self.events.len(),
            "Committing state transaction"
        );

        if !batch.is_empty() {
            self.store.apply(batch)?;
        }
        for event in self.events {
            sink.publish(event);
        }
        Ok(())
    }
}
