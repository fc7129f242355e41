use crate::events::AuthorityEvent;
use crate::ports::outbound::EventSink;
use std::sync::{PoisonError, RwLock};

/// Event sink that records every published event in order
pub struct InMemoryEventLog {
    events: RwLock<Vec<AuthorityEvent>>,
}

impl InMemoryEventLog {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all events published so far.
    pub fn events(&self) -> Vec<AuthorityEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return all recorded events.
    pub fn drain(&self) -> Vec<AuthorityEvent> {
        std::mem::take(&mut *self.events.write().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, event: AuthorityEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
