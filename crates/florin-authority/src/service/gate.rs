//! # Transfer Gate
//!
//! Send restriction the ledger calls before every transfer.
//!
//! For each controlled denom carried with a nonzero amount, the sender is
//! checked against the deny-list and a `Decision` is recorded. The first
//! blocked denom aborts the transfer. Denoms carried with zero amount and
//! uncontrolled denoms are not looked at. The recipient is never changed.
//!
//! Outside a command, decisions go straight to the event sink. While a
//! command executes, they are held in the shared [`DecisionBuffer`] and the
//! command emits them through its transaction, so they are published only
//! if the command commits.

use crate::domain::entities::{Address, Coins};
use crate::domain::errors::AuthorityError;
use crate::events::DenylistEvent;
use crate::ports::inbound::SendRestriction;
use crate::ports::outbound::{EventSink, KvStore};
use crate::state::StateTransaction;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Decisions recorded while a command is executing.
///
/// `None` when no command is open.
#[derive(Debug, Default)]
pub(crate) struct DecisionBuffer {
    pending: Mutex<Option<Vec<DenylistEvent>>>,
}

impl DecisionBuffer {
    fn lock(&self) -> MutexGuard<'_, Option<Vec<DenylistEvent>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start holding decisions for a command.
    pub(crate) fn open(&self) {
        *self.lock() = Some(Vec::new());
    }

    /// Stop holding decisions. Returns whatever was not yet taken.
    pub(crate) fn close(&self) -> Vec<DenylistEvent> {
        self.lock().take().unwrap_or_default()
    }

    /// Decisions recorded so far; the buffer stays open.
    pub(crate) fn take(&self) -> Vec<DenylistEvent> {
        self.lock().as_mut().map(std::mem::take).unwrap_or_default()
    }

    /// Hold `decision` if a command is open, otherwise hand it back.
    fn hold(&self, decision: DenylistEvent) -> Option<DenylistEvent> {
        match self.lock().as_mut() {
            Some(pending) => {
                pending.push(decision);
                None
            }
            None => Some(decision),
        }
    }
}

/// Deny-list check over committed state.
pub struct TransferGate<S: KvStore, E: EventSink> {
    store: Arc<S>,
    events: Arc<E>,
    decisions: Arc<DecisionBuffer>,
}

impl<S: KvStore, E: EventSink> TransferGate<S, E> {
    /// Standalone gate that always publishes decisions immediately.
    pub fn new(store: Arc<S>, events: Arc<E>) -> Self {
        Self::with_decisions(store, events, Arc::new(DecisionBuffer::default()))
    }

    pub(crate) fn with_decisions(
        store: Arc<S>,
        events: Arc<E>,
        decisions: Arc<DecisionBuffer>,
    ) -> Self {
        Self {
            store,
            events,
            decisions,
        }
    }

    fn record(&self, decision: DenylistEvent) {
        if let Some(decision) = self.decisions.hold(decision) {
            self.events.publish(decision.into());
        }
    }
}

impl<S: KvStore, E: EventSink> SendRestriction for TransferGate<S, E> {
    fn check(
        &self,
        from: &Address,
        to: &Address,
        coins: &Coins,
    ) -> Result<Address, AuthorityError> {
        let state = StateTransaction::new(self.store.as_ref());

        for denom in state.allowed_denoms()? {
            let amount = coins.amount_of(&denom);
            if amount == 0 {
                continue;
            }

            let valid = !state.is_adversary(from)?;
            self.record(DenylistEvent::Decision {
                from: from.clone(),
                to: to.clone(),
                amount,
                valid,
            });
            debug!(
                "[florin] Transfer decision {} -> {} {}{}: valid={}",
                from, to, amount, denom, valid
            );

            if !valid {
                return Err(AuthorityError::Blocked {
                    from: from.clone(),
                    denom,
                });
            }
        }

        Ok(to.clone())
    }
}
