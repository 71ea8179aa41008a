//! Command channel
//!
//! Carries user-initiated transport intents (OS action buttons, UI) into
//! the player. Registration is an explicit subscribe/unsubscribe exchange;
//! the lifecycle controller owns the subscription handle and is the only
//! entity that (un)subscribes it.

use crate::error::{Result, SessionError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;
use vesper_core::TransportCommand;

/// Handle identifying one bus subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives decoded transport commands from the bus
pub trait CommandListener: Send + Sync {
    /// Called once per received command, in receipt order
    fn on_command(&self, command: TransportCommand);
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: BTreeMap<u64, Arc<dyn CommandListener>>,
}

/// Transport-intent bus
///
/// Dispatch is synchronous: every subscriber sees every command exactly
/// once, in subscription order, with no buffering or coalescing.
#[derive(Default)]
pub struct CommandBus {
    inner: Mutex<BusInner>,
}

impl CommandBus {
    /// Create an empty bus
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    ///
    /// The returned handle is required to unsubscribe; handles are never
    /// reused within one bus.
    pub fn subscribe(&self, listener: Arc<dyn CommandListener>) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.insert(id, listener);
        debug!(subscription = id, "command listener subscribed");
        SubscriptionId(id)
    }

    /// Remove a previously registered listener
    ///
    /// # Errors
    /// [`SessionError::NotSubscribed`] when the handle is unknown (already
    /// unsubscribed, or from an earlier session).
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<()> {
        let mut inner = self.lock();
        if inner.listeners.remove(&id.0).is_none() {
            return Err(SessionError::NotSubscribed(id));
        }
        debug!(subscription = id.0, "command listener unsubscribed");
        Ok(())
    }

    /// Number of active subscriptions
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    /// Forward a command to every subscriber, in subscription order
    pub fn dispatch(&self, command: TransportCommand) {
        // Dispatch outside the lock so listeners may touch the bus.
        let listeners: Vec<Arc<dyn CommandListener>> =
            self.lock().listeners.values().cloned().collect();
        for listener in listeners {
            listener.on_command(command);
        }
    }

    /// Decode a raw intent string and dispatch it
    ///
    /// Unknown intent kinds are ignored, not an error; the channel only
    /// recognizes the four transport kinds.
    pub fn dispatch_intent(&self, intent: &str) {
        match TransportCommand::from_intent(intent) {
            Some(command) => self.dispatch(command),
            None => debug!(intent, "ignoring unknown command intent"),
        }
    }

    fn lock(&self) -> MutexGuard<'_, BusInner> {
        // A panicked listener must not wedge the channel for the session.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
