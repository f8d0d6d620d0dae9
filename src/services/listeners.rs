//! Subscription bookkeeping shared by the in-process collaborators.
//!
//! A subscriber hands over a channel sender and receives a
//! [`SubscriptionId`] capability. Releasing the capability through
//! `unsubscribe` is the only way to stop deliveries.

use std::collections::BTreeMap;
use std::sync::mpsc::Sender;

use crate::panel::PanelMsg;

/// Handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Registry of listeners notified by posting a [`PanelMsg`].
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: BTreeMap<SubscriptionId, Sender<PanelMsg>>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `sender` and returns its subscription handle.
    pub fn subscribe(&mut self, sender: Sender<PanelMsg>) -> SubscriptionId {
        self.next_id = self.next_id.saturating_add(1);
        let id = SubscriptionId(self.next_id);
        self.listeners.insert(id, sender);
        id
    }

    /// Removes a listener. Returns `false` if the handle was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns true when nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Posts `msg` to every listener in subscription order.
    ///
    /// A listener whose receiving side is gone stays registered until it is
    /// explicitly unsubscribed.
    pub fn notify(&self, msg: &PanelMsg) {
        for (id, sender) in &self.listeners {
            if sender.send(msg.clone()).is_err() {
                tracing::debug!("listener {} dropped its receiver", id.get());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use rstest::rstest;

    use super::*;

    #[rstest]
    fn notify_reaches_every_listener() {
        let mut registry = ListenerRegistry::new();
        let (first_tx, first_rx) = mpsc::channel();
        let (second_tx, second_rx) = mpsc::channel();
        registry.subscribe(first_tx);
        registry.subscribe(second_tx);

        registry.notify(&PanelMsg::SettingsChanged);

        assert_eq!(first_rx.try_recv().ok(), Some(PanelMsg::SettingsChanged));
        assert_eq!(second_rx.try_recv().ok(), Some(PanelMsg::SettingsChanged));
    }

    #[rstest]
    fn unsubscribe_is_reported_once() {
        let mut registry = ListenerRegistry::new();
        let (tx, rx) = mpsc::channel();
        let id = registry.subscribe(tx);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.notify(&PanelMsg::SettingsChanged);
        assert!(rx.try_recv().is_err());
    }

    #[rstest]
    fn handles_are_unique() {
        let mut registry = ListenerRegistry::new();
        let (tx, _rx) = mpsc::channel();
        let first = registry.subscribe(tx.clone());
        let second = registry.subscribe(tx);

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }
}
