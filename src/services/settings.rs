//! Application settings consumed by the panel.

use std::sync::mpsc::Sender;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::listeners::{ListenerRegistry, SubscriptionId};
use crate::config::BrowserConfig;
use crate::panel::PanelMsg;

/// Source of the login credential and layout preferences.
///
/// Implementations post [`PanelMsg::SettingsChanged`] to subscribers
/// whenever a setting changes.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync {
    /// Returns the configured login, if any.
    fn credential(&self) -> Option<String>;

    /// Returns the raw stored split orientation preference.
    fn split_orientation(&self) -> Option<String>;

    /// Registers a listener for settings changes.
    fn subscribe(&self, sender: Sender<PanelMsg>) -> SubscriptionId;

    /// Releases a listener registration.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

#[derive(Debug, Default)]
struct SettingsState {
    login: Option<String>,
    split_orientation: Option<String>,
    listeners: ListenerRegistry,
}

/// In-process settings store seeded from [`BrowserConfig`].
#[derive(Debug, Default)]
pub struct SettingsStore {
    state: Mutex<SettingsState>,
}

impl SettingsStore {
    /// Creates a store holding the given values.
    #[must_use]
    pub fn new(login: Option<String>, split_orientation: Option<String>) -> Self {
        Self {
            state: Mutex::new(SettingsState {
                login,
                split_orientation,
                listeners: ListenerRegistry::new(),
            }),
        }
    }

    /// Creates a store from loaded configuration.
    #[must_use]
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self::new(config.login.clone(), config.split_orientation.clone())
    }

    fn lock(&self) -> MutexGuard<'_, SettingsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the login and notifies subscribers.
    pub fn set_login(&self, login: Option<String>) {
        let mut state = self.lock();
        state.login = login;
        state.listeners.notify(&PanelMsg::SettingsChanged);
    }

    /// Replaces the split orientation preference and notifies subscribers.
    pub fn set_split_orientation(&self, orientation: Option<String>) {
        let mut state = self.lock();
        state.split_orientation = orientation;
        state.listeners.notify(&PanelMsg::SettingsChanged);
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

impl CredentialProvider for SettingsStore {
    fn credential(&self) -> Option<String> {
        self.lock().login.clone()
    }

    fn split_orientation(&self) -> Option<String> {
        self.lock().split_orientation.clone()
    }

    fn subscribe(&self, sender: Sender<PanelMsg>) -> SubscriptionId {
        self.lock().listeners.subscribe(sender)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().listeners.unsubscribe(id)
    }
}
