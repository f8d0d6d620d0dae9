//! Collaborators the panel drives.
//!
//! Each collaborator is a trait so hosts can plug in their own settings,
//! storage, and editor widgets. [`SettingsStore`] and
//! [`InMemoryReviewRepository`] are in-process implementations that also
//! serve tests.

mod actions;
mod editor;
mod listeners;
mod repository;
mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use actions::ActionDispatcher;
pub use editor::DetailEditor;
pub use listeners::{ListenerRegistry, SubscriptionId};
pub use repository::{InMemoryReviewRepository, ReviewRepository};
pub use settings::{CredentialProvider, SettingsStore};

#[cfg(test)]
pub use actions::MockActionDispatcher;
#[cfg(test)]
pub use editor::MockDetailEditor;
#[cfg(test)]
pub use repository::MockReviewRepository;
#[cfg(test)]
pub use settings::MockCredentialProvider;
