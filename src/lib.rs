//! Review browser library crate: the controller behind a review comment
//! browsing panel.
//!
//! The panel lists the items of one review (or of every active review),
//! keeps the list in step with an external repository, and guards selection
//! changes so edits in the detail editor are never silently lost. Widgets,
//! storage, and dialogs are supplied by the host through the traits in
//! [`services`] and [`panel::PanelView`].

pub mod config;
pub mod error;
pub mod model;
pub mod panel;
pub mod services;
pub mod telemetry;

pub use config::BrowserConfig;
pub use error::{CommitRejected, PanelError, RepositoryError};
pub use model::{DisplayScope, ItemId, ItemPayload, Review, ReviewId, ReviewItem};
pub use panel::{EventLoop, PanelCollaborators, PanelController, PanelMsg, StatusKind};
