//! Review browsing panel core.
//!
//! The panel lists review items, shows the selected one in a detail editor,
//! and refuses to move the selection while the editor holds edits that
//! cannot be saved.
//!
//! # Modules
//!
//! - [`status`]: which blocking message (if any) replaces the browser
//! - [`guard`]: save-or-block check before leaving an item
//! - [`item_list`]: list synchronisation with the repository
//! - [`selection`]: default-selection auto-correction
//! - [`view`]: view state, layout, and the rendering seam
//! - [`messages`]: events fed to the controller
//! - [`controller`]: the orchestrating [`PanelController`]
//! - [`event_loop`]: single-threaded dispatch with deferred follow-ups

pub mod controller;
pub mod event_loop;
pub mod guard;
pub mod item_list;
pub mod messages;
pub mod selection;
pub mod status;
pub mod view;

pub use controller::{NavigationOutcome, PanelCollaborators, PanelController, StatusAction};
pub use event_loop::EventLoop;
pub use guard::{AllowReason, BlockReason, GuardDecision, PendingNavigation, SelectionGuard};
pub use item_list::{ItemList, synchronize};
pub use messages::{Followup, PanelMsg};
pub use selection::ensure_selection;
pub use status::{StatusInputs, StatusKind, credential_present, resolve_status, status_text};
pub use view::{PanelView, SplitLayout, SplitOrientation, ToolbarKind, ViewState};

#[cfg(test)]
pub use view::MockPanelView;
