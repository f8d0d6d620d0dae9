//! Message types for the panel's event loop.
//!
//! Messages represent external notifications (settings, repository) and user
//! actions forwarded by the rendering layer.

use crate::model::{ItemId, ReviewId};

/// Events delivered to a [`super::PanelController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    // Settings
    /// The login or another application setting changed.
    SettingsChanged,

    // Repository
    /// A review was added, removed, activated or deactivated.
    ReviewSetChanged,
    /// An item was inserted into a review.
    ItemInserted {
        /// Review receiving the item.
        review_id: ReviewId,
        /// The new item.
        item_id: ItemId,
    },
    /// An item was removed from a review.
    ItemDeleted {
        /// Review the item belonged to.
        review_id: ReviewId,
        /// The removed item.
        item_id: ItemId,
    },
    /// Review contents changed elsewhere; the detail pane should reload.
    ReviewUpdated,

    // User actions
    /// The user asked to move the selection to a row (or to no row).
    RowSelected(Option<usize>),
    /// The user clicked the status message.
    StatusMessageActivated,
}

impl PanelMsg {
    /// Returns true for messages that originate from the user.
    #[must_use]
    pub const fn is_user_initiated(&self) -> bool {
        matches!(self, Self::RowSelected(_) | Self::StatusMessageActivated)
    }
}

/// Work a handler asks to run once the current event has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    /// Select the first row if rows remain and nothing is selected.
    EnsureSelection,
}
