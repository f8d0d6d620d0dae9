//! Error types surfaced by the review browser.

use thiserror::Error;

use crate::model::{ItemId, ReviewId};

/// Errors reported by a [`crate::services::ReviewRepository`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The review is no longer known to the repository.
    #[error("{review_id} is not in the repository")]
    ReviewNotFound {
        /// Identifier that failed to resolve.
        review_id: ReviewId,
    },

    /// Persisting the review failed.
    #[error("failed to save {review_id}: {message}")]
    SaveFailed {
        /// Review that could not be saved.
        review_id: ReviewId,
        /// Detail from the storage layer.
        message: String,
    },
}

/// The detail editor refused to write its pending edits into an item.
///
/// This happens when the editor holds invalid or incomplete data. It is
/// recovered locally by blocking the navigation that triggered the commit.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("editor rejected changes to {item_id}: {reason}")]
pub struct CommitRejected {
    /// Item whose pending edits were rejected.
    pub item_id: ItemId,
    /// Human-readable validation message from the editor.
    pub reason: String,
}

/// Top-level errors for hosts embedding the panel.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PanelError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
