//! Save-or-block check run before the selection leaves an item.
//!
//! Leaving an item with unsaved edits is a two-phase commit over a single
//! participant: the editor first writes its edits into the item, then the
//! owning review is persisted. Either both happen and navigation proceeds,
//! or navigation is refused and the user stays on the edited item.

use tracing::{debug, warn};

use crate::error::{CommitRejected, RepositoryError};
use crate::model::{ReviewId, ReviewItem};
use crate::services::{DetailEditor, ReviewRepository};

/// A request to move the selection away from `from`.
///
/// Exists only for the duration of the guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingNavigation<'a> {
    /// Item currently selected, if any.
    pub from: Option<&'a ReviewItem>,
    /// Requested row, or `None` to clear the selection.
    pub to: Option<usize>,
}

/// Why a navigation was allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowReason {
    /// Nothing was selected.
    NothingSelected,
    /// The selected item had no pending edits.
    Unmodified,
    /// Pending edits were committed and the owning review saved.
    Saved(ReviewItem),
    /// Edits were committed but the owning review no longer exists, so
    /// there was nothing to persist.
    ReviewGone(ReviewItem),
}

/// Why a navigation was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    /// The editor rejected its pending edits.
    CommitRejected(CommitRejected),
    /// The committed item could not be persisted.
    SaveFailed(RepositoryError),
}

/// Outcome of [`SelectionGuard::request_navigation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// The selection may change.
    Allowed(AllowReason),
    /// The selection must stay on the current item.
    Blocked(BlockReason),
}

impl GuardDecision {
    /// Returns true when navigation may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// Returns the committed item when edits were written back.
    #[must_use]
    pub const fn committed_item(&self) -> Option<&ReviewItem> {
        match self {
            Self::Allowed(AllowReason::Saved(item) | AllowReason::ReviewGone(item)) => Some(item),
            _ => None,
        }
    }
}

/// Guards navigation against silent loss of edits.
pub struct SelectionGuard<'a> {
    editor: &'a mut dyn DetailEditor,
    repository: &'a dyn ReviewRepository,
}

impl<'a> SelectionGuard<'a> {
    /// Creates a guard over the editor and repository.
    #[must_use]
    pub fn new(editor: &'a mut dyn DetailEditor, repository: &'a dyn ReviewRepository) -> Self {
        Self { editor, repository }
    }

    /// Decides whether the selection may leave `request.from`.
    ///
    /// Unmodified items never trigger a commit or save. For modified items
    /// the editor commits into a copy of the item, and the owning review is
    /// saved with that copy; any failure blocks the navigation.
    pub fn request_navigation(&mut self, request: &PendingNavigation<'_>) -> GuardDecision {
        let Some(current) = request.from else {
            return GuardDecision::Allowed(AllowReason::NothingSelected);
        };

        if !self.editor.is_modified(current) {
            return GuardDecision::Allowed(AllowReason::Unmodified);
        }

        let mut committed = current.clone();
        if let Err(rejection) = self.editor.commit(&mut committed) {
            debug!("navigation to {:?} blocked: {rejection}", request.to);
            return GuardDecision::Blocked(BlockReason::CommitRejected(rejection));
        }

        match self.persist(committed.review_id(), &committed) {
            Ok(true) => GuardDecision::Allowed(AllowReason::Saved(committed)),
            Ok(false) => GuardDecision::Allowed(AllowReason::ReviewGone(committed)),
            Err(error) => {
                warn!("keeping {} selected: {error}", committed.id());
                GuardDecision::Blocked(BlockReason::SaveFailed(error))
            }
        }
    }

    /// Saves the owning review with `item` swapped in.
    ///
    /// Returns `Ok(false)` when the review or item is no longer stored.
    fn persist(&self, review_id: ReviewId, item: &ReviewItem) -> Result<bool, RepositoryError> {
        let Some(mut review) = self.repository.review(review_id) else {
            warn!("{review_id} disappeared before {} could be saved", item.id());
            return Ok(false);
        };
        if !review.replace_item(item.clone()) {
            warn!("{} is no longer part of {review_id}", item.id());
            return Ok(false);
        }
        self.repository.save(&review)?;
        Ok(true)
    }
}
