//! Status resolution for the panel's message view.
//!
//! When browsing is not meaningful (no login, no active review, nothing to
//! show) the panel replaces the browser with a blocking message. The message
//! kind is a pure function of external state and the synchronised item
//! count, so it is recomputed rather than tracked.

use serde::{Deserialize, Serialize};

/// The blocking message currently applicable to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Nothing blocks browsing; the browser view is shown.
    #[default]
    None,
    /// No login is configured.
    NoCredential,
    /// The repository holds no active review.
    NoActiveReview,
    /// The current scope contains no review item.
    NoItemInScope,
}

impl StatusKind {
    /// Returns true when the kind replaces the browser with a message.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Inputs to [`resolve_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInputs {
    /// Whether a non-blank login is configured.
    pub credential_present: bool,
    /// Whether at least one review is flagged active.
    pub active_reviews_exist: bool,
    /// Number of items in the synchronised list.
    pub item_count: usize,
    /// Whether the panel is bound to a single review.
    pub scope_is_single_review: bool,
}

/// Resolves the status to display, in fixed priority order.
///
/// # Examples
///
/// ```
/// use review_browser::panel::{StatusInputs, StatusKind, resolve_status};
///
/// let inputs = StatusInputs {
///     credential_present: true,
///     active_reviews_exist: true,
///     item_count: 0,
///     scope_is_single_review: false,
/// };
/// assert_eq!(resolve_status(inputs), StatusKind::NoItemInScope);
/// ```
#[must_use]
pub const fn resolve_status(inputs: StatusInputs) -> StatusKind {
    if !inputs.credential_present {
        StatusKind::NoCredential
    } else if !inputs.active_reviews_exist {
        StatusKind::NoActiveReview
    } else if inputs.item_count == 0 {
        StatusKind::NoItemInScope
    } else {
        StatusKind::None
    }
}

/// Returns true when `login` holds a usable credential.
///
/// Whitespace-only logins count as missing.
#[must_use]
pub fn credential_present(login: Option<&str>) -> bool {
    login.is_some_and(|value| !value.trim().is_empty())
}

/// Message text shown for a blocking status.
///
/// Returns `None` for [`StatusKind::None`].
#[must_use]
pub const fn status_text(kind: StatusKind, scope_is_single_review: bool) -> Option<&'static str> {
    match kind {
        StatusKind::None => None,
        StatusKind::NoCredential => Some("Login is not set. Click here to configure it."),
        StatusKind::NoActiveReview => Some("No active review. Click here to manage reviews."),
        StatusKind::NoItemInScope if scope_is_single_review => {
            Some("No review item in this review.")
        }
        StatusKind::NoItemInScope => Some("No review item in active reviews."),
    }
}
