//! Recording collaborator fakes for tests.
//!
//! Each fake is cheap to clone and clones share state, so a test can hand
//! one copy to the panel and inspect calls through another.
//!
//! # Examples
//!
//! ```
//! use review_browser::model::DisplayScope;
//! use review_browser::model::test_support::item;
//! use review_browser::services::DetailEditor;
//! use review_browser::services::test_support::RecordingEditor;
//!
//! let probe = RecordingEditor::default();
//! let mut editor = probe.clone();
//! editor.bind(&item(1, 10), DisplayScope::AllActiveReviews);
//! assert_eq!(probe.bound_item().map(|id| id.get()), Some(10));
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{ActionDispatcher, DetailEditor};
use crate::error::CommitRejected;
use crate::model::{DisplayScope, ItemId, ReviewItem};
use crate::panel::{PanelView, SplitLayout, StatusKind, ToolbarKind, ViewState};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Default)]
struct EditorState {
    bound: Option<ItemId>,
    pending_summary: Option<String>,
    rejection: Option<String>,
    binds: Vec<ItemId>,
    commit_calls: usize,
    unbind_calls: usize,
    dispose_calls: usize,
}

/// Detail editor that buffers a summary edit for the bound item.
#[derive(Debug, Clone, Default)]
pub struct RecordingEditor {
    state: Arc<Mutex<EditorState>>,
}

impl RecordingEditor {
    /// Simulates the user typing a new summary for the bound item.
    pub fn edit_summary(&self, summary: &str) {
        lock(&self.state).pending_summary = Some(summary.to_owned());
    }

    /// Makes later commits fail with `reason`.
    pub fn reject_commits(&self, reason: &str) {
        lock(&self.state).rejection = Some(reason.to_owned());
    }

    /// Makes later commits succeed again.
    pub fn accept_commits(&self) {
        lock(&self.state).rejection = None;
    }

    /// Item currently loaded in the editor.
    #[must_use]
    pub fn bound_item(&self) -> Option<ItemId> {
        lock(&self.state).bound
    }

    /// Every item bound so far, in order.
    #[must_use]
    pub fn bind_history(&self) -> Vec<ItemId> {
        lock(&self.state).binds.clone()
    }

    /// Number of commit attempts.
    #[must_use]
    pub fn commit_calls(&self) -> usize {
        lock(&self.state).commit_calls
    }

    /// Number of unbind calls.
    #[must_use]
    pub fn unbind_calls(&self) -> usize {
        lock(&self.state).unbind_calls
    }

    /// Number of dispose calls.
    #[must_use]
    pub fn dispose_calls(&self) -> usize {
        lock(&self.state).dispose_calls
    }
}

impl DetailEditor for RecordingEditor {
    fn is_modified(&self, item: &ReviewItem) -> bool {
        let state = lock(&self.state);
        state.bound == Some(item.id()) && state.pending_summary.is_some()
    }

    fn commit(&mut self, item: &mut ReviewItem) -> Result<(), CommitRejected> {
        let mut state = lock(&self.state);
        state.commit_calls = state.commit_calls.saturating_add(1);
        if let Some(reason) = state.rejection.clone() {
            return Err(CommitRejected {
                item_id: item.id(),
                reason,
            });
        }
        if let Some(summary) = state.pending_summary.take() {
            item.payload.summary = summary;
        }
        Ok(())
    }

    fn bind(&mut self, item: &ReviewItem, _scope: DisplayScope) {
        let mut state = lock(&self.state);
        state.bound = Some(item.id());
        state.pending_summary = None;
        state.binds.push(item.id());
    }

    fn unbind(&mut self) {
        let mut state = lock(&self.state);
        state.bound = None;
        state.pending_summary = None;
        state.unbind_calls = state.unbind_calls.saturating_add(1);
    }

    fn dispose(&mut self) {
        let mut state = lock(&self.state);
        state.dispose_calls = state.dispose_calls.saturating_add(1);
    }
}

#[derive(Debug, Default)]
struct DispatchState {
    credential_settings: usize,
    review_settings: usize,
}

/// Action dispatcher counting the dialogs it was asked to open.
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatcher {
    state: Arc<Mutex<DispatchState>>,
}

impl RecordingDispatcher {
    /// Times the credential settings dialog was requested.
    #[must_use]
    pub fn credential_settings_opened(&self) -> usize {
        lock(&self.state).credential_settings
    }

    /// Times the review settings dialog was requested.
    #[must_use]
    pub fn review_settings_opened(&self) -> usize {
        lock(&self.state).review_settings
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn open_credential_settings(&mut self) {
        let mut state = lock(&self.state);
        state.credential_settings = state.credential_settings.saturating_add(1);
    }

    fn open_review_settings(&mut self) {
        let mut state = lock(&self.state);
        state.review_settings = state.review_settings.saturating_add(1);
    }
}

/// A command received by [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// `apply_layout` was called.
    Layout(SplitLayout, ToolbarKind),
    /// `show_message` was called.
    Message(StatusKind, String),
    /// `show_browser` was called.
    Browser,
    /// `set_items` was called with these item ids.
    Items(Vec<ItemId>),
    /// `select_row` was called.
    Select(Option<usize>),
}

/// Rendering layer that records every command.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    commands: Arc<Mutex<Vec<ViewCommand>>>,
}

impl RecordingView {
    /// Every command received so far.
    #[must_use]
    pub fn commands(&self) -> Vec<ViewCommand> {
        lock(&self.commands).clone()
    }

    /// Forgets recorded commands.
    pub fn clear(&self) {
        lock(&self.commands).clear();
    }

    /// View currently shown, judged by the last message/browser command.
    #[must_use]
    pub fn shown(&self) -> Option<ViewState> {
        lock(&self.commands)
            .iter()
            .rev()
            .find_map(|command| match command {
                ViewCommand::Message(kind, _) => Some(ViewState::ShowingMessage(*kind)),
                ViewCommand::Browser => Some(ViewState::ShowingBrowser),
                _ => None,
            })
    }

    /// Text of the last message shown.
    #[must_use]
    pub fn last_message(&self) -> Option<String> {
        lock(&self.commands)
            .iter()
            .rev()
            .find_map(|command| match command {
                ViewCommand::Message(_, text) => Some(text.clone()),
                _ => None,
            })
    }

    /// Row currently highlighted, judged by the last selection command.
    #[must_use]
    pub fn highlighted_row(&self) -> Option<usize> {
        lock(&self.commands)
            .iter()
            .rev()
            .find_map(|command| match command {
                ViewCommand::Select(row) => Some(*row),
                _ => None,
            })
            .flatten()
    }

    /// Number of times `row` was highlighted.
    #[must_use]
    pub fn selections_of(&self, row: Option<usize>) -> usize {
        lock(&self.commands)
            .iter()
            .filter(|command| **command == ViewCommand::Select(row))
            .count()
    }
}

impl PanelView for RecordingView {
    fn apply_layout(&mut self, layout: SplitLayout, toolbar: ToolbarKind) {
        lock(&self.commands).push(ViewCommand::Layout(layout, toolbar));
    }

    fn show_message(&mut self, kind: StatusKind, text: &str) {
        lock(&self.commands).push(ViewCommand::Message(kind, text.to_owned()));
    }

    fn show_browser(&mut self) {
        lock(&self.commands).push(ViewCommand::Browser);
    }

    fn set_items(&mut self, items: &[ReviewItem]) {
        let ids = items.iter().map(ReviewItem::id).collect();
        lock(&self.commands).push(ViewCommand::Items(ids));
    }

    fn select_row(&mut self, row: Option<usize>) {
        lock(&self.commands).push(ViewCommand::Select(row));
    }
}
