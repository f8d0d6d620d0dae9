//! User-initiated selection changes.
//!
//! Every row change runs through the selection guard before anything
//! visible changes. When the guard refuses, the rendering layer is told to
//! put the highlight back on the current row.

use tracing::debug;

use super::PanelController;
use crate::model::ReviewItem;
use crate::panel::guard::{
    AllowReason, BlockReason, GuardDecision, PendingNavigation, SelectionGuard,
};
use crate::telemetry::TelemetryEvent;

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The selection moved to the requested row.
    Moved(Option<usize>),
    /// The requested row is already selected.
    Unchanged,
    /// The row does not exist; the highlight was restored.
    InvalidTarget(usize),
    /// The guard refused; the selection stayed on the current row.
    Blocked(BlockReason),
    /// The panel was disposed.
    Ignored,
}

impl PanelController {
    /// Handles the user asking to select `target` (or to clear the
    /// selection with `None`).
    pub fn on_user_selects_row(&mut self, target: Option<usize>) -> NavigationOutcome {
        if self.is_disposed() {
            return NavigationOutcome::Ignored;
        }
        if let Some(row) = target.filter(|&row| !self.items.contains_row(row)) {
            self.view.select_row(self.items.selection());
            return NavigationOutcome::InvalidTarget(row);
        }
        if target == self.items.selection() {
            return NavigationOutcome::Unchanged;
        }

        match self.guard_navigation(target) {
            GuardDecision::Allowed(_) => {
                self.commit_selection(target);
                NavigationOutcome::Moved(self.items.selection())
            }
            GuardDecision::Blocked(reason) => {
                self.view.select_row(self.items.selection());
                NavigationOutcome::Blocked(reason)
            }
        }
    }

    /// Runs the guard for leaving the current item towards `target`.
    ///
    /// Committed edits are swapped into the list snapshot so the list shows
    /// what was saved.
    pub(super) fn guard_navigation(&mut self, target: Option<usize>) -> GuardDecision {
        let request = PendingNavigation {
            from: self.items.selected_item(),
            to: target,
        };
        let decision = SelectionGuard::new(self.editor.as_mut(), self.repository.as_ref())
            .request_navigation(&request);

        match &decision {
            GuardDecision::Allowed(AllowReason::Saved(item)) => {
                self.telemetry.record(TelemetryEvent::ReviewSaved {
                    review_id: item.review_id(),
                    item_id: item.id(),
                });
                self.swap_in_committed(item);
            }
            GuardDecision::Allowed(AllowReason::ReviewGone(item)) => self.swap_in_committed(item),
            GuardDecision::Allowed(_) => {}
            GuardDecision::Blocked(reason) => {
                if let Some(current) = self.items.selected_item() {
                    self.telemetry.record(TelemetryEvent::NavigationBlocked {
                        item_id: current.id(),
                        reason: block_reason_text(reason),
                    });
                }
            }
        }
        decision
    }

    fn swap_in_committed(&mut self, item: &ReviewItem) {
        if self.items.replace_item(item) {
            self.view.set_items(self.items.items());
        } else {
            debug!("{} left the list before its edits were shown", item.id());
        }
    }
}

fn block_reason_text(reason: &BlockReason) -> String {
    match reason {
        BlockReason::CommitRejected(rejection) => rejection.reason.clone(),
        BlockReason::SaveFailed(error) => error.to_string(),
    }
}
