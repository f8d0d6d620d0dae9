//! Handlers keeping the item list in step with the repository.
//!
//! Every handler rebuilds the list as a fresh sequence, then fixes up the
//! selection and recomputes the status. Deleting the selected item defers
//! its selection fix-up until the event has settled.

use tracing::debug;

use super::PanelController;
use crate::model::{ItemId, ReviewItem};
use crate::panel::messages::Followup;

impl PanelController {
    /// Re-synchronises after reviews were added, removed, activated, or
    /// deactivated.
    ///
    /// The selected item stays selected when it survives; otherwise the
    /// first row is selected.
    pub fn on_external_review_set_changed(&mut self) {
        let previous = self.items.selection();
        let survived = self.resync_items();

        if survived {
            if self.items.selection() != previous {
                self.view.select_row(self.items.selection());
            }
        } else if previous.is_some() {
            self.view.select_row(None);
            self.editor.unbind();
        }

        self.apply_auto_selection();
        self.render_status(false);
    }

    /// Selects a newly inserted item so it can be edited right away.
    ///
    /// Items outside the scope only refresh the list. The selection change
    /// still passes through the guard, so pending edits on the current item
    /// are saved first.
    pub fn on_item_inserted(&mut self, item_id: ItemId) {
        let previous = self.items.selection();
        self.resync_items();
        if self.items.selection() != previous {
            self.view.select_row(self.items.selection());
        }
        self.render_status(false);

        let Some(row) = self.items.row_of(item_id) else {
            debug!("{item_id} was inserted outside the panel scope");
            return;
        };
        if self.guard_navigation(Some(row)).is_allowed() {
            self.commit_selection(Some(row));
        } else {
            debug!("pending edits kept the selection off inserted {item_id}");
        }
    }

    /// Reacts to an item leaving the repository.
    ///
    /// Deleting the selected item clears the selection and unbinds the
    /// editor; the returned follow-up reselects a row once the current event
    /// has settled. Any other deletion keeps the selected item (and its
    /// pending edits) in place.
    pub fn on_item_deleted(&mut self, item_id: ItemId) -> Option<Followup> {
        let selected = self.items.selected_item().map(ReviewItem::id);
        let previous = self.items.selection();
        self.resync_items();

        if selected != Some(item_id) {
            debug!("{item_id} deleted; keeping the current selection");
            if self.items.selection() != previous {
                self.view.select_row(self.items.selection());
            }
            self.render_status(false);
            return (self.items.selection().is_none() && !self.items.is_empty())
                .then_some(Followup::EnsureSelection);
        }

        debug!("{item_id} deleted; clearing selection");
        self.items.clear_selection();
        self.view.select_row(None);
        self.editor.unbind();
        self.render_status(false);
        Some(Followup::EnsureSelection)
    }
}
