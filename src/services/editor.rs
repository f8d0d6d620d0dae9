//! Detail editor seam.

use crate::error::CommitRejected;
use crate::model::{DisplayScope, ReviewItem};

/// Editor pane showing the selected review item.
///
/// The editor buffers user edits; they only reach the item when
/// [`DetailEditor::commit`] succeeds.
#[cfg_attr(test, mockall::automock)]
pub trait DetailEditor {
    /// Returns true when the editor holds unsaved edits for `item`.
    fn is_modified(&self, item: &ReviewItem) -> bool;

    /// Writes pending edits into `item`.
    ///
    /// # Errors
    ///
    /// Returns [`CommitRejected`] when the edited data is invalid or
    /// incomplete; `item` is left untouched in that case.
    fn commit(&mut self, item: &mut ReviewItem) -> Result<(), CommitRejected>;

    /// Loads `item` for editing.
    fn bind(&mut self, item: &ReviewItem, scope: DisplayScope);

    /// Clears the editor.
    fn unbind(&mut self);

    /// Releases editor resources.
    fn dispose(&mut self);
}
