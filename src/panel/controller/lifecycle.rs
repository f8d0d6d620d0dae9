//! Status message activation and teardown.

use tracing::debug;

use super::PanelController;
use crate::panel::status::StatusKind;

/// Action taken when the status message was clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    /// The credential settings dialog was opened.
    OpenedCredentialSettings,
    /// The review settings dialog was opened.
    OpenedReviewSettings,
    /// Nothing to do for the current status.
    NoAction,
}

impl PanelController {
    /// Dispatches a click on the status message.
    ///
    /// The action follows the status resolved last. An empty scope has no
    /// associated action.
    pub fn on_status_message_activated(&mut self) -> StatusAction {
        if self.is_disposed() {
            return StatusAction::NoAction;
        }
        match self.status {
            StatusKind::NoCredential => {
                self.actions.open_credential_settings();
                StatusAction::OpenedCredentialSettings
            }
            StatusKind::NoActiveReview => {
                self.actions.open_review_settings();
                StatusAction::OpenedReviewSettings
            }
            StatusKind::NoItemInScope | StatusKind::None => StatusAction::NoAction,
        }
    }

    /// Releases every subscription and disposes the detail editor.
    ///
    /// Only the first call has an effect; later calls return `false`.
    /// Dropping the controller disposes it as well.
    pub fn dispose(&mut self) -> bool {
        let Some(subscriptions) = self.subscriptions.take() else {
            return false;
        };

        if !self.settings.unsubscribe(subscriptions.settings) {
            debug!("settings subscription was already released");
        }
        if !self.repository.unsubscribe(subscriptions.repository) {
            debug!("repository subscription was already released");
        }
        self.editor.dispose();
        true
    }
}
