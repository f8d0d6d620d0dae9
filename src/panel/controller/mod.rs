//! Panel controller coordinating status, selection, and synchronisation.
//!
//! The controller owns the synchronised item list and drives the rendering
//! layer and detail editor. It reacts to [`PanelMsg`] values delivered by an
//! [`super::EventLoop`]; handlers that need work to happen after the current
//! event settles return a [`Followup`].
//!
//! # Module Structure
//!
//! - `navigation`: user-initiated row changes behind the selection guard
//! - `sync_handlers`: review-set, insert, and delete notifications
//! - `lifecycle`: status message activation and teardown

use std::sync::Arc;
use std::sync::mpsc::Sender;

use tracing::debug;

use super::item_list::{ItemList, synchronize};
use super::messages::{Followup, PanelMsg};
use super::selection::ensure_selection;
use super::status::{StatusInputs, StatusKind, credential_present, resolve_status, status_text};
use super::view::{PanelView, SplitLayout, SplitOrientation, ToolbarKind, ViewState};
use crate::model::{DisplayScope, ReviewItem};
use crate::services::{
    ActionDispatcher, CredentialProvider, DetailEditor, ReviewRepository, SubscriptionId,
};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

mod lifecycle;
mod navigation;
mod sync_handlers;

pub use lifecycle::StatusAction;
pub use navigation::NavigationOutcome;

/// External collaborators a panel is built from.
pub struct PanelCollaborators {
    settings: Arc<dyn CredentialProvider>,
    repository: Arc<dyn ReviewRepository>,
    editor: Box<dyn DetailEditor>,
    actions: Box<dyn ActionDispatcher>,
    view: Box<dyn PanelView>,
    telemetry: Arc<dyn TelemetrySink>,
}

impl PanelCollaborators {
    /// Bundles the collaborators; telemetry defaults to a no-op sink.
    #[must_use]
    pub fn new(
        settings: Arc<dyn CredentialProvider>,
        repository: Arc<dyn ReviewRepository>,
        editor: Box<dyn DetailEditor>,
        actions: Box<dyn ActionDispatcher>,
        view: Box<dyn PanelView>,
    ) -> Self {
        Self {
            settings,
            repository,
            editor,
            actions,
            view,
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Routes telemetry to `sink`.
    #[must_use]
    pub fn with_telemetry(mut self, sink: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = sink;
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Subscriptions {
    settings: SubscriptionId,
    repository: SubscriptionId,
}

/// Controller behind a review browsing panel.
pub struct PanelController {
    scope: DisplayScope,
    settings: Arc<dyn CredentialProvider>,
    repository: Arc<dyn ReviewRepository>,
    editor: Box<dyn DetailEditor>,
    actions: Box<dyn ActionDispatcher>,
    view: Box<dyn PanelView>,
    telemetry: Arc<dyn TelemetrySink>,
    items: ItemList,
    status: StatusKind,
    view_state: ViewState,
    layout: SplitLayout,
    subscriptions: Option<Subscriptions>,
}

impl PanelController {
    /// Builds a panel for `scope` and subscribes it to settings and
    /// repository notifications delivered through `events`.
    ///
    /// The initial list, selection, and status are computed from current
    /// external state.
    #[must_use]
    pub fn new(
        collaborators: PanelCollaborators,
        scope: DisplayScope,
        events: &Sender<PanelMsg>,
    ) -> Self {
        let PanelCollaborators {
            settings,
            repository,
            editor,
            actions,
            view,
            telemetry,
        } = collaborators;

        let orientation =
            SplitOrientation::from_preference(settings.split_orientation().as_deref());
        let subscriptions = Subscriptions {
            settings: settings.subscribe(events.clone()),
            repository: repository.subscribe(events.clone()),
        };
        let items = ItemList::new(synchronize(scope, repository.as_ref()));

        let mut controller = Self {
            scope,
            settings,
            repository,
            editor,
            actions,
            view,
            telemetry,
            items,
            status: StatusKind::None,
            view_state: ViewState::ShowingBrowser,
            layout: SplitLayout::centred(orientation),
            subscriptions: Some(subscriptions),
        };

        controller
            .view
            .apply_layout(controller.layout, ToolbarKind::for_scope(scope));
        controller.view.set_items(controller.items.items());
        controller.render_status(true);
        controller.apply_auto_selection();
        controller
    }

    /// Handles one message, returning work to run once it has settled.
    ///
    /// Messages arriving after [`Self::dispose`] are ignored.
    pub fn handle_message(&mut self, msg: &PanelMsg) -> Option<Followup> {
        if self.is_disposed() {
            debug!("disposed panel ignored {msg:?}");
            return None;
        }

        match msg {
            PanelMsg::SettingsChanged => {
                self.on_settings_changed();
                None
            }
            PanelMsg::ReviewSetChanged => {
                self.on_external_review_set_changed();
                None
            }
            PanelMsg::ItemInserted { item_id, .. } => {
                self.on_item_inserted(*item_id);
                None
            }
            PanelMsg::ItemDeleted { item_id, .. } => self.on_item_deleted(*item_id),
            PanelMsg::ReviewUpdated => {
                self.on_review_updated();
                None
            }
            PanelMsg::RowSelected(target) => {
                let _outcome = self.on_user_selects_row(*target);
                None
            }
            PanelMsg::StatusMessageActivated => {
                let _action = self.on_status_message_activated();
                None
            }
        }
    }

    /// Runs deferred work scheduled by an earlier message.
    pub fn run_followup(&mut self, followup: Followup) {
        if self.is_disposed() {
            return;
        }
        match followup {
            Followup::EnsureSelection => {
                self.apply_auto_selection();
            }
        }
    }

    /// Recomputes the status after the login may have changed.
    pub fn on_settings_changed(&mut self) {
        self.render_status(false);
    }

    /// Re-pushes the selected item into the detail editor.
    pub fn on_review_updated(&mut self) {
        self.refresh_detail();
    }

    /// Display scope fixed at construction.
    #[must_use]
    pub const fn scope(&self) -> DisplayScope {
        self.scope
    }

    /// Items currently listed.
    #[must_use]
    pub fn items(&self) -> &[ReviewItem] {
        self.items.items()
    }

    /// Selected row, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<usize> {
        self.items.selection()
    }

    /// Item at the selected row, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ReviewItem> {
        self.items.selected_item()
    }

    /// Status resolved by the last refresh.
    #[must_use]
    pub const fn status(&self) -> StatusKind {
        self.status
    }

    /// View currently shown.
    #[must_use]
    pub const fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Split layout applied at construction.
    #[must_use]
    pub const fn layout(&self) -> SplitLayout {
        self.layout
    }

    /// Returns true once [`Self::dispose`] has run.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.subscriptions.is_none()
    }

    fn status_inputs(&self) -> StatusInputs {
        StatusInputs {
            credential_present: credential_present(self.settings.credential().as_deref()),
            active_reviews_exist: self.repository.reviews().iter().any(|review| review.active),
            item_count: self.items.len(),
            scope_is_single_review: self.scope.is_single_review(),
        }
    }

    /// Resolves the status and switches views when it changed.
    ///
    /// `force` pushes the view even when the state is unchanged.
    fn render_status(&mut self, force: bool) {
        let status = resolve_status(self.status_inputs());
        let next = ViewState::from(status);
        self.status = status;
        if !force && next == self.view_state {
            return;
        }

        self.view_state = next;
        match status_text(status, self.scope.is_single_review()) {
            Some(text) => self.view.show_message(status, text),
            None => self.view.show_browser(),
        }
        self.telemetry.record(TelemetryEvent::StatusResolved { status });
    }

    /// Selects row 0 when rows exist and nothing is selected.
    ///
    /// Returns true when the selection changed.
    fn apply_auto_selection(&mut self) -> bool {
        let current = self.items.selection();
        let corrected = ensure_selection(self.items.len(), current);
        if corrected == current {
            return false;
        }
        self.commit_selection(corrected);
        true
    }

    /// Applies a selection that already passed the guard.
    fn commit_selection(&mut self, row: Option<usize>) {
        self.items.select(row);
        self.view.select_row(self.items.selection());
        self.refresh_detail();
    }

    /// Loads the selected item into the editor, or clears it.
    fn refresh_detail(&mut self) {
        match self.items.selected_item() {
            Some(item) => self.editor.bind(item, self.scope),
            None => self.editor.unbind(),
        }
    }

    /// Rebuilds the list from the repository and pushes it to the view.
    ///
    /// Returns true when the selected item survived.
    fn resync_items(&mut self) -> bool {
        let fresh = synchronize(self.scope, self.repository.as_ref());
        let survived = self.items.replace(fresh);
        self.view.set_items(self.items.items());
        survived
    }
}

impl Drop for PanelController {
    fn drop(&mut self) {
        self.dispose();
    }
}
