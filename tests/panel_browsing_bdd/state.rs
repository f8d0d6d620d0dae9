//! Scenario state for panel browsing BDD tests.

use std::sync::Arc;

use review_browser::model::test_support::review_with_items;
use review_browser::panel::{EventLoop, PanelCollaborators, PanelController};
use review_browser::services::test_support::{
    RecordingDispatcher, RecordingEditor, RecordingView,
};
use review_browser::services::{InMemoryReviewRepository, SettingsStore};
use review_browser::{DisplayScope, Review};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Panel under test together with the fakes it talks to.
pub(crate) struct PanelWorld {
    pub(crate) repository: Arc<InMemoryReviewRepository>,
    pub(crate) settings: Arc<SettingsStore>,
    pub(crate) editor: RecordingEditor,
    pub(crate) view: RecordingView,
    pub(crate) events: EventLoop,
    pub(crate) panel: PanelController,
}

impl PanelWorld {
    /// Builds a logged-in panel over `reviews`.
    pub(crate) fn new(reviews: Vec<Review>, scope: DisplayScope) -> Self {
        let repository = Arc::new(InMemoryReviewRepository::new(reviews));
        let settings = Arc::new(SettingsStore::new(Some("alice".to_owned()), None));
        let editor = RecordingEditor::default();
        let view = RecordingView::default();
        let events = EventLoop::new();

        let collaborators = PanelCollaborators::new(
            settings.clone(),
            repository.clone(),
            Box::new(editor.clone()),
            Box::new(RecordingDispatcher::default()),
            Box::new(view.clone()),
        );
        let panel = PanelController::new(collaborators, scope, events.sender());

        Self {
            repository,
            settings,
            editor,
            view,
            events,
            panel,
        }
    }

    /// Processes every pending notification.
    pub(crate) fn settle(&mut self) {
        self.events.run_until_idle(&mut self.panel);
    }
}

/// State shared across steps in a panel browsing scenario.
#[derive(ScenarioState, Default)]
pub(crate) struct PanelScenarioState {
    /// The panel and its collaborators.
    pub(crate) world: Slot<PanelWorld>,
}

/// R1(active, [1, 2]), R2(inactive, [3]), R3(active, [4]).
pub(crate) fn standard_reviews() -> Vec<Review> {
    vec![
        review_with_items(1, true, &[1, 2]),
        review_with_items(2, false, &[3]),
        review_with_items(3, true, &[4]),
    ]
}
