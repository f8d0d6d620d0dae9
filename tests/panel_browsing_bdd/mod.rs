//! Shared helpers for panel browsing BDD tests.

pub(crate) mod state;

pub(crate) use state::{PanelScenarioState, PanelWorld};
