//! Visible view state and the rendering-layer seam.
//!
//! The panel shows either a blocking status message or the browser (item
//! list plus detail pane). The rendering layer receives thin commands and
//! owns all pixel-level behaviour.

use tracing::warn;

use super::status::StatusKind;
use crate::model::{DisplayScope, ReviewItem};

/// Which view the panel currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// A blocking message replaces the browser.
    ShowingMessage(StatusKind),
    /// The item list and detail pane are shown.
    ShowingBrowser,
}

impl From<StatusKind> for ViewState {
    fn from(kind: StatusKind) -> Self {
        if kind.is_blocking() {
            Self::ShowingMessage(kind)
        } else {
            Self::ShowingBrowser
        }
    }
}

/// Orientation of the split between item list and detail pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitOrientation {
    /// List above, detail below.
    Vertical,
    /// List left, detail right.
    #[default]
    Horizontal,
}

impl SplitOrientation {
    /// Parses a stored preference.
    ///
    /// Accepts the numeric codes `0` (vertical) and `1` (horizontal) as well
    /// as their names, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "0" | "vertical" => Some(Self::Vertical),
            "1" | "horizontal" => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// Resolves a possibly missing or invalid preference.
    ///
    /// Invalid values fall back to the default with a warning.
    #[must_use]
    pub fn from_preference(raw: Option<&str>) -> Self {
        let Some(value) = raw else {
            return Self::default();
        };
        Self::parse(value).unwrap_or_else(|| {
            warn!("ignoring invalid split orientation {value:?}; using default");
            Self::default()
        })
    }
}

/// Split pane layout applied once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitLayout {
    /// Split direction.
    pub orientation: SplitOrientation,
    /// Divider position as a percentage of the available space.
    pub divider_percent: u8,
}

impl SplitLayout {
    /// Divider position used for new panels.
    pub const DEFAULT_DIVIDER_PERCENT: u8 = 50;

    /// Creates a layout with the divider centred.
    #[must_use]
    pub const fn centred(orientation: SplitOrientation) -> Self {
        Self {
            orientation,
            divider_percent: Self::DEFAULT_DIVIDER_PERCENT,
        }
    }
}

/// Toolbar variant matching the display scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarKind {
    /// Actions spanning every active review.
    AllReviews,
    /// Actions for a single review.
    SingleReview,
}

impl ToolbarKind {
    /// Picks the toolbar for a scope.
    #[must_use]
    pub const fn for_scope(scope: DisplayScope) -> Self {
        match scope {
            DisplayScope::AllActiveReviews => Self::AllReviews,
            DisplayScope::SingleReview(_) => Self::SingleReview,
        }
    }
}

/// Commands the panel sends to the rendering layer.
#[cfg_attr(test, mockall::automock)]
pub trait PanelView {
    /// Applies the split layout and installs the toolbar.
    fn apply_layout(&mut self, layout: SplitLayout, toolbar: ToolbarKind);

    /// Replaces the browser with a status message.
    fn show_message(&mut self, kind: StatusKind, text: &str);

    /// Shows the browser instead of a message.
    fn show_browser(&mut self);

    /// Replaces the rows shown in the item list.
    fn set_items(&mut self, items: &[ReviewItem]);

    /// Moves the highlighted row, or clears it.
    fn select_row(&mut self, row: Option<usize>);
}
