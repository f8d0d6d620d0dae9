//! Panel configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – no login, default split orientation
//! 2. **Configuration file** – `.review-browser.toml` in the current
//!    directory, home directory, or XDG config directory
//! 3. **Environment variables** – `REVIEW_BROWSER_LOGIN`,
//!    `REVIEW_BROWSER_SPLIT_ORIENTATION`
//! 4. **Command-line arguments** – `--login`/`-l` and
//!    `--split-orientation`/`-s`
//!
//! # Configuration File
//!
//! ```toml
//! login = "alice"
//! split_orientation = "1"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;
use crate::panel::SplitOrientation;

/// Settings read by the review browser.
///
/// # Example
///
/// ```no_run
/// use review_browser::config::load_config;
///
/// let config = load_config().expect("failed to load configuration");
/// let orientation = config.orientation();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEW_BROWSER",
    discovery(
        dotfile_name = ".review-browser.toml",
        config_file_name = "review-browser.toml",
        app_name = "review-browser"
    )
)]
pub struct BrowserConfig {
    /// Login of the reviewer. Browsing is blocked until one is set.
    ///
    /// Can be provided via:
    /// - CLI: `--login <LOGIN>` or `-l <LOGIN>`
    /// - Environment: `REVIEW_BROWSER_LOGIN`
    /// - Config file: `login = "..."`
    #[ortho_config(cli_short = 'l')]
    pub login: Option<String>,

    /// Stored split orientation: `0`/`vertical` or `1`/`horizontal`.
    ///
    /// Invalid values are ignored in favour of the default.
    ///
    /// Can be provided via:
    /// - CLI: `--split-orientation <CODE>` or `-s <CODE>`
    /// - Environment: `REVIEW_BROWSER_SPLIT_ORIENTATION`
    /// - Config file: `split_orientation = "..."`
    #[ortho_config(cli_short = 's')]
    pub split_orientation: Option<String>,
}

impl BrowserConfig {
    /// Resolves the split orientation, falling back on invalid input.
    #[must_use]
    pub fn orientation(&self) -> SplitOrientation {
        SplitOrientation::from_preference(self.split_orientation.as_deref())
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`PanelError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
pub fn load_config() -> Result<BrowserConfig, PanelError> {
    BrowserConfig::load().map_err(|error| PanelError::Configuration {
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests;
