//! Actions triggered from the status message.

/// Opens the settings dialogs the status message points at.
#[cfg_attr(test, mockall::automock)]
pub trait ActionDispatcher {
    /// Opens the dialog where the login is configured.
    fn open_credential_settings(&mut self);

    /// Opens the dialog where reviews are managed.
    fn open_review_settings(&mut self);
}
