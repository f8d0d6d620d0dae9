//! Selection auto-correction.
//!
//! A non-empty list should always have a row selected. The correction is
//! self-healing rather than an invariant: it runs after list changes and
//! after deletions settle.

/// Returns the corrected selection for a list of `len` rows.
///
/// Selects row 0 when the list is non-empty and nothing is selected;
/// otherwise returns `current` unchanged. Calling it repeatedly is safe.
#[must_use]
pub const fn ensure_selection(len: usize, current: Option<usize>) -> Option<usize> {
    match current {
        None if len > 0 => Some(0),
        _ => current,
    }
}
