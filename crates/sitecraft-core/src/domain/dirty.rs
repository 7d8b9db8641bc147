//! Unsaved-change detection.
//!
//! A session that has been saved or loaded at least once has a *baseline*:
//! the last value known to match the remote store.  Dirtiness is then plain
//! structural inequality.  A brand-new session has nothing to compare
//! against, so any recorded history counts as a change.

/// Returns `true` when `current` has changes that are not in the remote store.
///
/// - With a baseline: `current != baseline` (deep value comparison).
/// - Without a baseline: `past_depth > 0`.
pub fn has_unsaved_changes<T: PartialEq>(
    current: &T,
    baseline: Option<&T>,
    past_depth: usize,
) -> bool {
    match baseline {
        Some(saved) => current != saved,
        None => past_depth > 0,
    }
}
