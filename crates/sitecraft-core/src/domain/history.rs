//! Bounded linear undo/redo history over whole-value snapshots.
//!
//! # How the stacks move (for beginners)
//!
//! ```text
//!            record(v)                undo()                 redo()
//! past:   [.., a, b] + v         [.., a] (b -> current)  [.., a, b] + current
//! future: cleared                current -> front        front -> current
//! ```
//!
//! - Every mutation pushes the value *before* the change onto `past` and
//!   throws away the redo branch.
//! - `undo` swaps the current value with the newest `past` entry and parks
//!   the replaced value at the front of `future`.
//! - `redo` is the mirror image.
//!
//! Both stacks are capped at [`HISTORY_LIMIT`] entries; the oldest snapshot is
//! dropped first.  There is no batching: one call to [`History::record`] is
//! one undo step, so callers that want coarser steps must batch before
//! recording.

use std::collections::VecDeque;
use std::mem;

use tracing::trace;

/// Maximum number of snapshots kept on each stack.
pub const HISTORY_LIMIT: usize = 50;

/// Undo/redo stacks of `T` snapshots.
#[derive(Debug, Clone)]
pub struct History<T> {
    past: VecDeque<T>,
    future: VecDeque<T>,
    limit: usize,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl<T> History<T> {
    /// Creates an empty history bounded at [`HISTORY_LIMIT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history with a custom bound (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Pushes the pre-mutation `snapshot` and clears the redo branch.
    pub fn record(&mut self, snapshot: T) {
        self.past.push_back(snapshot);
        if self.past.len() > self.limit {
            self.past.pop_front();
            trace!(limit = self.limit, "history full, dropped oldest snapshot");
        }
        self.future.clear();
    }

    /// Replaces `current` with the newest past snapshot.
    ///
    /// Returns `false` (and leaves `current` untouched) when there is nothing
    /// to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let replaced = mem::replace(current, previous);
        self.future.push_front(replaced);
        self.future.truncate(self.limit);
        true
    }

    /// Replaces `current` with the first future snapshot.
    ///
    /// Returns `false` (and leaves `current` untouched) when there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let replaced = mem::replace(current, next);
        self.past.push_back(replaced);
        if self.past.len() > self.limit {
            self.past.pop_front();
        }
        true
    }

    /// Drops every snapshot on both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
