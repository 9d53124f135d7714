//! Ring-buffer log of recently handled editor requests.
//!
//! [`EditorLog`] keeps the last 64 `(EditorInput, Outcome)` pairs so the UI
//! and tests can see what happened without replaying events. Pointer moves
//! are not recorded; they arrive every frame and only drive the highlight.

use bevy::prelude::*;

use crate::events::{EditorInput, Outcome};

const MAX_ENTRIES: usize = 64;

#[derive(Resource, Debug, Clone, Default)]
pub struct EditorLog {
    entries: Vec<(EditorInput, Outcome)>,
}

impl EditorLog {
    /// Record a request. The oldest entry is evicted once the buffer is full.
    pub fn push(&mut self, input: EditorInput, outcome: Outcome) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.remove(0);
        }
        self.entries.push((input, outcome));
    }

    /// The last `n` entries, oldest first.
    pub fn last_n(&self, n: usize) -> &[(EditorInput, Outcome)] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn last(&self) -> Option<&(EditorInput, Outcome)> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
