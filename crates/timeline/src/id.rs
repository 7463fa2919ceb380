//! Monotonic id generation for clips and keyframes.

use serde::{Deserialize, Serialize};

/// Hands out unique string ids with a caller-chosen prefix.
///
/// The counter is never rewound — history snapshots deliberately exclude it
/// so that ids created after an undo cannot collide with restored entities.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IdGen {
    counter: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id, e.g. `next("clip")` -> `"clip_1"`.
    pub fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{prefix}_{}", self.counter)
    }
}
