//! Undo/redo as two stacks of snapshots.

use serde::{Deserialize, Serialize};

use crate::snapshot::EditorSnapshot;

/// Linear undo/redo history.
///
/// A snapshot of the pre-mutation state is pushed *before* every structural
/// mutation. Undo moves the current state onto the redo stack and restores
/// the top of the undo stack; any new mutation clears the redo stack, so
/// history always stays a straight line.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryManager {
    past: Vec<EditorSnapshot>,
    future: Vec<EditorSnapshot>,
    /// Oldest entries are evicted past this depth. 0 means unbounded.
    max_entries: usize,
}

impl HistoryManager {
    pub fn new(max_entries: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_entries,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record the pre-mutation state. Clears the redo stack and evicts the
    /// oldest entry when the depth cap is hit.
    pub fn push(&mut self, snapshot: EditorSnapshot) {
        self.future.clear();
        self.past.push(snapshot);
        if self.max_entries > 0 && self.past.len() > self.max_entries {
            self.past.remove(0);
            tracing::debug!(max = self.max_entries, "History depth cap hit, evicted oldest entry");
        }
    }

    /// Step back one entry. `current` is the present state, which becomes
    /// redoable. Returns the snapshot to restore, or `None` at the start of
    /// history.
    pub fn undo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let snapshot = self.past.pop()?;
        self.future.push(current);
        tracing::debug!(depth = self.past.len(), "Undo");
        Some(snapshot)
    }

    /// Step forward one entry. Mirror of [`undo`](Self::undo).
    pub fn redo(&mut self, current: EditorSnapshot) -> Option<EditorSnapshot> {
        let snapshot = self.future.pop()?;
        self.past.push(current);
        tracing::debug!(depth = self.past.len(), "Redo");
        Some(snapshot)
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditorState;
    use lumina_timeline::{Clip, ClipKind};

    fn snap_with_clips(n: usize) -> EditorSnapshot {
        let mut state = EditorState::new();
        for i in 0..n {
            state.add_clip(Clip::new(
                format!("c{i}"),
                ClipKind::Video,
                "a.mp4",
                i as f64,
                1.0,
                0,
            ));
        }
        EditorSnapshot::capture(&state)
    }

    #[test]
    fn undo_on_empty_history_is_none() {
        let mut history = HistoryManager::new(100);
        assert!(!history.can_undo());
        assert!(history.undo(snap_with_clips(0)).is_none());
    }

    #[test]
    fn undo_then_redo_restores_both_directions() {
        let mut history = HistoryManager::new(100);
        let before = snap_with_clips(0);
        let after = snap_with_clips(1);

        history.push(before.clone());
        let undone = history.undo(after.clone()).unwrap();
        assert_eq!(undone, before);
        assert!(history.can_redo());

        let redone = history.redo(undone).unwrap();
        assert_eq!(redone, after);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_mutation_clears_redo_stack() {
        let mut history = HistoryManager::new(100);
        history.push(snap_with_clips(0));
        let _ = history.undo(snap_with_clips(1));
        assert!(history.can_redo());

        history.push(snap_with_clips(2));
        assert!(!history.can_redo());
    }

    #[test]
    fn depth_cap_evicts_oldest() {
        let mut history = HistoryManager::new(3);
        for i in 0..5 {
            history.push(snap_with_clips(i));
        }
        // Only the three most recent survive; walking back stops after 3.
        let mut steps = 0;
        let mut current = snap_with_clips(5);
        while let Some(snap) = history.undo(current.clone()) {
            current = snap;
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(current, snap_with_clips(2));
    }

    #[test]
    fn n_step_undo_redo_cycle_is_lossless() {
        let mut history = HistoryManager::new(100);
        let states: Vec<EditorSnapshot> = (0..6).map(snap_with_clips).collect();
        for snap in &states[..5] {
            history.push(snap.clone());
        }

        // Walk all the way back, then all the way forward.
        let mut current = states[5].clone();
        let mut seen_back = Vec::new();
        while let Some(snap) = history.undo(current.clone()) {
            seen_back.push(snap.clone());
            current = snap;
        }
        assert_eq!(current, states[0]);

        while let Some(snap) = history.redo(current.clone()) {
            current = snap;
        }
        assert_eq!(current, states[5]);
    }
}
