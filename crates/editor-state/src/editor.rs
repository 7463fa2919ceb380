//! The `Editor` facade: state, history, and the playback clock behind one
//! mutation surface.
//!
//! Every structural mutation checkpoints the pre-mutation state into history
//! first. Parameter tweaks via [`Editor::update_clip`] are the deliberate
//! exception: they arrive continuously while the user drags a slider, and
//! recording each intermediate value would bury the meaningful history steps.
//! Callers that want a slider drag to be undoable checkpoint once with
//! [`Editor::checkpoint`] before the drag starts.

use lumina_common::{EngineConfig, TimeCode};
use lumina_timeline::{AspectRatio, Clip, KeyframeProperty};

use crate::history::HistoryManager;
use crate::playback::PlaybackClock;
use crate::snapshot::EditorSnapshot;
use crate::state::{ClipPatch, EditorState};

/// Owns the full editing session.
#[derive(Clone, Debug)]
pub struct Editor {
    pub state: EditorState,
    pub clock: PlaybackClock,
    history: HistoryManager,
    config: EngineConfig,
}

impl Editor {
    pub fn new(config: EngineConfig) -> Self {
        let mut state = EditorState::new();
        state.zoom_level = config.default_zoom;
        Self {
            state,
            clock: PlaybackClock::new(config.timeline_capacity),
            history: HistoryManager::new(config.max_history_entries),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Record the current state as an undo point.
    pub fn checkpoint(&mut self) {
        self.history.push(EditorSnapshot::capture(&self.state));
    }

    // --- Project ---

    /// Name the project and mark it initialized. Not undoable: it happens
    /// once, before there is anything worth going back to.
    pub fn init_project(&mut self, name: impl Into<String>, aspect_ratio: AspectRatio) {
        self.state.project.init(name, aspect_ratio);
        self.history.clear();
        tracing::info!(name = %self.state.project.name, ratio = %aspect_ratio, "Project initialized");
    }

    // --- Clip mutations ---

    /// Add a clip (undoable). Invalid clips are rejected by the state layer.
    pub fn add_clip(&mut self, clip: Clip) {
        self.checkpoint();
        self.state.add_clip(clip);
    }

    /// Apply a parameter patch to a clip. Not checkpointed; see the module
    /// docs.
    pub fn update_clip(&mut self, id: &str, patch: ClipPatch) {
        self.state.update_clip(id, patch);
    }

    /// Delete a clip (undoable).
    pub fn delete_clip(&mut self, id: &str) {
        if self.state.find_clip(id).is_none() {
            return;
        }
        self.checkpoint();
        self.state.delete_clip(id);
    }

    /// Delete the selected clip, if any (undoable).
    pub fn delete_selected_clip(&mut self) {
        if let Some(id) = self.state.selected_clip_id.clone() {
            self.delete_clip(&id);
        }
    }

    /// Split the selected clip at the playback cursor (undoable). The new
    /// tail clip becomes the selection. Returns the tail id, or `None` when
    /// there is no selection or the cursor is outside the clip.
    pub fn split_selected_clip(&mut self) -> Option<String> {
        let id = self.state.selected_clip_id.clone()?;
        let time = self.clock.current_time().as_secs();
        let clip = self.state.find_clip(&id)?;
        if time <= clip.start_offset || time >= clip.end() {
            tracing::debug!(clip_id = %id, at = time, "Split rejected, cursor outside clip");
            return None;
        }

        self.checkpoint();
        let tail_id = self.state.split_clip(&id, time)?;
        self.state.select_clip(Some(&tail_id));
        Some(tail_id)
    }

    /// Set a keyframe on a clip for the current cursor position (undoable).
    /// The keyframe time is the cursor converted to clip-local time, floored
    /// at the clip start.
    pub fn add_keyframe_at_cursor(&mut self, clip_id: &str, property: KeyframeProperty, value: f64) {
        let Some(clip) = self.state.find_clip(clip_id) else {
            return;
        };
        let local = clip.local_time(self.clock.current_time().as_secs());
        self.checkpoint();
        self.state.add_keyframe(clip_id, property, local, value);
    }

    // --- Tracks ---

    /// Append a visual track (undoable). Returns the new track id.
    pub fn add_track(&mut self) -> usize {
        self.checkpoint();
        self.state.add_track()
    }

    /// Flip a track's mute flag (undoable). Unknown ids are a no-op and do
    /// not pollute history.
    pub fn toggle_track_mute(&mut self, track_id: usize) {
        if self.state.find_track(track_id).is_none() {
            return;
        }
        self.checkpoint();
        self.state.toggle_track_mute(track_id);
    }

    /// Flip a track's lock flag (undoable).
    pub fn toggle_track_lock(&mut self, track_id: usize) {
        if self.state.find_track(track_id).is_none() {
            return;
        }
        self.checkpoint();
        self.state.toggle_track_lock(track_id);
    }

    // --- Selection and view ---

    pub fn select_clip(&mut self, id: Option<&str>) {
        self.state.select_clip(id);
    }

    pub fn set_zoom(&mut self, pixels_per_second: f64) {
        self.state.zoom_level = pixels_per_second.max(1.0);
    }

    // --- History ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one mutation. Returns `true` if anything changed.
    pub fn undo(&mut self) -> bool {
        let current = EditorSnapshot::capture(&self.state);
        match self.history.undo(current) {
            Some(snapshot) => {
                snapshot.restore(&mut self.state);
                true
            }
            None => false,
        }
    }

    /// Step forward one undone mutation. Returns `true` if anything changed.
    pub fn redo(&mut self) -> bool {
        let current = EditorSnapshot::capture(&self.state);
        match self.history.redo(current) {
            Some(snapshot) => {
                snapshot.restore(&mut self.state);
                true
            }
            None => false,
        }
    }

    // --- Playback ---

    pub fn play(&mut self) {
        self.clock.play();
    }

    pub fn pause(&mut self) {
        self.clock.pause();
    }

    pub fn toggle_playback(&mut self) {
        self.clock.toggle();
    }

    pub fn seek(&mut self, time: f64) {
        self.clock.seek(TimeCode::from_secs(time));
    }

    /// Host frame callback. Returns `true` when the cursor advanced.
    pub fn tick(&mut self, timestamp: f64) -> bool {
        self.clock.tick(timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_timeline::ClipKind;

    fn editor_with_clip(id: &str, start: f64, duration: f64) -> Editor {
        let mut editor = Editor::new(EngineConfig::default());
        editor.add_clip(Clip::new(id, ClipKind::Video, "a.mp4", start, duration, 0));
        editor
    }

    #[test]
    fn add_clip_is_undoable() {
        let mut editor = editor_with_clip("c1", 0.0, 5.0);
        assert_eq!(editor.state.clips.len(), 1);

        assert!(editor.undo());
        assert!(editor.state.clips.is_empty());

        assert!(editor.redo());
        assert_eq!(editor.state.clips.len(), 1);
    }

    #[test]
    fn update_clip_is_not_checkpointed() {
        let mut editor = editor_with_clip("c1", 0.0, 5.0);

        editor.update_clip("c1", ClipPatch::canvas_scale(2.0));
        editor.update_clip("c1", ClipPatch::canvas_scale(3.0));

        // One undo jumps past both parameter tweaks to the pre-add state.
        assert!(editor.undo());
        assert!(editor.state.clips.is_empty());
    }

    #[test]
    fn delete_unknown_clip_does_not_pollute_history() {
        let mut editor = Editor::new(EngineConfig::default());
        editor.delete_clip("ghost");
        assert!(!editor.can_undo());
    }

    #[test]
    fn split_selected_clip_at_cursor() {
        let mut editor = editor_with_clip("c1", 0.0, 10.0);
        editor.select_clip(Some("c1"));
        editor.seek(4.0);

        let tail_id = editor.split_selected_clip().unwrap();

        assert_eq!(editor.state.clips.len(), 2);
        assert_eq!(editor.state.selected_clip_id.as_deref(), Some(tail_id.as_str()));
        let head = editor.state.find_clip("c1").unwrap();
        assert!((head.duration - 4.0).abs() < 1e-9);

        // Single undo restores the unsplit clip.
        assert!(editor.undo());
        assert_eq!(editor.state.clips.len(), 1);
        assert!((editor.state.find_clip("c1").unwrap().duration - 10.0).abs() < 1e-9);
    }

    #[test]
    fn split_with_cursor_outside_clip_is_rejected() {
        let mut editor = editor_with_clip("c1", 2.0, 3.0);
        editor.select_clip(Some("c1"));
        editor.seek(7.0);

        assert!(editor.split_selected_clip().is_none());
        assert_eq!(editor.state.clips.len(), 1);
        // No history entry for the rejected split (only the add).
        assert!(editor.undo());
        assert!(!editor.can_undo());
    }

    #[test]
    fn keyframe_at_cursor_uses_clip_local_time() {
        let mut editor = editor_with_clip("c1", 5.0, 10.0);
        editor.seek(8.0);

        editor.add_keyframe_at_cursor("c1", KeyframeProperty::Opacity, 0.5);

        let clip = editor.state.find_clip("c1").unwrap();
        assert_eq!(clip.keyframes.len(), 1);
        assert!((clip.keyframes[0].time - 3.0).abs() < 1e-9);
    }

    #[test]
    fn keyframe_before_clip_start_floors_at_zero() {
        let mut editor = editor_with_clip("c1", 5.0, 10.0);
        editor.seek(2.0);

        editor.add_keyframe_at_cursor("c1", KeyframeProperty::Opacity, 0.5);

        let clip = editor.state.find_clip("c1").unwrap();
        assert!((clip.keyframes[0].time - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn track_toggles_are_undoable() {
        let mut editor = Editor::new(EngineConfig::default());
        editor.toggle_track_mute(0);
        assert!(editor.state.tracks[0].muted);

        assert!(editor.undo());
        assert!(!editor.state.tracks[0].muted);
    }

    #[test]
    fn toggle_unknown_track_does_not_pollute_history() {
        let mut editor = Editor::new(EngineConfig::default());
        editor.toggle_track_mute(42);
        editor.toggle_track_lock(42);
        assert!(!editor.can_undo());
    }

    #[test]
    fn undo_does_not_rewind_id_counter() {
        let mut editor = editor_with_clip("c1", 0.0, 10.0);
        editor.select_clip(Some("c1"));
        editor.seek(5.0);
        let first_tail = editor.split_selected_clip().unwrap();

        editor.undo();
        editor.seek(3.0);
        editor.select_clip(Some("c1"));
        let second_tail = editor.split_selected_clip().unwrap();

        assert_ne!(first_tail, second_tail);
    }

    #[test]
    fn new_mutation_after_undo_clears_redo() {
        let mut editor = editor_with_clip("c1", 0.0, 5.0);
        editor.undo();
        assert!(editor.can_redo());

        editor.add_clip(Clip::new("c2", ClipKind::Video, "b.mp4", 0.0, 3.0, 1));
        assert!(!editor.can_redo());
        assert!(!editor.redo());
    }

    #[test]
    fn init_project_clears_history() {
        let mut editor = editor_with_clip("c1", 0.0, 5.0);
        editor.init_project("My Film", AspectRatio::Wide);
        assert!(!editor.can_undo());
        assert!(editor.state.project.initialized);
        assert_eq!(editor.state.project.name, "My Film");
    }

    #[test]
    fn playback_cursor_drives_split_position() {
        let mut editor = editor_with_clip("c1", 0.0, 10.0);
        editor.select_clip(Some("c1"));
        editor.play();
        editor.tick(0.0);
        editor.tick(2.5);
        editor.pause();

        editor.split_selected_clip().unwrap();
        assert!((editor.state.find_clip("c1").unwrap().duration - 2.5).abs() < 1e-9);
    }
}
