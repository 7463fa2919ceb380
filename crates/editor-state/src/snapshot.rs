//! Point-in-time copies of the undoable portion of editor state.

use serde::{Deserialize, Serialize};

use lumina_timeline::{Clip, Project, Track};

use crate::state::EditorState;

/// Everything undo/redo restores: clips, tracks, and project settings.
///
/// Deliberately excludes the selection, zoom level, playback position, and
/// the id counter. Restoring those alongside the content would make undo
/// teleport the user's view around, and a rewound id counter could mint
/// colliding ids for entities created after the undo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    pub clips: Vec<Clip>,
    pub tracks: Vec<Track>,
    pub project: Project,
}

impl EditorSnapshot {
    /// Capture the undoable fields of `state`.
    pub fn capture(state: &EditorState) -> Self {
        Self {
            clips: state.clips.clone(),
            tracks: state.tracks.clone(),
            project: state.project.clone(),
        }
    }

    /// Write this snapshot back into `state`, then drop any selection that
    /// now points at a clip absent from the restored set.
    pub fn restore(&self, state: &mut EditorState) {
        state.clips = self.clips.clone();
        state.tracks = self.tracks.clone();
        state.project = self.project.clone();
        state.validate_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_timeline::{Clip, ClipKind};

    #[test]
    fn capture_restore_roundtrip() {
        let mut state = EditorState::new();
        state.add_clip(Clip::new("c1", ClipKind::Video, "a.mp4", 0.0, 5.0, 0));
        state.toggle_track_mute(1);

        let snap = EditorSnapshot::capture(&state);

        state.delete_clip("c1");
        state.toggle_track_mute(1);
        assert!(state.clips.is_empty());

        snap.restore(&mut state);
        assert_eq!(state.clips.len(), 1);
        assert!(state.tracks[1].muted);
    }

    #[test]
    fn restore_drops_dangling_selection() {
        let mut state = EditorState::new();
        let snap = EditorSnapshot::capture(&state); // empty clip set

        state.add_clip(Clip::new("c1", ClipKind::Video, "a.mp4", 0.0, 5.0, 0));
        state.select_clip(Some("c1"));

        snap.restore(&mut state);
        assert!(state.selected_clip_id.is_none());
    }

    #[test]
    fn restore_keeps_selection_when_clip_survives() {
        let mut state = EditorState::new();
        state.add_clip(Clip::new("c1", ClipKind::Video, "a.mp4", 0.0, 5.0, 0));
        let snap = EditorSnapshot::capture(&state);

        state.select_clip(Some("c1"));
        snap.restore(&mut state);
        assert_eq!(state.selected_clip_id.as_deref(), Some("c1"));
    }

    #[test]
    fn snapshot_serializes() {
        let mut state = EditorState::new();
        state.add_clip(Clip::new("c1", ClipKind::Text, "Title", 1.0, 3.0, 0));
        let snap = EditorSnapshot::capture(&state);

        let json = serde_json::to_string(&snap).unwrap();
        let restored: EditorSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snap);
    }
}
