//! Central editor state container.
//!
//! `EditorState` is the single owner of all timeline entities: project
//! settings, tracks, clips, and the current selection. All modifications go
//! through its mutation methods, which preserve the structural invariants
//! (clip intervals stay valid, every clip's track exists, selection never
//! dangles).

use serde::{Deserialize, Serialize};

use lumina_timeline::{
    Clip, IdGen, Keyframe, KeyframeProperty, Project, TextStyle, Track, TrackKind,
};

/// A partial update to a clip. `None` fields are left untouched.
///
/// Applied through [`EditorState::update_clip`]; interval invariants are
/// enforced on application (`start_offset` floored at 0, non-positive
/// `duration` ignored).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClipPatch {
    pub name: Option<String>,
    pub content: Option<String>,
    pub start_offset: Option<f64>,
    pub duration: Option<f64>,
    pub track_id: Option<usize>,
    pub waveform: Option<Vec<f32>>,
    pub opacity: Option<f64>,
    pub scale: Option<f64>,
    pub rotation: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub volume: Option<f64>,
    pub speed: Option<f64>,
    pub brightness: Option<f64>,
    pub contrast: Option<f64>,
    pub saturation: Option<f64>,
    pub blur: Option<f64>,
    pub grayscale: Option<f64>,
    pub sepia: Option<f64>,
    pub hue_rotate: Option<f64>,
    pub fade_in: Option<f64>,
    pub fade_out: Option<f64>,
    pub text_style: Option<TextStyle>,
}

impl ClipPatch {
    /// Patch that moves a clip on the timeline.
    pub fn position(start_offset: f64, track_id: usize) -> Self {
        Self {
            start_offset: Some(start_offset),
            track_id: Some(track_id),
            ..Self::default()
        }
    }

    /// Patch that repositions a clip on the canvas.
    pub fn canvas_offset(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that rescales a clip on the canvas.
    pub fn canvas_scale(scale: f64) -> Self {
        Self {
            scale: Some(scale),
            ..Self::default()
        }
    }
}

/// The editable state of the editor session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditorState {
    /// Project settings.
    pub project: Project,
    /// Ordered track list; a track's id equals its index.
    pub tracks: Vec<Track>,
    /// All clips, across all tracks.
    pub clips: Vec<Clip>,
    /// At most one selected clip.
    pub selected_clip_id: Option<String>,
    /// Pixels per second on the timeline.
    pub zoom_level: f64,
    /// Id source for clips and keyframes created by this state.
    pub id_gen: IdGen,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Create a fresh state with the default track layout and no clips.
    pub fn new() -> Self {
        Self {
            project: Project::default(),
            tracks: Track::default_layout(),
            clips: Vec::new(),
            selected_clip_id: None,
            zoom_level: 40.0,
            id_gen: IdGen::new(),
        }
    }

    // --- Lookup ---

    pub fn find_clip(&self, id: &str) -> Option<&Clip> {
        self.clips.iter().find(|c| c.id == id)
    }

    pub fn find_clip_mut(&mut self, id: &str) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| c.id == id)
    }

    pub fn find_track(&self, id: usize) -> Option<&Track> {
        self.tracks.get(id)
    }

    /// The currently selected clip, if any.
    pub fn selected_clip(&self) -> Option<&Clip> {
        self.selected_clip_id
            .as_deref()
            .and_then(|id| self.find_clip(id))
    }

    // --- Mutations ---

    /// Add a clip. Rejects clips with a non-positive duration; floors the
    /// start offset at 0 and synthesizes any missing tracks up to the clip's
    /// track index.
    pub fn add_clip(&mut self, mut clip: Clip) {
        if clip.duration <= 0.0 {
            tracing::warn!(clip_id = %clip.id, duration = clip.duration, "Rejecting clip with non-positive duration");
            return;
        }
        clip.start_offset = clip.start_offset.max(0.0);

        let kind = if clip.kind.is_visual() {
            TrackKind::Visual
        } else {
            TrackKind::Audio
        };
        self.ensure_track_capacity(clip.track_id, kind);

        tracing::debug!(clip_id = %clip.id, track = clip.track_id, start = clip.start_offset, "Adding clip");
        self.clips.push(clip);
    }

    /// Apply a partial update. Unknown ids are a no-op, not an error: by the
    /// time a deferred UI event lands, the clip may legitimately be gone.
    pub fn update_clip(&mut self, id: &str, patch: ClipPatch) {
        // Track reassignment can point past the current track list; grow it
        // first so the clip never references a missing track.
        if let Some(track_id) = patch.track_id {
            if self.find_clip(id).is_some() {
                self.ensure_track_capacity(track_id, TrackKind::Visual);
            }
        }

        let Some(clip) = self.clips.iter_mut().find(|c| c.id == id) else {
            return;
        };

        if let Some(name) = patch.name {
            clip.name = name;
        }
        if let Some(content) = patch.content {
            clip.content = Some(content);
        }
        if let Some(start) = patch.start_offset {
            clip.start_offset = start.max(0.0);
        }
        if let Some(duration) = patch.duration {
            if duration > 0.0 {
                clip.duration = duration;
            } else {
                tracing::debug!(clip_id = %id, duration, "Ignoring non-positive duration in patch");
            }
        }
        if let Some(track_id) = patch.track_id {
            clip.track_id = track_id;
        }
        if let Some(waveform) = patch.waveform {
            clip.waveform = Some(waveform);
        }
        if let Some(v) = patch.opacity {
            clip.opacity = v;
        }
        if let Some(v) = patch.scale {
            clip.scale = v;
        }
        if let Some(v) = patch.rotation {
            clip.rotation = v;
        }
        if let Some(v) = patch.x {
            clip.x = v;
        }
        if let Some(v) = patch.y {
            clip.y = v;
        }
        if let Some(v) = patch.volume {
            clip.volume = v;
        }
        if let Some(v) = patch.speed {
            clip.speed = v;
        }
        if let Some(v) = patch.brightness {
            clip.brightness = v;
        }
        if let Some(v) = patch.contrast {
            clip.contrast = v;
        }
        if let Some(v) = patch.saturation {
            clip.saturation = v;
        }
        if let Some(v) = patch.blur {
            clip.blur = v;
        }
        if let Some(v) = patch.grayscale {
            clip.grayscale = v;
        }
        if let Some(v) = patch.sepia {
            clip.sepia = v;
        }
        if let Some(v) = patch.hue_rotate {
            clip.hue_rotate = v;
        }
        if let Some(v) = patch.fade_in {
            clip.fade_in = v;
        }
        if let Some(v) = patch.fade_out {
            clip.fade_out = v;
        }
        if let Some(style) = patch.text_style {
            clip.text_style = Some(style);
        }
    }

    /// Delete a clip by id. Clears the selection if it referenced the clip.
    pub fn delete_clip(&mut self, id: &str) {
        let before = self.clips.len();
        self.clips.retain(|c| c.id != id);
        if self.clips.len() < before {
            tracing::debug!(clip_id = %id, "Deleted clip");
        }
        if self.selected_clip_id.as_deref() == Some(id) {
            self.selected_clip_id = None;
        }
    }

    /// Append a new visual track. Returns the new track's id.
    pub fn add_track(&mut self) -> usize {
        let id = self.tracks.len();
        self.tracks.push(Track::new(id, TrackKind::Visual));
        tracing::debug!(track_id = id, "Added track");
        id
    }

    /// Flip a track's mute flag. Unknown ids are a no-op.
    pub fn toggle_track_mute(&mut self, track_id: usize) {
        if let Some(track) = self.tracks.get_mut(track_id) {
            track.muted = !track.muted;
            tracing::debug!(track_id, muted = track.muted, "Toggled track mute");
        }
    }

    /// Flip a track's lock flag. Unknown ids are a no-op.
    pub fn toggle_track_lock(&mut self, track_id: usize) {
        if let Some(track) = self.tracks.get_mut(track_id) {
            track.locked = !track.locked;
            tracing::debug!(track_id, locked = track.locked, "Toggled track lock");
        }
    }

    /// Select a clip (or clear the selection with `None`).
    pub fn select_clip(&mut self, id: Option<&str>) {
        self.selected_clip_id = id.map(str::to_string);
    }

    /// Insert (or replace) a keyframe on a clip at a clip-local time.
    /// Unknown clip ids are a no-op. Negative local times are floored at 0.
    pub fn add_keyframe(
        &mut self,
        clip_id: &str,
        property: KeyframeProperty,
        local_time: f64,
        value: f64,
    ) {
        let id = self.id_gen.next("kf");
        if let Some(clip) = self.clips.iter_mut().find(|c| c.id == clip_id) {
            let time = local_time.max(0.0);
            clip.upsert_keyframe(Keyframe::new(id, time, property, value));
            tracing::debug!(clip_id = %clip_id, ?property, time, value, "Keyframe set");
        }
    }

    /// Split a clip at absolute timeline time `time`. Valid only when the
    /// cursor lies strictly inside the clip; otherwise a no-op. Returns the
    /// id of the new tail clip on success.
    pub fn split_clip(&mut self, clip_id: &str, time: f64) -> Option<String> {
        let new_id = self.id_gen.next("clip");
        let clip = self.clips.iter_mut().find(|c| c.id == clip_id)?;
        let tail = clip.split_at(time, new_id)?;
        let tail_id = tail.id.clone();
        tracing::debug!(clip_id = %clip_id, tail_id = %tail_id, at = time, "Split clip");
        self.clips.push(tail);
        Some(tail_id)
    }

    /// Ensure tracks `0..=track_id` all exist, synthesizing missing entries
    /// of the given kind. Core invariant: no clip may ever reference a
    /// missing track.
    pub fn ensure_track_capacity(&mut self, track_id: usize, kind: TrackKind) {
        while self.tracks.len() <= track_id {
            let id = self.tracks.len();
            self.tracks.push(Track::new(id, kind));
            tracing::debug!(track_id = id, ?kind, "Synthesized track");
        }
    }

    /// Drop the selection if the referenced clip no longer exists.
    /// Called after snapshot restores, which replace the clip set wholesale.
    pub fn validate_selection(&mut self) {
        if let Some(id) = self.selected_clip_id.clone() {
            if self.find_clip(&id).is_none() {
                self.selected_clip_id = None;
            }
        }
    }
}
