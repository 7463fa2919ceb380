//! Pointer gesture state machine for direct manipulation of clips.
//!
//! Gestures capture the manipulated values at pointer-down and derive every
//! update from the *original* values plus the total pointer delta. This
//! keeps long drags stable: incremental accumulation would compound the
//! rounding of each intermediate event.

use lumina_common::EngineConfig;
use lumina_editor_state::ClipPatch;
use lumina_timeline::{Clip, Track};

/// Horizontal pixels of drag per unit of canvas scale change.
const RESIZE_SENSITIVITY: f64 = 100.0;

/// The active gesture, if any. One pointer, one gesture at a time.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    /// Moving a clip along the timeline and across tracks.
    TimelineDrag {
        clip_id: String,
        origin_x: f64,
        origin_y: f64,
        start_offset: f64,
        track_id: usize,
    },
    /// Moving a clip on the preview canvas.
    CanvasDrag {
        clip_id: String,
        origin_x: f64,
        origin_y: f64,
        x: f64,
        y: f64,
    },
    /// Resizing a clip on the preview canvas.
    CanvasResize {
        clip_id: String,
        origin_x: f64,
        scale: f64,
    },
}

/// Pointer-driven editing. The controller owns no clip data; callers feed it
/// the current clip/track state and apply the patches it emits.
#[derive(Clone, Debug)]
pub struct GestureController {
    gesture: Gesture,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureController {
    pub fn new() -> Self {
        Self {
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_active(&self) -> bool {
        self.gesture != Gesture::Idle
    }

    /// Start dragging a clip on the timeline. Rejected when the clip's track
    /// is locked; returns whether the gesture began. The caller selects the
    /// clip on pointer-down regardless.
    pub fn begin_timeline_drag(
        &mut self,
        clip: &Clip,
        tracks: &[Track],
        pointer_x: f64,
        pointer_y: f64,
    ) -> bool {
        if tracks.get(clip.track_id).is_some_and(|t| t.locked) {
            tracing::debug!(clip_id = %clip.id, track = clip.track_id, "Drag rejected, track locked");
            return false;
        }
        self.gesture = Gesture::TimelineDrag {
            clip_id: clip.id.clone(),
            origin_x: pointer_x,
            origin_y: pointer_y,
            start_offset: clip.start_offset,
            track_id: clip.track_id,
        };
        true
    }

    /// Start moving a clip on the canvas.
    pub fn begin_canvas_drag(&mut self, clip: &Clip, pointer_x: f64, pointer_y: f64) {
        self.gesture = Gesture::CanvasDrag {
            clip_id: clip.id.clone(),
            origin_x: pointer_x,
            origin_y: pointer_y,
            x: clip.x,
            y: clip.y,
        };
    }

    /// Start resizing a clip on the canvas.
    pub fn begin_canvas_resize(&mut self, clip: &Clip, pointer_x: f64) {
        self.gesture = Gesture::CanvasResize {
            clip_id: clip.id.clone(),
            origin_x: pointer_x,
            scale: clip.scale,
        };
    }

    /// Process a pointer move. Returns the clip id and patch to apply, or
    /// `None` when no gesture is active.
    ///
    /// Timeline drags map horizontal distance to seconds through the zoom
    /// level and vertical distance to whole track steps through the track
    /// height. A move onto a locked track keeps the horizontal part and
    /// reverts only the track change, so the drag glides along the locked
    /// neighbour instead of sticking.
    pub fn pointer_move(
        &self,
        tracks: &[Track],
        zoom_level: f64,
        config: &EngineConfig,
        pointer_x: f64,
        pointer_y: f64,
    ) -> Option<(String, ClipPatch)> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::TimelineDrag {
                clip_id,
                origin_x,
                origin_y,
                start_offset,
                track_id,
            } => {
                let dx = pointer_x - origin_x;
                let dy = pointer_y - origin_y;

                let new_start = (start_offset + dx / zoom_level).max(0.0);

                let step = (dy / config.track_height).round() as i64;
                let candidate = (*track_id as i64 + step).max(0) as usize;
                // Moving past the last track is allowed; the store
                // synthesizes tracks on demand. Locked destinations are not.
                let new_track = if candidate != *track_id
                    && tracks.get(candidate).is_some_and(|t| t.locked)
                {
                    *track_id
                } else {
                    candidate
                };

                Some((clip_id.clone(), ClipPatch::position(new_start, new_track)))
            }
            Gesture::CanvasDrag {
                clip_id,
                origin_x,
                origin_y,
                x,
                y,
            } => {
                let dx = pointer_x - origin_x;
                let dy = pointer_y - origin_y;
                Some((clip_id.clone(), ClipPatch::canvas_offset(x + dx, y + dy)))
            }
            Gesture::CanvasResize {
                clip_id,
                origin_x,
                scale,
            } => {
                let dx = pointer_x - origin_x;
                let new_scale = (scale + dx / RESIZE_SENSITIVITY).max(config.min_canvas_scale);
                Some((clip_id.clone(), ClipPatch::canvas_scale(new_scale)))
            }
        }
    }

    /// End the gesture. Returns the id of the clip that was being
    /// manipulated, if any.
    pub fn pointer_up(&mut self) -> Option<String> {
        let id = match &self.gesture {
            Gesture::Idle => None,
            Gesture::TimelineDrag { clip_id, .. }
            | Gesture::CanvasDrag { clip_id, .. }
            | Gesture::CanvasResize { clip_id, .. } => Some(clip_id.clone()),
        };
        self.gesture = Gesture::Idle;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_timeline::{ClipKind, TrackKind};

    fn make_clip(start: f64, track: usize) -> Clip {
        Clip::new("c1", ClipKind::Video, "a.mp4", start, 5.0, track)
    }

    fn tracks(n: usize) -> Vec<Track> {
        (0..n).map(|i| Track::new(i, TrackKind::Visual)).collect()
    }

    fn config() -> EngineConfig {
        EngineConfig::default() // zoom 40 px/s, track height 80 px
    }

    #[test]
    fn locked_track_rejects_drag_start() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 1);
        let mut tracks = tracks(3);
        tracks[1].locked = true;

        assert!(!ctl.begin_timeline_drag(&clip, &tracks, 100.0, 100.0));
        assert!(!ctl.is_active());
    }

    #[test]
    fn horizontal_drag_maps_pixels_to_seconds() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 0);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 50.0);

        // 80px right at 40 px/s = +2s
        let (id, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 180.0, 50.0)
            .unwrap();
        assert_eq!(id, "c1");
        assert!((patch.start_offset.unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(patch.track_id, Some(0));
    }

    #[test]
    fn drag_left_clamps_at_timeline_start() {
        let mut ctl = GestureController::new();
        let clip = make_clip(1.0, 0);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 50.0);

        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), -300.0, 50.0)
            .unwrap();
        assert!((patch.start_offset.unwrap() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn vertical_drag_steps_whole_tracks() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 1);
        let tracks = tracks(4);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 100.0);

        // 30px down: under half a track height, stays put.
        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 100.0, 130.0)
            .unwrap();
        assert_eq!(patch.track_id, Some(1));

        // 90px down: rounds to one track.
        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 100.0, 190.0)
            .unwrap();
        assert_eq!(patch.track_id, Some(2));
    }

    #[test]
    fn drag_above_first_track_clamps_to_zero() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 0);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 100.0);

        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 100.0, -500.0)
            .unwrap();
        assert_eq!(patch.track_id, Some(0));
    }

    #[test]
    fn drag_below_last_track_is_allowed() {
        // The store synthesizes new tracks; the gesture does not clamp.
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 2);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 100.0);

        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 100.0, 340.0)
            .unwrap();
        assert_eq!(patch.track_id, Some(5));
    }

    #[test]
    fn locked_destination_reverts_track_change_only() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 0);
        let mut tracks = tracks(3);
        tracks[1].locked = true;
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 50.0);

        // 80px right and 80px down: +2s, onto locked track 1.
        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 180.0, 130.0)
            .unwrap();
        assert!((patch.start_offset.unwrap() - 4.0).abs() < 1e-9);
        assert_eq!(patch.track_id, Some(0));
    }

    #[test]
    fn moves_derive_from_gesture_origin_not_previous_move() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 0);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 50.0);

        let _ = ctl.pointer_move(&tracks, 40.0, &config(), 180.0, 50.0);
        // Returning to the origin restores the original position exactly.
        let (_, patch) = ctl
            .pointer_move(&tracks, 40.0, &config(), 100.0, 50.0)
            .unwrap();
        assert!((patch.start_offset.unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn canvas_drag_offsets_from_initial_position() {
        let mut ctl = GestureController::new();
        let mut clip = make_clip(0.0, 0);
        clip.x = 10.0;
        clip.y = -5.0;
        ctl.begin_canvas_drag(&clip, 200.0, 200.0);

        let (_, patch) = ctl
            .pointer_move(&tracks(3), 40.0, &config(), 230.0, 180.0)
            .unwrap();
        assert!((patch.x.unwrap() - 40.0).abs() < 1e-9);
        assert!((patch.y.unwrap() - -25.0).abs() < 1e-9);
    }

    #[test]
    fn canvas_resize_scales_with_floor() {
        let mut ctl = GestureController::new();
        let clip = make_clip(0.0, 0);
        ctl.begin_canvas_resize(&clip, 300.0);

        // 50px right: scale 1.0 -> 1.5
        let (_, patch) = ctl
            .pointer_move(&tracks(3), 40.0, &config(), 350.0, 0.0)
            .unwrap();
        assert!((patch.scale.unwrap() - 1.5).abs() < 1e-9);

        // Far left: floored at the configured minimum, never zero/negative.
        let (_, patch) = ctl
            .pointer_move(&tracks(3), 40.0, &config(), -1000.0, 0.0)
            .unwrap();
        assert!((patch.scale.unwrap() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn pointer_up_ends_gesture() {
        let mut ctl = GestureController::new();
        let clip = make_clip(2.0, 0);
        let tracks = tracks(3);
        ctl.begin_timeline_drag(&clip, &tracks, 100.0, 50.0);

        assert_eq!(ctl.pointer_up().as_deref(), Some("c1"));
        assert!(!ctl.is_active());
        assert!(ctl
            .pointer_move(&tracks, 40.0, &config(), 500.0, 500.0)
            .is_none());
        assert!(ctl.pointer_up().is_none());
    }
}
