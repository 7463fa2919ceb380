//! Timeline tracks: ordered lanes that hold clips.

use serde::{Deserialize, Serialize};

/// Kind of content a track carries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    /// Video, image, and text clips.
    #[default]
    Visual,
    /// Audio clips.
    Audio,
}

/// A single track in the timeline.
///
/// Tracks form an ordered list; a track's `id` equals its index at creation
/// time and never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Stable identifier, equal to the track's index at creation.
    pub id: usize,
    /// What kind of clips this track carries.
    pub kind: TrackKind,
    /// Silences audio clips on this track. For visual tracks this may also
    /// suppress rendering, depending on engine policy.
    pub muted: bool,
    /// Blocks position and track-reassignment gestures for clips on this
    /// track. Property-panel edits are still allowed.
    pub locked: bool,
}

impl Track {
    /// Create an unmuted, unlocked track.
    pub fn new(id: usize, kind: TrackKind) -> Self {
        Self {
            id,
            kind,
            muted: false,
            locked: false,
        }
    }

    /// The default starting layout: two visual tracks above two audio tracks.
    pub fn default_layout() -> Vec<Track> {
        vec![
            Track::new(0, TrackKind::Visual),
            Track::new(1, TrackKind::Visual),
            Track::new(2, TrackKind::Audio),
            Track::new(3, TrackKind::Audio),
        ]
    }
}
