//! Clips: time-bounded units of media/text/image content placed on tracks.

use serde::{Deserialize, Serialize};

use crate::keyframe::{Keyframe, KeyframeProperty};

/// Kind of content a clip holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClipKind {
    Video,
    Audio,
    Text,
    Image,
}

impl ClipKind {
    /// Whether this clip participates in visual compositing.
    pub fn is_visual(self) -> bool {
        !matches!(self, ClipKind::Audio)
    }

    /// Whether this clip is backed by a playable media source.
    pub fn has_media(self) -> bool {
        matches!(self, ClipKind::Video | ClipKind::Audio)
    }
}

/// Horizontal text alignment for text clips.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Style attributes carried by text clips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub color: String,
    pub background_color: Option<String>,
    pub align: TextAlign,
    pub font_weight: String,
    pub shadow: Option<String>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 40.0,
            color: "#ffffff".to_string(),
            background_color: None,
            align: TextAlign::Center,
            font_weight: "bold".to_string(),
            shadow: Some("2px 2px 4px rgba(0,0,0,0.5)".to_string()),
        }
    }
}

/// A clip placed on a track. Occupies the half-open timeline interval
/// `[start_offset, start_offset + duration)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Unique clip identifier.
    pub id: String,
    /// Content kind.
    pub kind: ClipKind,
    /// Display name.
    pub name: String,
    /// Text content (text clips only).
    pub content: Option<String>,
    /// Absolute timeline position in seconds. Always >= 0.
    pub start_offset: f64,
    /// Playing length in seconds. Always > 0.
    pub duration: f64,
    /// Index of the owning track.
    pub track_id: usize,
    /// Opaque handle to the external media source, if any.
    pub source: Option<String>,
    /// Normalized peak magnitudes in [0, 1] for timeline display.
    pub waveform: Option<Vec<f32>>,

    // --- Transform ---
    /// 0.0 = transparent, 1.0 = fully opaque.
    pub opacity: f64,
    /// Uniform scale factor, 1.0 = original size.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Horizontal canvas offset in pixels.
    pub x: f64,
    /// Vertical canvas offset in pixels.
    pub y: f64,
    /// Audio volume, 1.0 = unity gain.
    pub volume: f64,
    /// Playback speed multiplier, 1.0 = realtime.
    pub speed: f64,

    // --- Filters ---
    /// 1.0 is neutral.
    pub brightness: f64,
    /// 1.0 is neutral.
    pub contrast: f64,
    /// 1.0 is neutral.
    pub saturation: f64,
    /// Blur radius in pixels.
    pub blur: f64,
    /// 0..=1.
    pub grayscale: f64,
    /// 0..=1.
    pub sepia: f64,
    /// Hue rotation in degrees.
    pub hue_rotate: f64,

    // --- Fades ---
    /// Opacity ramp-in length at clip start, in seconds.
    pub fade_in: f64,
    /// Opacity ramp-out length at clip end, in seconds.
    pub fade_out: f64,

    /// Text styling (text clips only).
    pub text_style: Option<TextStyle>,
    /// Keyframes, kept sorted ascending by time.
    pub keyframes: Vec<Keyframe>,
}

impl Clip {
    /// Create a clip with neutral transform and filter parameters.
    pub fn new(
        id: impl Into<String>,
        kind: ClipKind,
        name: impl Into<String>,
        start_offset: f64,
        duration: f64,
        track_id: usize,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            content: None,
            start_offset: start_offset.max(0.0),
            duration,
            track_id,
            source: None,
            waveform: None,
            opacity: 1.0,
            scale: 1.0,
            rotation: 0.0,
            x: 0.0,
            y: 0.0,
            volume: 1.0,
            speed: 1.0,
            brightness: 1.0,
            contrast: 1.0,
            saturation: 1.0,
            blur: 0.0,
            grayscale: 0.0,
            sepia: 0.0,
            hue_rotate: 0.0,
            fade_in: 0.0,
            fade_out: 0.0,
            text_style: None,
            keyframes: Vec::new(),
        }
    }

    /// End of the clip's interval on the timeline (exclusive).
    pub fn end(&self) -> f64 {
        self.start_offset + self.duration
    }

    /// Returns `true` if the half-open interval contains `time`.
    pub fn is_active_at(&self, time: f64) -> bool {
        time >= self.start_offset && time < self.end()
    }

    /// Convert an absolute timeline time to clip-local time.
    pub fn local_time(&self, time: f64) -> f64 {
        time - self.start_offset
    }

    /// Insert a keyframe, replacing any existing keyframe on the same
    /// property at the same time. Keyframes stay sorted ascending by time.
    pub fn upsert_keyframe(&mut self, keyframe: Keyframe) {
        self.keyframes
            .retain(|k| !(k.property == keyframe.property && k.time == keyframe.time));
        self.keyframes.push(keyframe);
        self.keyframes
            .sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(std::cmp::Ordering::Equal));
    }

    /// Keyframes for one property, in ascending time order.
    pub fn keyframes_for(&self, property: KeyframeProperty) -> impl Iterator<Item = &Keyframe> {
        self.keyframes.iter().filter(move |k| k.property == property)
    }

    /// Split this clip at absolute timeline time `time`.
    ///
    /// Valid only when `time` lies strictly inside the clip's interval.
    /// On success the clip is truncated to `[start_offset, time)` and the
    /// returned tail covers `[time, old_end)` with the same parameters, the
    /// given id, an adjusted name, and an empty keyframe set.
    pub fn split_at(&mut self, time: f64, new_id: impl Into<String>) -> Option<Clip> {
        if time <= self.start_offset || time >= self.end() {
            return None;
        }

        let tail_duration = self.end() - time;
        self.duration = time - self.start_offset;

        let mut tail = self.clone();
        tail.id = new_id.into();
        tail.name = format!("{} (Split)", self.name);
        tail.start_offset = time;
        tail.duration = tail_duration;
        tail.keyframes.clear();
        Some(tail)
    }
}
