//! Frame evaluation: flatten the timeline at time `t` into renderable
//! layers and audible sources.

use serde::{Deserialize, Serialize};

use lumina_common::EngineConfig;
use lumina_timeline::{Clip, ClipKind, KeyframeProperty, TextStyle, Track};

use crate::keyframe::{animated_value, fade_envelope};
use crate::resolver::{active_media_clips, active_visual_clips, ResolvePolicy};

/// Static filter parameters sampled from a clip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterParams {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub blur: f64,
    pub grayscale: f64,
    pub sepia: f64,
    pub hue_rotate: f64,
}

impl FilterParams {
    fn from_clip(clip: &Clip) -> Self {
        Self {
            brightness: clip.brightness,
            contrast: clip.contrast,
            saturation: clip.saturation,
            blur: clip.blur,
            grayscale: clip.grayscale,
            sepia: clip.sepia,
            hue_rotate: clip.hue_rotate,
        }
    }

    pub fn is_neutral(&self) -> bool {
        (self.brightness - 1.0).abs() < f64::EPSILON
            && (self.contrast - 1.0).abs() < f64::EPSILON
            && (self.saturation - 1.0).abs() < f64::EPSILON
            && self.blur == 0.0
            && self.grayscale == 0.0
            && self.sepia == 0.0
            && self.hue_rotate == 0.0
    }
}

/// One visual layer of the frame, with all animated values sampled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualLayer {
    pub clip_id: String,
    pub kind: ClipKind,
    /// Animated opacity multiplied by the fade envelope, in `[0, 1]`.
    pub opacity: f64,
    pub scale: f64,
    pub rotation: f64,
    pub x: f64,
    pub y: f64,
    pub filters: FilterParams,
    /// Position within the clip's media source, in seconds, speed-adjusted.
    /// `None` for clips without a media source (text, images). Playback
    /// state for the backing element lives in [`FrameState::media`].
    pub media_time: Option<f64>,
    /// Text content and styling (text clips only).
    pub text: Option<(String, TextStyle)>,
    /// Opaque media source handle, for the host to resolve.
    pub source: Option<String>,
}

/// Playback state for one media-backed clip (audio or video) active this
/// frame. Includes clips that are currently hidden or silenced: their media
/// elements still follow the timeline clock, just at volume 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaSource {
    pub clip_id: String,
    /// Effective volume: 0.0 when the owning track is muted.
    pub volume: f64,
    /// Speed-adjusted position within the media source, in seconds.
    pub media_time: f64,
    /// Playback rate, `1.0` = realtime.
    pub speed: f64,
    pub source: Option<String>,
}

/// Complete evaluation of the timeline at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    /// Timeline time this frame was evaluated at.
    pub time: f64,
    /// Visual layers in painting order (back to front).
    pub layers: Vec<VisualLayer>,
    /// Every active media-backed clip, hidden and silenced ones included.
    pub media: Vec<MediaSource>,
}

/// Speed-adjusted position within a clip's media source.
pub fn media_time(clip: &Clip, time: f64) -> f64 {
    clip.local_time(time) * clip.speed
}

/// Effective volume of a clip: the clip's own volume, or 0 when the owning
/// track is muted.
pub fn effective_volume(clip: &Clip, tracks: &[Track]) -> f64 {
    if tracks.get(clip.track_id).is_some_and(|t| t.muted) {
        0.0
    } else {
        clip.volume
    }
}

fn evaluate_layer(clip: &Clip, time: f64) -> VisualLayer {
    let local = clip.local_time(time);
    let opacity = animated_value(clip, KeyframeProperty::Opacity, local) * fade_envelope(clip, local);
    VisualLayer {
        clip_id: clip.id.clone(),
        kind: clip.kind,
        opacity: opacity.clamp(0.0, 1.0),
        scale: animated_value(clip, KeyframeProperty::Scale, local),
        rotation: animated_value(clip, KeyframeProperty::Rotation, local),
        x: animated_value(clip, KeyframeProperty::X, local),
        y: animated_value(clip, KeyframeProperty::Y, local),
        filters: FilterParams::from_clip(clip),
        media_time: clip.kind.has_media().then(|| media_time(clip, time)),
        text: match clip.kind {
            ClipKind::Text => Some((
                clip.content.clone().unwrap_or_default(),
                clip.text_style.clone().unwrap_or_default(),
            )),
            _ => None,
        },
        source: clip.source.clone(),
    }
}

/// Evaluate the full timeline at `time`.
pub fn evaluate(clips: &[Clip], tracks: &[Track], time: f64, config: &EngineConfig) -> FrameState {
    let policy = ResolvePolicy {
        mute_hides_visual: config.mute_hides_visual,
    };

    let layers: Vec<VisualLayer> = active_visual_clips(clips, tracks, time, policy)
        .into_iter()
        .map(|clip| evaluate_layer(clip, time))
        .collect();
    tracing::trace!(time, layers = layers.len(), "Evaluated frame");

    let media = active_media_clips(clips, time)
        .into_iter()
        .map(|clip| MediaSource {
            clip_id: clip.id.clone(),
            volume: effective_volume(clip, tracks),
            media_time: media_time(clip, time),
            speed: clip.speed,
            source: clip.source.clone(),
        })
        .collect();

    FrameState {
        time,
        layers,
        media,
    }
}
