//! Turning imported files into timeline clips.

use lumina_common::EngineConfig;
use lumina_timeline::{Clip, ClipKind};

use crate::probe::MetadataProbe;
use crate::waveform::{extract_peaks, flat_fallback};

/// Classify an imported file by its MIME type. Unknown types import as
/// video, the most forgiving default for timeline placement.
pub fn classify_mime(mime: &str) -> ClipKind {
    if mime.starts_with("audio/") {
        ClipKind::Audio
    } else if mime.starts_with("image/") {
        ClipKind::Image
    } else {
        ClipKind::Video
    }
}

/// Default track for a newly imported clip: audio goes to the first audio
/// track of the default layout, everything else to the top visual track.
pub fn default_track_for(kind: ClipKind) -> usize {
    match kind {
        ClipKind::Audio => 2,
        _ => 0,
    }
}

/// An import request: everything known about the file before probing.
#[derive(Clone, Debug)]
pub struct ImportRequest {
    /// Clip id, allocated by the caller's id source.
    pub id: String,
    /// Display name, usually the file name.
    pub name: String,
    /// MIME type reported by the host.
    pub mime: String,
    /// Opaque source handle (object URL, path) the host can resolve.
    pub source: String,
    /// Timeline position for the new clip.
    pub start_offset: f64,
    /// Decoded PCM samples for waveform display, when the host has them.
    pub samples: Option<Vec<f32>>,
}

/// Build a clip from an import request.
///
/// Duration comes from the metadata probe; when the probe fails (or the
/// source has no intrinsic duration, like images) the configured fallback
/// applies. Audio clips get a waveform: real peaks when samples were
/// decoded, the flat placeholder otherwise.
pub fn import_clip(
    request: ImportRequest,
    probe: &dyn MetadataProbe,
    config: &EngineConfig,
) -> Clip {
    let kind = classify_mime(&request.mime);

    let duration = if kind.has_media() {
        match probe.probe(&request.source) {
            Ok(meta) if meta.duration > 0.0 => meta.duration,
            Ok(meta) => {
                tracing::warn!(source = %request.source, duration = meta.duration, "Probe returned unusable duration, using fallback");
                config.fallback_media_duration
            }
            Err(err) => {
                tracing::warn!(source = %request.source, %err, "Metadata probe failed, using fallback duration");
                config.fallback_media_duration
            }
        }
    } else {
        config.fallback_media_duration
    };

    let mut clip = Clip::new(
        request.id,
        kind,
        request.name,
        request.start_offset,
        duration,
        default_track_for(kind),
    );
    clip.source = Some(request.source);

    if kind == ClipKind::Audio {
        clip.waveform = Some(match request.samples.as_deref() {
            Some(samples) if !samples.is_empty() => extract_peaks(samples, config.waveform_buckets),
            _ => flat_fallback(config.waveform_buckets),
        });
    }

    tracing::info!(clip_id = %clip.id, ?kind, duration, track = clip.track_id, "Imported media");
    clip
}
