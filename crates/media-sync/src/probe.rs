//! Metadata probing for imported media sources.

use crate::error::MediaSyncError;

/// Metadata read from a media source before it is placed on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaMetadata {
    /// Intrinsic duration of the source, in seconds.
    pub duration: f64,
}

/// Reads media metadata. Implemented by the host (over an HTML media
/// element, a demuxer, a test double).
pub trait MetadataProbe {
    fn probe(&self, source: &str) -> Result<MediaMetadata, MediaSyncError>;
}

/// Probe that fails for every source. Useful where no probing backend
/// exists; import falls back to the configured default duration.
pub struct NullProbe;

impl MetadataProbe for NullProbe {
    fn probe(&self, source: &str) -> Result<MediaMetadata, MediaSyncError> {
        Err(MediaSyncError::ProbeFailed {
            uri: source.to_string(),
            reason: "no probing backend".to_string(),
        })
    }
}
