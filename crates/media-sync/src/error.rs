//! Error types for media playback, capture, and probing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaSyncError {
    /// The host refused to start playback without a user gesture.
    #[error("playback start rejected by host autoplay policy")]
    AutoplayRejected,

    /// The user or platform denied access to the capture device.
    #[error("capture device access denied")]
    CaptureDenied,

    /// The capture device failed mid-recording.
    #[error("capture device failed: {0}")]
    CaptureFailed(String),

    /// The metadata probe could not read the source.
    #[error("metadata probe failed for {uri}: {reason}")]
    ProbeFailed { uri: String, reason: String },
}
