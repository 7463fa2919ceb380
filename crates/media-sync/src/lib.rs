//! `lumina-media-sync` — The boundary between the engine and host media.
//!
//! The timeline is declarative; media elements, microphones, and metadata
//! probes are stateful host resources. This crate owns that boundary:
//!
//! - [`MediaHandle`] / [`MediaSyncController`]: keep host media elements on
//!   the timeline clock with tolerance-based drift correction
//! - [`import_clip`]: turn imported files into placed clips, probing
//!   metadata and extracting display waveforms
//! - [`Recorder`] / [`CaptureDevice`]: audio capture onto the timeline
//!
//! Host-side effects all sit behind traits so the engine stays testable
//! without a browser or audio stack.

pub mod error;
pub mod handle;
pub mod import;
pub mod probe;
pub mod record;
pub mod sync;
pub mod waveform;

pub use error::MediaSyncError;
pub use handle::MediaHandle;
pub use import::{classify_mime, default_track_for, import_clip, ImportRequest};
pub use probe::{MediaMetadata, MetadataProbe, NullProbe};
pub use record::{CaptureDevice, RecordedAudio, Recorder, RECORDING_TRACK};
pub use sync::{drift_correction, MediaSyncController, SyncAction};
pub use waveform::{extract_peaks, flat_fallback};
