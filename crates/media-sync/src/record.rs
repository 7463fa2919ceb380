//! Audio capture into timeline clips.

use lumina_common::EngineConfig;
use lumina_timeline::{Clip, ClipKind};

use crate::error::MediaSyncError;
use crate::waveform::extract_peaks;

/// Track the default layout reserves for recordings, below the imported
/// audio track.
pub const RECORDING_TRACK: usize = 3;

/// A finished capture, as delivered by the device.
#[derive(Clone, Debug)]
pub struct RecordedAudio {
    /// Decoded mono PCM samples.
    pub samples: Vec<f32>,
    /// Wall time the capture ran for, in seconds.
    pub elapsed: f64,
    /// Opaque handle to the encoded result (object URL, path).
    pub source: String,
}

/// A microphone or other capture backend owned by the host.
///
/// `start` may fail with [`MediaSyncError::CaptureDenied`] when the user or
/// platform refuses device access. After a successful `start`, the device is
/// held until `stop` — implementations release the underlying hardware
/// there, whether the capture succeeded or not.
pub trait CaptureDevice {
    fn start(&mut self) -> Result<(), MediaSyncError>;
    fn stop(&mut self) -> Result<RecordedAudio, MediaSyncError>;
}

/// Drives a [`CaptureDevice`] and turns the result into a clip.
pub struct Recorder<D: CaptureDevice> {
    device: D,
    recording: bool,
}

impl<D: CaptureDevice> Recorder<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            recording: false,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Begin capturing. Denied device access surfaces as
    /// [`MediaSyncError::CaptureDenied`] with the recorder left idle.
    pub fn start(&mut self) -> Result<(), MediaSyncError> {
        if self.recording {
            return Ok(());
        }
        self.device.start()?;
        self.recording = true;
        tracing::info!("Recording started");
        Ok(())
    }

    /// Stop capturing and place the result as a clip at `start_offset`.
    ///
    /// The clip duration is the captured wall time, floored at the
    /// configured minimum so a stray click still yields a grabbable clip.
    /// The recorder returns to idle even when the device fails on stop.
    pub fn finish(
        &mut self,
        clip_id: impl Into<String>,
        start_offset: f64,
        config: &EngineConfig,
    ) -> Result<Clip, MediaSyncError> {
        if !self.recording {
            return Err(MediaSyncError::CaptureFailed("not recording".to_string()));
        }
        self.recording = false;

        let recorded = self.device.stop()?;
        let duration = recorded.elapsed.max(config.min_recording_duration);

        let mut clip = Clip::new(
            clip_id,
            ClipKind::Audio,
            "Recording",
            start_offset,
            duration,
            RECORDING_TRACK,
        );
        clip.source = Some(recorded.source);
        clip.waveform = Some(extract_peaks(&recorded.samples, config.waveform_buckets));

        tracing::info!(clip_id = %clip.id, duration, "Recording placed on timeline");
        Ok(clip)
    }
}
