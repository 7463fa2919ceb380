//! Engine configuration: capacities, interaction geometry, and sync policy.
//!
//! One [`EngineConfig`] is created at application start and passed by
//! reference to the components that need it — there is no ambient global.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed timeline capacity in seconds. This is the upper bound the
    /// playback clock runs against, not the extent of placed content.
    pub timeline_capacity: f64,
    /// Default zoom level in pixels per second.
    pub default_zoom: f64,
    /// Height of one timeline track in pixels, used to map vertical drag
    /// distance to track reassignment.
    pub track_height: f64,
    /// Whether muting a visual track also hides it from the composited
    /// output. Audio silencing and visual hiding are independent concerns;
    /// this couples them when enabled.
    pub mute_hides_visual: bool,
    /// Allowed drift between a media handle and the timeline while playing,
    /// in seconds. Coarse, to avoid correction stutter.
    pub drift_tolerance_playing: f64,
    /// Allowed drift while paused or scrubbing, in seconds. Tighter, so the
    /// scrub preview stays accurate.
    pub drift_tolerance_paused: f64,
    /// Number of peak buckets produced by waveform extraction.
    pub waveform_buckets: usize,
    /// Clip duration assumed when the metadata probe fails, in seconds.
    pub fallback_media_duration: f64,
    /// Lower bound for the on-canvas resize gesture's scale factor.
    pub min_canvas_scale: f64,
    /// Minimum duration of a finished audio recording, in seconds.
    pub min_recording_duration: f64,
    /// Maximum number of undo snapshots retained.
    pub max_history_entries: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timeline_capacity: 3600.0,
            default_zoom: 40.0,
            track_height: 80.0,
            mute_hides_visual: true,
            drift_tolerance_playing: 0.1,
            drift_tolerance_paused: 0.05,
            waveform_buckets: 200,
            fallback_media_duration: 5.0,
            min_canvas_scale: 0.1,
            min_recording_duration: 0.5,
            max_history_entries: 100,
        }
    }
}
