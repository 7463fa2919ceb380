//! The contract between the sync controller and host media elements.

use crate::error::MediaSyncError;

/// A playable media element owned by the host (an `<audio>`/`<video>`
/// element, a decoder pipeline, a test double).
///
/// The controller never assumes a call took effect synchronously; it reads
/// [`current_time`](MediaHandle::current_time) back on the next tick and
/// corrects again if needed.
pub trait MediaHandle {
    /// Current playback position within the media source, in seconds.
    fn current_time(&self) -> f64;

    /// Jump to a position within the media source.
    fn seek(&mut self, time: f64);

    /// Set the output volume, `1.0` = unity gain.
    fn set_volume(&mut self, volume: f64);

    /// Set the playback rate, `1.0` = realtime.
    fn set_rate(&mut self, rate: f64);

    /// Start playback. Hosts with an autoplay policy may reject this until
    /// a user gesture has occurred; the controller retries on later ticks.
    fn play(&mut self) -> Result<(), MediaSyncError>;

    /// Pause playback. Always succeeds.
    fn pause(&mut self);

    fn is_playing(&self) -> bool;
}
