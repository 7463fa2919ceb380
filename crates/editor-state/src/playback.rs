//! Frame-driven playback clock.

use serde::{Deserialize, Serialize};

use lumina_common::TimeCode;

/// Advances the timeline cursor from host frame callbacks.
///
/// The clock holds no timer of its own. The host calls [`tick`] once per
/// rendered frame with a monotonic timestamp; the clock integrates the
/// elapsed wall time into the cursor. The first tick after play/seek only
/// establishes the baseline, so a long pause never produces a jump.
///
/// [`tick`]: PlaybackClock::tick
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlaybackClock {
    current: TimeCode,
    playing: bool,
    /// Timeline capacity in seconds; the cursor never exceeds it.
    capacity: f64,
    /// Timestamp of the previous tick. Cleared by play/pause/seek so the
    /// next tick re-baselines instead of integrating stale wall time.
    #[serde(skip)]
    last_timestamp: Option<f64>,
}

impl PlaybackClock {
    pub fn new(capacity: f64) -> Self {
        Self {
            current: TimeCode::ZERO,
            playing: false,
            capacity,
            last_timestamp: None,
        }
    }

    pub fn current_time(&self) -> TimeCode {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.last_timestamp = None;
            tracing::debug!(at = self.current.as_secs(), "Playback started");
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            self.last_timestamp = None;
            tracing::debug!(at = self.current.as_secs(), "Playback paused");
        }
    }

    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Jump the cursor, clamped to `[0, capacity]`. Does not change the
    /// play/pause state.
    pub fn seek(&mut self, time: TimeCode) {
        self.current = time.clamp_to(TimeCode::from_secs(self.capacity));
        self.last_timestamp = None;
        tracing::debug!(at = self.current.as_secs(), "Seek");
    }

    /// Advance by the wall time elapsed since the previous tick.
    ///
    /// `timestamp` is a monotonic host clock reading in seconds. Returns
    /// `true` when the cursor moved. Reaching the capacity clamps the cursor
    /// there and stops playback.
    pub fn tick(&mut self, timestamp: f64) -> bool {
        if !self.playing {
            return false;
        }
        let Some(last) = self.last_timestamp.replace(timestamp) else {
            // Baseline tick after play/seek.
            return false;
        };
        let delta = (timestamp - last).max(0.0);
        if delta == 0.0 {
            return false;
        }

        let next = self.current.as_secs() + delta;
        if next >= self.capacity {
            self.current = TimeCode::from_secs(self.capacity);
            self.playing = false;
            self.last_timestamp = None;
            tracing::debug!(capacity = self.capacity, "Reached timeline end, stopping");
        } else {
            self.current = TimeCode::from_secs(next);
        }
        true
    }
}
