//! Drift correction between the timeline cursor and host media elements.
//!
//! Media elements run their own clocks; left alone they drift away from the
//! timeline. Each frame the controller compares every element's position to
//! where the evaluated frame says it should be, and seeks only when the
//! drift exceeds a tolerance. The tolerance is asymmetric: coarse while
//! playing (constant correction would stutter), tight while paused (the
//! scrub preview must track the cursor closely).

use std::collections::HashMap;

use lumina_common::EngineConfig;
use lumina_timeline_eval::FrameState;

use crate::handle::MediaHandle;

/// Correction decided for one media element on one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncAction {
    /// Within tolerance, leave the element alone.
    InSync,
    /// Drift exceeded tolerance; seek to the target position.
    Seek(f64),
}

/// Decide whether a media element at `actual` needs correcting to `target`.
/// Pure; the controller applies the result.
pub fn drift_correction(actual: f64, target: f64, tolerance: f64) -> SyncAction {
    if (actual - target).abs() > tolerance {
        SyncAction::Seek(target)
    } else {
        SyncAction::InSync
    }
}

/// Owns the media handles and reconciles them against evaluated frames.
pub struct MediaSyncController {
    handles: HashMap<String, Box<dyn MediaHandle>>,
    config: EngineConfig,
}

impl MediaSyncController {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            handles: HashMap::new(),
            config,
        }
    }

    /// Register the media element backing a clip. Replaces any previous
    /// handle for the same clip.
    pub fn register(&mut self, clip_id: impl Into<String>, handle: Box<dyn MediaHandle>) {
        let clip_id = clip_id.into();
        tracing::debug!(clip_id = %clip_id, "Registered media handle");
        self.handles.insert(clip_id, handle);
    }

    /// Drop the handle for a clip, if any.
    pub fn release(&mut self, clip_id: &str) {
        if self.handles.remove(clip_id).is_some() {
            tracing::debug!(clip_id = %clip_id, "Released media handle");
        }
    }

    /// Drop handles whose clips no longer exist. Called after deletions and
    /// history restores, which can remove clips wholesale.
    pub fn retain_clips<F: Fn(&str) -> bool>(&mut self, clip_exists: F) {
        self.handles.retain(|clip_id, _| {
            let keep = clip_exists(clip_id);
            if !keep {
                tracing::debug!(clip_id = %clip_id, "Releasing handle for deleted clip");
            }
            keep
        });
    }

    pub fn has_handle(&self, clip_id: &str) -> bool {
        self.handles.contains_key(clip_id)
    }

    /// Reconcile every registered handle against an evaluated frame.
    ///
    /// Active elements are drift-corrected, volume-set, and started or
    /// stopped to match `timeline_playing`. Elements whose clips are not in
    /// the frame are paused but stay registered for when the cursor
    /// re-enters their clip. A start rejected by the host autoplay policy is
    /// logged and retried on subsequent ticks.
    pub fn sync_tick(&mut self, frame: &FrameState, timeline_playing: bool) {
        let tolerance = if timeline_playing {
            self.config.drift_tolerance_playing
        } else {
            self.config.drift_tolerance_paused
        };

        // frame.media covers every active media-backed clip, including
        // hidden or silenced ones, so their elements keep tracking the
        // clock.
        let mut targets: HashMap<&str, (f64, f64, f64)> = HashMap::new();
        for source in &frame.media {
            targets.insert(
                source.clip_id.as_str(),
                (source.media_time, source.volume, source.speed),
            );
        }

        for (clip_id, handle) in &mut self.handles {
            let Some(&(target, volume, speed)) = targets.get(clip_id.as_str()) else {
                if handle.is_playing() {
                    handle.pause();
                }
                continue;
            };

            if let SyncAction::Seek(to) = drift_correction(handle.current_time(), target, tolerance)
            {
                tracing::trace!(clip_id = %clip_id, from = handle.current_time(), to, "Drift correction");
                handle.seek(to);
            }
            handle.set_volume(volume);
            handle.set_rate(speed);

            if timeline_playing && !handle.is_playing() {
                if let Err(err) = handle.play() {
                    tracing::warn!(clip_id = %clip_id, %err, "Could not start media element");
                }
            } else if !timeline_playing && handle.is_playing() {
                handle.pause();
            }
        }
    }
}
