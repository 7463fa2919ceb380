//! `lumina-timeline-eval` — Pure evaluation of the timeline at an instant.
//!
//! Turns the declarative timeline ([`lumina_timeline`]) into what a frame
//! looks and sounds like at time `t`:
//!
//! - [`resolver`]: which clips are active, with mute policy applied
//! - [`keyframe`]: piecewise-linear sampling of animated properties
//! - [`evaluator`]: the combined [`FrameState`] a renderer consumes
//!
//! Everything here is a pure function of `(clips, tracks, time, config)`;
//! no state is held between frames.

pub mod evaluator;
pub mod keyframe;
pub mod resolver;

pub use evaluator::{evaluate, FilterParams, FrameState, MediaSource, VisualLayer};
pub use keyframe::{animated_value, base_value, fade_envelope};
pub use resolver::{active_media_clips, active_visual_clips, ResolvePolicy};
