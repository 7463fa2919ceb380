//! `lumina-timeline` — Timeline data model for the Lumina engine.
//!
//! Defines the entities the rest of the engine operates on:
//!
//! - **[`Project`]**: name, aspect ratio, initialization flag
//! - **[`Track`]**: ordered lanes with mute/lock flags
//! - **[`Clip`]**: time-bounded content with a transform/filter parameter block
//! - **[`Keyframe`]**: timestamped target values for animatable properties
//!
//! Invariants live with the types: clips occupy half-open intervals with
//! `duration > 0` and `start_offset >= 0`, and keyframes are unique per
//! (property, time) and kept sorted ascending.

pub mod clip;
pub mod id;
pub mod keyframe;
pub mod project;
pub mod track;

// Re-export primary types at crate root for convenience.
pub use clip::{Clip, ClipKind, TextAlign, TextStyle};
pub use id::IdGen;
pub use keyframe::{Keyframe, KeyframeProperty};
pub use project::{AspectRatio, Project};
pub use track::{Track, TrackKind};
