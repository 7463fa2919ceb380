//! `lumina-interaction` — Pointer gestures for direct clip manipulation.
//!
//! A [`GestureController`] tracks one pointer gesture at a time (timeline
//! drag, canvas drag, canvas resize) and translates pointer coordinates into
//! [`ClipPatch`](lumina_editor_state::ClipPatch)es for the store to apply.
//! It never mutates state itself, so hosts stay free to batch, throttle, or
//! drop patches.

pub mod gesture;

pub use gesture::{Gesture, GestureController};
