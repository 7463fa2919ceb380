//! `lumina-editor-state` — Editor session state for the Lumina engine.
//!
//! The [`Editor`] facade ties together:
//!
//! - [`EditorState`]: the project/track/clip store and its mutation rules
//! - [`HistoryManager`]: snapshot-based linear undo/redo
//! - [`PlaybackClock`]: the frame-driven timeline cursor
//!
//! Hosts construct one [`Editor`] per session and route all user actions
//! through it.

pub mod editor;
pub mod history;
pub mod playback;
pub mod snapshot;
pub mod state;

pub use editor::Editor;
pub use history::HistoryManager;
pub use playback::PlaybackClock;
pub use snapshot::EditorSnapshot;
pub use state::{ClipPatch, EditorState};
