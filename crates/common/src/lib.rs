//! `lumina-common` — Shared types and configuration for the Lumina engine.
//!
//! This crate is the foundation the other engine crates depend on:
//!
//! - **Types**: [`TimeCode`] (seconds newtype for timeline positions)
//! - **Config**: [`EngineConfig`] (capacities, sync tolerances, policy knobs)
//! - **Logging**: tracing-subscriber initialization helpers

pub mod config;
pub mod logging;
pub mod types;

// Re-export commonly used items at crate root
pub use config::EngineConfig;
pub use logging::{init_default_logging, init_logging};
pub use types::TimeCode;
