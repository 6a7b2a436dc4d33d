//! Core module - Ambient infrastructure shared by the rules engine
//!
//! Holds everything that is not chess logic: engine configuration, its JSON
//! persistence, error types for those operations, and a tracing bootstrap
//! for hosts embedding the engine.
//!
//! # Module Structure
//!
//! - `error` - [`CoreError`] for settings I/O and serialization
//! - `settings` - [`EngineSettings`] behaviour toggles
//! - `settings_persistence` - Load/save settings as JSON
//! - `diagnostics` - `tracing` subscriber setup

pub mod diagnostics;
pub mod error;
pub mod settings;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use settings::EngineSettings;
