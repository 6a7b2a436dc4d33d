//! Rules engine and its read-only views
//!
//! The engine owns the board and every piece of game state; the snapshot
//! types are what renderers and other collaborators get to see.

pub mod engine;
pub mod snapshot;

// Re-export all public items
pub use engine::*;
pub use snapshot::*;
