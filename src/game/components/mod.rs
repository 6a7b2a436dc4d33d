//! Chess game components module
//!
//! Plain data structures with no engine logic.
//! Organized by domain: pieces, and per-move / per-game records.

pub mod piece;
pub mod game_state;

// Re-export all components for convenience
pub use game_state::*;
pub use piece::*;
