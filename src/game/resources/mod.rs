//! Game resources - State owned by the rules engine
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`CurrentTurn`] - Side to move and move numbers
//!
//! ## Game History
//! - [`MoveHistory`] - Complete move record for undo
//! - [`CapturedPieces`] - Capture lists and material advantage
//!
//! ## Game Status
//! - [`GameOverState`] - Checkmate outcome
//!
//! ## Engine
//! - [`RulesEngine`] - Owns all of the above and is the only mutator

pub mod engine;
pub mod history;
pub mod turn;

// Re-export all public items
pub use engine::*;
pub use history::*;
pub use turn::*;
