//! Chess rules module - Pure game logic
//!
//! Move validation, check detection and the board representation, written as
//! pure functions over [`BoardState`]. Nothing here mutates state; the
//! [`crate::RulesEngine`] owns the board and calls into these functions.
//!
//! # Module Structure
//!
//! - `piece_moves` - Movement rules for each piece type (pawn, knight, bishop, rook, queen, king)
//! - `board_state` - Board representation and the opening layout
//!
//! # Rule Subset
//!
//! Castling, en passant and promotion are not part of this rule set, and a
//! move is legal even if it leaves the mover's own king attacked.

pub mod piece_moves;
pub mod board_state;


// Re-export commonly used items
pub use board_state::BoardState;
pub use piece_moves::{
    get_possible_moves, has_any_legal_move, is_in_check, is_valid_move, piece_reaches,
};
