//! Error types for game module
//!
//! Every failure here is recoverable by the caller: the engine state is left
//! exactly as it was before the rejected call.

use crate::game::components::PieceColor;
use crate::game::types::Square;

/// Errors returned by [`crate::RulesEngine`] operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Source square is empty
    #[error("No piece at source square {square}")]
    NoPieceAtSource { square: Square },

    /// Piece at source belongs to the side not on move
    #[error("Piece at {square} belongs to {color:?}, who is not on move")]
    NotYourTurn { square: Square, color: PieceColor },

    /// Geometry, path or occupancy rule violated
    #[error("Illegal move: from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Undo requested with an empty history
    #[error("No move to undo")]
    NoMoveToUndo,

    /// Move attempted after checkmate
    #[error("Game already over, {winner:?} won")]
    GameAlreadyOver { winner: PieceColor },

    /// Raw coordinates outside the board
    #[error("Square ({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },
}

/// Result type alias for engine operations
pub type MoveResult<T> = Result<T, MoveError>;
