//! Per-move and per-game records

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceColor};
use crate::game::types::Square;

/// Coarse game status for status lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Side to move is not in check
    #[default]
    Playing,
    /// Side to move is in check but still has a move
    Check,
    /// Game over; the payload is the winning side
    Checkmate(PieceColor),
}

/// Move record kept in history and handed to observers
///
/// `moved_piece` and `captured_piece` are snapshots taken before the move,
/// which is everything needed to undo it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
}

impl MoveRecord {
    /// Side that made this move
    pub fn mover(&self) -> PieceColor {
        self.moved_piece.color
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}
