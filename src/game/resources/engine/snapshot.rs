//! Serializable read-only views of the engine state

use serde::{Deserialize, Serialize};

use crate::game::components::{Piece, PieceColor, PieceType};

/// Kind and side of a piece, without the engine-internal moved flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl From<Piece> for PieceView {
    fn from(piece: Piece) -> Self {
        Self {
            piece_type: piece.piece_type,
            color: piece.color,
        }
    }
}

/// Everything a renderer needs to draw one frame
///
/// Produced by [`crate::RulesEngine::snapshot`]; owning no reference back
/// into the engine, it can be sent to another thread or written out as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// `[row][col]` grid, row 0 is Black's back rank
    pub board: [[Option<PieceView>; 8]; 8],
    pub side_to_move: PieceColor,
    pub is_over: bool,
    pub winner: Option<PieceColor>,
    /// Kinds of the Black pieces White has taken, in capture order
    pub white_captured: Vec<PieceType>,
    /// Kinds of the White pieces Black has taken, in capture order
    pub black_captured: Vec<PieceType>,
    pub move_count: usize,
}

impl GameSnapshot {
    pub fn piece_at(&self, row: usize, col: usize) -> Option<PieceView> {
        self.board.get(row)?.get(col).copied().flatten()
    }
}
