//! Captured pieces tracking
//!
//! Tracks pieces captured by each player and calculates material advantage.
//! Renderers read both lists to draw the captured-piece trays.
//!
//! # Material Values
//!
//! Standard chess piece values in pawns:
//! - Pawn: 1
//! - Knight/Bishop: 3
//! - Rook: 5
//! - Queen: 9
//! - King: 0
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: If White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use serde::{Deserialize, Serialize};

use crate::game::components::{Piece, PieceColor, PieceType};

/// Pieces captured by each side, in capture order
///
/// # Fields
///
/// - `white_captured`: Black pieces that White has captured
/// - `black_captured`: White pieces that Black has captured
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<Piece>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<Piece>,
}

impl CapturedPieces {
    /// Record a piece capture
    ///
    /// The capturing side is the opponent of the captured piece's color.
    ///
    /// # Example
    ///
    /// ```
    /// use tactical_realms::game::resources::history::CapturedPieces;
    /// use tactical_realms::{Piece, PieceColor, PieceType};
    ///
    /// let mut captured = CapturedPieces::default();
    /// captured.add_capture(Piece::new(PieceType::Queen, PieceColor::Black));
    /// assert_eq!(captured.white_captured.len(), 1);
    /// ```
    pub fn add_capture(&mut self, piece: Piece) {
        self.list_mut(piece.color.opposite()).push(piece);
    }

    /// Take back the most recent capture of `piece_type` made by `capturer`
    ///
    /// Matching is by kind only; when several pieces of the same kind were
    /// taken, the latest one is removed.
    pub fn remove_latest(&mut self, capturer: PieceColor, piece_type: PieceType) -> Option<Piece> {
        let list = self.list_mut(capturer);
        let index = list.iter().rposition(|p| p.piece_type == piece_type)?;
        Some(list.remove(index))
    }

    /// Pieces captured by `capturer`
    pub fn by(&self, capturer: PieceColor) -> &[Piece] {
        match capturer {
            PieceColor::White => &self.white_captured,
            PieceColor::Black => &self.black_captured,
        }
    }

    fn list_mut(&mut self, capturer: PieceColor) -> &mut Vec<Piece> {
        match capturer {
            PieceColor::White => &mut self.white_captured,
            PieceColor::Black => &mut self.black_captured,
        }
    }

    /// Material difference in pawn units, positive when White is ahead
    pub fn material_advantage(&self) -> i32 {
        let white_score: i32 = self.white_captured.iter().map(|p| p.piece_type.value()).sum();
        let black_score: i32 = self.black_captured.iter().map(|p| p.piece_type.value()).sum();
        white_score - black_score
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.white_captured.clear();
        self.black_captured.clear();
    }
}
