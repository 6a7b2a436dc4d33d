//! Move history tracking
//!
//! Chronological record of every applied move. The last entry is what
//! `undo_last_move` pops, and the length is the total move count reported
//! when a game ends.

use serde::{Deserialize, Serialize};

use crate::game::components::MoveRecord;

/// Ordered record of all moves made since game start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Index 0 = White's first move, index 1 = Black's reply, etc.
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Add a new move to the history
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Remove and return the most recent move
    pub fn pop_move(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of half-moves (ply) made
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Clear all move history (for starting a new game)
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Get a specific move by ply index (0 = first move)
    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::components::{Piece, PieceColor, PieceType};
    use crate::game::types::Square;

    fn record(from: (u8, u8), to: (u8, u8)) -> MoveRecord {
        MoveRecord {
            from: Square::new(from.0, from.1).unwrap(),
            to: Square::new(to.0, to.1).unwrap(),
            moved_piece: Piece::new(PieceType::Pawn, PieceColor::White),
            captured_piece: None,
        }
    }

    #[test]
    fn test_history_starts_empty() {
        let history = MoveHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert!(history.last_move().is_none());
    }

    #[test]
    fn test_add_and_pop_in_order() {
        //! History is a stack: the last added move pops first
        let mut history = MoveHistory::default();
        history.add_move(record((6, 4), (4, 4)));
        history.add_move(record((6, 3), (4, 3)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get_move(0), Some(&record((6, 4), (4, 4))));
        assert_eq!(history.last_move(), Some(&record((6, 3), (4, 3))));

        assert_eq!(history.pop_move(), Some(record((6, 3), (4, 3))));
        assert_eq!(history.pop_move(), Some(record((6, 4), (4, 4))));
        assert_eq!(history.pop_move(), None);
    }

    #[test]
    fn test_clear() {
        let mut history = MoveHistory::default();
        history.add_move(record((6, 4), (4, 4)));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.get_move(0), None);
    }
}
