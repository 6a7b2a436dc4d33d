//! Turn tracking
//!
//! Tracks the side to move and the move counter.
//!
//! # Turn Flow
//!
//! ```text
//! Move 1: White plays → switch() → Black plays → switch() → Move 2: White plays
//! ```
//!
//! Undo walks the same flow backwards with `switch_back()`.

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;

/// Whose turn it is and the current move number
///
/// Move numbers follow standard chess notation: a move is White's turn plus
/// Black's reply, so the counter increments when Black hands over to White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentTurn {
    pub color: PieceColor,
    pub move_number: u32,
}

impl Default for CurrentTurn {
    fn default() -> Self {
        Self::starting_with(PieceColor::White)
    }
}

impl CurrentTurn {
    /// Move 1 with `color` on move
    pub fn starting_with(color: PieceColor) -> Self {
        Self {
            color,
            move_number: 1,
        }
    }

    /// Switch to the other player's turn
    pub fn switch(&mut self) {
        self.color = match self.color {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => {
                self.move_number += 1;
                PieceColor::White
            }
        };
    }

    /// Revert the last `switch()`
    ///
    /// The move number never drops below 1.
    pub fn switch_back(&mut self) {
        self.color = match self.color {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => {
                self.move_number = self.move_number.saturating_sub(1).max(1);
                PieceColor::Black
            }
        };
    }
}
