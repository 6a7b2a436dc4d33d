//! Game over state tracking
//!
//! Checkmate is the only terminal condition this rule set detects; stalemate,
//! timeouts and draws by material are left to the host.
//!
//! # State Transitions
//!
//! ```text
//! Playing → WhiteWon / BlackWon     (checkmate after a move)
//! WhiteWon / BlackWon → Playing     (restart, or undo when reopening is enabled)
//! ```

use serde::{Deserialize, Serialize};

use crate::game::components::PieceColor;

/// The game's end state
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// White won by checkmate
    WhiteWon,

    /// Black won by checkmate
    BlackWon,
}

impl GameOverState {
    /// Terminal state won by `winner`
    pub fn won_by(winner: PieceColor) -> Self {
        match winner {
            PieceColor::White => GameOverState::WhiteWon,
            PieceColor::Black => GameOverState::BlackWon,
        }
    }

    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Get a human-readable message describing the game result
    pub fn message(&self) -> &str {
        match self {
            GameOverState::Playing => "Game in progress",
            GameOverState::WhiteWon => "White wins by checkmate!",
            GameOverState::BlackWon => "Black wins by checkmate!",
        }
    }

    /// Get the winner of the game, if there is one
    pub fn winner(&self) -> Option<PieceColor> {
        match self {
            GameOverState::Playing => None,
            GameOverState::WhiteWon => Some(PieceColor::White),
            GameOverState::BlackWon => Some(PieceColor::Black),
        }
    }
}
