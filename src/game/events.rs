//! Engine events and the observer contract
//!
//! Collaborators (renderers, statistics recorders) register a
//! [`GameObserver`] with [`crate::RulesEngine::subscribe`]. The engine calls
//! every observer synchronously, in registration order, once a state change
//! is complete. Observers only ever see immutable events.

use serde::{Deserialize, Serialize};

use crate::game::components::{MoveRecord, PieceColor};

/// Notifications emitted by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was applied; `side_to_move` is the side now on move
    MoveApplied {
        record: MoveRecord,
        side_to_move: PieceColor,
    },

    /// Checkmate was detected right after a move
    GameEnded {
        winner: PieceColor,
        total_moves: usize,
    },

    /// The last move was taken back; `side_to_move` is the side on move again
    MoveUndone {
        record: MoveRecord,
        side_to_move: PieceColor,
    },

    /// Board reset to the opening layout
    Restarted,
}

/// Receiver of [`GameEvent`]s
///
/// `Send` keeps the engine itself `Send`, so multi-threaded hosts can put
/// it behind a `Mutex`.
pub trait GameObserver: Send {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent) + Send,
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}
