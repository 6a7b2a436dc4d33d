//! Engine behaviour settings
//!
//! A small set of toggles that decide how the engine treats the edges of its
//! state machine. Hosts usually keep these in a JSON file next to their own
//! preferences, see [`crate::core::settings_persistence`].

use serde::{Deserialize, Serialize};

/// Behaviour switches for [`crate::RulesEngine`]
///
/// Missing fields fall back to their defaults when deserializing, so older
/// settings files keep loading after new switches are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Undoing a move after checkmate reopens the game
    pub reopen_game_on_undo: bool,

    /// `attempt_move` fails with `GameAlreadyOver` once a side is mated
    pub reject_moves_after_game_over: bool,

    /// Emit a `debug!` line for every applied and undone move
    pub log_moves: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            reopen_game_on_undo: true,
            reject_moves_after_game_over: true,
            log_moves: true,
        }
    }
}
