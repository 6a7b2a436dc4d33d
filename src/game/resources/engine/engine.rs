//! Rules engine - Single owner and mutator of the game state
//!
//! [`RulesEngine`] holds the board, the side to move, the move history, both
//! capture lists and the game-over flag. Every change goes through one of its
//! methods, which validate first and only then mutate, so a rejected call
//! never leaves partial state behind.
//!
//! # Move Flow
//!
//! ```text
//! attempt_move(from, to)
//!   ├─ game over?         → GameAlreadyOver
//!   ├─ empty source?      → NoPieceAtSource
//!   ├─ wrong side?        → NotYourTurn
//!   ├─ geometry/path?     → IllegalMove
//!   └─ capture, relocate, record, switch turn
//!        ├─ notify MoveApplied
//!        └─ evaluate_terminal_state() → notify GameEnded on checkmate
//! ```
//!
//! # Threading
//!
//! The engine has no interior synchronization. It is `Send`, so a
//! multi-threaded host wraps it in a `Mutex` (or hands it to one task) and
//! serializes calls through that.

use std::fmt;

use tracing::{debug, info};

use super::snapshot::{GameSnapshot, PieceView};
use crate::core::EngineSettings;
use crate::game::components::{GamePhase, MoveRecord, Piece, PieceColor, PieceType};
use crate::game::error::{MoveError, MoveResult};
use crate::game::events::{GameEvent, GameObserver};
use crate::game::resources::history::{CapturedPieces, GameOverState, MoveHistory};
use crate::game::resources::turn::CurrentTurn;
use crate::game::rules::{self, BoardState};
use crate::game::types::Square;

/// Authoritative game state plus the operations allowed on it
///
/// # Example
///
/// ```
/// use tactical_realms::{MoveError, PieceColor, RulesEngine, Square};
///
/// let mut engine = RulesEngine::new();
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
///
/// engine.attempt_move(e2, e4).unwrap();
/// assert_eq!(engine.side_to_move(), PieceColor::Black);
///
/// let err = engine.attempt_move(e4, e2).unwrap_err();
/// assert!(matches!(err, MoveError::NotYourTurn { .. }));
/// ```
pub struct RulesEngine {
    board: BoardState,
    turn: CurrentTurn,
    history: MoveHistory,
    captured: CapturedPieces,
    game_over: GameOverState,
    settings: EngineSettings,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RulesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulesEngine")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("history", &self.history)
            .field("captured", &self.captured)
            .field("game_over", &self.game_over)
            .field("settings", &self.settings)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl RulesEngine {
    /// Fresh game in the opening layout with default settings
    pub fn new() -> Self {
        Self::with_settings(EngineSettings::default())
    }

    /// Fresh game in the opening layout
    pub fn with_settings(settings: EngineSettings) -> Self {
        Self {
            board: BoardState::starting_position(),
            turn: CurrentTurn::default(),
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            game_over: GameOverState::Playing,
            settings,
            observers: Vec::new(),
        }
    }

    /// Load a constructed position with `side_to_move` on move
    ///
    /// History and capture lists start empty and the game is open; call
    /// [`Self::evaluate_terminal_state`] to find out whether the position is
    /// already mate.
    pub fn from_position(board: BoardState, side_to_move: PieceColor) -> Self {
        Self {
            board,
            turn: CurrentTurn::starting_with(side_to_move),
            ..Self::new()
        }
    }

    /// Register an observer; it stays registered across restarts
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: GameObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EngineSettings) {
        info!("[SETTINGS] Engine settings updated: {:?}", settings);
        self.settings = settings;
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.turn.color
    }

    /// Full-move number, starting at 1
    pub fn move_number(&self) -> u32 {
        self.turn.move_number
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    pub fn is_over(&self) -> bool {
        self.game_over.is_game_over()
    }

    pub fn winner(&self) -> Option<PieceColor> {
        self.game_over.winner()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether the piece on `from` may move to `to` on the current board
    ///
    /// Ignores whose turn it is and whether the mover's king would be left
    /// attacked.
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        rules::is_valid_move(&self.board, from, to)
    }

    /// Every square the piece on `from` may move to
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        rules::get_possible_moves(&self.board, from)
    }

    pub fn is_in_check(&self, color: PieceColor) -> bool {
        rules::is_in_check(&self.board, color)
    }

    pub fn has_any_legal_move(&self, color: PieceColor) -> bool {
        rules::has_any_legal_move(&self.board, color)
    }

    /// Status line for the side to move
    pub fn status(&self) -> GamePhase {
        if let Some(winner) = self.winner() {
            GamePhase::Checkmate(winner)
        } else if self.is_in_check(self.turn.color) {
            GamePhase::Check
        } else {
            GamePhase::Playing
        }
    }

    /// Read-only copy of everything a renderer draws
    pub fn snapshot(&self) -> GameSnapshot {
        let grid = *self.board.grid();

        GameSnapshot {
            board: grid.map(|row| row.map(|cell| cell.map(PieceView::from))),
            side_to_move: self.turn.color,
            is_over: self.is_over(),
            winner: self.winner(),
            white_captured: piece_kinds(&self.captured.white_captured),
            black_captured: piece_kinds(&self.captured.black_captured),
            move_count: self.history.len(),
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate and apply a move for the side on move
    ///
    /// On success the returned record is also the last history entry. On
    /// failure nothing has changed.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveResult<MoveRecord> {
        let piece = match self.validate_move(from, to) {
            Ok(piece) => piece,
            Err(err) => {
                debug!("[ENGINE] Rejected {} -> {}: {}", from, to, err);
                return Err(err);
            }
        };

        let captured_piece = self.board.take(to);
        if let Some(victim) = captured_piece {
            self.captured.add_capture(victim);
        }
        self.board.take(from);
        self.board.set(
            to,
            Some(Piece {
                has_moved: true,
                ..piece
            }),
        );

        let record = MoveRecord {
            from,
            to,
            moved_piece: piece,
            captured_piece,
        };
        self.history.add_move(record);
        self.turn.switch();

        if self.settings.log_moves {
            match captured_piece {
                Some(victim) => debug!(
                    "[ENGINE] {:?} {:?} {} x {} ({:?} {:?} captured)",
                    piece.color, piece.piece_type, from, to, victim.color, victim.piece_type
                ),
                None => debug!(
                    "[ENGINE] {:?} {:?} {} -> {}",
                    piece.color, piece.piece_type, from, to
                ),
            }
        }

        self.notify(GameEvent::MoveApplied {
            record,
            side_to_move: self.turn.color,
        });
        self.evaluate_terminal_state();

        Ok(record)
    }

    /// Checks in the order callers see them: game over, source, turn, rules
    fn validate_move(&self, from: Square, to: Square) -> MoveResult<Piece> {
        if self.settings.reject_moves_after_game_over {
            if let Some(winner) = self.winner() {
                return Err(MoveError::GameAlreadyOver { winner });
            }
        }

        let piece = self
            .board
            .get(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;

        if piece.color != self.turn.color {
            return Err(MoveError::NotYourTurn {
                square: from,
                color: piece.color,
            });
        }

        if !self.is_legal_move(from, to) {
            return Err(MoveError::IllegalMove { from, to });
        }

        Ok(piece)
    }

    /// Detect checkmate of the side to move
    ///
    /// Runs after every applied move. A side in check with no legal move has
    /// lost; being out of moves while not in check is not terminal. Once the
    /// game is over the state is returned unchanged.
    pub fn evaluate_terminal_state(&mut self) -> GameOverState {
        if self.game_over.is_game_over() {
            return self.game_over;
        }

        let side = self.turn.color;
        if self.is_in_check(side) && !self.has_any_legal_move(side) {
            let winner = side.opposite();
            self.game_over = GameOverState::won_by(winner);
            info!(
                "[ENGINE] {} ({} moves)",
                self.game_over.message(),
                self.history.len()
            );
            self.notify(GameEvent::GameEnded {
                winner,
                total_moves: self.history.len(),
            });
        }

        self.game_over
    }

    /// Take back the most recent move
    ///
    /// The mover returns to its source with its pre-move moved flag, a
    /// captured piece returns to the destination and leaves its capturer's
    /// list. Reopens a finished game when the settings allow it.
    pub fn undo_last_move(&mut self) -> MoveResult<MoveRecord> {
        let record = self.history.pop_move().ok_or(MoveError::NoMoveToUndo)?;

        self.board.set(record.from, Some(record.moved_piece));
        self.board.set(record.to, record.captured_piece);
        if let Some(victim) = record.captured_piece {
            self.captured.remove_latest(record.mover(), victim.piece_type);
        }
        self.turn.switch_back();

        if self.settings.reopen_game_on_undo && self.game_over.is_game_over() {
            info!("[ENGINE] Game reopened by undo");
            self.game_over = GameOverState::Playing;
        }

        if self.settings.log_moves {
            debug!(
                "[ENGINE] Undid {:?} {:?} {} -> {}",
                record.mover(),
                record.moved_piece.piece_type,
                record.from,
                record.to
            );
        }

        self.notify(GameEvent::MoveUndone {
            record,
            side_to_move: self.turn.color,
        });

        Ok(record)
    }

    /// Back to the opening layout with White on move; observers are kept
    pub fn restart(&mut self) {
        self.board = BoardState::starting_position();
        self.turn = CurrentTurn::default();
        self.history.clear();
        self.captured.clear();
        self.game_over = GameOverState::Playing;

        info!("[ENGINE] Game restarted");
        self.notify(GameEvent::Restarted);
    }

    fn notify(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

fn piece_kinds(pieces: &[Piece]) -> Vec<PieceType> {
    pieces.iter().map(|piece| piece.piece_type).collect()
}
