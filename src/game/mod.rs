//! Chess game logic module - Rules engine and the data it works on
//!
//! Pure game logic with no rendering, input or I/O. The engine is the single
//! source of truth; everything else in the host reads snapshots or listens to
//! events.
//!
//! # Module Organization
//!
//! - `types` - Board coordinates (`Square`) and algebraic notation
//! - `components` - Plain data (Piece, PieceColor, MoveRecord, GamePhase)
//! - `rules` - Pure move validation, check probe and move scan
//! - `resources` - Turn, history, captures, game-over state and `RulesEngine`
//! - `events` - Observer contract for renderers and statistics recorders
//! - `error` - `MoveError` taxonomy
//!
//! # Rules Coverage
//!
//! Piece geometry, path clearance, captures, check and checkmate. Castling,
//! en passant, promotion and stalemate are not part of this ruleset, and a
//! move that leaves the mover's own king attacked is still accepted.

pub mod components;
pub mod error;
pub mod events;
pub mod resources;
pub mod rules;
pub mod types;
