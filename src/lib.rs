//! Tactical Realms rules engine
//!
//! Embeddable move-legality and game-state core. Renderers, input handlers
//! and statistics recorders live outside this crate and talk to it through
//! [`RulesEngine`], its read-only snapshots and the [`GameObserver`] contract.

pub mod core;
pub mod game;

pub use crate::core::{CoreError, CoreResult, EngineSettings};
pub use game::components::{GamePhase, MoveRecord, Piece, PieceColor, PieceType};
pub use game::error::{MoveError, MoveResult};
pub use game::events::{GameEvent, GameObserver};
pub use game::resources::engine::{GameSnapshot, PieceView, RulesEngine};
pub use game::rules::BoardState;
pub use game::types::Square;
