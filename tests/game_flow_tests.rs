//! Game Flow Integration Tests
//!
//! Tests for full game flows through the public engine API:
//! - Turn alternation and the opening scenarios
//! - Captures and capture lists
//! - Undo round trips
//! - Check, checkmate and the game-over state
//! - Observer notifications

use std::sync::{Arc, Mutex};

use tactical_realms::{
    BoardState, GameEvent, GamePhase, MoveError, PieceColor, PieceType, RulesEngine, Square,
};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).unwrap()
}

/// Subscribe a recorder that collects every event the engine emits
fn record_events(engine: &mut RulesEngine) -> Arc<Mutex<Vec<GameEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    engine.subscribe(move |event: &GameEvent| sink.lock().unwrap().push(event.clone()));
    events
}

/// White king in the corner, walled in by its own pawns
fn boxed_in_white_king() -> Vec<(PieceType, PieceColor, Square)> {
    vec![
        (PieceType::King, PieceColor::White, sq(0, 0)),
        (PieceType::Pawn, PieceColor::White, sq(0, 1)),
        (PieceType::Pawn, PieceColor::White, sq(1, 0)),
        (PieceType::Pawn, PieceColor::White, sq(1, 1)),
        (PieceType::King, PieceColor::Black, sq(7, 7)),
    ]
}

// ============================================================================
// Opening Scenarios
// ============================================================================

#[test]
fn test_king_pawn_double_step() {
    //! e2-e4 from the opening layout hands the move to Black
    let mut engine = RulesEngine::new();

    let record = engine.attempt_move(sq(6, 4), sq(4, 4)).unwrap();

    assert_eq!(record.moved_piece.piece_type, PieceType::Pawn);
    assert_eq!(engine.side_to_move(), PieceColor::Black);
    assert!(engine.board().is_empty(sq(6, 4)));
    assert_eq!(
        engine.board().get_piece_color(sq(4, 4)),
        Some(PieceColor::White)
    );
}

#[test]
fn test_move_onto_own_square_is_illegal() {
    let mut engine = RulesEngine::new();

    assert_eq!(
        engine.attempt_move(sq(6, 4), sq(6, 4)),
        Err(MoveError::IllegalMove {
            from: sq(6, 4),
            to: sq(6, 4)
        })
    );
    assert_eq!(engine.side_to_move(), PieceColor::White);
}

#[test]
fn test_black_cannot_move_first() {
    let mut engine = RulesEngine::new();

    let err = engine.attempt_move(sq(1, 4), sq(3, 4)).unwrap_err();
    assert!(matches!(err, MoveError::NotYourTurn { .. }));
    assert_eq!(engine.board(), &BoardState::starting_position());
}

#[test]
fn test_knight_jumps_over_pawns() {
    let mut engine = RulesEngine::new();

    engine.attempt_move(sq(7, 1), sq(5, 2)).unwrap();

    assert_eq!(
        engine.board().get(sq(5, 2)).map(|p| p.piece_type),
        Some(PieceType::Knight)
    );
    assert_eq!(engine.side_to_move(), PieceColor::Black);
}

#[test]
fn test_turns_alternate() {
    //! Each side may only move its own pieces, in strict alternation
    let mut engine = RulesEngine::new();

    engine.attempt_move(sq(6, 4), sq(4, 4)).unwrap();
    assert!(matches!(
        engine.attempt_move(sq(6, 3), sq(4, 3)),
        Err(MoveError::NotYourTurn { .. })
    ));

    engine.attempt_move(sq(1, 4), sq(3, 4)).unwrap();
    engine.attempt_move(sq(6, 3), sq(4, 3)).unwrap();

    assert_eq!(engine.side_to_move(), PieceColor::Black);
    assert_eq!(engine.move_number(), 2);
    assert_eq!(engine.history().len(), 3);
}

// ============================================================================
// Captures and Undo
// ============================================================================

/// e4 d5 exd5 Qxd5 Nc3 Qxa2 Rxa2
const CAPTURE_LINE: [((u8, u8), (u8, u8)); 7] = [
    ((6, 4), (4, 4)),
    ((1, 3), (3, 3)),
    ((4, 4), (3, 3)),
    ((0, 3), (3, 3)),
    ((7, 1), (5, 2)),
    ((3, 3), (6, 0)),
    ((7, 0), (6, 0)),
];

fn play_capture_line(engine: &mut RulesEngine) {
    for ((fr, fc), (tr, tc)) in CAPTURE_LINE {
        engine
            .attempt_move(sq(fr, fc), sq(tr, tc))
            .unwrap_or_else(|err| panic!("({fr},{fc}) -> ({tr},{tc}) failed: {err}"));
    }
}

#[test]
fn test_capture_lists_follow_play() {
    let mut engine = RulesEngine::new();
    play_capture_line(&mut engine);

    let snapshot = engine.snapshot();
    assert_eq!(
        snapshot.white_captured,
        vec![PieceType::Pawn, PieceType::Queen]
    );
    assert_eq!(snapshot.black_captured, vec![PieceType::Pawn, PieceType::Pawn]);
    assert_eq!(engine.captured().material_advantage(), 8);
    assert_eq!(snapshot.move_count, CAPTURE_LINE.len());
}

#[test]
fn test_undo_everything_restores_opening() {
    //! Undoing a whole game, captures included, lands on a fresh board
    let mut engine = RulesEngine::new();
    play_capture_line(&mut engine);

    for _ in 0..CAPTURE_LINE.len() {
        engine.undo_last_move().unwrap();
    }

    assert_eq!(engine.board(), &BoardState::starting_position());
    assert_eq!(engine.snapshot(), RulesEngine::new().snapshot());
    assert_eq!(engine.move_number(), 1);
    assert_eq!(engine.undo_last_move(), Err(MoveError::NoMoveToUndo));
}

#[test]
fn test_undo_round_trip_for_every_opening_move() {
    //! Move then undo is the identity, moved flags included
    let mut engine = RulesEngine::new();
    let start = engine.board().clone();

    let origins: Vec<Square> = start
        .pieces_of(PieceColor::White)
        .map(|(square, _)| square)
        .collect();

    let mut tried = 0;
    for from in origins {
        for to in engine.legal_destinations(from) {
            engine.attempt_move(from, to).unwrap();
            engine.undo_last_move().unwrap();
            assert_eq!(engine.board(), &start, "undo of {from}-{to} left a trace");
            assert_eq!(engine.side_to_move(), PieceColor::White);
            tried += 1;
        }
    }
    assert_eq!(tried, 20, "opening position has 20 moves");
    assert!(engine.history().is_empty());
}

#[test]
fn test_undo_restores_double_step_right() {
    let mut engine = RulesEngine::new();
    engine.attempt_move(sq(6, 0), sq(5, 0)).unwrap();
    engine.undo_last_move().unwrap();

    assert!(engine.is_legal_move(sq(6, 0), sq(4, 0)));
}

// ============================================================================
// Check and Checkmate
// ============================================================================

#[test]
fn test_check_without_mate_keeps_game_open() {
    //! f3 e5 g4 Qh4: check, but White still has moves to make
    let mut engine = RulesEngine::new();
    engine.attempt_move(sq(6, 5), sq(5, 5)).unwrap();
    engine.attempt_move(sq(1, 4), sq(3, 4)).unwrap();
    engine.attempt_move(sq(6, 6), sq(4, 6)).unwrap();
    engine.attempt_move(sq(0, 3), sq(4, 7)).unwrap();

    assert!(engine.is_in_check(PieceColor::White));
    assert!(engine.has_any_legal_move(PieceColor::White));
    assert_eq!(engine.status(), GamePhase::Check);
    assert!(!engine.is_over());
}

#[test]
fn test_constructed_mate_position() {
    //! A position loaded already mated is detected on evaluation
    let mut pieces = boxed_in_white_king();
    pieces.push((PieceType::Knight, PieceColor::Black, sq(2, 1)));
    let mut engine = RulesEngine::from_position(BoardState::from_pieces(&pieces), PieceColor::White);

    assert!(!engine.is_over(), "loading does not evaluate");
    engine.evaluate_terminal_state();

    assert!(engine.is_over());
    assert_eq!(engine.winner(), Some(PieceColor::Black));
}

#[test]
fn test_mating_move_emits_game_ended() {
    let mut pieces = boxed_in_white_king();
    pieces.push((PieceType::Knight, PieceColor::Black, sq(4, 2)));
    let mut engine = RulesEngine::from_position(BoardState::from_pieces(&pieces), PieceColor::Black);
    let events = record_events(&mut engine);

    let record = engine.attempt_move(sq(4, 2), sq(2, 1)).unwrap();

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            GameEvent::MoveApplied {
                record,
                side_to_move: PieceColor::White
            },
            GameEvent::GameEnded {
                winner: PieceColor::Black,
                total_moves: 1
            },
        ]
    );
    assert!(matches!(
        engine.attempt_move(sq(7, 7), sq(7, 6)),
        Err(MoveError::GameAlreadyOver {
            winner: PieceColor::Black
        })
    ));
}

#[test]
fn test_restart_after_mate() {
    let mut pieces = boxed_in_white_king();
    pieces.push((PieceType::Knight, PieceColor::Black, sq(2, 1)));
    let mut engine = RulesEngine::from_position(BoardState::from_pieces(&pieces), PieceColor::White);
    engine.evaluate_terminal_state();

    engine.restart();

    assert!(!engine.is_over());
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.side_to_move(), PieceColor::White);
    assert_eq!(engine.board(), &BoardState::starting_position());
    assert!(engine.captured().white_captured.is_empty());
    engine.attempt_move(sq(6, 4), sq(4, 4)).unwrap();
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn test_observers_see_every_state_change() {
    let mut engine = RulesEngine::new();
    let first = record_events(&mut engine);
    let second = record_events(&mut engine);

    engine.attempt_move(sq(6, 4), sq(4, 4)).unwrap();
    let _ = engine.attempt_move(sq(6, 3), sq(4, 3));
    engine.undo_last_move().unwrap();
    engine.restart();

    let events = first.lock().unwrap();
    assert_eq!(events.len(), 3, "rejected moves are not announced");
    assert!(matches!(
        events[0],
        GameEvent::MoveApplied {
            side_to_move: PieceColor::Black,
            ..
        }
    ));
    assert!(matches!(
        events[1],
        GameEvent::MoveUndone {
            side_to_move: PieceColor::White,
            ..
        }
    ));
    assert_eq!(events[2], GameEvent::Restarted);
    assert_eq!(*second.lock().unwrap(), *events);
}

#[test]
fn test_engine_behind_mutex() {
    //! Hosts serialize access by moving the engine into a Mutex
    let engine = Arc::new(Mutex::new(RulesEngine::new()));

    let worker = {
        let engine = Arc::clone(&engine);
        std::thread::spawn(move || {
            engine
                .lock()
                .unwrap()
                .attempt_move(sq(6, 4), sq(4, 4))
                .map(|record| record.to)
        })
    };

    assert_eq!(worker.join().unwrap(), Ok(sq(4, 4)));
    assert_eq!(engine.lock().unwrap().side_to_move(), PieceColor::Black);
}
