//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move, plus the check and
//! move-availability scans built on top of them.
//! Pure functions with no side effects - easy to test.

use super::board_state::BoardState;
use crate::game::components::{Piece, PieceColor, PieceType};
use crate::game::types::Square;

/// Geometry/path check for one piece kind
///
/// Receives the moving piece and both squares; occupancy of `to` by a
/// friendly piece has already been ruled out by the caller when it matters.
type GeometryCheck = fn(&BoardState, Piece, Square, Square) -> bool;

/// Kind → geometry check table
fn geometry_for(piece_type: PieceType) -> GeometryCheck {
    match piece_type {
        PieceType::Pawn => is_valid_pawn_move,
        PieceType::Knight => is_valid_knight_move,
        PieceType::Bishop => is_valid_bishop_move,
        PieceType::Rook => is_valid_rook_move,
        PieceType::Queen => is_valid_queen_move,
        PieceType::King => is_valid_king_move,
    }
}

/// Check if a move is legal on `board`
///
/// Rejects no-op moves, empty sources and friendly-fire captures, then
/// applies the geometry rule for the piece on `from`. Whose turn it is and
/// whether the mover's king ends up attacked are not considered.
pub fn is_valid_move(board: &BoardState, from: Square, to: Square) -> bool {
    // Can't move to the same square
    if from == to {
        return false;
    }

    let Some(piece) = board.get(from) else {
        return false;
    };

    // Can't capture your own pieces
    if board.get_piece_color(to) == Some(piece.color) {
        return false;
    }

    piece_reaches(board, piece, from, to)
}

/// Whether `piece` standing on `from` can geometrically reach `to`
///
/// Only shape, path clearance and the pawn's capture/no-capture rules apply.
/// Used directly by the check probe, which targets an enemy king.
pub fn piece_reaches(board: &BoardState, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    geometry_for(piece.piece_type)(board, piece, from, to)
}

/// Get all legal destinations for the piece on `from`
pub fn get_possible_moves(board: &BoardState, from: Square) -> Vec<Square> {
    if board.is_empty(from) {
        return Vec::new();
    }
    Square::all()
        .filter(|&to| is_valid_move(board, from, to))
        .collect()
}

/// Whether `color`'s king can be reached by any opposing piece
///
/// A side without a king is never in check.
pub fn is_in_check(board: &BoardState, color: PieceColor) -> bool {
    let Some(king) = board.find_king(color) else {
        return false;
    };

    board
        .pieces_of(color.opposite())
        .any(|(square, piece)| piece_reaches(board, piece, square, king))
}

/// Whether `color` has at least one legal move anywhere on the board
///
/// Brute-force 64x64 scan that stops at the first hit.
pub fn has_any_legal_move(board: &BoardState, color: PieceColor) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| Square::all().any(|to| is_valid_move(board, from, to)))
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn is_valid_pawn_move(board: &BoardState, piece: Piece, from: Square, to: Square) -> bool {
    let direction = piece.color.pawn_direction();
    let (dr, dc) = deltas(from, to);

    // Forward move
    if dc == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double move from starting position
    if dc == 0
        && dr == 2 * direction
        && !piece.has_moved
        && from.row() == piece.color.pawn_start_row()
    {
        return match from.offset(direction, 0) {
            Some(intermediate) => board.is_empty(intermediate) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally, never onto an empty square
    if dc.abs() == 1 && dr == direction {
        return matches!(board.get_piece_color(to), Some(target) if target != piece.color);
    }

    false
}

fn is_valid_knight_move(_board: &BoardState, _piece: Piece, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let (dr, dc) = (dr.abs(), dc.abs());
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_valid_bishop_move(board: &BoardState, _piece: Piece, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);

    // Must move diagonally
    if dr == 0 || dr.abs() != dc.abs() {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_rook_move(board: &BoardState, _piece: Piece, from: Square, to: Square) -> bool {
    // Must move horizontally or vertically
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_queen_move(board: &BoardState, piece: Piece, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, piece, from, to) || is_valid_bishop_move(board, piece, from, to)
}

fn is_valid_king_move(_board: &BoardState, _piece: Piece, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr.abs() <= 1 && dc.abs() <= 1
}

/// Every square strictly between `from` and `to` is empty
///
/// Callers guarantee the two squares share a row, column or diagonal.
fn is_path_clear(board: &BoardState, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut current = from.offset(step_r, step_c);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_r, step_c);
    }

    false
}
