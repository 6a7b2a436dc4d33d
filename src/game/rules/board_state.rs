//! Board state representation for move validation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::components::{Piece, PieceColor, PieceType};
use crate::game::types::{Square, BOARD_SIZE};

/// Back rank order from column 0 to column 7, shared by both sides
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 8x8 grid of optional pieces, indexed `[row][col]`
///
/// This is the single in-memory source of truth for piece placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl BoardState {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard opening layout, White on rows 6-7, Black on rows 0-1
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for color in [PieceColor::White, PieceColor::Black] {
            let home = color.home_row() as usize;
            let pawns = color.pawn_start_row() as usize;
            for (col, &piece_type) in BACK_RANK.iter().enumerate() {
                board.squares[home][col] = Some(Piece::new(piece_type, color));
                board.squares[pawns][col] = Some(Piece::new(PieceType::Pawn, color));
            }
        }
        board
    }

    /// Build a board from `(piece_type, color, square)` tuples
    ///
    /// Pieces placed this way have `has_moved == false`. Later entries
    /// overwrite earlier ones on the same square.
    pub fn from_pieces(pieces: &[(PieceType, PieceColor, Square)]) -> Self {
        let mut board = Self::empty();
        for &(piece_type, color, square) in pieces {
            board.set(square, Some(Piece::new(piece_type, color)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Remove and return whatever stands on `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn get_piece_color(&self, square: Square) -> Option<PieceColor> {
        self.get(square).map(|piece| piece.color)
    }

    /// Location of `color`'s king, scanning row by row
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// All occupied squares with their pieces, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Occupied squares belonging to `color`
    pub fn pieces_of(&self, color: PieceColor) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Board turned 180 degrees with the colors swapped
    ///
    /// Moved flags are kept as they are.
    pub fn mirrored(&self) -> Self {
        let mut board = Self::empty();
        for (square, piece) in self.pieces() {
            board.set(
                square.rotated(),
                Some(Piece {
                    color: piece.color.opposite(),
                    ..piece
                }),
            );
        }
        board
    }

    /// Grid view for renderers: `[row][col]` of optional pieces
    pub fn grid(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }
}

impl fmt::Display for BoardState {
    /// ASCII diagram, row 0 first, uppercase White and lowercase Black
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                let symbol = cell.map(|piece| piece.symbol()).unwrap_or('.');
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
