//! Piece data: type, color and the moved flag

use serde::{Deserialize, Serialize};

/// The two competing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    /// The other side
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a forward pawn step
    ///
    /// White starts on rows 6-7 and advances towards row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row holding this side's pawns in the opening layout
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Row holding this side's back rank in the opening layout
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }
}

/// Closed set of piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Material value in pawns
    ///
    /// Kings count as 0.
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight => 3,
            PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    /// Single-letter symbol, uppercase
    pub const fn symbol(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

/// A piece standing on exactly one square
///
/// `has_moved` gates the pawn double step; it is restored from the
/// [`crate::MoveRecord`] snapshot when a move is undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: PieceColor,
    pub has_moved: bool,
}

impl Piece {
    /// A piece that has not moved yet
    pub const fn new(piece_type: PieceType, color: PieceColor) -> Self {
        Self {
            piece_type,
            color,
            has_moved: false,
        }
    }

    /// Board symbol: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        match self.color {
            PieceColor::White => self.piece_type.symbol(),
            PieceColor::Black => self.piece_type.symbol().to_ascii_lowercase(),
        }
    }
}
