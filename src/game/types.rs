//! Board coordinate types
//!
//! Squares are addressed as `(row, col)` with row 0 at the top of the board.
//! White's home ranks are rows 7 and 6, Black's are rows 0 and 1, so the
//! algebraic rank of a square is `8 - row` and its file is `'a' + col`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::MoveError;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// Board square position (row, col)
///
/// Both coordinates are always in `0..8`; the constructors refuse anything
/// else, so code holding a `Square` never has to bounds-check it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, or `None` when either coordinate is off the board
    ///
    /// # Examples
    ///
    /// ```
    /// use tactical_realms::Square;
    ///
    /// let e2 = Square::new(6, 4).unwrap();
    /// assert_eq!(e2.to_algebraic(), "e2");
    /// assert!(Square::new(8, 0).is_none());
    /// ```
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Square reached by adding a signed `(d_row, d_col)` offset
    ///
    /// `None` for any offset that leaves the board, however large.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        Square::new(u8::try_from(row).ok()?, u8::try_from(col).ok()?)
    }

    /// Same square seen from the other side of the board
    pub const fn rotated(self) -> Self {
        Square {
            row: BOARD_SIZE - 1 - self.row,
            col: BOARD_SIZE - 1 - self.col,
        }
    }

    /// Iterate over all 64 squares, row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Create a square from algebraic notation (e.g., "e2")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let col = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return None,
        };
        let rank = rank_char.to_digit(10)? as u8;
        if !(1..=BOARD_SIZE).contains(&rank) {
            return None;
        }

        Square::new(BOARD_SIZE - rank, col)
    }

    /// Convert square to algebraic notation (e.g., "e2")
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, BOARD_SIZE - self.row)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = MoveError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(MoveError::OffBoard { row, col })
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}
