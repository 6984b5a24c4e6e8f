//! Draughts (checkers) position notation with a colon-delimited field list.
//!
//! # Notation
//!
//! ```text
//! notation   := color ":" colorGroup ":" colorGroup
//! color      := "B" | "W" | "b" | "w"
//! colorGroup := color fieldList
//! fieldList  := field ("," field)*
//! field      := ["K" | "k"] digits
//! ```
//!
//! The leading color is the side to move. Each group lists the pieces of one
//! color by field number, kings prefixed with `K`.
//!
//! # Field Numbers (8x8)
//!
//! Only playable squares are numbered, 1-based, in reading order. Even rows
//! start on column 1, odd rows on column 0:
//!
//! ```text
//!    .  1  .  2  .  3  .  4
//!    5  .  6  .  7  .  8  .
//!    .  9  . 10  . 11  . 12
//!   13  . 14  . 15  . 16  .
//!    . 17  . 18  . 19  . 20
//!   21  . 22  . 23  . 24  .
//!    . 25  . 26  . 27  . 28
//!   29  . 30  . 31  . 32  .
//! ```
//!
//! # Example
//!
//! ```
//! use draughts_fen::{FenCodec, PieceColor, PieceType};
//!
//! let codec = FenCodec::new(8).unwrap();
//! let pos = codec.decode("W:W1,2,K3:B30").unwrap();
//!
//! assert_eq!(pos.color_to_move, PieceColor::White);
//! assert_eq!(pos.position[0][5].piece_type, PieceType::King);
//! assert_eq!(codec.encode(&pos).unwrap(), "W:W1,2,K3:B30");
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub mod fen;
pub mod grid;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use self::error::{BoardSizeError, FormatError, ValueError};
pub use self::fen::FenCodec;
pub use self::grid::{empty_grid, field_to_square, playable_squares, square_to_field, starting_grid};

/// Rank of a piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceType {
    #[default]
    None = 0,
    Man = 1,
    King = 2,
}

impl PieceType {
    /// Convert from u8 (0, 1 or 2) to PieceType.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<PieceType> {
        match bits {
            0 => Some(PieceType::None),
            1 => Some(PieceType::Man),
            2 => Some(PieceType::King),
            _ => None,
        }
    }
}

/// Side a piece belongs to, or the side to move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceColor {
    #[default]
    None = 0,
    Black = 1,
    White = 2,
}

impl PieceColor {
    /// Get the opposing color. `None` has no opponent.
    #[inline]
    pub fn opponent(self) -> PieceColor {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
            PieceColor::None => PieceColor::None,
        }
    }

    /// Convert from u8 (0, 1 or 2) to PieceColor.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<PieceColor> {
        match bits {
            0 => Some(PieceColor::None),
            1 => Some(PieceColor::Black),
            2 => Some(PieceColor::White),
            _ => None,
        }
    }

    /// Notation letter, uppercase.
    pub fn letter(self) -> Option<char> {
        match self {
            PieceColor::Black => Some('B'),
            PieceColor::White => Some('W'),
            PieceColor::None => None,
        }
    }
}

/// Content of one grid cell.
///
/// An empty cell has both fields `None`. Construction does not check that
/// the two fields agree; [`FenCodec::encode`] rejects cells where only one
/// of them is `None`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: PieceColor,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        piece_type: PieceType::None,
        color: PieceColor::None,
    };

    #[inline]
    pub const fn new(piece_type: PieceType, color: PieceColor) -> Piece {
        Piece { piece_type, color }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece_type == PieceType::None && self.color == PieceColor::None
    }

    /// Exactly one of type and color is `None`.
    #[inline]
    pub fn is_half_set(&self) -> bool {
        (self.piece_type == PieceType::None) != (self.color == PieceColor::None)
    }
}

/// Square board, row-major, row 0 at the top.
pub type Grid = Vec<Vec<Piece>>;

/// A decoded position: the pieces and the side to move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GamePosition {
    pub color_to_move: PieceColor,
    pub position: Grid,
}
