//! Notation decoder and encoder.

use tracing::{debug, trace, warn};

use crate::error::{BoardSizeError, FormatError, ValueError};
use crate::grid::{empty_grid, field_to_square, square_to_field};
use crate::{GamePosition, Piece, PieceColor, PieceType};

/// Smallest board the codec accepts.
pub const MIN_BOARD_SIZE: usize = 4;

/// Standard checkers board.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Converts between notation text and [`GamePosition`] for one board size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FenCodec {
    board_size: usize,
}

impl FenCodec {
    /// Create a codec for `board_size`x`board_size` boards.
    ///
    /// The size must be even and at least [`MIN_BOARD_SIZE`].
    pub fn new(board_size: usize) -> Result<FenCodec, BoardSizeError> {
        if board_size < MIN_BOARD_SIZE || board_size % 2 != 0 {
            return Err(BoardSizeError { size: board_size });
        }
        Ok(FenCodec { board_size })
    }

    #[inline]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Parse notation text into a position.
    ///
    /// The second color group is applied after the first, so a field listed
    /// in both ends up with the second group's piece. Field numbers that fall
    /// outside the grid are skipped. Nothing is returned on error.
    pub fn decode(&self, fen: &str) -> Result<GamePosition, FormatError> {
        let parts: Vec<&str> = fen.split(':').collect();
        let &[to_move, first, second] = parts.as_slice() else {
            return Err(FormatError::PartCount { found: parts.len() });
        };

        let mut position = empty_grid(self.board_size);
        let mut placed = 0usize;

        for group in [first, second] {
            for (field, piece) in parse_group(group)? {
                let Some((row, col)) = field_to_square(field, self.board_size) else {
                    warn!(field, board_size = self.board_size, "field outside the board, skipped");
                    continue;
                };
                trace!(field, row, col, ?piece, "placing piece");
                position[row][col] = piece;
                placed += 1;
            }
        }

        let color_to_move = parse_color(to_move, to_move)?;

        debug!(board_size = self.board_size, placed, ?color_to_move, "decoded position");
        Ok(GamePosition {
            color_to_move,
            position,
        })
    }

    /// Write a position as notation text.
    ///
    /// Pieces are listed in grid scan order (top to bottom, left to right),
    /// white group first.
    pub fn encode(&self, game: &GamePosition) -> Result<String, ValueError> {
        let to_move = game
            .color_to_move
            .letter()
            .ok_or(ValueError::MissingColorToMove)?;

        let mut white: Vec<String> = Vec::new();
        let mut black: Vec<String> = Vec::new();

        for (row, cells) in game.position.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                if piece.is_empty() {
                    continue;
                }
                if piece.is_half_set() {
                    return Err(ValueError::HalfSetPiece { row, col });
                }

                let field = square_to_field(row, col, self.board_size);
                let descriptor = match piece.piece_type {
                    PieceType::King => format!("K{}", field),
                    _ => field.to_string(),
                };
                match piece.color {
                    PieceColor::White => white.push(descriptor),
                    _ => black.push(descriptor),
                }
            }
        }

        debug!(
            board_size = self.board_size,
            white = white.len(),
            black = black.len(),
            "encoded position"
        );
        Ok(format!("{}:W{}:B{}", to_move, white.join(","), black.join(",")))
    }
}

impl Default for FenCodec {
    fn default() -> Self {
        FenCodec {
            board_size: DEFAULT_BOARD_SIZE,
        }
    }
}

/// Parse a color letter. `part` is the enclosing text, kept for the error.
fn parse_color(part: &str, letter: &str) -> Result<PieceColor, FormatError> {
    match letter {
        "B" | "b" => Ok(PieceColor::Black),
        "W" | "w" => Ok(PieceColor::White),
        _ => Err(FormatError::InvalidColor {
            part: part.to_string(),
            found: letter.to_string(),
        }),
    }
}

/// Parse one color group such as `WK3,7,12` into `(field, piece)` pairs.
///
/// A group holding only its letter has no pieces.
fn parse_group(group: &str) -> Result<Vec<(u32, Piece)>, FormatError> {
    let letter_len = group.chars().next().map_or(0, char::len_utf8);
    let (letter, fields) = group.split_at(letter_len);
    let color = parse_color(group, letter)?;

    if fields.is_empty() {
        return Ok(Vec::new());
    }

    fields
        .split(',')
        .map(|descriptor| {
            parse_field(descriptor).map(|(piece_type, field)| (field, Piece::new(piece_type, color)))
        })
        .collect()
}

/// Parse `[K]digits` into a piece type and field number.
fn parse_field(descriptor: &str) -> Result<(PieceType, u32), FormatError> {
    let (piece_type, digits) = match descriptor.strip_prefix(|c: char| c == 'K' || c == 'k') {
        Some(rest) => (PieceType::King, rest),
        None => (PieceType::Man, descriptor),
    };

    let bad_field = || FormatError::BadField {
        descriptor: descriptor.to_string(),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad_field());
    }
    let field = digits.parse::<u32>().map_err(|_| bad_field())?;
    Ok((piece_type, field))
}
