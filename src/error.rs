//! Error types returned by the codec.

use thiserror::Error;

/// Malformed notation text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid notation: expected 3 colon-separated parts, found {found}")]
    PartCount { found: usize },

    #[error("in \"{part}\": color must be one letter 'B' or 'W', but '{found}' occurred")]
    InvalidColor { part: String, found: String },

    #[error("bad field description: \"{descriptor}\"")]
    BadField { descriptor: String },
}

/// Position that cannot be written as notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("color to move cannot be absent")]
    MissingColorToMove,

    #[error("piece at ({row}, {col}): a piece must have both type and color set, or neither")]
    HalfSetPiece { row: usize, col: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("board size must be even and at least 4, got {size}")]
pub struct BoardSizeError {
    pub size: usize,
}
