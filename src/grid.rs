//! Grid allocation and field-number addressing.
//!
//! Field `n` on a board of size `s` (with `h = s / 2` playable squares per row):
//!
//! ```text
//! row = ceil(n / h) - 1
//! col = ((n - 1) mod h) * 2 + (1 if row is even else 0)
//! n   = col / 2 + 1 + row * h
//! ```

use crate::{Grid, Piece, PieceColor, PieceType};

/// Rows filled with men at each end of the starting grid.
const STARTING_ROWS: usize = 3;

/// Allocate a `size`x`size` grid of empty cells.
pub fn empty_grid(size: usize) -> Grid {
    vec![vec![Piece::EMPTY; size]; size]
}

/// Allocate a grid with black men on the top three rows and white men on the
/// bottom three, on cells where `row + col` is even.
///
/// White rows are placed after black ones, so on boards shorter than six rows
/// the overlap ends up white.
pub fn starting_grid(size: usize) -> Grid {
    let mut grid = empty_grid(size);

    let black_rows = 0..STARTING_ROWS.min(size);
    let white_rows = size.saturating_sub(STARTING_ROWS)..size;

    for (rows, color) in [(black_rows, PieceColor::Black), (white_rows, PieceColor::White)] {
        for row in rows {
            for col in (0..size).filter(|col| (row + col) % 2 == 0) {
                grid[row][col] = Piece::new(PieceType::Man, color);
            }
        }
    }
    grid
}

/// Convert a 1-based field number to `(row, col)`.
///
/// Returns `None` for field 0 and for fields past the last playable square.
pub fn field_to_square(field: u32, board_size: usize) -> Option<(usize, usize)> {
    let half = board_size / 2;
    if field == 0 || half == 0 {
        return None;
    }
    let index = field as usize - 1;
    let row = index / half;
    if row >= board_size {
        return None;
    }
    let col = (index % half) * 2 + if row % 2 == 0 { 1 } else { 0 };
    Some((row, col))
}

/// Convert `(row, col)` to its field number.
///
/// Total over any coordinates; a non-playable cell shares the number of its
/// playable neighbour in the same pair of columns.
pub fn square_to_field(row: usize, col: usize, board_size: usize) -> u32 {
    (col / 2 + 1 + row * (board_size / 2)) as u32
}

/// Iterate `(field, (row, col))` over every playable square in field order.
pub fn playable_squares(board_size: usize) -> impl Iterator<Item = (u32, (usize, usize))> {
    let count = (board_size * board_size / 2) as u32;
    (1..=count).filter_map(move |field| field_to_square(field, board_size).map(|sq| (field, sq)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = empty_grid(8);
        assert_eq!(grid.len(), 8);
        assert!(grid.iter().all(|row| row.len() == 8));
        assert!(grid.iter().flatten().all(Piece::is_empty));
        assert_eq!(empty_grid(8), grid);
    }

    #[test]
    fn test_empty_grid_zero() {
        assert!(empty_grid(0).is_empty());
    }

    #[test]
    fn test_starting_grid_8() {
        let grid = starting_grid(8);
        for (row, cells) in grid.iter().enumerate() {
            for (col, piece) in cells.iter().enumerate() {
                let expected = if (row + col) % 2 != 0 {
                    Piece::EMPTY
                } else if row < 3 {
                    Piece::new(PieceType::Man, PieceColor::Black)
                } else if row >= 5 {
                    Piece::new(PieceType::Man, PieceColor::White)
                } else {
                    Piece::EMPTY
                };
                assert_eq!(*piece, expected, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_starting_grid_counts() {
        let grid = starting_grid(10);
        let count = |color| grid.iter().flatten().filter(|p| p.color == color).count();
        assert_eq!(count(PieceColor::Black), 15);
        assert_eq!(count(PieceColor::White), 15);
    }

    #[test]
    fn test_starting_grid_small_board_overlap() {
        // Rows 1 and 2 are both black and white rows on a 4x4 board.
        let grid = starting_grid(4);
        assert_eq!(grid[0][0].color, PieceColor::Black);
        assert_eq!(grid[1][1].color, PieceColor::White);
        assert_eq!(grid[2][0].color, PieceColor::White);
        assert_eq!(grid[3][3].color, PieceColor::White);
    }

    #[test]
    fn test_field_to_square_8() {
        assert_eq!(field_to_square(1, 8), Some((0, 1)));
        assert_eq!(field_to_square(4, 8), Some((0, 7)));
        assert_eq!(field_to_square(5, 8), Some((1, 0)));
        assert_eq!(field_to_square(8, 8), Some((1, 6)));
        assert_eq!(field_to_square(9, 8), Some((2, 1)));
        assert_eq!(field_to_square(30, 8), Some((7, 2)));
        assert_eq!(field_to_square(32, 8), Some((7, 6)));
    }

    #[test]
    fn test_field_to_square_off_grid() {
        assert_eq!(field_to_square(0, 8), None);
        assert_eq!(field_to_square(33, 8), None);
        assert_eq!(field_to_square(51, 10), None);
        assert_eq!(field_to_square(50, 10), Some((9, 8)));
    }

    #[test]
    fn test_square_to_field_8() {
        assert_eq!(square_to_field(0, 1, 8), 1);
        assert_eq!(square_to_field(1, 0, 8), 5);
        assert_eq!(square_to_field(7, 2, 8), 30);
        assert_eq!(square_to_field(7, 6, 8), 32);
    }

    #[test]
    fn test_mapping_inverse_all_sizes() {
        for size in (4..=20).step_by(2) {
            for field in 1..=(size * size / 2) as u32 {
                let (row, col) = field_to_square(field, size).unwrap();
                assert!(row < size && col < size);
                assert_eq!((row + col) % 2, 1, "field {} on size {}", field, size);
                assert_eq!(square_to_field(row, col, size), field);
            }
        }
    }

    #[test]
    fn test_playable_squares() {
        let squares: Vec<_> = playable_squares(8).collect();
        assert_eq!(squares.len(), 32);
        assert_eq!(squares[0], (1, (0, 1)));
        assert_eq!(squares[31], (32, (7, 6)));

        // Reading order: row-major, left to right.
        let mut sorted = squares.clone();
        sorted.sort_by_key(|&(_, sq)| sq);
        assert_eq!(sorted, squares);
    }
}
