//! Notation fixtures
//!
//! Loads positions from `tests/data/positions.json` and verifies:
//! - Decoded grid contents and side to move
//! - Canonical re-encoding
//! - Error messages for malformed notation

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use draughts_fen::{empty_grid, FenCodec, Piece, PieceColor, PieceType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TestData {
    version: String,
    positions: Vec<PositionCase>,
    errors: Vec<ErrorCase>,
}

#[derive(Debug, Deserialize)]
struct PositionCase {
    description: String,
    board_size: usize,
    fen: String,
    color_to_move: PieceColor,
    pieces: Vec<PlacedPiece>,
    canonical: String,
}

#[derive(Debug, Deserialize)]
struct PlacedPiece {
    row: usize,
    col: usize,
    piece_type: PieceType,
    color: PieceColor,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct ErrorCase {
    board_size: usize,
    fen: String,
    kind: String,
    message: String,
}

fn load_test_data() -> TestData {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/positions.json");
    let file = File::open(path).expect("Failed to open fixture file");
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse JSON")
}

#[test]
fn test_fixture_positions_decode() {
    let data = load_test_data();
    assert!(!data.positions.is_empty());

    for case in &data.positions {
        let codec = FenCodec::new(case.board_size).unwrap();
        let game = codec
            .decode(&case.fen)
            .unwrap_or_else(|e| panic!("{}: {}", case.description, e));

        let mut expected = empty_grid(case.board_size);
        for p in &case.pieces {
            expected[p.row][p.col] = Piece::new(p.piece_type, p.color);
        }

        assert_eq!(game.color_to_move, case.color_to_move, "{}", case.description);
        assert_eq!(game.position, expected, "{}", case.description);
    }
}

#[test]
fn test_fixture_positions_canonical() {
    let data = load_test_data();

    for case in &data.positions {
        let codec = FenCodec::new(case.board_size).unwrap();
        let game = codec.decode(&case.fen).unwrap();
        let encoded = codec.encode(&game).unwrap();
        assert_eq!(encoded, case.canonical, "{}", case.description);

        // Canonical text is a fixed point.
        let again = codec.decode(&encoded).unwrap();
        assert_eq!(again, game, "{}", case.description);
        assert_eq!(codec.encode(&again).unwrap(), encoded);
    }
}

#[test]
fn test_fixture_errors() {
    let data = load_test_data();
    assert!(!data.errors.is_empty());

    for case in &data.errors {
        let codec = FenCodec::new(case.board_size).unwrap();
        let err = codec
            .decode(&case.fen)
            .expect_err(&format!("expected error for {:?}", case.fen));
        assert_eq!(err.to_string(), case.message, "fen {:?}", case.fen);
    }
}

#[test]
fn test_position_json_roundtrip() {
    let codec = FenCodec::default();
    let game = codec.decode("W:W1,2,K3:B30").unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let back: draughts_fen::GamePosition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game);
    assert_eq!(back.position[0][5], Piece::new(PieceType::King, PieceColor::White));
}
