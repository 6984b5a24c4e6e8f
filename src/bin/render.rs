//! Render draughts positions to SVG or ASCII.
//!
//! Usage:
//!   # Position from notation
//!   cargo run --bin render -- --fen "W:W21,22,K30:B1,5" -o board.svg
//!
//!   # 10x10 board, ASCII to stdout
//!   cargo run --bin render -- --fen "B:W46:B1" --size 10 --ascii
//!
//!   # Starting grid, prints its notation as well
//!   cargo run --bin render -- --starting -o start.svg
//!
//! Set `RUST_LOG=debug` to see codec logging.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use draughts_fen::{
    playable_squares, starting_grid, FenCodec, GamePosition, Grid, Piece, PieceColor, PieceType,
};

// ============================================================================
// Constants
// ============================================================================

const CELL_SIZE: f32 = 64.0;
const BOARD_PADDING: f32 = 16.0;
const BOARD_RADIUS: f32 = 12.0;
const IMAGE_PADDING: f32 = 16.0;

const BG_COLOR: &str = "#1a1a1a";
const BOARD_BG: &str = "#2a2a2a";
const LIGHT_SQUARE: &str = "#e8d3ab";
const DARK_SQUARE: &str = "#7a4f2c";
const BLACK_PIECE: &str = "#222222";
const WHITE_PIECE: &str = "#f4f4f4";
const KING_MARK: &str = "#d4a017";
const LABEL_COLOR: &str = "#c8b08a";

const PIECE_DIAMETER: f32 = 48.0;

// ============================================================================
// CLI
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "render", about = "Render a draughts position to SVG or ASCII")]
struct Args {
    /// Position notation, e.g. "W:W21,22,K30:B1,5"
    #[arg(long, conflicts_with = "starting")]
    fen: Option<String>,

    /// Render the starting grid instead of a notation
    #[arg(long)]
    starting: bool,

    /// Board size (even, at least 4)
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Output file
    #[arg(short, long, default_value = "board.svg")]
    output: PathBuf,

    /// Print an ASCII diagram instead of writing SVG
    #[arg(long)]
    ascii: bool,

    /// Label playable squares with their field numbers
    #[arg(long)]
    numbers: bool,

    /// Scale factor (1.0 = 64px squares)
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

/// Options for rendering
struct RenderOptions {
    numbers: bool,
    scale: f32,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let codec = FenCodec::new(args.size)?;

    let game = if args.starting {
        let game = GamePosition {
            color_to_move: PieceColor::White,
            position: starting_grid(codec.board_size()),
        };
        println!("{}", codec.encode(&game)?);
        game
    } else if let Some(fen) = &args.fen {
        codec.decode(fen)?
    } else {
        return Err("specify --fen or --starting".into());
    };

    if args.ascii {
        print!("{}", render_ascii(&game));
        return Ok(());
    }

    let opts = RenderOptions {
        numbers: args.numbers,
        scale: args.scale,
    };
    let svg = render_board_svg(&game.position, &opts);
    fs::write(&args.output, &svg)?;
    info!(path = %args.output.display(), "wrote svg");
    println!("Wrote {}", args.output.display());
    Ok(())
}

// ============================================================================
// ASCII
// ============================================================================

fn piece_char(piece: &Piece) -> char {
    match (piece.piece_type, piece.color) {
        (PieceType::Man, PieceColor::Black) => 'b',
        (PieceType::King, PieceColor::Black) => 'B',
        (PieceType::Man, PieceColor::White) => 'w',
        (PieceType::King, PieceColor::White) => 'W',
        _ => '.',
    }
}

/// One line per row, side to move underneath
fn render_ascii(game: &GamePosition) -> String {
    let mut out = String::new();
    for row in &game.position {
        let line: Vec<String> = row.iter().map(|p| piece_char(p).to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    let to_move = match game.color_to_move {
        PieceColor::Black => "black",
        PieceColor::White => "white",
        PieceColor::None => "none",
    };
    out.push_str(&format!("{} to move\n", to_move));
    out
}

// ============================================================================
// SVG generation
// ============================================================================

/// Generate SVG for a grid
fn render_board_svg(grid: &Grid, opts: &RenderOptions) -> String {
    let scale = if opts.scale > 0.0 { opts.scale } else { 1.0 };
    let size = grid.len();

    let board_inner = size as f32 * CELL_SIZE;
    let board_outer = board_inner + 2.0 * BOARD_PADDING;
    let width = board_outer + 2.0 * IMAGE_PADDING;
    let height = width;

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width * scale,
        height * scale,
        width,
        height
    ));
    svg.push('\n');

    svg.push_str(&format!(
        r#"  <rect width="{}" height="{}" fill="{}"/>"#,
        width, height, BG_COLOR
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"/>"#,
        IMAGE_PADDING, IMAGE_PADDING, board_outer, board_outer, BOARD_RADIUS, BOARD_BG
    ));
    svg.push('\n');

    let origin = IMAGE_PADDING + BOARD_PADDING;
    let cell_x = |col: usize| origin + col as f32 * CELL_SIZE;
    let cell_y = |row: usize| origin + row as f32 * CELL_SIZE;

    for (row, cells) in grid.iter().enumerate() {
        for (col, piece) in cells.iter().enumerate() {
            let (x, y) = (cell_x(col), cell_y(row));
            let fill = if (row + col) % 2 == 1 { DARK_SQUARE } else { LIGHT_SQUARE };
            svg.push_str(&format!(
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                x, y, CELL_SIZE, CELL_SIZE, fill
            ));
            svg.push('\n');

            if piece.is_empty() || piece.is_half_set() {
                continue;
            }
            svg.push_str(&render_piece_svg(piece, x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0));
        }
    }

    if opts.numbers {
        for (field, (row, col)) in playable_squares(size) {
            svg.push_str(&format!(
                r#"  <text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="11" fill="{}">{}</text>"#,
                cell_x(col) + 4.0,
                cell_y(row) + 13.0,
                LABEL_COLOR,
                field
            ));
            svg.push('\n');
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// A disc, with a ring for kings
fn render_piece_svg(piece: &Piece, cx: f32, cy: f32) -> String {
    let (fill, stroke) = match piece.color {
        PieceColor::Black => (BLACK_PIECE, "#000000"),
        _ => (WHITE_PIECE, "#999999"),
    };

    let mut svg = format!(
        r#"  <circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
        cx,
        cy,
        PIECE_DIAMETER / 2.0,
        fill,
        stroke
    );
    svg.push('\n');

    if piece.piece_type == PieceType::King {
        svg.push_str(&format!(
            r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="4"/>"#,
            cx,
            cy,
            PIECE_DIAMETER / 4.0,
            KING_MARK
        ));
        svg.push('\n');
    }
    svg
}
