use std::io::Read;

use crate::board::{Board, Tile};

/// Parse whitespace-separated tile values, stopping at the first token that
/// is not an integer. The tile count must be a perfect square.
pub fn board_from_str(input: &str) -> Board {
    let cells: Vec<Tile> = input
        .split_whitespace()
        .map_while(|token| token.parse().ok())
        .collect();

    let side = (cells.len() as f64).sqrt() as usize;
    assert_eq!(side * side, cells.len(), "input must describe an NxN board");

    Board::from_cells(side, cells)
}

pub fn read_board(mut reader: impl Read) -> std::io::Result<Board> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(board_from_str(&input))
}
