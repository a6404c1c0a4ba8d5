//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Coords`,
//! reused by FEN parsing, move notation and the game session API.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Coords;

/// Convert algebraic text (for example: "e4") to coordinates.
///
/// Anything other than exactly a file letter `a`..`h` followed by a rank digit
/// `1`..`8` is rejected.
pub fn parse_coords(square: &str) -> Result<Coords, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidCoords(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidCoords(square.to_owned()));
    }

    Ok(Coords::new(file - b'a', rank - b'1'))
}

/// Parse a whitespace separated list of squares, e.g. `"a1 b2 c3"`.
pub fn parse_coords_list(squares: &str) -> Result<Vec<Coords>, ChessErrors> {
    squares.split_whitespace().map(parse_coords).collect()
}

#[inline]
pub fn file_char(file: u8) -> char {
    char::from(b'a' + file)
}

#[inline]
pub fn rank_char(rank: u8) -> char {
    char::from(b'1' + rank)
}
