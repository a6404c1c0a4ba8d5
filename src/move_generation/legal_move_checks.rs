//! Direct attack queries.
//!
//! Answers "is this square attacked by that color" with ray casts and fixed
//! offset lookups instead of generating the attacker's replies.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coords, PieceKind};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Coords, attacker_color: Color) -> bool {
    let holds = |coords: Option<Coords>, kinds: &[PieceKind]| {
        coords
            .and_then(|c| board.piece_at(c))
            .is_some_and(|piece| piece.color == attacker_color && kinds.contains(&piece.kind))
    };

    // A pawn attacks diagonally forward, so look one rank behind the square.
    let pawn_rank = -attacker_color.forward();
    if holds(square.offset(-1, pawn_rank), &[PieceKind::Pawn])
        || holds(square.offset(1, pawn_rank), &[PieceKind::Pawn])
    {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|&(df, dr)| holds(square.offset(df, dr), &[PieceKind::King]))
    {
        return true;
    }

    let straight = [PieceKind::Rook, PieceKind::Queen];
    if ROOK_DIRECTIONS
        .iter()
        .any(|&dir| holds(first_piece_on_ray(board, square, dir), &straight))
    {
        return true;
    }

    let diagonal = [PieceKind::Bishop, PieceKind::Queen];
    BISHOP_DIRECTIONS
        .iter()
        .any(|&dir| holds(first_piece_on_ray(board, square, dir), &diagonal))
}

/// The first occupied square walking from `from` (exclusive) along `dir`.
pub fn first_piece_on_ray(board: &Board, from: Coords, dir: (i8, i8)) -> Option<Coords> {
    let mut current = from.offset(dir.0, dir.1);
    while let Some(square) = current {
        if !board.is_empty_at(square) {
            return Some(square);
        }
        current = square.offset(dir.0, dir.1);
    }
    None
}
