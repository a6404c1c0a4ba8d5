//! Target enumeration shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece};
use crate::moves::chess_move::ChessMove;

/// Emits a move to `to` unless it holds an own piece. Returns true when the
/// square was empty, i.e. a ray may continue past it.
#[inline]
pub fn push_unless_own(
    board: &Board,
    from: Coords,
    piece: Piece,
    to: Coords,
    out: &mut Vec<ChessMove>,
) -> bool {
    match board.piece_at(to) {
        None => {
            out.push(ChessMove::new(piece, from, to));
            true
        }
        Some(target) if target.color != piece.color => {
            out.push(ChessMove::new(piece, from, to).with_capture(Some(target)));
            false
        }
        Some(_) => false,
    }
}

/// Fixed-offset targets (knight and king steps).
pub fn generate_step_moves(
    board: &Board,
    from: Coords,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_file, d_rank) in offsets {
        if let Some(to) = from.offset(d_file, d_rank) {
            push_unless_own(board, from, piece, to, out);
        }
    }
}

/// Walks each ray until blocked; an enemy blocker is included as a capture.
pub fn generate_ray_moves(
    board: &Board,
    from: Coords,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_file, d_rank) in directions {
        let mut current = from.offset(d_file, d_rank);
        while let Some(to) = current {
            if !push_unless_own(board, from, piece, to, out) {
                break;
            }
            current = to.offset(d_file, d_rank);
        }
    }
}
