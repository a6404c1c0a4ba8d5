use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece};
use crate::move_generation::legal_move_checks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::move_generation::legal_move_shared::generate_ray_moves;
use crate::moves::chess_move::ChessMove;

/// Orthogonal rays first, then diagonals.
pub fn generate_queen_moves(board: &Board, from: Coords, queen: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, from, queen, &ROOK_DIRECTIONS, out);
    generate_ray_moves(board, from, queen, &BISHOP_DIRECTIONS, out);
}
