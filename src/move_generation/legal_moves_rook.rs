use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece};
use crate::move_generation::legal_move_checks::ROOK_DIRECTIONS;
use crate::move_generation::legal_move_shared::generate_ray_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_rook_moves(board: &Board, from: Coords, rook: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, from, rook, &ROOK_DIRECTIONS, out);
}
