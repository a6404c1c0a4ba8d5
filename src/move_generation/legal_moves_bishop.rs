use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece};
use crate::move_generation::legal_move_checks::BISHOP_DIRECTIONS;
use crate::move_generation::legal_move_shared::generate_ray_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(board: &Board, from: Coords, bishop: Piece, out: &mut Vec<ChessMove>) {
    generate_ray_moves(board, from, bishop, &BISHOP_DIRECTIONS, out);
}
