use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece};
use crate::move_generation::legal_move_checks::KNIGHT_OFFSETS;
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::ChessMove;

pub fn generate_knight_moves(board: &Board, from: Coords, knight: Piece, out: &mut Vec<ChessMove>) {
    generate_step_moves(board, from, knight, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coords, Piece};

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn knight_targets_by_location() {
        let board = Board::empty();
        for (square, expected) in [("d4", 8), ("a1", 2), ("b1", 3), ("h5", 4)] {
            let mut out = Vec::new();
            generate_knight_moves(&board, sq(square), Piece::knight(Color::White), &mut out);
            assert_eq!(out.len(), expected, "knight on {square}");
        }
    }

    #[test]
    fn knight_skips_own_pieces_and_captures_enemies() {
        let mut board = Board::empty();
        board.set_piece(sq("c3"), Some(Piece::pawn(Color::White)));
        board.set_piece(sq("f3"), Some(Piece::pawn(Color::Black)));
        let mut out = Vec::new();
        generate_knight_moves(&board, sq("g1"), Piece::knight(Color::White), &mut out);

        assert_eq!(out.len(), 3);
        let capture = out
            .iter()
            .find(|mv| mv.to == sq("f3"))
            .expect("f3 capture is generated");
        assert_eq!(capture.captured_piece, Some(Piece::pawn(Color::Black)));
    }
}
