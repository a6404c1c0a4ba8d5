//! Pawn pushes, captures, en passant and promotions.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Coords, Piece, PieceKind, PROMOTION_PIECE_KINDS};
use crate::moves::chess_move::ChessMove;

/// Emits pushes first (single then double), then the left and right
/// diagonals. A move onto the promotion rank fans out into one move per
/// promotion choice.
pub fn generate_pawn_moves(
    board: &Board,
    from: Coords,
    pawn: Piece,
    en_passant_target: Option<Coords>,
    out: &mut Vec<ChessMove>,
) {
    let forward = pawn.color.forward();

    if let Some(one_step) = from.offset(0, forward) {
        if board.is_empty_at(one_step) {
            push_with_promotions(pawn, ChessMove::new(pawn, from, one_step), out);

            if from.rank() == pawn.color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(0, forward) {
                    if board.is_empty_at(two_step) {
                        out.push(ChessMove::new(pawn, from, two_step));
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(to) = from.offset(d_file, forward) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != pawn.color => {
                let mv = ChessMove::new(pawn, from, to).with_capture(Some(target));
                push_with_promotions(pawn, mv, out);
            }
            Some(_) => {}
            None if en_passant_target == Some(to) => {
                let behind = Coords::new(to.file(), from.rank());
                if let Some(victim) = board.piece_at(behind) {
                    if victim.kind == PieceKind::Pawn && victim.color != pawn.color {
                        out.push(ChessMove::new(pawn, from, to).with_en_passant(victim));
                    }
                }
            }
            None => {}
        }
    }
}

fn push_with_promotions(pawn: Piece, mv: ChessMove, out: &mut Vec<ChessMove>) {
    if mv.to.rank() == pawn.color.promotion_rank() {
        out.extend(
            PROMOTION_PIECE_KINDS
                .iter()
                .map(|&kind| mv.with_promotion(Some(kind))),
        );
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    fn targets(board: &Board, from: &str, color: Color, ep: Option<Coords>) -> Vec<String> {
        let mut out = Vec::new();
        generate_pawn_moves(board, sq(from), Piece::pawn(color), ep, &mut out);
        out.iter().map(|mv| mv.to.to_string()).collect()
    }

    #[test]
    fn start_rank_pawn_pushes_one_or_two() {
        let board = Board::empty();
        assert_eq!(targets(&board, "d2", Color::White, None), vec!["d3", "d4"]);
        assert_eq!(targets(&board, "d7", Color::Black, None), vec!["d6", "d5"]);
        assert_eq!(targets(&board, "d3", Color::White, None), vec!["d4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let mut board = Board::empty();
        board.set_piece(sq("d3"), Some(Piece::knight(Color::Black)));
        assert!(targets(&board, "d2", Color::White, None).is_empty());

        board.set_piece(sq("d3"), None);
        board.set_piece(sq("d4"), Some(Piece::knight(Color::Black)));
        assert_eq!(targets(&board, "d2", Color::White, None), vec!["d3"]);
    }

    #[test]
    fn captures_only_enemy_pieces_diagonally() {
        let mut board = Board::empty();
        board.set_piece(sq("c5"), Some(Piece::rook(Color::Black)));
        board.set_piece(sq("e5"), Some(Piece::rook(Color::White)));
        assert_eq!(targets(&board, "d4", Color::White, None), vec!["d5", "c5"]);
    }

    #[test]
    fn seventh_rank_push_yields_four_promotions() {
        let board = Board::empty();
        let mut out = Vec::new();
        generate_pawn_moves(&board, sq("a7"), Piece::pawn(Color::White), None, &mut out);

        let kinds: Vec<Option<PieceKind>> = out.iter().map(|mv| mv.promotion).collect();
        assert_eq!(
            kinds,
            vec![
                Some(PieceKind::Queen),
                Some(PieceKind::Rook),
                Some(PieceKind::Bishop),
                Some(PieceKind::Knight),
            ]
        );
        assert!(out.iter().all(|mv| mv.to == sq("a8")));
    }

    #[test]
    fn en_passant_requires_enemy_pawn_behind_target() {
        let mut board = Board::empty();
        board.set_piece(sq("d5"), Some(Piece::pawn(Color::Black)));
        let mut out = Vec::new();
        generate_pawn_moves(&board, sq("e5"), Piece::pawn(Color::White), Some(sq("d6")), &mut out);
        let ep = out
            .iter()
            .find(|mv| mv.is_en_passant)
            .expect("en passant capture is generated");
        assert_eq!(ep.to, sq("d6"));
        assert_eq!(ep.captured_piece, Some(Piece::pawn(Color::Black)));

        board.set_piece(sq("d5"), Some(Piece::knight(Color::Black)));
        out.clear();
        generate_pawn_moves(&board, sq("e5"), Piece::pawn(Color::White), Some(sq("d6")), &mut out);
        assert!(out.iter().all(|mv| !mv.is_en_passant));
    }
}
