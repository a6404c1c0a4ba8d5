use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_rules::{
    KING_HOME_FILE, LONG_CASTLE_KING_FILE, LONG_CASTLE_ROOK_FROM_FILE, LONG_CASTLE_ROOK_TO_FILE,
    SHORT_CASTLE_KING_FILE, SHORT_CASTLE_ROOK_FROM_FILE, SHORT_CASTLE_ROOK_TO_FILE,
};
use crate::game_state::chess_types::{Coords, Piece};
use crate::move_generation::legal_move_checks::{is_square_attacked, KING_OFFSETS};
use crate::move_generation::legal_move_shared::generate_step_moves;
use crate::moves::chess_move::ChessMove;

/// King steps followed by castling (long, then short).
///
/// With `check_safety` the king may not castle out of, through or into an
/// attacked square. Pseudo-legal generation leaves that to king-capture
/// scoring in the search.
pub fn generate_king_moves(
    board: &Board,
    from: Coords,
    king: Piece,
    rights: &CastlingRights,
    check_safety: bool,
    out: &mut Vec<ChessMove>,
) {
    generate_step_moves(board, from, king, &KING_OFFSETS, out);
    generate_castling_moves(board, from, king, rights, check_safety, out);
}

fn generate_castling_moves(
    board: &Board,
    from: Coords,
    king: Piece,
    rights: &CastlingRights,
    check_safety: bool,
    out: &mut Vec<ChessMove>,
) {
    let color = king.color;
    let back_rank = color.back_rank();
    if from != Coords::new(KING_HOME_FILE, back_rank) {
        return;
    }
    if check_safety && is_square_attacked(board, from, color.opposite()) {
        return;
    }

    let sides = [
        (
            rights.can_castle_long(color),
            LONG_CASTLE_ROOK_FROM_FILE,
            LONG_CASTLE_ROOK_TO_FILE,
            LONG_CASTLE_KING_FILE,
        ),
        (
            rights.can_castle_short(color),
            SHORT_CASTLE_ROOK_FROM_FILE,
            SHORT_CASTLE_ROOK_TO_FILE,
            SHORT_CASTLE_KING_FILE,
        ),
    ];

    for (allowed, rook_file, transit_file, king_file) in sides {
        if !allowed {
            continue;
        }
        let rook_square = Coords::new(rook_file, back_rank);
        if board.piece_at(rook_square) != Some(Piece::rook(color)) {
            continue;
        }
        if !board.is_clear_between(from, rook_square) {
            continue;
        }

        let transit = Coords::new(transit_file, back_rank);
        let to = Coords::new(king_file, back_rank);
        if check_safety
            && (is_square_attacked(board, transit, color.opposite())
                || is_square_attacked(board, to, color.opposite()))
        {
            continue;
        }

        out.push(ChessMove::new(king, from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Coords, Piece};
    use crate::game_state::position::Position;

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    fn king_targets(fen: &str, from: &str, check_safety: bool) -> Vec<String> {
        let position = Position::from_fen(fen).expect("test FEN should parse");
        let king = position.piece_at(sq(from)).expect("king on origin square");
        let mut out = Vec::new();
        generate_king_moves(
            &position.board,
            sq(from),
            king,
            &position.castling_rights,
            check_safety,
            &mut out,
        );
        out.iter().map(|mv| mv.to.to_string()).collect()
    }

    #[test]
    fn lone_king_in_centre_has_eight_steps() {
        let mut out = Vec::new();
        let board = crate::game_state::board::Board::empty();
        generate_king_moves(
            &board,
            sq("d4"),
            Piece::king(Color::White),
            &CastlingRights::none(),
            true,
            &mut out,
        );
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn castling_both_ways_long_first() {
        let targets = king_targets("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", true);
        let castles: Vec<&String> = targets.iter().filter(|t| *t == "c1" || *t == "g1").collect();
        assert_eq!(castles, vec!["c1", "g1"]);
    }

    #[test]
    fn castling_through_attacked_square_needs_pseudo_mode() {
        // The black rook on f8 covers f1.
        let fen = "4kr2/8/8/8/8/8/8/4K2R w K - 0 1";
        assert!(!king_targets(fen, "e1", true).contains(&"g1".to_string()));
        assert!(king_targets(fen, "e1", false).contains(&"g1".to_string()));
    }

    #[test]
    fn castling_needs_rook_on_corner_and_clear_path() {
        assert!(!king_targets("4k3/8/8/8/8/8/8/4K3 w K - 0 1", "e1", true).contains(&"g1".to_string()));
        assert!(!king_targets("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", "e1", true).contains(&"c1".to_string()));
    }

    #[test]
    fn no_castling_out_of_check() {
        let targets = king_targets("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", "e1", true);
        assert!(!targets.contains(&"g1".to_string()));
        assert!(!targets.contains(&"c1".to_string()));
    }
}
