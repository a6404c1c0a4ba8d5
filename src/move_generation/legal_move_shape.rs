//! Geometric legality test for a single move.
//!
//! `is_legal_move` checks a move against the movement rules alone: piece
//! geometry, occupancy, the en-passant target and castling rights with path
//! clearance. It never simulates the opponent's reply, so a move that leaves
//! the mover's own king attacked can still pass. Callers use it to reject
//! obviously bad from/to/promotion triples before the king-safety pass.

use crate::game_state::chess_rules::{
    KING_HOME_FILE, LONG_CASTLE_KING_FILE, LONG_CASTLE_ROOK_FROM_FILE, SHORT_CASTLE_KING_FILE,
    SHORT_CASTLE_ROOK_FROM_FILE,
};
use crate::game_state::chess_types::{Coords, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::moves::chess_move::ChessMove;

impl Position {
    pub fn is_legal_move(&self, mv: &ChessMove) -> bool {
        if self.board.piece_at(mv.from) != Some(mv.piece) || mv.from == mv.to {
            return false;
        }
        if self.board.color_at(mv.to) == Some(mv.piece.color) {
            return false;
        }

        let promotes = mv.piece.kind == PieceKind::Pawn
            && mv.to.rank() == mv.piece.color.promotion_rank();
        match mv.promotion {
            Some(PieceKind::Pawn | PieceKind::King) => return false,
            Some(_) if !promotes => return false,
            None if promotes => return false,
            _ => {}
        }

        let d_file = mv.to.file() as i8 - mv.from.file() as i8;
        let d_rank = mv.to.rank() as i8 - mv.from.rank() as i8;

        match mv.piece.kind {
            PieceKind::Pawn => self.is_pawn_shape(mv, d_file, d_rank),
            PieceKind::Knight => {
                matches!((d_file.abs(), d_rank.abs()), (1, 2) | (2, 1))
            }
            PieceKind::Bishop => {
                d_file.abs() == d_rank.abs() && self.board.is_clear_between(mv.from, mv.to)
            }
            PieceKind::Rook => {
                (d_file == 0 || d_rank == 0) && self.board.is_clear_between(mv.from, mv.to)
            }
            PieceKind::Queen => self.board.is_clear_between(mv.from, mv.to),
            PieceKind::King => {
                if d_file.abs() <= 1 && d_rank.abs() <= 1 {
                    true
                } else {
                    self.is_castling_shape(mv)
                }
            }
        }
    }

    fn is_pawn_shape(&self, mv: &ChessMove, d_file: i8, d_rank: i8) -> bool {
        let color = mv.piece.color;
        let forward = color.forward();

        match (d_file.abs(), d_rank) {
            (0, r) if r == forward => self.board.is_empty_at(mv.to),
            (0, r) if r == 2 * forward => {
                mv.from.rank() == color.pawn_start_rank()
                    && self.board.is_empty_at(mv.to)
                    && self.board.is_clear_between(mv.from, mv.to)
            }
            (1, r) if r == forward => match self.board.piece_at(mv.to) {
                Some(target) => target.color != color,
                None => {
                    let behind = Coords::new(mv.to.file(), mv.from.rank());
                    self.en_passant_target == Some(mv.to)
                        && self.board.piece_at(behind) == Some(Piece::pawn(color.opposite()))
                }
            },
            _ => false,
        }
    }

    fn is_castling_shape(&self, mv: &ChessMove) -> bool {
        let color = mv.piece.color;
        let back_rank = color.back_rank();
        if mv.from != Coords::new(KING_HOME_FILE, back_rank) || mv.to.rank() != back_rank {
            return false;
        }

        let (allowed, rook_file) = match mv.to.file() {
            SHORT_CASTLE_KING_FILE => (
                self.castling_rights.can_castle_short(color),
                SHORT_CASTLE_ROOK_FROM_FILE,
            ),
            LONG_CASTLE_KING_FILE => (
                self.castling_rights.can_castle_long(color),
                LONG_CASTLE_ROOK_FROM_FILE,
            ),
            _ => return false,
        };
        let rook_square = Coords::new(rook_file, back_rank);

        allowed
            && self.board.piece_at(rook_square) == Some(Piece::rook(color))
            && self.board.is_clear_between(mv.from, rook_square)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
    use crate::game_state::position::Position;
    use crate::moves::chess_move::ChessMove;

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn start_position_shapes() {
        let position = Position::new_game();
        let pawn = Piece::pawn(Color::White);
        let knight = Piece::knight(Color::White);
        let bishop = Piece::bishop(Color::White);

        assert!(position.is_legal_move(&ChessMove::new(pawn, sq("e2"), sq("e4"))));
        assert!(!position.is_legal_move(&ChessMove::new(pawn, sq("e2"), sq("e5"))));
        assert!(!position.is_legal_move(&ChessMove::new(pawn, sq("e2"), sq("d3"))));
        assert!(position.is_legal_move(&ChessMove::new(knight, sq("g1"), sq("f3"))));
        assert!(!position.is_legal_move(&ChessMove::new(knight, sq("g1"), sq("e2"))));
        assert!(!position.is_legal_move(&ChessMove::new(bishop, sq("c1"), sq("e3"))));
    }

    #[test]
    fn wrong_piece_on_origin_is_rejected() {
        let position = Position::new_game();
        let mv = ChessMove::new(Piece::knight(Color::Black), sq("g1"), sq("f3"));
        assert!(!position.is_legal_move(&mv));
    }

    #[test]
    fn promotion_choice_must_match_destination() {
        let position = Position::from_fen("4k3/P7/8/8/8/8/1P6/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let pawn = Piece::pawn(Color::White);

        let bare = ChessMove::new(pawn, sq("a7"), sq("a8"));
        assert!(!position.is_legal_move(&bare));
        assert!(position.is_legal_move(&bare.with_promotion(Some(PieceKind::Rook))));
        assert!(!position.is_legal_move(&bare.with_promotion(Some(PieceKind::King))));

        let early = ChessMove::new(pawn, sq("b2"), sq("b3")).with_promotion(Some(PieceKind::Queen));
        assert!(!position.is_legal_move(&early));
    }

    #[test]
    fn castling_shape_ignores_attacks_but_not_rights() {
        let position = Position::from_fen("4kr2/8/8/8/8/8/8/R3K2R w K - 0 1")
            .expect("test FEN should parse");
        let king = Piece::king(Color::White);
        assert!(position.is_legal_move(&ChessMove::new(king, sq("e1"), sq("g1"))));
        assert!(!position.is_legal_move(&ChessMove::new(king, sq("e1"), sq("c1"))));
    }

    #[test]
    fn en_passant_shape_uses_target_square() {
        let position = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("test FEN should parse");
        let pawn = Piece::pawn(Color::White);
        assert!(position.is_legal_move(&ChessMove::new(pawn, sq("e5"), sq("d6"))));
        assert!(!position.is_legal_move(&ChessMove::new(pawn, sq("e5"), sq("f6"))));
    }
}
