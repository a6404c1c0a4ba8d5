//! Reversible move application.
//!
//! `make_move` mutates the position in place and returns the `UndoState`
//! needed to revert it; `undo_move` is the exact inverse. Search relies on
//! `make_move(m)` followed by `undo_move(&undo)` restoring the board, castling
//! rights and en-passant target bit for bit.

use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_rules::{LONG_CASTLE_ROOK_FROM_FILE, SHORT_CASTLE_ROOK_FROM_FILE};
use crate::game_state::chess_types::{Color, Coords, PieceKind};
use crate::game_state::position::Position;
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::ChessMove;

impl Position {
    /// Applies a generator-produced move. Does not touch the side to move,
    /// the clocks or the committed log; see `commit_move` for real play.
    pub fn make_move(&mut self, mv: &ChessMove) -> UndoState {
        debug_assert_eq!(
            self.board.piece_at(mv.from),
            Some(mv.piece),
            "move {mv} does not match the board"
        );

        let undo = UndoState {
            mv: *mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
            prev_halfmove_clock: self.halfmove_clock,
        };

        self.board.set_piece(mv.from, None);
        if mv.is_en_passant {
            self.board.set_piece(mv.captured_square(), None);
        }
        self.board.set_piece(mv.to, Some(mv.piece_after_move()));

        if let Some((rook_from, rook_to)) = mv.castling_rook_squares() {
            let rook = self.board.take_piece(rook_from);
            self.board.set_piece(rook_to, rook);
        }

        self.en_passant_target = mv.en_passant_target();
        update_castling_rights(&mut self.castling_rights, mv);

        undo
    }

    /// Reverts the move recorded in `undo`. Must be called on the position
    /// exactly as `make_move` left it.
    pub fn undo_move(&mut self, undo: &UndoState) {
        let mv = &undo.mv;

        if let Some((rook_from, rook_to)) = mv.castling_rook_squares() {
            let rook = self.board.take_piece(rook_to);
            self.board.set_piece(rook_from, rook);
        }

        self.board.set_piece(mv.to, None);
        if mv.is_capture() {
            self.board.set_piece(mv.captured_square(), mv.captured_piece);
        }
        self.board.set_piece(mv.from, Some(mv.piece));

        self.castling_rights = undo.prev_castling_rights;
        self.en_passant_target = undo.prev_en_passant_target;
    }
}

fn update_castling_rights(rights: &mut CastlingRights, mv: &ChessMove) {
    let mover = mv.piece.color;

    match mv.piece.kind {
        PieceKind::King => rights.clear_both(mover),
        PieceKind::Rook => clear_right_for_rook_square(rights, mover, mv.from),
        _ => {}
    }

    // A rook captured on its home corner takes its right with it.
    if let Some(captured) = mv.captured_piece {
        if captured.kind == PieceKind::Rook {
            clear_right_for_rook_square(rights, captured.color, mv.to);
        }
    }
}

fn clear_right_for_rook_square(rights: &mut CastlingRights, color: Color, square: Coords) {
    if square.rank() != color.back_rank() {
        return;
    }
    match square.file() {
        SHORT_CASTLE_ROOK_FROM_FILE => rights.clear_short(color),
        LONG_CASTLE_ROOK_FROM_FILE => rights.clear_long(color),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::castling_rights::CastlingRights;
    use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
    use crate::game_state::position::Position;
    use crate::moves::chess_move::ChessMove;

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    fn setup(fen: &str) -> Position {
        Position::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn pawn_push_round_trips() {
        let mut position = Position::empty();
        position
            .place_piece(sq("e2"), Piece::pawn(Color::White))
            .expect("e2 is empty");
        let before = position.clone();

        let mv = ChessMove::new(Piece::pawn(Color::White), sq("e2"), sq("e3"));
        let undo = position.make_move(&mv);
        assert_eq!(position.piece_at(sq("e3")), Some(Piece::pawn(Color::White)));
        assert_eq!(position.piece_at(sq("e2")), None);

        position.undo_move(&undo);
        assert_eq!(position, before);
    }

    #[test]
    fn double_push_sets_and_next_move_clears_en_passant_target() {
        let mut position = Position::new_game();
        let d4 = position
            .find_legal_move(sq("d2"), sq("d4"), None)
            .expect("d4 is legal");
        let first = position.make_move(&d4);
        assert_eq!(position.en_passant_target, Some(sq("d3")));

        let nf6 = position
            .find_legal_move_for(Color::Black, sq("g8"), sq("f6"), None)
            .expect("Nf6 is legal");
        let second = position.make_move(&nf6);
        assert_eq!(position.en_passant_target, None);

        position.undo_move(&second);
        assert_eq!(position.en_passant_target, Some(sq("d3")));
        position.undo_move(&first);
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn en_passant_removes_pawn_behind_target() {
        let mut position = setup("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        let before = position.clone();
        let mv = position
            .find_legal_move(sq("e5"), sq("d6"), None)
            .expect("exd6 e.p. is legal");
        assert!(mv.is_en_passant);

        let undo = position.make_move(&mv);
        assert_eq!(position.piece_at(sq("d6")), Some(Piece::pawn(Color::White)));
        assert_eq!(position.piece_at(sq("d5")), None);
        assert_eq!(position.piece_at(sq("e5")), None);

        position.undo_move(&undo);
        assert_eq!(position, before);
    }

    #[test]
    fn promotion_reverts_to_pawn() {
        let mut position = setup("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        let before = position.clone();
        let mv = position
            .find_legal_move(sq("a7"), sq("b8"), Some(PieceKind::Knight))
            .expect("axb8=N is legal");

        let undo = position.make_move(&mv);
        assert_eq!(position.piece_at(sq("b8")), Some(Piece::knight(Color::White)));
        position.undo_move(&undo);
        assert_eq!(position.piece_at(sq("a7")), Some(Piece::pawn(Color::White)));
        assert_eq!(position.piece_at(sq("b8")), Some(Piece::rook(Color::Black)));
        assert_eq!(position, before);
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut position = setup("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let before = position.clone();
        let mv = position
            .find_legal_move(sq("e1"), sq("g1"), None)
            .expect("O-O is legal");

        let undo = position.make_move(&mv);
        assert_eq!(position.piece_at(sq("g1")), Some(Piece::king(Color::White)));
        assert_eq!(position.piece_at(sq("f1")), Some(Piece::rook(Color::White)));
        assert_eq!(position.piece_at(sq("h1")), None);
        assert!(!position.castling_rights.white_short);
        assert!(!position.castling_rights.white_long);
        assert!(position.castling_rights.black_short);

        position.undo_move(&undo);
        assert_eq!(position, before);
    }

    #[test]
    fn rook_moves_and_captures_clear_matching_rights() {
        let mut position = setup("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let mv = position
            .find_legal_move(sq("a1"), sq("a8"), None)
            .expect("Rxa8 is legal");
        let undo = position.make_move(&mv);
        assert_eq!(
            position.castling_rights,
            CastlingRights {
                white_short: true,
                white_long: false,
                black_short: true,
                black_long: false,
            }
        );

        position.undo_move(&undo);
        assert_eq!(position.castling_rights, CastlingRights::all());
    }
}
