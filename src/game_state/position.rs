//! Incremental game state.
//!
//! `Position` owns the board and every piece of rule state that is not visible
//! on it: castling rights, the en-passant target, the side to move and the
//! committed move log. The same instance is mutated in place for real play and
//! for speculative search, so every `make_move` must be paired with an
//! `undo_move` of the record it returned (see `legal_move_apply`).
//!
//! Move generation, legality queries and make/undo are implemented on
//! `Position` in the `move_generation` modules.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
use crate::game_state::undo_state::UndoState;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Coords>,
    pub color_to_move: Color,

    // --- Clocks, maintained by committed moves only ---
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Committed moves in play order.
    pub moves: Vec<ChessMove>,
    history: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// No pieces, White to move, no castling rights.
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            color_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            moves: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn new_game() -> Self {
        let mut position = Self::empty();

        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let file = file as u8;
            for color in [Color::White, Color::Black] {
                let back = Coords::new(file, color.back_rank());
                let pawns = Coords::new(file, color.pawn_start_rank());
                position.board.set_piece(back, Some(Piece::new(color, *kind)));
                position.board.set_piece(pawns, Some(Piece::pawn(color)));
            }
        }
        position.castling_rights = CastlingRights::all();

        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Replays `moves` from the starting position, committing each in turn.
    ///
    /// The moves must be ones the generator produces for each successive
    /// position (for example a log saved from an earlier game).
    pub fn from_moves<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = ChessMove>,
    {
        let mut position = Self::new_game();
        for mv in moves {
            position.commit_move(mv);
        }
        position
    }

    #[inline]
    pub fn piece_at(&self, coords: Coords) -> Option<Piece> {
        self.board.piece_at(coords)
    }

    /// Setup helper: puts `piece` on an empty square.
    pub fn place_piece(&mut self, coords: Coords, piece: Piece) -> Result<(), ChessErrors> {
        if !self.board.is_empty_at(coords) {
            return Err(ChessErrors::SquareOccupied(coords));
        }
        self.board.set_piece(coords, Some(piece));
        Ok(())
    }

    /// Setup helper: clears a square, returning what stood there.
    pub fn remove_piece(&mut self, coords: Coords) -> Option<Piece> {
        self.board.take_piece(coords)
    }

    /// Plays `mv` for real: applies it, logs it and passes the turn.
    pub fn commit_move(&mut self, mv: ChessMove) {
        let undo = self.make_move(&mv);

        if mv.piece.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if mv.piece.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.history.push(undo);
        self.moves.push(mv);
        self.color_to_move = mv.piece.color.opposite();
    }

    /// Reverts the most recent committed move.
    pub fn take_back(&mut self) -> Result<ChessMove, ChessErrors> {
        let undo = self.history.pop().ok_or(ChessErrors::NothingToTakeBack)?;
        self.moves.pop();
        self.undo_move(&undo);

        self.halfmove_clock = undo.prev_halfmove_clock;
        if undo.mv.piece.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_sub(1).max(1);
        }
        self.color_to_move = undo.mv.piece.color;

        Ok(undo.mv)
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.moves.last()
    }

    /// True once the last committed move delivered checkmate or stalemate.
    pub fn is_game_over(&self) -> bool {
        self.last_move()
            .is_some_and(|mv| mv.is_checkmate || mv.is_stalemate)
    }
}
