//! Move description value.
//!
//! A `ChessMove` describes intent only: endpoints, the moving and captured
//! pieces, the promotion choice and the generator's check annotations. Undo
//! bookkeeping lives on `UndoState`, returned by `Position::make_move`.

use std::fmt;

use crate::game_state::chess_rules::{
    KING_HOME_FILE, LONG_CASTLE_KING_FILE, LONG_CASTLE_ROOK_FROM_FILE, LONG_CASTLE_ROOK_TO_FILE,
    SHORT_CASTLE_KING_FILE, SHORT_CASTLE_ROOK_FROM_FILE, SHORT_CASTLE_ROOK_TO_FILE,
};
use crate::game_state::chess_types::{Coords, Piece, PieceKind};
use crate::moves::move_notation::notation_variants;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Coords,
    pub to: Coords,
    /// The piece as it stood on `from` before the move (a pawn for promotions).
    pub piece: Piece,
    pub captured_piece: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
}

impl ChessMove {
    pub const fn new(piece: Piece, from: Coords, to: Coords) -> Self {
        Self {
            from,
            to,
            piece,
            captured_piece: None,
            promotion: None,
            is_en_passant: false,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
        }
    }

    pub const fn with_capture(mut self, captured: Option<Piece>) -> Self {
        self.captured_piece = captured;
        self
    }

    pub const fn with_promotion(mut self, promotion: Option<PieceKind>) -> Self {
        self.promotion = promotion;
        self
    }

    pub const fn with_en_passant(mut self, captured: Piece) -> Self {
        self.captured_piece = Some(captured);
        self.is_en_passant = true;
        self
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn captures_king(&self) -> bool {
        matches!(self.captured_piece, Some(piece) if piece.kind == PieceKind::King)
    }

    pub fn is_pawn_double_move(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    pub fn is_castling_short(&self) -> bool {
        self.is_castling_to(SHORT_CASTLE_KING_FILE)
    }

    pub fn is_castling_long(&self) -> bool {
        self.is_castling_to(LONG_CASTLE_KING_FILE)
    }

    #[inline]
    pub fn is_castling(&self) -> bool {
        self.is_castling_short() || self.is_castling_long()
    }

    fn is_castling_to(&self, king_file: u8) -> bool {
        self.piece.kind == PieceKind::King
            && self.from.file() == KING_HOME_FILE
            && self.to.file() == king_file
            && self.from.rank() == self.to.rank()
    }

    /// Origin and destination of the rook that accompanies a castling move.
    pub fn castling_rook_squares(&self) -> Option<(Coords, Coords)> {
        let rank = self.from.rank();
        if self.is_castling_short() {
            Some((
                Coords::new(SHORT_CASTLE_ROOK_FROM_FILE, rank),
                Coords::new(SHORT_CASTLE_ROOK_TO_FILE, rank),
            ))
        } else if self.is_castling_long() {
            Some((
                Coords::new(LONG_CASTLE_ROOK_FROM_FILE, rank),
                Coords::new(LONG_CASTLE_ROOK_TO_FILE, rank),
            ))
        } else {
            None
        }
    }

    /// The square skipped over by a pawn double move.
    pub fn en_passant_target(&self) -> Option<Coords> {
        if self.is_pawn_double_move() {
            Some(Coords::new(
                self.from.file(),
                (self.from.rank() + self.to.rank()) / 2,
            ))
        } else {
            None
        }
    }

    /// Where the captured piece stands: one rank behind `to` for en passant.
    pub fn captured_square(&self) -> Coords {
        if self.is_en_passant {
            Coords::new(self.to.file(), self.from.rank())
        } else {
            self.to
        }
    }

    /// The piece standing on `to` once the move is made.
    pub fn piece_after_move(&self) -> Piece {
        match self.promotion {
            Some(kind) => Piece::new(self.piece.color, kind),
            None => self.piece,
        }
    }

    /// Same endpoints and promotion choice, ignoring annotations.
    pub fn same_action(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to && self.promotion == other.promotion
    }

    /// The four notation renderings, least to most qualified.
    pub fn notation_variants(&self) -> [String; 4] {
        notation_variants(self)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [_, _, _, full] = self.notation_variants();
        f.write_str(&full)
    }
}
