//! Move generation pipeline.
//!
//! Collects per-piece pseudo-legal moves in scan order, then (outside pseudo
//! mode) applies each candidate, drops it if the mover's king is left
//! attacked and, in annotated mode, tags check, checkmate and stalemate from
//! the opponent's point of view.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_notation::shortest_unambiguous_notation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenerationMode {
    /// Geometry and occupancy only.
    Pseudo,
    /// King-safe, no check annotations.
    Legal,
    /// King-safe and tagged with check, checkmate and stalemate.
    Annotated,
}

/// Moves for `color`: pseudo-legal when `skip_checks` is set, otherwise fully
/// legal and annotated.
pub fn generate_moves(position: &mut Position, color: Color, skip_checks: bool) -> Vec<ChessMove> {
    let mode = if skip_checks {
        GenerationMode::Pseudo
    } else {
        GenerationMode::Annotated
    };
    generate_moves_with_mode(position, color, mode)
}

pub(crate) fn generate_moves_with_mode(
    position: &mut Position,
    color: Color,
    mode: GenerationMode,
) -> Vec<ChessMove> {
    let mut pseudo = Vec::with_capacity(64);
    for (from, piece) in position.board.pieces_of(color) {
        generate_piece_moves(position, from, piece, mode != GenerationMode::Pseudo, &mut pseudo);
    }

    if mode == GenerationMode::Pseudo {
        return pseudo;
    }
    retain_king_safe(position, pseudo, mode == GenerationMode::Annotated)
}

fn generate_piece_moves(
    position: &Position,
    from: Coords,
    piece: Piece,
    check_castling_safety: bool,
    out: &mut Vec<ChessMove>,
) {
    let board = &position.board;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, position.en_passant_target, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => generate_king_moves(
            board,
            from,
            piece,
            &position.castling_rights,
            check_castling_safety,
            out,
        ),
    }
}

fn retain_king_safe(position: &mut Position, pseudo: Vec<ChessMove>, annotate: bool) -> Vec<ChessMove> {
    let mut legal = Vec::with_capacity(pseudo.len());

    for mut mv in pseudo {
        debug_assert!(position.is_legal_move(&mv), "generator produced bad shape {mv}");
        let mover = mv.piece.color;

        let undo = position.make_move(&mv);
        let king_safe = !is_king_in_check(&position.board, mover);
        if king_safe && annotate {
            annotate_move(position, &mut mv);
        }
        position.undo_move(&undo);

        if king_safe {
            legal.push(mv);
        }
    }

    legal
}

/// Called with `mv` already applied to `position`.
fn annotate_move(position: &mut Position, mv: &mut ChessMove) {
    let opponent = mv.piece.color.opposite();
    let gives_check = is_king_in_check(&position.board, opponent);
    let has_reply = has_king_safe_move(position, opponent);

    mv.is_check = gives_check;
    mv.is_checkmate = gives_check && !has_reply;
    mv.is_stalemate = !gives_check && !has_reply;
}

/// Stops at the first king-safe move instead of building the whole list.
fn has_king_safe_move(position: &mut Position, color: Color) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    for (from, piece) in position.board.pieces_of(color) {
        generate_piece_moves(position, from, piece, true, &mut pseudo);
    }

    pseudo.iter().any(|mv| {
        let undo = position.make_move(mv);
        let king_safe = !is_king_in_check(&position.board, color);
        position.undo_move(&undo);
        king_safe
    })
}

impl Position {
    #[inline]
    pub fn generate_moves(&mut self, color: Color, skip_checks: bool) -> Vec<ChessMove> {
        generate_moves(self, color, skip_checks)
    }

    /// Fully legal, annotated moves for `color`.
    pub fn legal_moves(&mut self, color: Color) -> Vec<ChessMove> {
        generate_moves_with_mode(self, color, GenerationMode::Annotated)
    }

    /// Fully legal, annotated moves of the piece on `coords` (empty if none).
    pub fn legal_moves_from(&mut self, coords: Coords) -> Vec<ChessMove> {
        let Some(piece) = self.board.piece_at(coords) else {
            return Vec::new();
        };
        let mut pseudo = Vec::with_capacity(28);
        generate_piece_moves(self, coords, piece, true, &mut pseudo);
        retain_king_safe(self, pseudo, true)
    }

    pub fn has_legal_move(&mut self, color: Color) -> bool {
        has_king_safe_move(self, color)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    /// The generator's annotated move for a from/to/promotion triple played
    /// by the side to move.
    pub fn find_legal_move(
        &mut self,
        from: Coords,
        to: Coords,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        self.find_legal_move_for(self.color_to_move, from, to, promotion)
    }

    pub fn find_legal_move_for(
        &mut self,
        color: Color,
        from: Coords,
        to: Coords,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        let illegal = || ChessErrors::IllegalMove { from, to };

        let piece = self
            .board
            .piece_at(from)
            .filter(|piece| piece.color == color)
            .ok_or_else(illegal)?;
        let candidate = ChessMove::new(piece, from, to).with_promotion(promotion);
        if !self.is_legal_move(&candidate) {
            return Err(illegal());
        }

        self.legal_moves_from(from)
            .into_iter()
            .find(|mv| mv.same_action(&candidate))
            .ok_or_else(illegal)
    }

    /// Shortest notation for `mv` that no other legal move of the same side
    /// shares. `mv` must be legal in the current position.
    pub fn short_notation(&mut self, mv: &ChessMove) -> String {
        let siblings = self.legal_moves(mv.piece.color);
        shortest_unambiguous_notation(mv, &siblings)
    }
}
