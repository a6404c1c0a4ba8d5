//! 8x8 mailbox board.
//!
//! `Board` is plain data: every square holds an optional `Piece` value. It
//! knows how to answer occupancy questions (including the line-of-sight test
//! used by sliding pieces and castling) and exposes the static evaluation, but
//! carries no rule state such as castling rights or the en-passant target;
//! those live on `Position`.

use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
use crate::search::board_scoring::{BoardScorer, PositionalScorer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    // [file][rank]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, coords: Coords) -> Option<Piece> {
        self.squares[coords.file() as usize][coords.rank() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, coords: Coords, piece: Option<Piece>) {
        self.squares[coords.file() as usize][coords.rank() as usize] = piece;
    }

    /// Removes and returns whatever stands on `coords`.
    #[inline]
    pub fn take_piece(&mut self, coords: Coords) -> Option<Piece> {
        self.squares[coords.file() as usize][coords.rank() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, coords: Coords) -> bool {
        self.piece_at(coords).is_none()
    }

    #[inline]
    pub fn color_at(&self, coords: Coords) -> Option<Color> {
        self.piece_at(coords).map(|piece| piece.color)
    }

    /// Occupied squares of `color` in scan order (file-major).
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coords, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupied(&self) -> impl Iterator<Item = (Coords, Piece)> + '_ {
        Coords::all().filter_map(|coords| self.piece_at(coords).map(|piece| (coords, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Coords> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(coords, _)| coords)
    }

    /// True iff every square strictly between `a` and `b` is empty.
    ///
    /// Only same-file, same-rank and exact-diagonal pairs form a sliding path;
    /// any other pair (including `a == b`) returns false.
    pub fn is_clear_between(&self, a: Coords, b: Coords) -> bool {
        let d_file = b.file() as i8 - a.file() as i8;
        let d_rank = b.rank() as i8 - a.rank() as i8;

        if d_file == 0 && d_rank == 0 {
            return false;
        }
        let aligned = d_file == 0 || d_rank == 0 || d_file.abs() == d_rank.abs();
        if !aligned {
            return false;
        }

        let step_file = d_file.signum();
        let step_rank = d_rank.signum();
        let mut current = a.offset(step_file, step_rank);
        while let Some(square) = current {
            if square == b {
                return true;
            }
            if !self.is_empty_at(square) {
                return false;
            }
            current = square.offset(step_file, step_rank);
        }

        true
    }

    /// Static evaluation, White positive, in fixed-point units of 1/1000
    /// centipawn.
    pub fn material_value(&self) -> i64 {
        PositionalScorer::default().score(self)
    }
}
