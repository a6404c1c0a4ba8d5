use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_types::Coords;
use crate::moves::chess_move::ChessMove;

/// Single undo record for `make_move` / `undo_move`.
///
/// Together with the move itself this holds everything the move destroyed,
/// so undoing is a pure function of the position and this record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Coords>,
    pub prev_halfmove_clock: u16,
}
