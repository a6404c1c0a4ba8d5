//! Engine abstraction used by game sessions.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be selected at runtime behind a single trait interface.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "chessy"
    }

    fn new_game(&mut self) {}

    /// Picks a move for `color`. The position is borrowed mutably for
    /// speculative make/undo and is handed back unchanged.
    fn choose_move(
        &mut self,
        position: &mut Position,
        color: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors>;
}
