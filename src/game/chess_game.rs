//! A game session: two players, the live position and the notation log.
//!
//! Every commit path (UI, remote broker, engine) reconstructs the move through
//! the legal generator, records its shortest unambiguous notation against the
//! pre-move position, then commits it.

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game::move_list::{build_move_list, MoveListItem};
use crate::game::player::Player;
use crate::game_state::chess_types::{Color, Coords, PieceKind};
use crate::game_state::position::Position;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    pub white: Player,
    pub black: Player,
    position: Position,
    notations: Vec<String>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(Player::human("White"), Player::human("Black"))
    }
}

impl ChessGame {
    pub fn new(white: Player, black: Player) -> Self {
        Self {
            white,
            black,
            position: Position::new_game(),
            notations: Vec::new(),
        }
    }

    /// Replays `moves` from the starting position, recording notations.
    pub fn from_moves<I>(moves: I) -> Result<Self, ChessErrors>
    where
        I: IntoIterator<Item = ChessMove>,
    {
        let mut game = Self::default();
        for mv in moves {
            game.play(mv.from, mv.to, mv.promotion)?;
        }
        Ok(game)
    }

    /// Back to the starting position; players are kept.
    pub fn reset(&mut self) {
        self.position = Position::new_game();
        self.notations.clear();
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn color_to_move(&self) -> Color {
        self.position.color_to_move
    }

    pub fn player_to_move(&self) -> &Player {
        match self.color_to_move() {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.white.is_remote_guest() || self.black.is_remote_guest()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.position.is_game_over()
    }

    /// Legal moves of the piece on `coords`, for highlighting targets.
    pub fn legal_moves_from(&mut self, coords: Coords) -> Vec<ChessMove> {
        match self.position.piece_at(coords) {
            Some(piece) if piece.color == self.color_to_move() => {
                self.position.legal_moves_from(coords)
            }
            _ => Vec::new(),
        }
    }

    /// Commits a move chosen in the UI.
    pub fn play(
        &mut self,
        from: Coords,
        to: Coords,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        if self.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        let mv = self.position.find_legal_move(from, to, promotion)?;
        self.commit(mv);
        Ok(mv)
    }

    /// Commits a move relayed by the session broker as a from/to/promotion
    /// triple.
    pub fn apply_remote_move(
        &mut self,
        from: Coords,
        to: Coords,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        self.play(from, to, promotion)
    }

    /// Lets `engine` move for the computer player whose turn it is. The
    /// player's level becomes the search depth.
    pub fn computer_move(&mut self, engine: &mut dyn Engine) -> Result<EngineOutput, ChessErrors> {
        if self.is_game_over() {
            return Err(ChessErrors::GameOver);
        }
        let player = self.player_to_move();
        if !player.is_computer() {
            return Err(ChessErrors::NotComputerTurn(player.name.clone()));
        }

        let params = GoParams {
            depth: player.computer_level,
        };
        let color = self.color_to_move();
        let out = engine.choose_move(&mut self.position, color, &params)?;
        if let Some(mv) = out.best_move {
            self.commit(mv);
        }
        Ok(out)
    }

    pub fn take_back(&mut self) -> Result<ChessMove, ChessErrors> {
        let mv = self.position.take_back()?;
        self.notations.pop();
        Ok(mv)
    }

    pub fn notations(&self) -> &[String] {
        &self.notations
    }

    pub fn move_list(&self) -> Vec<MoveListItem> {
        build_move_list(&self.position.moves, &self.notations)
    }

    fn commit(&mut self, mv: ChessMove) {
        let notation = self.position.short_notation(&mv);
        self.position.commit_move(mv);
        self.notations.push(notation);
    }
}
