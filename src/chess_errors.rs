//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by setup helpers,
//! parsing utilities, move reconstruction, search and game sessions. The enum
//! `ChessErrors` is the single error type across the crate so callers can
//! propagate with `?` and match in one place.
//!
//! Usage guidelines:
//! - Parsing and input variants (`InvalidCoords`, `InvalidFen`,
//!   `IllegalMove`) are recoverable and suitable for presenting to end users.
//! - `SquareOccupied` is a setup-time integrity failure, distinct from in-game
//!   rule violations.
//! - `SearchCancelled` is an abrupt whole-search abort; no partial answer is
//!   carried with it.

use crate::game_state::chess_types::Coords;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessErrors {
    /// Coordinate text was not exactly a file letter `a`..`h` followed by a
    /// rank digit `1`..`8`.
    #[error("invalid coordinates: {0:?}")]
    InvalidCoords(String),

    /// The setup API tried to place a piece on a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Coords),

    /// A FEN string failed to parse.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// No legal move matches the requested from/to/promotion triple.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Coords, to: Coords },

    /// A move was requested after the game ended in checkmate or stalemate.
    #[error("game is already over")]
    GameOver,

    /// `take_back` was called with an empty move log.
    #[error("no committed moves to take back")]
    NothingToTakeBack,

    /// The search observed its stop flag at a root suspension point.
    #[error("search cancelled")]
    SearchCancelled,

    /// An engine was asked to move for a side that is not a computer player.
    #[error("{0} is not controlled by the computer")]
    NotComputerTurn(String),
}
