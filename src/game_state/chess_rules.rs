//! Canonical chess-rule constants.
//!
//! Static rule-related literals: the standard starting position and the
//! fixed files used by castling.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const KING_HOME_FILE: u8 = 4;

pub const SHORT_CASTLE_KING_FILE: u8 = 6;
pub const SHORT_CASTLE_ROOK_FROM_FILE: u8 = 7;
pub const SHORT_CASTLE_ROOK_TO_FILE: u8 = 5;

pub const LONG_CASTLE_KING_FILE: u8 = 2;
pub const LONG_CASTLE_ROOK_FROM_FILE: u8 = 0;
pub const LONG_CASTLE_ROOK_TO_FILE: u8 = 3;
