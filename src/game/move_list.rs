//! Numbered move list for display.

use crate::game_state::chess_types::Color;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveListItem {
    pub number: u16,
    pub white: Option<String>,
    pub black: Option<String>,
    /// Result marker on the final item once the game is over.
    pub misc: Option<String>,
}

pub const WHITE_WINS: &str = "1-0";
pub const BLACK_WINS: &str = "0-1";
pub const DRAW: &str = "½-½";

/// Pairs `notations` into numbered rows. `moves` are the matching committed
/// moves; when the last one ends the game its result is attached.
pub fn build_move_list(moves: &[ChessMove], notations: &[String]) -> Vec<MoveListItem> {
    let mut items: Vec<MoveListItem> = Vec::with_capacity(notations.len() / 2 + 1);

    for (mv, notation) in moves.iter().zip(notations) {
        let number = items.len() as u16 + 1;
        match mv.piece.color {
            Color::White => items.push(MoveListItem {
                number,
                white: Some(notation.clone()),
                ..MoveListItem::default()
            }),
            Color::Black => match items.last_mut() {
                Some(item) if item.black.is_none() => item.black = Some(notation.clone()),
                _ => items.push(MoveListItem {
                    number,
                    black: Some(notation.clone()),
                    ..MoveListItem::default()
                }),
            },
        }
    }

    if let (Some(last), Some(item)) = (moves.last(), items.last_mut()) {
        item.misc = result_marker(last).map(str::to_owned);
    }
    items
}

/// `1-0`, `0-1` or `½-½` if `last` ended the game.
pub fn result_marker(last: &ChessMove) -> Option<&'static str> {
    if last.is_checkmate {
        Some(match last.piece.color {
            Color::White => WHITE_WINS,
            Color::Black => BLACK_WINS,
        })
    } else if last.is_stalemate {
        Some(DRAW)
    } else {
        None
    }
}
