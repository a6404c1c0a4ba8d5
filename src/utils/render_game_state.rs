//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and console
//! hosts.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Coords, Piece, PieceKind};
use crate::game_state::position::Position;

/// Render the board to a Unicode string, White at the bottom, with file
/// letters above and below and rank digits on both sides.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match board.piece_at(Coords::new(file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board diagram followed by the side to move and the FEN.
pub fn render_position(position: &Position) -> String {
    let side = match position.color_to_move {
        Color::White => "White",
        Color::Black => "Black",
    };
    format!(
        "{}\n{side} to move\n{}",
        render_board(&position.board),
        position.to_fen()
    )
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
