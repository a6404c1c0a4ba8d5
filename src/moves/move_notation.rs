//! Standard algebraic notation for move descriptions.
//!
//! A move renders four ways, each more qualified than the last:
//! bare (`Nf3`), origin file (`Ngf3`), origin rank (`N1f3`) and both
//! (`Ng1f3`). Pawn captures always carry their origin file. The display form
//! picks the first variant that no sibling legal move shares.

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::{file_char, rank_char};

const WITH_FILE: [bool; 4] = [false, true, false, true];
const WITH_RANK: [bool; 4] = [false, false, true, true];

pub fn notation_variants(mv: &ChessMove) -> [String; 4] {
    std::array::from_fn(|variant| render_variant(mv, WITH_FILE[variant], WITH_RANK[variant]))
}

fn render_variant(mv: &ChessMove, with_file: bool, with_rank: bool) -> String {
    let mut out = String::with_capacity(8);

    if mv.is_castling_short() {
        out.push_str("O-O");
    } else if mv.is_castling_long() {
        out.push_str("O-O-O");
    } else {
        if let Some(letter) = mv.piece.kind.letter() {
            out.push(letter);
        }

        let pawn_capture = mv.piece.kind == PieceKind::Pawn && mv.is_capture();
        if with_file || pawn_capture {
            out.push(file_char(mv.from.file()));
        }
        if with_rank {
            out.push(rank_char(mv.from.rank()));
        }
        if mv.is_capture() {
            out.push('x');
        }

        out.push(file_char(mv.to.file()));
        out.push(rank_char(mv.to.rank()));

        if let Some(letter) = mv.promotion.and_then(PieceKind::letter) {
            out.push('=');
            out.push(letter);
        }
    }

    if mv.is_checkmate {
        out.push('#');
    } else if mv.is_check {
        out.push('+');
    }

    out
}

/// First variant of `mv` that appears in no other move of `siblings`.
///
/// `siblings` is the full legal move list `mv` was drawn from; `mv` itself may
/// be part of it. Falls back to the fully qualified variant.
pub fn shortest_unambiguous_notation(mv: &ChessMove, siblings: &[ChessMove]) -> String {
    let variants = notation_variants(mv);
    let others: Vec<[String; 4]> = siblings
        .iter()
        .filter(|other| !other.same_action(mv))
        .map(notation_variants)
        .collect();

    for variant in &variants {
        let shared = others
            .iter()
            .any(|other_variants| other_variants.contains(variant));
        if !shared {
            return variant.clone();
        }
    }

    let [_, _, _, full] = variants;
    full
}
