//! Perft: leaf counts of the legal move tree.
//!
//! Walks the tree in place with make/undo on a single `Position`, alternating
//! the side to move per ply. The detailed variant annotates the final ply so
//! captures, checks and mates can be compared with published tables.

use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::{generate_moves_with_mode, GenerationMode};
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, mv: &ChessMove) {
        self.nodes += 1;
        self.captures += u64::from(mv.is_capture());
        self.en_passant += u64::from(mv.is_en_passant);
        self.castles += u64::from(mv.is_castling());
        self.promotions += u64::from(mv.is_promotion());
        self.checks += u64::from(mv.is_check);
        self.checkmates += u64::from(mv.is_checkmate);
    }
}

/// Leaf count at `depth` plies for the side to move.
pub fn perft(position: &mut Position, depth: u8) -> u64 {
    let color = position.color_to_move;
    perft_nodes(position, color, depth)
}

fn perft_nodes(position: &mut Position, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves_with_mode(position, color, GenerationMode::Legal);
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0;
    for mv in &moves {
        let undo = position.make_move(mv);
        nodes += perft_nodes(position, color.opposite(), depth - 1);
        position.undo_move(&undo);
    }
    nodes
}

/// Leaf count with per-leaf statistics; the last ply is annotated.
pub fn perft_counts(position: &mut Position, depth: u8) -> PerftCounts {
    let color = position.color_to_move;
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_counts_recurse(position, color, depth, &mut counts);
    counts
}

fn perft_counts_recurse(position: &mut Position, color: Color, depth: u8, counts: &mut PerftCounts) {
    if depth == 1 {
        let mut leaves = PerftCounts::default();
        for mv in generate_moves_with_mode(position, color, GenerationMode::Annotated) {
            leaves.record_leaf(&mv);
        }
        counts.merge(leaves);
        return;
    }

    for mv in generate_moves_with_mode(position, color, GenerationMode::Legal) {
        let undo = position.make_move(&mv);
        perft_counts_recurse(position, color.opposite(), depth - 1, counts);
        position.undo_move(&undo);
    }
}

/// Per-root-move leaf counts, in generation order.
pub fn perft_divide(position: &mut Position, depth: u8) -> Vec<(ChessMove, u64)> {
    let color = position.color_to_move;
    if depth == 0 {
        return Vec::new();
    }

    generate_moves_with_mode(position, color, GenerationMode::Legal)
        .into_iter()
        .map(|mv| {
            let undo = position.make_move(&mv);
            let nodes = perft_nodes(position, color.opposite(), depth - 1);
            position.undo_move(&undo);
            (mv, nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts, perft_divide, PerftCounts};
    use crate::game_state::position::Position;

    const KIWIPETE_FEN: &str =
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn setup(fen: &str) -> Position {
        Position::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn start_position_node_counts() {
        let mut position = Position::new_game();
        assert_eq!(perft(&mut position, 0), 1);
        assert_eq!(perft(&mut position, 1), 20);
        assert_eq!(perft(&mut position, 2), 400);
        assert_eq!(perft(&mut position, 3), 8902);
        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn start_position_depth_three_details() {
        let mut position = Position::new_game();
        assert_eq!(
            perft_counts(&mut position, 3),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                en_passant: 0,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_node_counts() {
        let mut position = setup(KIWIPETE_FEN);
        assert_eq!(perft(&mut position, 1), 48);
        assert_eq!(perft(&mut position, 2), 2039);

        let counts = perft_counts(&mut position, 1);
        assert_eq!(counts.captures, 8);
        assert_eq!(counts.castles, 2);

        let counts = perft_counts(&mut position, 2);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.checks, 3);
    }

    #[test]
    fn endgame_position_node_counts() {
        let mut position = setup(POSITION_3_FEN);
        assert_eq!(perft(&mut position, 1), 14);
        assert_eq!(perft(&mut position, 2), 191);
        assert_eq!(perft(&mut position, 3), 2812);

        let counts = perft_counts(&mut position, 3);
        assert_eq!(counts.captures, 209);
        assert_eq!(counts.en_passant, 2);
        assert_eq!(counts.checks, 267);
    }

    #[test]
    fn divide_sums_to_total() {
        let mut position = Position::new_game();
        let divided = perft_divide(&mut position, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<u64>(), 400);
    }
}
