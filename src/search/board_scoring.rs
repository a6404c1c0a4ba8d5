//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static scoring to `BoardScorer`. Scores
//! are White-positive fixed-point integers; one unit is 1/1000 centipawn so the
//! fractional positional bonuses survive as integers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

pub const EVAL_UNITS_PER_CENTIPAWN: i64 = 1000;

/// Jitter range used by the randomised tables, in evaluation units.
pub const DEFAULT_JITTER_AMPLITUDE: i64 = 5;

pub trait BoardScorer: Send + Sync {
    /// Score with White positive.
    fn score(&self, board: &Board) -> i64;
}

/// Base piece values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i64 {
        board
            .occupied()
            .map(|(_, piece)| piece.signed_value() * EVAL_UNITS_PER_CENTIPAWN)
            .sum()
    }
}

pub type BonusTable = [[i64; 8]; 8];

/// Center-distance bonus for every non-pawn piece, indexed `[file][rank]`.
pub const PIECE_BONUS_TABLE: BonusTable = generate_piece_bonus_table();

/// Advancement bonus for pawns from White's point of view, `[file][rank]`.
pub const PAWN_BONUS_TABLE: BonusTable = generate_pawn_bonus_table();

/// Material plus positional bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalScorer {
    piece_bonus: BonusTable,
    pawn_bonus: BonusTable,
}

impl Default for PositionalScorer {
    fn default() -> Self {
        Self {
            piece_bonus: PIECE_BONUS_TABLE,
            pawn_bonus: PAWN_BONUS_TABLE,
        }
    }
}

impl PositionalScorer {
    /// Tables perturbed by `[-amplitude, amplitude]` per square. The same seed
    /// always yields the same tables.
    pub fn with_jitter(seed: u64, amplitude: i64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut scorer = Self::default();
        let amplitude = amplitude.abs();

        for table in [&mut scorer.piece_bonus, &mut scorer.pawn_bonus] {
            for file in table.iter_mut() {
                for entry in file.iter_mut() {
                    *entry += rng.random_range(-amplitude..=amplitude);
                }
            }
        }

        scorer
    }

    #[inline]
    pub fn piece_bonus(&self, file: u8, rank: u8) -> i64 {
        self.piece_bonus[file as usize][rank as usize]
    }

    #[inline]
    pub fn pawn_bonus(&self, file: u8, rank: u8) -> i64 {
        self.pawn_bonus[file as usize][rank as usize]
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board) -> i64 {
        let mut score = 0i64;

        for (coords, piece) in board.occupied() {
            score += piece.signed_value() * EVAL_UNITS_PER_CENTIPAWN;

            let (file, rank) = (coords.file(), coords.rank());
            score += match (piece.kind, piece.color) {
                (PieceKind::Pawn, Color::White) => self.pawn_bonus(file, rank),
                (PieceKind::Pawn, Color::Black) => -self.pawn_bonus(file, 7 - rank),
                (_, color) => self.piece_bonus(file, rank) * color.sign(),
            };
        }

        score
    }
}

// 0.05 * (8 - 0.5 * |3.5 - file| - 2 * |3.5 - rank|) centipawns, computed on
// doubled distances so the table stays integral.
const fn generate_piece_bonus_table() -> BonusTable {
    let mut table = [[0i64; 8]; 8];
    let mut file = 0usize;

    while file < 8 {
        let mut rank = 0usize;
        while rank < 8 {
            let file_dist2 = (7 - 2 * file as i64).abs();
            let rank_dist2 = (7 - 2 * rank as i64).abs();
            table[file][rank] = (800 - 25 * file_dist2 - 100 * rank_dist2) / 2;
            rank += 1;
        }
        file += 1;
    }

    table
}

// 0.02 * (4 - |3.5 - file| + 3 * rank) centipawns.
const fn generate_pawn_bonus_table() -> BonusTable {
    let mut table = [[0i64; 8]; 8];
    let mut file = 0usize;

    while file < 8 {
        let mut rank = 0usize;
        while rank < 8 {
            let file_dist2 = (7 - 2 * file as i64).abs();
            table[file][rank] = 80 - 10 * file_dist2 + 60 * rank as i64;
            rank += 1;
        }
        file += 1;
    }

    table
}
