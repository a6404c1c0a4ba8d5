//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The root works on fully legal, annotated moves; deeper plies use
//! pseudo-legal moves and rely on king-capture scoring to refute a move that
//! leaves the mover's king en prise. Every node orders its moves with a
//! one-ply static pre-pass (apply, score, undo) before recursing.
//!
//! Progress is reported and the stop flag polled once per root candidate,
//! before the candidate is applied, so a cancelled search always leaves the
//! position exactly as it found it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_generator::{generate_moves_with_mode, GenerationMode};
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, PositionalScorer, EVAL_UNITS_PER_CENTIPAWN};

/// Score for taking the opponent's king, before the depth bonus.
pub const KING_CAPTURE_SCORE: i64 = 1_000_000 * EVAL_UNITS_PER_CENTIPAWN;

/// Added per remaining ply to a king capture so that faster mates win.
pub const MATE_DEPTH_STEP: i64 = 1_000 * EVAL_UNITS_PER_CENTIPAWN;

/// Tie-breaker nudging the search toward castling.
pub const CASTLING_BONUS: i64 = 50;

const INFINITY: i64 = i64::MAX / 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

impl SearchConfig {
    /// Depth actually searched; zero is treated as one ply.
    #[inline]
    pub fn effective_depth(self) -> u8 {
        self.max_depth.max(1)
    }
}

/// Reported once per root candidate, before it is searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    /// 1-based index of the candidate.
    pub current: usize,
    pub total: usize,
    pub candidate: ChessMove,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// From the mover's point of view, in evaluation units.
    pub best_score: i64,
    pub nodes: u64,
    pub depth: u8,
    /// The only legal move was returned without searching.
    pub forced: bool,
    pub info_lines: Vec<String>,
}

/// Convenience wrapper: default scorer, no progress reporting, no stop flag.
pub fn best_move(
    position: &mut Position,
    color: Color,
    max_depth: u8,
) -> Result<Option<ChessMove>, ChessErrors> {
    let stop = AtomicBool::new(false);
    let result = search_best_move(
        position,
        color,
        &PositionalScorer::default(),
        SearchConfig { max_depth },
        &mut |_| {},
        &stop,
    )?;
    Ok(result.best_move)
}

/// Best move for `color` at `config.max_depth` plies.
///
/// Returns `Err(ChessErrors::SearchCancelled)` if `stop` is observed set at
/// the root; `progress` may set it itself.
pub fn search_best_move<S: BoardScorer>(
    position: &mut Position,
    color: Color,
    scorer: &S,
    config: SearchConfig,
    progress: &mut dyn FnMut(&SearchProgress),
    stop: &AtomicBool,
) -> Result<SearchResult, ChessErrors> {
    let started = Instant::now();
    let depth = config.effective_depth();
    let mut result = SearchResult {
        depth,
        ..SearchResult::default()
    };

    let legal = position.legal_moves(color);
    result
        .info_lines
        .push(format!("info string search legal_moves {}", legal.len()));

    if legal.is_empty() {
        return Ok(result);
    }

    if let [only] = legal.as_slice() {
        result.best_move = Some(*only);
        result.forced = true;
        result
            .info_lines
            .push(format!("info string search forced_move {only}"));
        return Ok(result);
    }

    if let Some(mate) = legal.iter().find(|mv| mv.is_checkmate) {
        result.best_move = Some(*mate);
        result.best_score = KING_CAPTURE_SCORE + i64::from(depth) * MATE_DEPTH_STEP;
        result
            .info_lines
            .push(format!("info string search immediate_mate {mate}"));
        return Ok(result);
    }

    let candidates = order_moves(position, legal, color, scorer);
    let total = candidates.len();
    let mut nodes = 1u64;
    let mut alpha = -INFINITY;
    let mut best: Option<(ChessMove, i64)> = None;

    for (index, mv) in candidates.iter().enumerate() {
        progress(&SearchProgress {
            current: index + 1,
            total,
            candidate: *mv,
        });
        if stop.load(Ordering::Relaxed) {
            return Err(ChessErrors::SearchCancelled);
        }

        let score = score_move(position, mv, depth, alpha, INFINITY, scorer, &mut nodes);
        result.info_lines.push(format!(
            "info string search currmove {mv} currmovenumber {} score {score}",
            index + 1
        ));

        let improves = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((*mv, score));
        }
        alpha = alpha.max(score);
    }

    if let Some((mv, score)) = best {
        result.best_move = Some(mv);
        result.best_score = score;
    }
    result.nodes = nodes;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let nps = nodes.saturating_mul(1000) / elapsed_ms.max(1);
    result.info_lines.push(format!(
        "info string search depth {depth} nodes {nodes} time {elapsed_ms} nps {nps}"
    ));

    Ok(result)
}

/// Negamax value of the position for `color`, the side to move.
pub(crate) fn negamax<S: BoardScorer>(
    position: &mut Position,
    color: Color,
    depth: u8,
    mut alpha: i64,
    beta: i64,
    scorer: &S,
    nodes: &mut u64,
) -> i64 {
    *nodes += 1;

    if depth == 0 {
        return color.sign() * scorer.score(&position.board);
    }

    let pseudo = generate_moves_with_mode(position, color, GenerationMode::Pseudo);
    if pseudo.is_empty() {
        return 0;
    }

    let mut best = -INFINITY;
    for mv in order_moves(position, pseudo, color, scorer) {
        let score = score_move(position, &mv, depth, alpha, beta, scorer, nodes);
        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Value of playing `mv` at a node with `depth` plies remaining, from the
/// mover's point of view.
fn score_move<S: BoardScorer>(
    position: &mut Position,
    mv: &ChessMove,
    depth: u8,
    alpha: i64,
    beta: i64,
    scorer: &S,
    nodes: &mut u64,
) -> i64 {
    if mv.captures_king() {
        return KING_CAPTURE_SCORE + i64::from(depth) * MATE_DEPTH_STEP;
    }
    if mv.is_stalemate {
        return 0;
    }

    let mover = mv.piece.color;
    let undo = position.make_move(mv);
    let mut score = -negamax(position, mover.opposite(), depth - 1, -beta, -alpha, scorer, nodes);
    position.undo_move(&undo);

    if mv.is_castling() {
        score += CASTLING_BONUS;
    }
    score
}

/// Stable best-first order by the static score one ply ahead.
fn order_moves<S: BoardScorer>(
    position: &mut Position,
    moves: Vec<ChessMove>,
    color: Color,
    scorer: &S,
) -> Vec<ChessMove> {
    let mut keyed: Vec<(i64, ChessMove)> = moves
        .into_iter()
        .map(|mv| {
            let undo = position.make_move(&mv);
            let key = color.sign() * scorer.score(&position.board);
            position.undo_move(&undo);
            (key, mv)
        })
        .collect();

    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::{
        best_move, negamax, search_best_move, SearchConfig, SearchProgress, KING_CAPTURE_SCORE,
        MATE_DEPTH_STEP,
    };
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, Coords};
    use crate::game_state::position::Position;
    use crate::search::board_scoring::PositionalScorer;

    fn sq(text: &str) -> Coords {
        text.parse().expect("test square should parse")
    }

    fn setup(fen: &str) -> Position {
        Position::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn single_legal_move_is_returned_without_searching() {
        // The white king must take the checking queen.
        let mut position = setup("k7/8/8/8/8/8/1q6/K7 w - - 0 1");
        let mut calls = 0;
        let stop = AtomicBool::new(false);
        let result = search_best_move(
            &mut position,
            Color::White,
            &PositionalScorer::default(),
            SearchConfig::default(),
            &mut |_| calls += 1,
            &stop,
        )
        .expect("search should finish");

        assert!(result.forced);
        assert_eq!(result.nodes, 0);
        assert_eq!(calls, 0);
        let mv = result.best_move.expect("a move is available");
        assert_eq!((mv.from, mv.to), (sq("a1"), sq("b2")));
    }

    #[test]
    fn mate_in_one_is_taken_immediately() {
        let mut position = setup("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let mv = best_move(&mut position, Color::White, 3)
            .expect("search should finish")
            .expect("a move is available");
        assert!(mv.is_checkmate);
        assert_eq!(mv.to, sq("a8"));
    }

    #[test]
    fn no_legal_moves_gives_no_move() {
        let mut position = setup("k7/8/1QK5/8/8/8/8/8 b - - 0 1");
        assert_eq!(best_move(&mut position, Color::Black, 2), Ok(None));
    }

    #[test]
    fn hanging_queen_is_captured() {
        let mut position = setup("4k3/8/8/3q4/8/8/3R4/4K3 w - - 0 1");
        let before = position.clone();
        let mv = best_move(&mut position, Color::White, 2)
            .expect("search should finish")
            .expect("a move is available");
        assert_eq!((mv.from, mv.to), (sq("d2"), sq("d5")));
        assert_eq!(position, before);
    }

    #[test]
    fn king_capture_outranks_material() {
        // Black to move with the white king en prise on e1.
        let mut position = setup("4k2Q/8/8/8/8/8/8/q3K3 b - - 0 1");
        let mut nodes = 0;
        let score = negamax(
            &mut position,
            Color::Black,
            1,
            -i64::MAX / 4,
            i64::MAX / 4,
            &PositionalScorer::default(),
            &mut nodes,
        );
        assert_eq!(score, KING_CAPTURE_SCORE + MATE_DEPTH_STEP);
    }

    #[test]
    fn progress_covers_every_root_candidate() {
        let mut position = Position::new_game();
        let mut seen: Vec<SearchProgress> = Vec::new();
        let stop = AtomicBool::new(false);
        let result = search_best_move(
            &mut position,
            Color::White,
            &PositionalScorer::default(),
            SearchConfig { max_depth: 1 },
            &mut |progress| seen.push(*progress),
            &stop,
        )
        .expect("search should finish");

        assert_eq!(seen.len(), 20);
        assert!(seen.iter().all(|p| p.total == 20));
        assert_eq!(
            seen.iter().map(|p| p.current).collect::<Vec<_>>(),
            (1..=20).collect::<Vec<_>>()
        );
        assert!(result.best_move.is_some());
        assert!(result.nodes > 20);
        assert!(result
            .info_lines
            .iter()
            .any(|line| line.starts_with("info string search depth 1 nodes")));
    }

    #[test]
    fn cancellation_aborts_and_restores_position() {
        let mut position = Position::new_game();
        let before = position.clone();
        let stop = AtomicBool::new(false);
        let mut calls = 0;

        let result = search_best_move(
            &mut position,
            Color::White,
            &PositionalScorer::default(),
            SearchConfig { max_depth: 2 },
            &mut |progress| {
                calls += 1;
                if progress.current == 3 {
                    stop.store(true, Ordering::Relaxed);
                }
            },
            &stop,
        );

        assert_eq!(result, Err(ChessErrors::SearchCancelled));
        assert_eq!(calls, 3);
        assert_eq!(position, before);
    }

    #[test]
    fn zero_depth_is_clamped_and_search_is_deterministic() {
        let mut position = setup("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
        let stop = AtomicBool::new(false);
        let scorer = PositionalScorer::default();

        let first = search_best_move(
            &mut position,
            Color::White,
            &scorer,
            SearchConfig { max_depth: 0 },
            &mut |_| {},
            &stop,
        )
        .expect("search should finish");
        let second = search_best_move(
            &mut position,
            Color::White,
            &scorer,
            SearchConfig { max_depth: 1 },
            &mut |_| {},
            &stop,
        )
        .expect("search should finish");

        assert_eq!(first.depth, 1);
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.best_score, second.best_score);
    }
}
