//! Level-0 random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used for diagnostics,
//! integration testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;

#[derive(Debug, Default)]
pub struct RandomEngine {
    // Thread-local generator when unset.
    seeded: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reproducible move choices for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seeded: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Chessy Random"
    }

    fn choose_move(
        &mut self,
        position: &mut Position,
        color: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = position.legal_moves(color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine ignoring_depth {}",
                depth
            ));
        }

        let picked = match self.seeded.as_mut() {
            Some(rng) => legal_moves.choose(rng),
            None => legal_moves.choose(&mut rand::rng()),
        };
        out.best_move = picked.copied();
        Ok(out)
    }
}
