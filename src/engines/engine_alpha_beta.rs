//! Alpha-beta engine.
//!
//! Wraps `search::alpha_beta` with a default depth, a positional scorer, a
//! stop flag the host can raise from another thread and an optional progress
//! callback invoked once per root candidate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::search::alpha_beta::{search_best_move, SearchConfig, SearchProgress};
use crate::search::board_scoring::PositionalScorer;

pub type ProgressCallback = Box<dyn FnMut(&SearchProgress) + Send>;

pub struct AlphaBetaEngine {
    config: SearchConfig,
    scorer: PositionalScorer,
    stop: Arc<AtomicBool>,
    progress: Option<ProgressCallback>,
}

impl AlphaBetaEngine {
    pub fn new(default_depth: u8) -> Self {
        Self {
            config: SearchConfig {
                max_depth: default_depth,
            },
            scorer: PositionalScorer::default(),
            stop: Arc::new(AtomicBool::new(false)),
            progress: None,
        }
    }

    pub fn with_scorer(mut self, scorer: PositionalScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&SearchProgress) + Send + 'static,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Shared flag; storing `true` aborts the running search at the next root
    /// candidate. The flag is cleared when a new search starts.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    #[inline]
    pub fn default_depth(&self) -> u8 {
        self.config.max_depth
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        "Chessy AlphaBeta"
    }

    fn new_game(&mut self) {
        self.stop.store(false, Ordering::Relaxed);
    }

    fn choose_move(
        &mut self,
        position: &mut Position,
        color: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, ChessErrors> {
        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
        };
        self.stop.store(false, Ordering::Relaxed);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string alpha_beta_engine depth {}",
            config.effective_depth()
        ));

        let mut silent = |_: &SearchProgress| {};
        let progress: &mut dyn FnMut(&SearchProgress) = match self.progress.as_mut() {
            Some(callback) => callback.as_mut(),
            None => &mut silent,
        };

        let result = search_best_move(position, color, &self.scorer, config, progress, &self.stop)?;

        out.info_lines.extend(result.info_lines);
        out.best_move = result.best_move;
        Ok(out)
    }
}
