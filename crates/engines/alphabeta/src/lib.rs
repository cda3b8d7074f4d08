//! Deterministic search engines.
//!
//! One engine struct fronts three interchangeable algorithms: plain
//! minimax, negamax with alpha-beta pruning, and a time-bounded
//! iterative-deepening variant of the latter. Candidate moves are
//! shuffled with the engine's seedable RNG before every search so ties
//! are not biased toward board-scan order; a fixed seed makes the
//! engine fully reproducible.

mod eval;
mod search;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ponder_core::{Engine, GameState, Move, SearchResult, TimeBudget};

pub use eval::{evaluate, piece_value, CHECKMATE, STALEMATE};
pub use search::{
    find_best_move_deepening, find_best_move_minimax, find_best_move_negamax, SearchOutcome,
};

/// Which of the three search algorithms to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    #[default]
    NegamaxAlphaBeta,
    IterativeDeepening,
}

/// Externally supplied search parameters; nothing here is computed by
/// the engine.
#[derive(Clone, Copy, Debug)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Fixed depth for minimax/negamax.
    pub depth: u8,
    /// Depth ceiling for iterative deepening.
    pub max_depth: u8,
    /// Wall-clock budget for iterative deepening; the fixed-depth
    /// algorithms run to completion regardless.
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::NegamaxAlphaBeta,
            depth: 3,
            max_depth: 10,
            time_budget: None,
        }
    }
}

pub struct AlphaBetaEngine {
    config: SearchConfig,
    rng: StdRng,
}

impl AlphaBetaEngine {
    pub fn new(config: SearchConfig) -> AlphaBetaEngine {
        AlphaBetaEngine {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible engine: same seed, same position, same move.
    pub fn with_seed(config: SearchConfig, seed: u64) -> AlphaBetaEngine {
        AlphaBetaEngine {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for AlphaBetaEngine {
    fn choose_move(&mut self, state: &mut GameState, valid_moves: &[Move]) -> SearchResult {
        let clock = TimeBudget::unlimited();
        let mut moves = valid_moves.to_vec();
        moves.shuffle(&mut self.rng);

        let outcome = match self.config.algorithm {
            Algorithm::Minimax => find_best_move_minimax(state, &moves, self.config.depth),
            Algorithm::NegamaxAlphaBeta => {
                find_best_move_negamax(state, &moves, self.config.depth)
            }
            Algorithm::IterativeDeepening => find_best_move_deepening(
                state,
                &moves,
                self.config.max_depth,
                self.config.time_budget,
            ),
        };

        tracing::debug!(
            engine = self.name(),
            nodes = outcome.nodes,
            score = outcome.score,
            found = outcome.best_move.is_some(),
            "search finished"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: outcome.depth,
            nodes: outcome.nodes,
            elapsed: clock.elapsed(),
        }
    }

    fn name(&self) -> &str {
        match self.config.algorithm {
            Algorithm::Minimax => "Minimax v1.0",
            Algorithm::NegamaxAlphaBeta => "Negamax-AB v1.0",
            Algorithm::IterativeDeepening => "Negamax-ID v1.0",
        }
    }
}
