//! Uniform-random move engine.
//!
//! Picks uniformly from the legal move list. Useful as a baseline
//! opponent, for stress-testing move generation, and as the documented
//! fallback policy when a search engine reports no move.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ponder_core::{Engine, GameState, Move, SearchResult, TimeBudget};


pub struct RandomEngine {
    rng: StdRng,
}

impl Default for RandomEngine {
    fn default() -> Self {
        RandomEngine::new()
    }
}

impl RandomEngine {
    pub fn new() -> RandomEngine {
        RandomEngine {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> RandomEngine {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, _state: &mut GameState, valid_moves: &[Move]) -> SearchResult {
        let clock = TimeBudget::unlimited();
        let best_move = valid_moves.choose(&mut self.rng).copied();
        SearchResult {
            best_move,
            score: 0.0,
            depth: 1,
            nodes: 1,
            elapsed: clock.elapsed(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
