//! Arena configuration, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use alphabeta_engine::{Algorithm, AlphaBetaEngine, SearchConfig};
use mcts_engine::{MctsConfig, MctsEngine};
use ponder_core::Engine;
use random_engine::RandomEngine;

/// One engine slot in the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSpec {
    /// "minimax", "negamax", "deepening", "mcts" or "random".
    pub engine: String,
    /// Fixed search depth for minimax/negamax.
    pub depth: Option<u8>,
    /// Depth ceiling for the deepening engine.
    pub max_depth: Option<u8>,
    /// Wall-clock budget in seconds for the deepening engine.
    pub time_budget_secs: Option<f64>,
    /// Iteration budget for the MCTS engine.
    pub iterations: Option<u32>,
}

impl EngineSpec {
    pub fn named(engine: &str) -> EngineSpec {
        EngineSpec {
            engine: engine.to_string(),
            depth: None,
            max_depth: None,
            time_budget_secs: None,
            iterations: None,
        }
    }

    fn search_config(&self, algorithm: Algorithm) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            algorithm,
            depth: self.depth.unwrap_or(defaults.depth),
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            time_budget: self.time_budget_secs.map(Duration::from_secs_f64),
        }
    }

    /// Build the engine. A seed makes the whole arena reproducible.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Engine> {
        match self.engine.to_lowercase().as_str() {
            "minimax" => Box::new(build_alphabeta(
                self.search_config(Algorithm::Minimax),
                seed,
            )),
            "negamax" => Box::new(build_alphabeta(
                self.search_config(Algorithm::NegamaxAlphaBeta),
                seed,
            )),
            "deepening" => Box::new(build_alphabeta(
                self.search_config(Algorithm::IterativeDeepening),
                seed,
            )),
            "mcts" => {
                let defaults = MctsConfig::default();
                let config = MctsConfig {
                    iterations: self.iterations.unwrap_or(defaults.iterations),
                    ..defaults
                };
                Box::new(match seed {
                    Some(s) => MctsEngine::with_seed(config, s),
                    None => MctsEngine::new(config),
                })
            }
            "random" => Box::new(match seed {
                Some(s) => RandomEngine::with_seed(s),
                None => RandomEngine::new(),
            }),
            other => {
                tracing::warn!(engine = other, "unknown engine spec, using random");
                Box::new(RandomEngine::new())
            }
        }
    }
}

fn build_alphabeta(config: SearchConfig, seed: Option<u64>) -> AlphaBetaEngine {
    match seed {
        Some(s) => AlphaBetaEngine::with_seed(config, s),
        None => AlphaBetaEngine::new(config),
    }
}

/// Full arena configuration. Missing TOML fields fall back to the
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Number of games to play.
    pub games: u32,
    /// Moves per game before the result is recorded as unfinished.
    pub max_moves: u32,
    /// Swap colors between games.
    pub alternate_colors: bool,
    /// Base seed for engines and the fallback picker; omit for
    /// entropy-seeded runs.
    pub seed: Option<u64>,
    /// Where to write the JSON results.
    pub output: String,
    pub white: EngineSpec,
    pub black: EngineSpec,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 2,
            max_moves: 200,
            alternate_colors: true,
            seed: None,
            output: "arena_results.json".to_string(),
            white: EngineSpec::named("negamax"),
            black: EngineSpec::named("random"),
        }
    }
}

impl ArenaConfig {
    pub fn load(path: &Path) -> Result<ArenaConfig, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {e}"))?;
        toml::from_str(&contents).map_err(|e| format!("failed to parse config: {e}"))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
