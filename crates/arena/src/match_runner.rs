//! Plays complete games between two engines over the core interfaces:
//! legal-move list in, one chosen move out, applied through the
//! validated `apply` path.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use ponder_core::{Color, Engine, GameConfig, GameState, MoveError};

use crate::config::ArenaConfig;
use crate::results::{ArenaResults, GameOutcome, GameRecord, MoveReport};

pub struct MatchRunner {
    config: ArenaConfig,
    /// Picks the fallback move when an engine reports none.
    rng: StdRng,
}

impl MatchRunner {
    pub fn new(config: ArenaConfig) -> MatchRunner {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(2)),
            None => StdRng::from_entropy(),
        };
        MatchRunner { config, rng }
    }

    /// Run the configured number of games, alternating colors when
    /// asked to.
    pub fn run(
        &mut self,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<ArenaResults, MoveError> {
        let mut results = ArenaResults::new();
        for game in 0..self.config.games {
            let first_is_white = !self.config.alternate_colors || game % 2 == 0;
            let record = if first_is_white {
                self.play_game(first, second)?
            } else {
                self.play_game(second, first)?
            };
            tracing::info!(
                game,
                white = %record.white,
                black = %record.black,
                outcome = ?record.outcome,
                plies = record.moves.len(),
                "game finished"
            );
            results.add_game(record);
        }
        Ok(results)
    }

    /// Play a single game to checkmate, stalemate, a rule draw, or the
    /// move cap.
    pub fn play_game<'a>(
        &mut self,
        white: &'a mut dyn Engine,
        black: &'a mut dyn Engine,
    ) -> Result<GameRecord, MoveError> {
        let mut state = GameState::new(GameConfig::default());
        let mut moves = Vec::new();

        let outcome = loop {
            let valid_moves = state.get_valid_moves();
            if valid_moves.is_empty() {
                // Terminal game condition, never an engine error.
                break if state.checkmate() {
                    match state.side_to_move() {
                        Color::White => GameOutcome::BlackWin,
                        Color::Black => GameOutcome::WhiteWin,
                    }
                } else {
                    GameOutcome::Draw
                };
            }
            if state.drawn() {
                break GameOutcome::Draw;
            }
            if moves.len() as u32 >= self.config.max_moves {
                break GameOutcome::Unfinished;
            }

            let engine = match state.side_to_move() {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let result = engine.choose_move(&mut state, &valid_moves);

            // NoMoveFound is recoverable: fall back to a uniform-random
            // legal move.
            let chosen = match result.best_move {
                Some(mv) => mv,
                None => *valid_moves
                    .choose(&mut self.rng)
                    .expect("fallback over non-empty list"),
            };

            state.apply(chosen)?;
            moves.push(MoveReport {
                notation: state
                    .notation_log()
                    .last()
                    .cloned()
                    .unwrap_or_default(),
                score: result.score,
                nodes: result.nodes,
                seconds: result.elapsed.as_secs_f64(),
            });
        };

        Ok(GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            outcome,
            moves,
            final_fen: state.fen(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
