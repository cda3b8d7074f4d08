pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod signature;
pub mod state;
pub mod time_budget;
pub mod types;

// Re-export the game-logic surface (not engine-specific).
pub use board::Board;
pub use config::{GameConfig, Orientation};
pub use error::{FenError, MoveError};
pub use moves::{Disambiguation, Move};
pub use state::{CastleRights, GameState};
pub use time_budget::TimeBudget;
pub use types::{Color, Piece, PieceKind, Square};

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// Engine trait — implemented by all move choosers (deterministic, MCTS, random)
// =============================================================================

/// Result of a move search: the chosen move plus telemetry for an
/// external logger. The engine itself never consumes the telemetry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The chosen move. `None` means no move was selected — the caller
    /// must fall back to a uniform-random legal move (see crate docs on
    /// the NoMoveFound condition).
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line, from White's perspective, in pawn
    /// units. Zero for engines that do not evaluate.
    pub score: f64,
    /// Depth the search reached (plies). Zero for non-depth searches.
    pub depth: u8,
    /// Nodes visited (deterministic) or iterations run (MCTS).
    pub nodes: u64,
    /// Wall-clock time spent choosing.
    pub elapsed: Duration,
}

/// Trait all move choosers implement.
///
/// Callers must check for an empty legal-move list (checkmate or
/// stalemate) before invoking an engine; an empty list is a terminal
/// game condition, not an engine error.
pub trait Engine {
    /// Choose one move for the side to move.
    ///
    /// `valid_moves` is the current legal move list from
    /// `state.get_valid_moves()`. Deterministic engines recurse on the
    /// shared state through paired make/undo calls and leave it exactly
    /// as received; the MCTS engine works on private copies.
    fn choose_move(&mut self, state: &mut GameState, valid_moves: &[Move]) -> SearchResult;

    /// Engine name for logs and match reports.
    fn name(&self) -> &str;
}
