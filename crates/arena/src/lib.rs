//! Arena: engine-vs-engine match running on top of the game core.
//!
//! The arena is a consumer of the core's external interfaces only: it
//! asks the state for legal moves, hands them to an engine, applies the
//! chosen move through the validated path, and persists telemetry for
//! offline analysis.

mod config;
mod match_runner;
mod results;

pub use config::{ArenaConfig, EngineSpec};
pub use match_runner::MatchRunner;
pub use results::{ArenaResults, GameOutcome, GameRecord, MoveReport};
