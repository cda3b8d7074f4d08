//! Match results storage: per-move telemetry and game outcomes,
//! serialized to JSON for external analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    WhiteWin,
    BlackWin,
    Draw,
    /// Hit the move cap before the game ended.
    Unfinished,
}

/// Telemetry for one chosen move, as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveReport {
    pub notation: String,
    pub score: f64,
    pub nodes: u64,
    pub seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub outcome: GameOutcome,
    pub moves: Vec<MoveReport>,
    pub final_fen: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaResults {
    pub started_at: String,
    pub games: Vec<GameRecord>,
    pub white_wins: u32,
    pub black_wins: u32,
    pub draws: u32,
    pub unfinished: u32,
}

impl ArenaResults {
    pub fn new() -> ArenaResults {
        ArenaResults {
            started_at: chrono::Utc::now().to_rfc3339(),
            games: Vec::new(),
            white_wins: 0,
            black_wins: 0,
            draws: 0,
            unfinished: 0,
        }
    }

    pub fn add_game(&mut self, record: GameRecord) {
        match record.outcome {
            GameOutcome::WhiteWin => self.white_wins += 1,
            GameOutcome::BlackWin => self.black_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
        self.games.push(record);
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize results: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("failed to write results: {e}"))
    }

    pub fn load(path: &Path) -> Result<ArenaResults, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read results: {e}"))?;
        serde_json::from_str(&contents).map_err(|e| format!("failed to parse results: {e}"))
    }
}

impl Default for ArenaResults {
    fn default() -> Self {
        ArenaResults::new()
    }
}
