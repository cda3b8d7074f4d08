//! Arena CLI: play a configured match and write the results as JSON.
//!
//! Usage:
//!   arena [config.toml]
//!
//! Without an argument a short default match (negamax vs random) runs.

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use arena::{ArenaConfig, MatchRunner};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match ArenaConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(%err, "could not load configuration");
                return ExitCode::FAILURE;
            }
        },
        None => ArenaConfig::default(),
    };

    let mut white = config.white.build(config.seed);
    let mut black = config.black.build(config.seed.map(|s| s.wrapping_add(1)));
    tracing::info!(
        white = white.name(),
        black = black.name(),
        games = config.games,
        "starting match"
    );

    let output = config.output.clone();
    let mut runner = MatchRunner::new(config);
    let results = match runner.run(white.as_mut(), black.as_mut()) {
        Ok(results) => results,
        Err(err) => {
            tracing::error!(%err, "match aborted on illegal move");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        white_wins = results.white_wins,
        black_wins = results.black_wins,
        draws = results.draws,
        unfinished = results.unfinished,
        "match finished"
    );

    if let Err(err) = results.save(Path::new(&output)) {
        tracing::error!(%err, "could not save results");
        return ExitCode::FAILURE;
    }
    tracing::info!(%output, "results written");
    ExitCode::SUCCESS
}
