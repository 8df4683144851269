//! Pig Game Engine
//!
//! Platform-agnostic core logic for simulating the dice game Pig: the score
//! model, the Roll/Stay actions, pluggable strategies, a game engine, and a
//! round-robin tournament evaluator with ratio reporting.
//!
//! Randomness is always supplied by the caller through an [`OutcomeGenerator`],
//! so every game can be replayed from a seed or a scripted sequence of faces.

pub mod action;
pub mod config;
pub mod constants;
pub mod game;
pub mod numbers;
pub mod outcome;
pub mod score;
pub mod seed;
pub mod stats;
pub mod strategy;
pub mod tournament;

// Re-export commonly used types
pub use action::{Action, Transition, roll, roll_face, stay};
pub use config::{ConfigError, GameConfig, TournamentConfig};
pub use game::{GameError, GameRecord, GameSession, Side, StepRecord, play};
pub use outcome::{CountingGenerator, OutcomeGenerator, ScriptedOutcomes};
pub use score::Score;
pub use seed::{derive_stream_seed, pairing_rng, pairing_seed};
pub use stats::{
    ReportError, Standing, best_standing, ratio_string, standings, strategy_report_line,
};
pub use strategy::{AlwaysRoll, FnStrategy, StayAtThreshold, Strategy, stay_at_threshold_family};
pub use tournament::{PairingResult, Tally, TournamentError, pairings, round_robin};

/// Default roster: one [`StayAtThreshold`] for every `k` in `1..=win_threshold`.
#[must_use]
pub fn default_roster(config: &TournamentConfig) -> Vec<StayAtThreshold> {
    stay_at_threshold_family(1..=config.win_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roster_spans_win_threshold() {
        let cfg = TournamentConfig {
            win_threshold: 30,
            ..TournamentConfig::default()
        };
        let roster = default_roster(&cfg);
        assert_eq!(roster.len(), 30);
        assert_eq!(roster[29].k(), 30);
    }
}
