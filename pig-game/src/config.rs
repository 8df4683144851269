//! Game and tournament configuration with validation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_MAX_ACTIONS, DEFAULT_TOURNAMENT_SEED, GAMES_PER_SERIES, WIN_THRESHOLD,
};

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u64,
        value: u64,
    },
    #[error("strategy thresholds must lie within 1..={win_threshold} (got {min}..={max})")]
    ThresholdBounds {
        min: u32,
        max: u32,
        win_threshold: u32,
    },
    #[error("tournament needs at least one strategy")]
    EmptyRoster,
    #[error("invalid configuration JSON: {0}")]
    Parse(String),
}

/// Rules for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "GameConfig::default_win_threshold")]
    pub win_threshold: u32,
    /// Optional cap on actions per game; `None` lets a game run until won.
    #[serde(default)]
    pub max_actions: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn default_win_threshold() -> u32 {
        WIN_THRESHOLD
    }

    /// Unbounded game with the given threshold.
    #[must_use]
    pub const fn with_threshold(win_threshold: u32) -> Self {
        Self {
            win_threshold,
            max_actions: None,
        }
    }

    #[must_use]
    pub const fn with_max_actions(mut self, max_actions: Option<u64>) -> Self {
        self.max_actions = max_actions;
        self
    }

    /// Check the game rules.
    ///
    /// # Errors
    ///
    /// Returns an error when the threshold or the action cap is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_min("win_threshold", u64::from(self.win_threshold), 1)?;
        if let Some(cap) = self.max_actions {
            require_min("max_actions", cap, 1)?;
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_threshold(WIN_THRESHOLD)
    }
}

/// Settings for a round-robin tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    #[serde(default = "TournamentConfig::default_win_threshold")]
    pub win_threshold: u32,
    #[serde(default = "TournamentConfig::default_games_per_series")]
    pub games_per_series: u32,
    #[serde(default = "TournamentConfig::default_max_actions")]
    pub max_actions: Option<u64>,
    #[serde(default = "TournamentConfig::default_seed")]
    pub seed: u64,
    #[serde(default = "TournamentConfig::default_parallel")]
    pub parallel: bool,
}

impl TournamentConfig {
    #[must_use]
    pub const fn default_win_threshold() -> u32 {
        WIN_THRESHOLD
    }

    #[must_use]
    pub const fn default_games_per_series() -> u32 {
        GAMES_PER_SERIES
    }

    #[must_use]
    pub const fn default_max_actions() -> Option<u64> {
        Some(DEFAULT_MAX_ACTIONS)
    }

    #[must_use]
    pub const fn default_seed() -> u64 {
        DEFAULT_TOURNAMENT_SEED
    }

    #[must_use]
    pub const fn default_parallel() -> bool {
        true
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_games_per_series(mut self, games_per_series: u32) -> Self {
        self.games_per_series = games_per_series;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rules handed to every game of the tournament.
    #[must_use]
    pub const fn game_config(&self) -> GameConfig {
        GameConfig {
            win_threshold: self.win_threshold,
            max_actions: self.max_actions,
        }
    }

    /// Parse a JSON document, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails validation.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config().validate()?;
        require_min("games_per_series", u64::from(self.games_per_series), 1)?;
        Ok(())
    }

    /// Check that a stay-at-`k` family spans a sensible slice of `1..=win_threshold`.
    ///
    /// # Errors
    ///
    /// Returns an error for inverted bounds or bounds outside the threshold.
    pub fn validate_threshold_bounds(&self, min: u32, max: u32) -> Result<(), ConfigError> {
        if min == 0 || min > max || max > self.win_threshold {
            return Err(ConfigError::ThresholdBounds {
                min,
                max,
                win_threshold: self.win_threshold,
            });
        }
        Ok(())
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            win_threshold: Self::default_win_threshold(),
            games_per_series: Self::default_games_per_series(),
            max_actions: Self::default_max_actions(),
            seed: Self::default_seed(),
            parallel: Self::default_parallel(),
        }
    }
}

fn require_min(field: &'static str, value: u64, min: u64) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::MinViolation { field, min, value });
    }
    Ok(())
}
