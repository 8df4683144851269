//! Game engine: alternates strategy decisions and action transitions until a
//! side crosses the win threshold.
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::action::Action;
use crate::config::{ConfigError, GameConfig};
use crate::constants::SIDES;
use crate::outcome::OutcomeGenerator;
use crate::score::Score;
use crate::strategy::Strategy;

/// Seat at the table, reported as `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    /// Pick the opening side with a fair coin.
    pub fn coin_flip<G>(generator: &mut G) -> Self
    where
        G: OutcomeGenerator + ?Sized,
    {
        if generator.next_in_range(SIDES) == 0 {
            Self::First
        } else {
            Self::Second
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {}", self.index())
    }
}

/// Errors raised while driving a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("game exceeded {limit} actions without a winner")]
    ActionLimitExceeded { limit: u64 },
    #[error("game already finished")]
    AlreadyFinished,
}

/// Snapshot of one applied action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub side: Side,
    pub action: Action,
    pub before: Score,
    pub after: Score,
    pub turn_over: bool,
    pub game_ended: bool,
}

/// Summary of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Side,
    pub starting_side: Side,
    /// Final score seen from the winner.
    pub final_score: Score,
    pub actions: u64,
    pub turns: u32,
}

/// A game in progress between two strategies.
pub struct GameSession<'a> {
    strategies: [&'a dyn Strategy; 2],
    config: GameConfig,
    score: Score,
    current: Side,
    starting_side: Side,
    actions: u64,
    turns: u32,
}

impl<'a> GameSession<'a> {
    /// Seat `first` and `second` and flip for the opening side.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] when `config` fails validation; no draw
    /// is taken in that case.
    pub fn new<G>(
        first: &'a dyn Strategy,
        second: &'a dyn Strategy,
        config: GameConfig,
        generator: &mut G,
    ) -> Result<Self, GameError>
    where
        G: OutcomeGenerator + ?Sized,
    {
        config.validate()?;
        let opening = Side::coin_flip(generator);
        Self::with_starting_side(first, second, config, opening)
    }

    /// Seat both strategies with a fixed opening side.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] when `config` fails validation.
    pub fn with_starting_side(
        first: &'a dyn Strategy,
        second: &'a dyn Strategy,
        config: GameConfig,
        starting_side: Side,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            strategies: [first, second],
            config,
            score: Score::default(),
            current: starting_side,
            starting_side,
            actions: 0,
            turns: 1,
        })
    }

    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Side currently on the clock.
    #[must_use]
    pub const fn current(&self) -> Side {
        self.current
    }

    #[must_use]
    pub const fn actions(&self) -> u64 {
        self.actions
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.score.has_reached(self.config.win_threshold)
    }

    /// Apply one decision of the side on the clock.
    ///
    /// # Errors
    ///
    /// Returns an error when the game is already won or the action cap is hit.
    pub fn advance<G>(&mut self, generator: &mut G) -> Result<StepRecord, GameError>
    where
        G: OutcomeGenerator + ?Sized,
    {
        if self.is_finished() {
            return Err(GameError::AlreadyFinished);
        }
        if let Some(limit) = self.config.max_actions
            && self.actions >= limit
        {
            return Err(GameError::ActionLimitExceeded { limit });
        }

        let side = self.current;
        let before = self.score;
        let action = self.strategies[side.index()].decide(&before);
        let transition = action.apply(before, generator);

        self.score = transition.score;
        self.actions += 1;
        if transition.turn_over {
            self.current = self.current.other();
            self.turns = self.turns.saturating_add(1);
        }

        Ok(StepRecord {
            side,
            action,
            before,
            after: transition.score,
            turn_over: transition.turn_over,
            game_ended: self.is_finished(),
        })
    }

    /// Drive the game until a side wins.
    ///
    /// # Errors
    ///
    /// Returns an error when the action cap is reached first.
    pub fn run<G>(mut self, generator: &mut G) -> Result<GameRecord, GameError>
    where
        G: OutcomeGenerator + ?Sized,
    {
        while !self.is_finished() {
            self.advance(generator)?;
        }
        Ok(GameRecord {
            winner: self.current,
            starting_side: self.starting_side,
            final_score: self.score,
            actions: self.actions,
            turns: self.turns,
        })
    }
}

/// Play one game between `first` (side 0) and `second` (side 1).
///
/// # Errors
///
/// Returns [`GameError::Config`] for a zero threshold or action cap, and
/// [`GameError::ActionLimitExceeded`] when `config.max_actions` is set and
/// reached before either side wins.
pub fn play<G>(
    first: &dyn Strategy,
    second: &dyn Strategy,
    config: GameConfig,
    generator: &mut G,
) -> Result<GameRecord, GameError>
where
    G: OutcomeGenerator + ?Sized,
{
    GameSession::new(first, second, config, generator)?.run(generator)
}
