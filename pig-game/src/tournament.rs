//! Round-robin tournament evaluator.
//!
//! Every unordered pair of strategies plays `games_per_series` games. Pairings
//! are independent: each owns a generator derived from the tournament seed and
//! accumulates its own counts, which are merged into the [`Tally`] once every
//! pairing has finished.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, TournamentConfig};
use crate::game::{GameError, Side, play};
use crate::numbers::{fraction, pair_count};
use crate::seed::pairing_rng;
use crate::strategy::Strategy;

/// Errors raised by [`round_robin`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("pairing {first} vs {second} failed: {source}")]
    Game {
        first: usize,
        second: usize,
        #[source]
        source: GameError,
    },
}

/// Head-to-head counts for one pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairingResult {
    /// Index of the strategy seated as side 0.
    pub first: usize,
    /// Index of the strategy seated as side 1.
    pub second: usize,
    pub first_wins: u64,
    pub second_wins: u64,
}

impl PairingResult {
    const fn new(first: usize, second: usize) -> Self {
        Self {
            first,
            second,
            first_wins: 0,
            second_wins: 0,
        }
    }

    const fn record(&mut self, winner: Side) {
        match winner {
            Side::First => self.first_wins += 1,
            Side::Second => self.second_wins += 1,
        }
    }

    #[must_use]
    pub const fn games(&self) -> u64 {
        self.first_wins + self.second_wins
    }
}

/// Aggregated win counts of a tournament, indexed like the input strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    wins: Vec<u64>,
    games_per_series: u32,
    games_per_strategy: u64,
    games_played: u64,
    pairings: Vec<PairingResult>,
}

impl Tally {
    fn empty(strategies: usize, games_per_series: u32) -> Self {
        let others = u64::try_from(strategies.saturating_sub(1)).unwrap_or(u64::MAX);
        Self {
            wins: vec![0; strategies],
            games_per_series,
            games_per_strategy: u64::from(games_per_series).saturating_mul(others),
            games_played: 0,
            pairings: Vec::new(),
        }
    }

    fn merge(&mut self, pairing: PairingResult) {
        self.wins[pairing.first] += pairing.first_wins;
        self.wins[pairing.second] += pairing.second_wins;
        self.games_played += pairing.games();
        self.pairings.push(pairing);
    }

    /// Win counts in strategy order.
    #[must_use]
    pub fn wins_by_strategy(&self) -> &[u64] {
        &self.wins
    }

    #[must_use]
    pub fn wins(&self, index: usize) -> u64 {
        self.wins.get(index).copied().unwrap_or(0)
    }

    /// Games lost by strategy `index`.
    #[must_use]
    pub fn losses(&self, index: usize) -> u64 {
        self.games_per_strategy.saturating_sub(self.wins(index))
    }

    /// Fraction of its games strategy `index` won; `None` when it played none.
    #[must_use]
    pub fn win_rate(&self, index: usize) -> Option<f64> {
        fraction(self.wins(index), self.games_per_strategy)
    }

    #[must_use]
    pub const fn games_per_series(&self) -> u32 {
        self.games_per_series
    }

    /// Games each strategy took part in (no self-play).
    #[must_use]
    pub const fn games_per_strategy(&self) -> u64 {
        self.games_per_strategy
    }

    /// Games executed across the whole tournament.
    #[must_use]
    pub const fn games_played(&self) -> u64 {
        self.games_played
    }

    #[must_use]
    pub fn total_wins(&self) -> u64 {
        self.wins.iter().sum()
    }

    #[must_use]
    pub fn strategy_count(&self) -> usize {
        self.wins.len()
    }

    /// Per-pairing results in `(first, second)` order.
    #[must_use]
    pub fn pairings(&self) -> &[PairingResult] {
        &self.pairings
    }

    /// Wins of `first` against `second`, if the two met.
    #[must_use]
    pub fn head_to_head(&self, first: usize, second: usize) -> Option<u64> {
        self.pairings.iter().find_map(|pairing| {
            if pairing.first == first && pairing.second == second {
                Some(pairing.first_wins)
            } else if pairing.first == second && pairing.second == first {
                Some(pairing.second_wins)
            } else {
                None
            }
        })
    }
}

/// Every `(i, j)` with `i < j` in lexicographic order.
#[must_use]
pub fn pairings(strategies: usize) -> Vec<(usize, usize)> {
    (0..strategies)
        .flat_map(|i| ((i + 1)..strategies).map(move |j| (i, j)))
        .collect()
}

/// Play `games_per_series` games between every pair of `strategies`.
///
/// Strategy `i` of a pairing `(i, j)` is seated as side 0; the opening side is
/// still flipped per game. A single strategy yields an all-zero tally.
///
/// # Errors
///
/// Returns an error for an invalid configuration, an empty roster, or a game
/// that hits the configured action cap.
pub fn round_robin<S>(strategies: &[S], config: &TournamentConfig) -> Result<Tally, TournamentError>
where
    S: Strategy,
{
    config.validate()?;
    if strategies.is_empty() {
        return Err(ConfigError::EmptyRoster.into());
    }

    let schedule = pairings(strategies.len());
    let expected_games = pair_count(u64::try_from(strategies.len()).unwrap_or(u64::MAX))
        .saturating_mul(u64::from(config.games_per_series));
    log::info!(
        "simulating {} strategies: {} pairings, {} games",
        strategies.len(),
        schedule.len(),
        expected_games
    );

    let run = |&(first, second): &(usize, usize)| run_pairing(strategies, first, second, config);
    let results: Vec<PairingResult> = if config.parallel {
        schedule.par_iter().map(run).collect::<Result<_, _>>()?
    } else {
        schedule.iter().map(run).collect::<Result<_, _>>()?
    };

    let mut tally = Tally::empty(strategies.len(), config.games_per_series);
    for pairing in results {
        tally.merge(pairing);
    }
    log::info!("tournament finished after {} games", tally.games_played());
    Ok(tally)
}

fn run_pairing<S>(
    strategies: &[S],
    first: usize,
    second: usize,
    config: &TournamentConfig,
) -> Result<PairingResult, TournamentError>
where
    S: Strategy,
{
    let mut rng = pairing_rng(config.seed, first, second);
    let rules = config.game_config();
    let mut result = PairingResult::new(first, second);
    for _ in 0..config.games_per_series {
        let record = play(&strategies[first], &strategies[second], rules, &mut rng).map_err(
            |source| TournamentError::Game {
                first,
                second,
                source,
            },
        )?;
        result.record(record.winner);
    }
    log::debug!(
        "pairing {} vs {} ({}): {}-{}",
        strategies[first].label(),
        strategies[second].label(),
        first,
        result.first_wins,
        result.second_wins
    );
    Ok(result)
}
