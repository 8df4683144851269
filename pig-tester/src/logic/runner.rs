use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use pig_game::{Standing, Strategy, TournamentConfig, best_standing, round_robin, standings};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Everything a report needs about one finished tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub generated_at: String,
    pub config: TournamentConfig,
    pub strategies: usize,
    pub games_played: u64,
    pub games_per_strategy: u64,
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,
    pub standings: Vec<Standing>,
}

impl TournamentSummary {
    #[must_use]
    pub fn best(&self) -> Option<&Standing> {
        best_standing(&self.standings)
    }
}

pub struct TournamentRunner {
    config: TournamentConfig,
    verbose: bool,
}

impl TournamentRunner {
    pub const fn new(config: TournamentConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub fn run<S: Strategy>(&self, roster: &[S]) -> Result<TournamentSummary> {
        if self.verbose {
            println!(
                "🎲 Simulating {} strategies ({} games per series, seed {}, {})",
                roster.len().to_string().bright_white(),
                self.config.games_per_series,
                self.config.seed,
                if self.config.parallel {
                    "parallel"
                } else {
                    "sequential"
                }
            );
        }

        let start = Instant::now();
        let tally = round_robin(roster, &self.config).context("tournament failed")?;
        let elapsed = start.elapsed();

        if self.verbose {
            println!(
                "  ✅ {} games finished in {elapsed:?}",
                tally.games_played().to_string().green()
            );
        }

        Ok(TournamentSummary {
            generated_at: Utc::now().to_rfc3339(),
            config: self.config,
            strategies: roster.len(),
            games_played: tally.games_played(),
            games_per_strategy: tally.games_per_strategy(),
            elapsed,
            standings: standings(&tally, roster),
        })
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
