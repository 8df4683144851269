use anyhow::{Result, bail};
use pig_game::{Standing, best_standing};

/// Win rate at or above which a single strategy is considered to dominate.
const DOMINANCE_LIMIT: f64 = 0.95;
/// Win rate that earns a warning without failing the run.
const DOMINANCE_WARNING: f64 = 0.90;
const MIN_ROSTER: usize = 3;

/// Sanity-check that the standings trend non-degenerately across the roster.
///
/// The extremes of a stay-at-`k` family (bank after every roll, or never bank
/// until the game is won) must not come out on top, and no single strategy may
/// win nearly every game.
pub fn validate_standings(rows: &[Standing]) -> Result<()> {
    let played: Vec<&Standing> = rows.iter().filter(|row| row.win_rate.is_some()).collect();
    if played.len() < MIN_ROSTER {
        bail!(
            "acceptance checks need at least {MIN_ROSTER} strategies with games (got {})",
            played.len()
        );
    }

    for row in &played {
        let win_rate = row.win_rate.unwrap_or_default();
        if win_rate >= DOMINANCE_LIMIT {
            bail!(
                "{} dominated the tournament with a {:.1}% win rate",
                row.label,
                win_rate * 100.0
            );
        }
        if win_rate >= DOMINANCE_WARNING {
            log::warn!(
                "{} is close to dominating with a {:.1}% win rate",
                row.label,
                win_rate * 100.0
            );
        }
    }

    let Some(best) = best_standing(rows) else {
        bail!("no strategy recorded a win rate");
    };
    let first = played.first().map(|row| row.index);
    let last = played.last().map(|row| row.index);
    if Some(best.index) == first || Some(best.index) == last {
        bail!("an extreme of the roster came out on top: {}", best.label);
    }

    Ok(())
}
