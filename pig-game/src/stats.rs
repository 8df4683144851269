//! Converts raw tournament counts into ratio and percentage summaries.
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use thiserror::Error;

use crate::numbers::fraction;
use crate::strategy::Strategy;
use crate::tournament::Tally;

/// Errors raised while summarizing counts.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    #[error("cannot express ratios of an empty total")]
    EmptyTotal,
    #[error("ratio total overflows u64")]
    TotalOverflow,
}

/// Render each value as `value/total (pct%)`, joined by `", "`.
///
/// Percentages are rounded to one decimal place.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTotal`] when `values` is empty or sums to zero,
/// and [`ReportError::TotalOverflow`] when the sum does not fit in a `u64`.
pub fn ratio_string(values: &[u64]) -> Result<String, ReportError> {
    let total = values
        .iter()
        .try_fold(0_u64, |acc, value| acc.checked_add(*value))
        .ok_or(ReportError::TotalOverflow)?;
    if total == 0 {
        return Err(ReportError::EmptyTotal);
    }
    let mut out = String::new();
    for value in values {
        if !out.is_empty() {
            out.push_str(", ");
        }
        let pct = fraction(*value, total).ok_or(ReportError::EmptyTotal)? * 100.0;
        write!(out, "{value}/{total} ({pct:.1}%)").ok();
    }
    Ok(out)
}

/// Single report line for one strategy, e.g.
/// `Wins, losses staying at k =  20: 8123/9900 (82.1%), 1777/9900 (17.9%)`.
///
/// # Errors
///
/// Returns [`ReportError::EmptyTotal`] when the strategy played no games.
pub fn strategy_report_line(label: &str, wins: u64, losses: u64) -> Result<String, ReportError> {
    Ok(format!("Wins, losses {label}: {}", ratio_string(&[wins, losses])?))
}

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub index: usize,
    pub label: String,
    pub threshold: Option<u32>,
    pub wins: u64,
    pub losses: u64,
    pub win_rate: Option<f64>,
}

impl Standing {
    /// Report line for this row; falls back to a notice when no games were played.
    #[must_use]
    pub fn report_line(&self) -> String {
        strategy_report_line(&self.label, self.wins, self.losses)
            .unwrap_or_else(|_| format!("Wins, losses {}: no games played", self.label))
    }
}

/// Rows for every strategy, in input order.
#[must_use]
pub fn standings<S>(tally: &Tally, strategies: &[S]) -> Vec<Standing>
where
    S: Strategy,
{
    strategies
        .iter()
        .enumerate()
        .map(|(index, strategy)| Standing {
            index,
            label: strategy.label(),
            threshold: strategy.threshold(),
            wins: tally.wins(index),
            losses: tally.losses(index),
            win_rate: tally.win_rate(index),
        })
        .collect()
}

/// Row with the highest win rate; the earliest row wins ties.
#[must_use]
pub fn best_standing(rows: &[Standing]) -> Option<&Standing> {
    rows.iter()
        .filter(|row| row.win_rate.is_some())
        .fold(None, |best: Option<&Standing>, row| match best {
            Some(current) if current.win_rate >= row.win_rate => Some(current),
            _ => Some(row),
        })
}
