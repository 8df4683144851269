use anyhow::{Result, bail};
use pig_game::{StayAtThreshold, TournamentConfig};

use crate::common::{parse_threshold_tokens, split_csv};

/// Build the stay-at-`k` roster named by `thresholds` (comma-separated `k`,
/// `a-b` ranges, or `all`).
pub fn build_roster(thresholds: &str, config: &TournamentConfig) -> Result<Vec<StayAtThreshold>> {
    let tokens = split_csv(thresholds);
    if tokens.is_empty() {
        bail!("no strategy thresholds given");
    }
    let values = parse_threshold_tokens(&tokens, config.win_threshold)?;
    if let (Some(&min), Some(&max)) = (values.first(), values.last()) {
        config.validate_threshold_bounds(min, max)?;
    }
    Ok(values.into_iter().map(StayAtThreshold::new).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keyword_builds_full_family() {
        let roster = build_roster("all", &TournamentConfig::default()).unwrap();
        assert_eq!(roster.len(), 100);
        assert_eq!(roster[0].k(), 1);
        assert_eq!(roster[99].k(), 100);
    }

    #[test]
    fn thresholds_beyond_win_are_rejected() {
        let err = build_roster("90-120", &TournamentConfig::default()).unwrap_err();
        assert!(err.to_string().contains("1..=100"));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        assert!(build_roster("0,5", &TournamentConfig::default()).is_err());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(build_roster(" , ", &TournamentConfig::default()).is_err());
    }
}
