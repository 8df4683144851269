use anyhow::{Context, Result, bail};
use std::collections::BTreeSet;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Expand threshold tokens (`all`, `k`, or `a-b`) into sorted, unique values.
///
/// `all` expands to `1..=win_threshold`; bounds are checked by the caller.
pub fn parse_threshold_tokens(tokens: &[String], win_threshold: u32) -> Result<Vec<u32>> {
    let mut thresholds = BTreeSet::new();
    for token in tokens {
        if token.eq_ignore_ascii_case("all") {
            thresholds.extend(1..=win_threshold);
            continue;
        }
        if let Some((low, high)) = token.split_once('-') {
            let low = parse_threshold(low)?;
            let high = parse_threshold(high)?;
            if low > high {
                bail!("threshold range {token} is inverted");
            }
            thresholds.extend(low..=high);
            continue;
        }
        thresholds.insert(parse_threshold(token)?);
    }
    Ok(thresholds.into_iter().collect())
}

fn parse_threshold(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .with_context(|| format!("invalid threshold: {raw}"))
}
