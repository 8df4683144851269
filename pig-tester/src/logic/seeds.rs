use anyhow::{Context, Result, bail};

/// Resolve a CLI seed token into a tournament seed.
///
/// Supports decimal integers (negative values use their magnitude), `0x`
/// prefixed hex, and the keyword `random`, which draws fresh entropy.
pub fn resolve_seed_token(token: &str) -> Result<u64> {
    let token = token.trim();
    if token.is_empty() {
        bail!("seed must not be empty");
    }

    if token.eq_ignore_ascii_case("random") {
        let seed = rand::random::<u64>();
        log::info!("drew random tournament seed {seed}");
        return Ok(seed);
    }

    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        return u64::from_str_radix(hex, 16)
            .with_context(|| format!("invalid hex seed: {token}"));
    }

    if let Ok(value) = token.parse::<u64>() {
        return Ok(value);
    }

    if let Ok(value) = token.parse::<i64>() {
        return Ok(value.unsigned_abs());
    }

    bail!("Unrecognized seed token: {token}");
}
