//! Numeric conversion helpers centralizing lossy casts.

use num_traits::cast::cast;

/// Convert a count to f64, allowing precision loss in a single location.
#[must_use]
pub fn count_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Share of `part` in `total` as a fraction in `[0, 1]`; `None` when `total` is zero.
#[must_use]
pub fn fraction(part: u64, total: u64) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(count_to_f64(part) / count_to_f64(total))
}

/// Number of unordered pairs among `n` items.
#[must_use]
pub const fn pair_count(n: u64) -> u64 {
    n.saturating_mul(n.saturating_sub(1)) / 2
}
