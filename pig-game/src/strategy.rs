//! Decision policies mapping a [`Score`] to the next [`Action`].
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::action::Action;
use crate::score::Score;

/// Policy interface for automated play.
///
/// Strategies must be pure: the same score always yields the same action, and
/// a single instance is shared by every game (and thread) of a tournament.
pub trait Strategy: Send + Sync {
    /// Name used in reports and log output.
    fn label(&self) -> String;

    /// Select the action to apply to `score`.
    fn decide(&self, score: &Score) -> Action;

    /// Threshold parameter for members of the stay-at-`k` family.
    fn threshold(&self) -> Option<u32> {
        None
    }
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn label(&self) -> String {
        (**self).label()
    }

    fn decide(&self, score: &Score) -> Action {
        (**self).decide(score)
    }

    fn threshold(&self) -> Option<u32> {
        (**self).threshold()
    }
}

impl<S: Strategy + ?Sized> Strategy for &S {
    fn label(&self) -> String {
        (**self).label()
    }

    fn decide(&self, score: &Score) -> Action {
        (**self).decide(score)
    }

    fn threshold(&self) -> Option<u32> {
        (**self).threshold()
    }
}

/// Rolls until the turn is worth at least `k`, then stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayAtThreshold {
    k: u32,
}

impl StayAtThreshold {
    #[must_use]
    pub const fn new(k: u32) -> Self {
        Self { k }
    }

    #[must_use]
    pub const fn k(self) -> u32 {
        self.k
    }
}

impl Strategy for StayAtThreshold {
    fn label(&self) -> String {
        format!("staying at k = {:>3}", self.k)
    }

    fn decide(&self, score: &Score) -> Action {
        if score.this_turn >= self.k {
            Action::Stay
        } else {
            Action::Roll
        }
    }

    fn threshold(&self) -> Option<u32> {
        Some(self.k)
    }
}

impl fmt::Display for StayAtThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Never banks; only wins by crossing the threshold within a single turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysRoll;

impl Strategy for AlwaysRoll {
    fn label(&self) -> String {
        "always rolling".to_string()
    }

    fn decide(&self, _score: &Score) -> Action {
        Action::Roll
    }
}

/// Adapts a plain function or closure into a [`Strategy`].
pub struct FnStrategy<F> {
    label: String,
    decide: F,
}

impl<F> FnStrategy<F>
where
    F: Fn(&Score) -> Action + Send + Sync,
{
    #[must_use]
    pub fn new(label: impl Into<String>, decide: F) -> Self {
        Self {
            label: label.into(),
            decide,
        }
    }
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&Score) -> Action + Send + Sync,
{
    fn label(&self) -> String {
        self.label.clone()
    }

    fn decide(&self, score: &Score) -> Action {
        (self.decide)(score)
    }
}

impl<F> fmt::Debug for FnStrategy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnStrategy")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// One [`StayAtThreshold`] per `k` in `thresholds`, in ascending order.
#[must_use]
pub fn stay_at_threshold_family(thresholds: RangeInclusive<u32>) -> Vec<StayAtThreshold> {
    thresholds.map(StayAtThreshold::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_exactly_when_turn_reaches_threshold() {
        let strategy = StayAtThreshold::new(20);
        for this_turn in 0..40 {
            let expected = if this_turn >= 20 {
                Action::Stay
            } else {
                Action::Roll
            };
            let score = Score::new(50, 60, this_turn);
            assert_eq!(strategy.decide(&score), expected, "this_turn {this_turn}");
        }
    }

    #[test]
    fn threshold_ignores_banked_scores() {
        let strategy = StayAtThreshold::new(5);
        assert_eq!(strategy.decide(&Score::new(99, 0, 4)), Action::Roll);
        assert_eq!(strategy.decide(&Score::new(0, 99, 5)), Action::Stay);
    }

    #[test]
    fn family_covers_requested_range() {
        let family = stay_at_threshold_family(1..=100);
        assert_eq!(family.len(), 100);
        assert_eq!(family.first().map(|s| s.k()), Some(1));
        assert_eq!(family.last().map(|s| s.k()), Some(100));
    }

    #[test]
    fn labels_pad_threshold() {
        assert_eq!(StayAtThreshold::new(7).label(), "staying at k =   7");
        assert_eq!(StayAtThreshold::new(100).label(), "staying at k = 100");
    }

    #[test]
    fn boxed_and_closure_strategies_delegate() {
        let boxed: Box<dyn Strategy> = Box::new(StayAtThreshold::new(3));
        assert_eq!(boxed.threshold(), Some(3));
        assert_eq!(boxed.decide(&Score::new(0, 0, 3)), Action::Stay);

        let cautious = FnStrategy::new("stay when ahead", |score: &Score| {
            if score.in_play() > score.opponent {
                Action::Stay
            } else {
                Action::Roll
            }
        });
        assert_eq!(cautious.label(), "stay when ahead");
        assert_eq!(cautious.decide(&Score::new(10, 5, 0)), Action::Stay);
        assert_eq!(cautious.decide(&Score::new(1, 5, 2)), Action::Roll);
        assert_eq!(cautious.threshold(), None);
    }

    #[test]
    fn always_roll_never_stays() {
        assert_eq!(AlwaysRoll.decide(&Score::new(0, 0, 99)), Action::Roll);
    }
}
