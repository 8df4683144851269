//! Score view of a Pig game relative to the side about to act.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Banked and in-turn points seen from the side currently on the clock.
///
/// A `Score` never changes in place: every action produces a new value, and a
/// change of roles is expressed by swapping `player` and `opponent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    /// Banked points of the side deciding the next action.
    pub player: u32,
    /// Banked points of the other side.
    pub opponent: u32,
    /// Points accumulated this turn that are not yet banked.
    pub this_turn: u32,
}

impl Score {
    #[must_use]
    pub const fn new(player: u32, opponent: u32, this_turn: u32) -> Self {
        Self {
            player,
            opponent,
            this_turn,
        }
    }

    /// Points the current side would hold if it banked right now.
    #[must_use]
    pub const fn in_play(&self) -> u32 {
        self.player.saturating_add(self.this_turn)
    }

    /// Whether the current side has reached `win_threshold`.
    #[must_use]
    pub const fn has_reached(&self, win_threshold: u32) -> bool {
        self.in_play() >= win_threshold
    }

    /// The same position seen from the other side, with the turn reset.
    #[must_use]
    pub const fn swapped(&self) -> Self {
        Self::new(self.opponent, self.player, 0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} (+{} this turn)",
            self.player, self.opponent, self.this_turn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_score_is_all_zero() {
        assert_eq!(Score::default(), Score::new(0, 0, 0));
    }

    #[test]
    fn in_play_includes_unbanked_points() {
        let score = Score::new(90, 40, 7);
        assert_eq!(score.in_play(), 97);
        assert!(!score.has_reached(100));
        assert!(Score::new(90, 40, 10).has_reached(100));
    }

    #[test]
    fn swapped_exchanges_roles_and_drops_turn() {
        let score = Score::new(12, 30, 9);
        assert_eq!(score.swapped(), Score::new(30, 12, 0));
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Score::new(5, 6, 7).to_string(), "5 vs 6 (+7 this turn)");
    }
}
