//! Roll and Stay, the two moves available to the side on the clock.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DIE_FACES, PIG_OUT_FACE};
use crate::outcome::OutcomeGenerator;
use crate::score::Score;

/// A move the side on the clock can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Throw the die, risking the turn's points on a 1.
    Roll,
    /// Bank the turn's points and hand over the die.
    Stay,
}

/// Result of applying an [`Action`] to a [`Score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Score seen from whoever acts next.
    pub score: Score,
    /// Whether control of the die passed to the other side.
    pub turn_over: bool,
}

impl Action {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Stay => "stay",
        }
    }

    /// Apply the action to `score`, drawing from `generator` only when rolling.
    pub fn apply<G>(self, score: Score, generator: &mut G) -> Transition
    where
        G: OutcomeGenerator + ?Sized,
    {
        match self {
            Self::Roll => roll(score, generator),
            Self::Stay => stay(score),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Throw the die once.
///
/// A 1 forfeits `this_turn` and swaps roles; any other face is added to
/// `this_turn` and the same side keeps the die.
pub fn roll<G>(score: Score, generator: &mut G) -> Transition
where
    G: OutcomeGenerator + ?Sized,
{
    let face = generator.next_in_range(DIE_FACES) + 1;
    roll_face(score, face)
}

/// Resolve a roll for an already known face.
#[must_use]
pub const fn roll_face(score: Score, face: u32) -> Transition {
    if face == PIG_OUT_FACE {
        return Transition {
            score: score.swapped(),
            turn_over: true,
        };
    }
    Transition {
        score: Score::new(
            score.player,
            score.opponent,
            score.this_turn.saturating_add(face),
        ),
        turn_over: false,
    }
}

/// Bank `this_turn` and pass the die.
#[must_use]
pub const fn stay(score: Score) -> Transition {
    Transition {
        score: Score::new(score.opponent, score.player.saturating_add(score.this_turn), 0),
        turn_over: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{CountingGenerator, ScriptedOutcomes};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn stay_banks_turn_and_swaps_roles() {
        let result = stay(Score::new(20, 35, 14));
        assert_eq!(result.score, Score::new(35, 34, 0));
        assert!(result.turn_over);
    }

    #[test]
    fn stay_never_draws_from_generator() {
        let mut counting = CountingGenerator::new(ScriptedOutcomes::faces(&[1]));
        let result = Action::Stay.apply(Score::new(1, 2, 3), &mut counting);
        assert_eq!(counting.draws(), 0);
        assert_eq!(result.score.this_turn, 0);
        assert!(result.turn_over);
    }

    #[test]
    fn rolling_one_forfeits_turn() {
        let mut script = ScriptedOutcomes::faces(&[1]);
        let result = Action::Roll.apply(Score::new(10, 50, 18), &mut script);
        assert_eq!(result.score, Score::new(50, 10, 0));
        assert!(result.turn_over);
    }

    #[test]
    fn rolling_other_faces_accumulates() {
        for face in 2..=6 {
            let mut script = ScriptedOutcomes::faces(&[face]);
            let result = Action::Roll.apply(Score::new(10, 50, 4), &mut script);
            assert_eq!(result.score, Score::new(10, 50, 4 + face));
            assert!(!result.turn_over);
        }
    }

    #[test]
    fn roll_draws_exactly_once() {
        let mut counting = CountingGenerator::new(ScriptedOutcomes::faces(&[5]));
        Action::Roll.apply(Score::default(), &mut counting);
        assert_eq!(counting.draws(), 1);
    }

    #[test]
    fn roll_always_lands_in_one_of_two_branches() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let start = Score::new(33, 41, 12);
        for _ in 0..2_000 {
            let result = roll(start, &mut rng);
            if result.turn_over {
                assert_eq!(result.score, start.swapped());
            } else {
                let gained = result.score.this_turn - start.this_turn;
                assert!((2..=6).contains(&gained), "gained {gained}");
                assert_eq!(result.score.player, start.player);
                assert_eq!(result.score.opponent, start.opponent);
            }
        }
    }

    #[test]
    fn action_labels_serialize_snake_case() {
        assert_eq!(serde_json::to_string(&Action::Roll).unwrap(), "\"roll\"");
        assert_eq!(Action::Stay.to_string(), "stay");
    }
}
