//! Outcome generators feeding die rolls and the opening coin flip.
use rand::{Rng, RngCore};

/// Source of uniformly distributed integers in a small range.
pub trait OutcomeGenerator {
    /// Draw a value in `[0, n)`.
    ///
    /// # Panics
    ///
    /// Implementations backed by `rand` panic when `n` is zero.
    fn next_in_range(&mut self, n: u32) -> u32;
}

impl<R: RngCore + ?Sized> OutcomeGenerator for R {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.gen_range(0..n)
    }
}

/// Replays a fixed list of draws, cycling once exhausted.
///
/// Values are stored as die faces (`1..=n`) because that is how scripted games
/// read; `next_in_range` hands back `face - 1` reduced into the range.
#[derive(Debug, Clone)]
pub struct ScriptedOutcomes {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedOutcomes {
    /// Script a sequence of die faces.
    ///
    /// # Panics
    ///
    /// Panics when `faces` is empty; an empty script has nothing to replay.
    #[must_use]
    pub fn faces(faces: &[u32]) -> Self {
        assert!(!faces.is_empty(), "scripted outcomes need at least one face");
        Self {
            faces: faces.to_vec(),
            cursor: 0,
        }
    }

    /// Faces not yet drawn in the current cycle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len() - self.cursor
    }

    fn next_face(&mut self) -> u32 {
        if self.cursor == self.faces.len() {
            self.cursor = 0;
        }
        let face = self.faces[self.cursor];
        self.cursor += 1;
        face
    }
}

impl OutcomeGenerator for ScriptedOutcomes {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.next_face().saturating_sub(1) % n.max(1)
    }
}

/// Wraps a generator and counts how many draws were taken from it.
#[derive(Debug, Clone)]
pub struct CountingGenerator<G> {
    inner: G,
    draws: u64,
}

impl<G: OutcomeGenerator> CountingGenerator<G> {
    #[must_use]
    pub const fn new(inner: G) -> Self {
        Self { inner, draws: 0 }
    }

    /// Number of draw calls performed against this generator.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    #[must_use]
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: OutcomeGenerator> OutcomeGenerator for CountingGenerator<G> {
    fn next_in_range(&mut self, n: u32) -> u32 {
        self.draws = self.draws.saturating_add(1);
        self.inner.next_in_range(n)
    }
}
