//! Centralized rule and tuning constants for Pig.
//!
//! These values define the default game and tournament shape. Configuration
//! structs fall back to them when a field is omitted.

// Rules --------------------------------------------------------------------
/// Banked plus in-turn points at which a game ends.
pub const WIN_THRESHOLD: u32 = 100;
/// Number of faces on the die.
pub const DIE_FACES: u32 = 6;
/// The face that forfeits the current turn.
pub const PIG_OUT_FACE: u32 = 1;
/// Number of sides seated at the table.
pub const SIDES: u32 = 2;

// Tournament ---------------------------------------------------------------
/// Games simulated for every pair of strategies.
pub const GAMES_PER_SERIES: u32 = 100;
/// Seed used when the caller does not supply one.
pub const DEFAULT_TOURNAMENT_SEED: u64 = 1337;
/// Per-game action cap applied by tournaments unless explicitly disabled.
pub const DEFAULT_MAX_ACTIONS: u64 = 1_000_000;

// Seed derivation ----------------------------------------------------------
pub(crate) const PAIRING_DOMAIN: &str = "pairing";
