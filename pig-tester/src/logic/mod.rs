pub mod acceptance;
pub mod reports;
pub mod roster;
pub mod runner;
pub mod seeds;

pub use acceptance::validate_standings;
pub use roster::build_roster;
pub use runner::{TournamentRunner, TournamentSummary};
pub use seeds::resolve_seed_token;
