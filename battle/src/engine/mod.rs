//! Roster matchup evaluation

mod matchup;
mod roster;

pub use matchup::{Algorithm, MatchupEngine, MatchupEntry, MatchupResult};
pub use roster::{ROSTER_CAPACITY, Roster, is_blank};
