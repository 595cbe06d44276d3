//! Errors raised while evaluating a matchup

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchupError {
    /// No base-stat record exists for the creature name
    #[error("No base-stat record for creature: {0}")]
    NotFound(String),

    #[error("Effort value for {stat} out of range (0..=252): {value}")]
    InvalidRange { stat: &'static str, value: u32 },

    /// A defence stat of zero reached the damage formula
    #[error("Defence stat is zero; base-stat data is inconsistent")]
    Division,

    #[error("Unsupported scoring algorithm: {0}")]
    UnsupportedAlgorithm(u8),
}
