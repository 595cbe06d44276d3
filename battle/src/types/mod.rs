//! Domain types for matchup evaluation

mod pokemon_type;
mod species;
mod stats;

pub use pokemon_type::{TYPE_CHART, Type, effectiveness};
pub use species::BaseStatRecord;
pub use stats::{
    BaseStats, ComputedStats, DEFAULT_LEVEL, EffortValues, MAX_EFFORT, MAX_IV, compute_stats,
};
