//! Matchup evaluation for creature rosters.
//!
//! Given two rosters of up to six creatures, this crate estimates how much
//! damage each creature deals to the opposing roster with its best same-type
//! move, and ranks each roster by that estimate.
//!
//! # Overview
//!
//! `elepoke-battle` sits between a base-stat data source and the request
//! contract in `elepoke-protocol`:
//!
//! ```text
//! BaseStatProvider (species records)
//!        │
//!        ▼
//! compute_stats ─► DamageModel ─► MatchupEngine ← THIS CRATE
//!        │
//!        ▼
//! elepoke-protocol (FitRequest / FitResponse)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - creature types with the [`TYPE_CHART`] effectiveness table
//! - [`BaseStats`], [`EffortValues`], [`ComputedStats`] - stat derivation via
//!   [`compute_stats`]
//! - [`DamageModel`] - the damage formula with random or expected variance
//! - [`BaseStatProvider`] - lookup of species records by name
//! - [`MatchupEngine`] - rosters, evaluation and ranking
//!
//! # Example Usage
//!
//! ```ignore
//! use elepoke_battle::{DamageModel, MatchupEngine, SpeciesTable};
//!
//! let table: SpeciesTable = load_species();
//! let mut engine = MatchupEngine::new(&table).with_damage_model(DamageModel::expected());
//!
//! engine.append(["Charizard", "Pikachu"], ["Blastoise"], true);
//! let result = engine.evaluate()?;
//!
//! for entry in &result.own {
//!     println!("#{} {} ({})", entry.rank, entry.name, entry.evaluation);
//! }
//! ```

pub mod damage;
pub mod engine;
pub mod error;
pub mod provider;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use damage::{DamageModel, Variance, damage_range, raw_damage};
pub use engine::{Algorithm, MatchupEngine, MatchupEntry, MatchupResult, ROSTER_CAPACITY, Roster};
pub use error::MatchupError;
pub use provider::{BaseStatProvider, SpeciesTable};
pub use query::{AttackMode, Combatant, best_same_type_damage};
pub use types::{
    BaseStatRecord, BaseStats, ComputedStats, EffortValues, TYPE_CHART, Type, compute_stats,
    effectiveness,
};

// Re-export the wire types the engine converts into
pub use elepoke_protocol::{FitRequest, FitResponse, RankedEntry};
