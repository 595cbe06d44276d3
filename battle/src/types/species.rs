//! Species base-stat records

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Base-stat record for one species, as supplied by a data provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStatRecord {
    /// Species name, the provider's lookup key
    pub name: String,

    pub base: BaseStats,

    pub primary_type: Type,

    /// `None` for single-typed species
    pub secondary_type: Option<Type>,
}

impl BaseStatRecord {
    pub fn new(
        name: impl Into<String>,
        base: BaseStats,
        primary_type: Type,
        secondary_type: Option<Type>,
    ) -> Self {
        Self {
            name: name.into(),
            base,
            primary_type,
            secondary_type,
        }
    }

    /// One or two types, primary first
    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        std::iter::once(self.primary_type).chain(self.secondary_type)
    }
}
