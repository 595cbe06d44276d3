//! Base-stat lookup

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::MatchupError;
use crate::types::BaseStatRecord;

/// Read-only source of species base-stat records, keyed by name
///
/// Implementations hold one record per unique name. The engine only ever
/// reads from a provider, so one provider can back any number of engines.
pub trait BaseStatProvider {
    fn get(&self, name: &str) -> Option<&BaseStatRecord>;

    /// Like [`get`](Self::get), but a missing name is an error
    fn lookup(&self, name: &str) -> Result<&BaseStatRecord, MatchupError> {
        self.get(name)
            .ok_or_else(|| MatchupError::NotFound(name.to_string()))
    }
}

impl<P: BaseStatProvider + ?Sized> BaseStatProvider for &P {
    fn get(&self, name: &str) -> Option<&BaseStatRecord> {
        (**self).get(name)
    }
}

impl<P: BaseStatProvider + ?Sized> BaseStatProvider for Arc<P> {
    fn get(&self, name: &str) -> Option<&BaseStatRecord> {
        (**self).get(name)
    }
}

/// In-memory provider
#[derive(Debug, Clone, Default)]
pub struct SpeciesTable {
    species: HashMap<String, BaseStatRecord>,
}

impl SpeciesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, returning the one it replaced
    pub fn insert(&mut self, record: BaseStatRecord) -> Option<BaseStatRecord> {
        self.species.insert(record.name.clone(), record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.species.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl BaseStatProvider for SpeciesTable {
    fn get(&self, name: &str) -> Option<&BaseStatRecord> {
        self.species.get(name)
    }
}

impl FromIterator<BaseStatRecord> for SpeciesTable {
    fn from_iter<I: IntoIterator<Item = BaseStatRecord>>(iter: I) -> Self {
        let mut table = Self::new();
        for record in iter {
            table.insert(record);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Type};

    fn blastoise() -> BaseStatRecord {
        BaseStatRecord::new(
            "Blastoise",
            BaseStats::new(79, 83, 100, 85, 105, 78),
            Type::Water,
            None,
        )
    }

    #[test]
    fn test_lookup_found() {
        let table: SpeciesTable = [blastoise()].into_iter().collect();
        let record = table.lookup("Blastoise").unwrap();

        assert_eq!(record.base.def, 100);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_lookup_not_found() {
        let table = SpeciesTable::new();
        let err = table.lookup("Missingno").unwrap_err();

        assert_eq!(err, MatchupError::NotFound("Missingno".into()));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table: SpeciesTable = [blastoise()].into_iter().collect();

        assert!(table.get("blastoise").is_none());
        assert!(table.get("Blastoise ").is_none());
    }

    #[test]
    fn test_shared_provider() {
        let table = Arc::new([blastoise()].into_iter().collect::<SpeciesTable>());
        let by_ref = &*table;

        assert!(table.lookup("Blastoise").is_ok());
        assert!(by_ref.lookup("Blastoise").is_ok());
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = SpeciesTable::new();
        assert!(table.insert(blastoise()).is_none());
        assert!(table.insert(blastoise()).is_some());
        assert_eq!(table.len(), 1);
    }
}
