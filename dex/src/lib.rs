//! CSV species data for the matchup engine.
//!
//! Each row holds one species:
//!
//! ```text
//! name,h,a,b,c,d,s,type1,type2
//! Charizard,78,84,78,109,85,100,Fire,Flying
//! Blastoise,79,83,100,85,105,78,Water,
//! ```
//!
//! Columns may appear in any order and extra columns are ignored. Type names
//! are read with [`Type::from_name`], so English and Japanese names both
//! work. An empty `type2` marks a single-typed species.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use elepoke_battle::{BaseStatRecord, BaseStats, SpeciesTable, Type};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DexError {
    #[error("Failed to open species data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed species data: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown type on line {line}: {value}")]
    UnknownType { line: u64, value: String },

    #[error("Duplicate species on line {line}: {name}")]
    DuplicateName { line: u64, name: String },

    #[error("Invalid record on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}

/// Markers some data sets use for "no second type"
const NO_TYPE: &[&str] = &["", "-", "-1", "none", "なし"];

#[derive(Debug, Deserialize)]
struct SpeciesRow {
    name: String,
    h: u32,
    a: u32,
    b: u32,
    c: u32,
    d: u32,
    s: u32,
    type1: String,
    #[serde(default)]
    type2: Option<String>,
}

impl SpeciesRow {
    fn into_record(self, line: u64) -> Result<BaseStatRecord, DexError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DexError::InvalidRecord {
                line,
                reason: "species name is empty".into(),
            });
        }

        let primary_type = parse_type(&self.type1, line)?;
        let secondary_type = match self.type2.as_deref().map(str::trim) {
            Some(value) if !NO_TYPE.contains(&value.to_lowercase().as_str()) => {
                Some(parse_type(value, line)?)
            }
            _ => None,
        };

        Ok(BaseStatRecord::new(
            name,
            BaseStats::new(self.h, self.a, self.b, self.c, self.d, self.s),
            primary_type,
            secondary_type,
        ))
    }
}

fn parse_type(value: &str, line: u64) -> Result<Type, DexError> {
    Type::from_name(value).ok_or_else(|| DexError::UnknownType {
        line,
        value: value.to_string(),
    })
}

/// Load species records from a CSV file
pub fn load_species_csv(path: impl AsRef<Path>) -> Result<SpeciesTable, DexError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = read_species(file)?;
    tracing::info!(
        species = table.len(),
        path = %path.display(),
        "Loaded species data"
    );
    Ok(table)
}

/// Read species records from any CSV source
///
/// Fails on the first malformed row; a data set with a bad row is never
/// partially loaded.
pub fn read_species<R: io::Read>(reader: R) -> Result<SpeciesTable, DexError> {
    let mut rows = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rows.headers()?.clone();
    let mut table = SpeciesTable::new();
    let mut raw = csv::StringRecord::new();

    while rows.read_record(&mut raw)? {
        let line = raw.position().map_or(0, |position| position.line());
        let row: SpeciesRow = raw.deserialize(Some(&headers))?;
        let record = row.into_record(line)?;

        if table.contains(&record.name) {
            tracing::warn!(line, name = %record.name, "Duplicate species name");
            return Err(DexError::DuplicateName {
                line,
                name: record.name,
            });
        }
        table.insert(record);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use elepoke_battle::BaseStatProvider;

    use super::*;

    const BUNDLED: &str = include_str!("../../data/pokemon.csv");

    #[test]
    fn test_read_bundled_data() {
        let table = read_species(BUNDLED.as_bytes()).unwrap();

        let charizard = table.lookup("Charizard").unwrap();
        assert_eq!(charizard.base, BaseStats::new(78, 84, 78, 109, 85, 100));
        assert_eq!(charizard.primary_type, Type::Fire);
        assert_eq!(charizard.secondary_type, Some(Type::Flying));

        let blastoise = table.lookup("Blastoise").unwrap();
        assert_eq!(blastoise.secondary_type, None);
        assert!(table.len() >= 20);
    }

    #[test]
    fn test_japanese_types_and_extra_columns() {
        let data = "\
,name,h,a,b,c,d,s,sum,type1,type2
0,リザードン,78,84,78,109,85,100,534,ほのお,ひこう
1,カメックス,79,83,100,85,105,78,530,みず,なし
";
        let table = read_species(data.as_bytes()).unwrap();

        let charizard = table.lookup("リザードン").unwrap();
        assert_eq!(charizard.primary_type, Type::Fire);
        assert_eq!(charizard.secondary_type, Some(Type::Flying));
        assert_eq!(table.lookup("カメックス").unwrap().secondary_type, None);
    }

    #[test]
    fn test_missing_type2_column() {
        let data = "name,h,a,b,c,d,s,type1\nPikachu,35,55,40,50,50,90,electric\n";
        let table = read_species(data.as_bytes()).unwrap();

        let pikachu = table.lookup("Pikachu").unwrap();
        assert_eq!(pikachu.primary_type, Type::Electric);
        assert_eq!(pikachu.secondary_type, None);
    }

    #[test]
    fn test_unknown_type() {
        let data = "name,h,a,b,c,d,s,type1,type2\nAgumon,1,1,1,1,1,1,Digital,\n";
        let err = read_species(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DexError::UnknownType { line: 2, ref value } if value == "Digital"));
    }

    #[test]
    fn test_duplicate_name() {
        let data = "\
name,h,a,b,c,d,s,type1,type2
Pikachu,35,55,40,50,50,90,Electric,
Pikachu,35,55,40,50,50,90,Electric,
";
        let err = read_species(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DexError::DuplicateName { line: 3, .. }));
    }

    #[test]
    fn test_line_numbers_count_blank_lines() {
        let data = "\
name,h,a,b,c,d,s,type1,type2
Pikachu,35,55,40,50,50,90,Electric,

Raichu,60,90,55,90,80,110,Electric,

Agumon,1,1,1,1,1,1,Digital,
";
        let err = read_species(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DexError::UnknownType { line: 6, .. }));
    }

    #[test]
    fn test_blank_name() {
        let data = "name,h,a,b,c,d,s,type1,type2\n ,35,55,40,50,50,90,Electric,\n";
        let err = read_species(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DexError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_bad_number() {
        let data = "name,h,a,b,c,d,s,type1,type2\nPikachu,lots,55,40,50,50,90,Electric,\n";

        assert!(matches!(
            read_species(data.as_bytes()),
            Err(DexError::Csv(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_species_csv("does/not/exist.csv").unwrap_err();

        assert!(matches!(err, DexError::Io { .. }));
    }
}
