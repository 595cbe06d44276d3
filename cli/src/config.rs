//! CLI runtime configuration
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use elepoke_battle::{DamageModel, Variance};

/// Data file used when `ELEPOKE_DATA` is unset
pub const DEFAULT_DATA_PATH: &str = "data/pokemon.csv";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_path: PathBuf,
    pub seed: Option<u64>,
    pub variance: Variance,
    pub algorithm: u8,
    pub power: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: None,
            variance: Variance::Random,
            algorithm: 0,
            power: 100,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ELEPOKE_DATA` - Species CSV path (default: data/pokemon.csv)
    /// - `ELEPOKE_SEED` - Seed for the damage variance RNG (default: OS entropy)
    /// - `ELEPOKE_DAMAGE_MODE` - `random` or `expected` (default: random)
    /// - `ELEPOKE_ALGORITHM` - Scoring algorithm number (default: 0)
    /// - `ELEPOKE_POWER` - Move power (default: 100)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = var("ELEPOKE_DATA").filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }

        config.seed = parse_var(&var, "ELEPOKE_SEED");

        if let Some(mode) = var("ELEPOKE_DAMAGE_MODE") {
            match Variance::from_name(&mode) {
                Some(variance) => config.variance = variance,
                None => tracing::warn!(value = %mode, "Ignoring unknown ELEPOKE_DAMAGE_MODE"),
            }
        }

        if let Some(algorithm) = parse_var(&var, "ELEPOKE_ALGORITHM") {
            config.algorithm = algorithm;
        }

        if let Some(power) = parse_var(&var, "ELEPOKE_POWER") {
            config.power = power;
        }

        config
    }

    /// Damage model for the configured variance mode
    pub fn damage_model(&self) -> DamageModel {
        match (self.variance, self.seed) {
            (Variance::Expected, _) => DamageModel::expected(),
            (Variance::Random, Some(seed)) => DamageModel::seeded(seed),
            (Variance::Random, None) => DamageModel::random(),
        }
    }
}

fn parse_var<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}
