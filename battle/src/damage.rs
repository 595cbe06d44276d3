//! Damage formula with random variance

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MatchupError;
use crate::types::DEFAULT_LEVEL;

/// Lowest variance factor
pub const ROLL_MIN: f64 = 0.85;

/// Highest variance factor
pub const ROLL_MAX: f64 = 1.00;

/// The 16 discrete percentage rolls of the in-game mechanic
const DISCRETE_ROLLS: std::ops::RangeInclusive<u64> = 85..=100;

/// How the variance factor is chosen for each damage calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variance {
    /// One uniform draw from `[0.85, 1.00]` per call
    #[default]
    Random,
    /// Mean over the 16 discrete rolls; repeatable
    Expected,
}

impl Variance {
    /// Parse from a config string (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "random" => Some(Variance::Random),
            "expected" => Some(Variance::Expected),
            _ => None,
        }
    }
}

/// Base damage before variance and multipliers
///
/// ```text
/// floor(floor(floor(level*2/5 + 2) * power * attack / defence) / 50 + 2)
/// ```
///
/// Intermediate products saturate, and a result too large for `u32`
/// saturates at `u32::MAX`; only extreme power or stat values get there.
pub fn raw_damage(power: u32, attack: u32, defence: u32, level: u32) -> Result<u32, MatchupError> {
    if defence == 0 {
        return Err(MatchupError::Division);
    }

    let level_factor = u64::from(level) * 2 / 5 + 2;
    let scaled = level_factor
        .saturating_mul(u64::from(power))
        .saturating_mul(u64::from(attack))
        / u64::from(defence);
    let damage = scaled / 50 + 2;

    Ok(u32::try_from(damage).unwrap_or(u32::MAX))
}

/// Inclusive bounds any variance roll can produce
pub fn damage_range(
    power: u32,
    attack: u32,
    defence: u32,
    multiplier: f64,
    level: u32,
) -> Result<(u32, u32), MatchupError> {
    let raw = raw_damage(power, attack, defence, level)?;
    Ok((
        apply_multiplier(roll(raw, ROLL_MIN), multiplier),
        apply_multiplier(roll(raw, ROLL_MAX), multiplier),
    ))
}

fn roll(raw: u32, factor: f64) -> u32 {
    (f64::from(raw) * factor).floor() as u32
}

fn apply_multiplier(damage: u32, multiplier: f64) -> u32 {
    (multiplier * f64::from(damage)).floor() as u32
}

/// Damage calculator holding its own variance source
///
/// With [`Variance::Random`] every call draws a fresh sample, so identical
/// inputs may give different results.
#[derive(Debug, Clone)]
pub struct DamageModel {
    variance: Variance,
    level: u32,
    rng: StdRng,
}

impl DamageModel {
    /// Random variance seeded from the OS
    pub fn random() -> Self {
        Self::with_rng(Variance::Random, StdRng::from_entropy())
    }

    /// Random variance with a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(Variance::Random, StdRng::seed_from_u64(seed))
    }

    /// Deterministic mean over the discrete rolls
    pub fn expected() -> Self {
        Self::with_rng(Variance::Expected, StdRng::seed_from_u64(0))
    }

    fn with_rng(variance: Variance, rng: StdRng) -> Self {
        Self {
            variance,
            level: DEFAULT_LEVEL,
            rng,
        }
    }

    /// Attacker level used by the formula (default 50)
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Damage after variance and `multiplier`, each step floored
    pub fn damage(
        &mut self,
        power: u32,
        attack: u32,
        defence: u32,
        multiplier: f64,
    ) -> Result<u32, MatchupError> {
        let raw = raw_damage(power, attack, defence, self.level)?;

        let damage = match self.variance {
            Variance::Random => {
                let factor = self.rng.gen_range(ROLL_MIN..=ROLL_MAX);
                apply_multiplier(roll(raw, factor), multiplier)
            }
            Variance::Expected => {
                let total: u64 = DISCRETE_ROLLS
                    .map(|percent| {
                        let varied = (u64::from(raw) * percent / 100) as u32;
                        u64::from(apply_multiplier(varied, multiplier))
                    })
                    .sum();
                (total / DISCRETE_ROLLS.count() as u64) as u32
            }
        };

        Ok(damage)
    }
}

impl Default for DamageModel {
    fn default() -> Self {
        Self::random()
    }
}
