//! Base stats, effort allocation and the derived in-battle stats

use crate::error::MatchupError;

/// Level every stat is computed at
pub const DEFAULT_LEVEL: u32 = 50;

/// Individual potential, fixed at the maximum for every stat
pub const MAX_IV: u32 = 31;

/// Largest effort value a single stat may receive
pub const MAX_EFFORT: u32 = 252;

/// Per-species base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl BaseStats {
    pub fn new(hp: u32, atk: u32, def: u32, spa: u32, spd: u32, spe: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }
}

/// Effort allocation per stat
///
/// Values are not range-checked by [`EffortValues::new`]; larger values
/// simply stretch the stat formula. Use [`EffortValues::checked`] to reject
/// anything outside `0..=252`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffortValues {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl EffortValues {
    pub fn new(hp: u32, atk: u32, def: u32, spa: u32, spd: u32, spe: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            spa,
            spd,
            spe,
        }
    }

    /// Create effort values, failing if any stat exceeds 252
    pub fn checked(
        hp: u32,
        atk: u32,
        def: u32,
        spa: u32,
        spd: u32,
        spe: u32,
    ) -> Result<Self, MatchupError> {
        let evs = Self::new(hp, atk, def, spa, spd, spe);
        evs.validate()?;
        Ok(evs)
    }

    /// Same value on every stat
    pub fn uniform(value: u32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    pub fn validate(&self) -> Result<(), MatchupError> {
        let fields = [
            ("hp", self.hp),
            ("atk", self.atk),
            ("def", self.def),
            ("spa", self.spa),
            ("spd", self.spd),
            ("spe", self.spe),
        ];
        match fields.into_iter().find(|(_, value)| *value > MAX_EFFORT) {
            Some((stat, value)) => Err(MatchupError::InvalidRange { stat, value }),
            None => Ok(()),
        }
    }
}

impl Default for EffortValues {
    fn default() -> Self {
        Self::uniform(MAX_EFFORT)
    }
}

/// Final stats at a given level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

/// Derive in-battle stats from base stats.
///
/// Individual potential is fixed at 31 and no nature modifier is applied:
///
/// ```text
/// HP    = (2*base + 31 + ev/4) * level/100 + level + 10
/// other = (2*base + 31 + ev/4) * level/100 + 5
/// ```
///
/// Every division floors. A result too large for `u32` saturates at
/// `u32::MAX`.
pub fn compute_stats(base: &BaseStats, level: u32, evs: &EffortValues) -> ComputedStats {
    let level = u64::from(level);
    let scaled = |base: u32, ev: u32| {
        (u64::from(base) * 2 + u64::from(MAX_IV) + u64::from(ev) / 4).saturating_mul(level) / 100
    };
    let stat = |base: u32, ev: u32| saturate(scaled(base, ev) + 5);

    ComputedStats {
        hp: saturate(scaled(base.hp, evs.hp) + level + 10),
        atk: stat(base.atk, evs.atk),
        def: stat(base.def, evs.def),
        spa: stat(base.spa, evs.spa),
        spd: stat(base.spd, evs.spd),
        spe: stat(base.spe, evs.spe),
    }
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
