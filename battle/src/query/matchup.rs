//! Same-type attack damage between two resolved creatures

use crate::damage::DamageModel;
use crate::error::MatchupError;
use crate::types::{BaseStatRecord, ComputedStats, Type};

/// Same-type attack bonus
pub const STAB: f64 = 1.5;

/// Move power assumed when none is given
pub const DEFAULT_POWER: u32 = 100;

/// A species record paired with its computed stats
#[derive(Debug, Clone, Copy)]
pub struct Combatant<'a> {
    pub record: &'a BaseStatRecord,
    pub stats: ComputedStats,
}

impl<'a> Combatant<'a> {
    pub fn new(record: &'a BaseStatRecord, stats: ComputedStats) -> Self {
        Self { record, stats }
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Which attacking stat an attacker uses and the defending stat it meets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackMode {
    Physical { attack: u32, defence: u32 },
    Special { attack: u32, defence: u32 },
}

impl AttackMode {
    /// Physical when the attacker's Attack is at least its Special Attack
    pub fn select(attacker: &ComputedStats, defender: &ComputedStats) -> Self {
        if attacker.atk >= attacker.spa {
            AttackMode::Physical {
                attack: attacker.atk,
                defence: defender.def,
            }
        } else {
            AttackMode::Special {
                attack: attacker.spa,
                defence: defender.spd,
            }
        }
    }

    pub fn attack(&self) -> u32 {
        match self {
            AttackMode::Physical { attack, .. } | AttackMode::Special { attack, .. } => *attack,
        }
    }

    pub fn defence(&self) -> u32 {
        match self {
            AttackMode::Physical { defence, .. } | AttackMode::Special { defence, .. } => *defence,
        }
    }

    pub fn is_physical(&self) -> bool {
        matches!(self, AttackMode::Physical { .. })
    }
}

/// STAB multiplier for a move of `attack_type` against the defender's types
pub fn stab_multiplier(attack_type: Type, defender: &BaseStatRecord) -> f64 {
    defender
        .types()
        .fold(STAB, |multiplier, defend| multiplier * attack_type.effectiveness(defend))
}

/// Highest damage among the attacker's same-type moves
///
/// One move of each of the attacker's types is tried; a single-typed attacker
/// contributes 0 for its empty type slot.
pub fn best_same_type_damage(
    attacker: &Combatant<'_>,
    defender: &Combatant<'_>,
    power: u32,
    model: &mut DamageModel,
) -> Result<u32, MatchupError> {
    let mode = AttackMode::select(&attacker.stats, &defender.stats);

    let mut best = 0;
    for attack_type in attacker.record.types() {
        let multiplier = stab_multiplier(attack_type, defender.record);
        let damage = model.damage(power, mode.attack(), mode.defence(), multiplier)?;
        best = best.max(damage);
    }

    Ok(best)
}
