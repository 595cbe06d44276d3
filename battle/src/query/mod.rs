//! Damage queries between resolved creatures

mod matchup;

pub use matchup::{
    AttackMode, Combatant, DEFAULT_POWER, STAB, best_same_type_damage, stab_multiplier,
};
