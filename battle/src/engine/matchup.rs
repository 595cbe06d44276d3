//! MatchupEngine - ranks two rosters by expected same-type damage

use elepoke_protocol::{FitRequest, FitResponse, RankedEntry};

use crate::damage::DamageModel;
use crate::error::MatchupError;
use crate::provider::BaseStatProvider;
use crate::query::{Combatant, DEFAULT_POWER, best_same_type_damage};
use crate::types::{DEFAULT_LEVEL, EffortValues, compute_stats};

use super::roster::{Roster, is_blank};

/// Scoring strategy selected by [`MatchupEngine::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Mean best same-type damage against every opposing creature
    SameTypeAverage,
}

impl TryFrom<u8> for Algorithm {
    type Error = MatchupError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Algorithm::SameTypeAverage),
            other => Err(MatchupError::UnsupportedAlgorithm(other)),
        }
    }
}

/// One roster slot after evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupEntry {
    /// Position in the roster
    pub index: usize,
    pub name: String,
    /// Floored mean damage against the opposing roster
    pub evaluation: u32,
    /// 1-based rank within the roster, 0 for a blank slot
    pub rank: usize,
}

/// Evaluated rosters, each in roster order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupResult {
    pub own: Vec<MatchupEntry>,
    pub opponent: Vec<MatchupEntry>,
}

impl MatchupResult {
    pub fn is_empty(&self) -> bool {
        self.own.is_empty() && self.opponent.is_empty()
    }

    /// Best-ranked own creature, if any slot is filled
    pub fn best_own(&self) -> Option<&MatchupEntry> {
        self.own.iter().find(|entry| entry.rank == 1)
    }
}

impl From<&MatchupEntry> for RankedEntry {
    fn from(entry: &MatchupEntry) -> Self {
        RankedEntry {
            index: entry.index,
            name: entry.name.clone(),
            evaluation: entry.evaluation,
            rank: entry.rank,
        }
    }
}

impl From<&MatchupResult> for FitResponse {
    fn from(result: &MatchupResult) -> Self {
        FitResponse {
            mypoke: result.own.iter().map(RankedEntry::from).collect(),
            oppoke: result.opponent.iter().map(RankedEntry::from).collect(),
        }
    }
}

/// Owns two rosters and the last evaluation over them
///
/// The engine is not internally synchronised; use one instance per
/// concurrent evaluation. The provider is only read, so it can be shared
/// between engines (pass `&table` or an `Arc`).
#[derive(Debug, Clone)]
pub struct MatchupEngine<P> {
    provider: P,
    own: Roster,
    opponent: Roster,
    result: MatchupResult,
    damage: DamageModel,
    level: u32,
    effort: EffortValues,
    power: u32,
}

impl<P: BaseStatProvider> MatchupEngine<P> {
    /// Create an engine with random damage variance, level 50, full effort
    /// and 100-power moves
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            own: Roster::new(),
            opponent: Roster::new(),
            result: MatchupResult::default(),
            damage: DamageModel::random(),
            level: DEFAULT_LEVEL,
            effort: EffortValues::default(),
            power: DEFAULT_POWER,
        }
    }

    pub fn with_damage_model(mut self, damage: DamageModel) -> Self {
        self.damage = damage.with_level(self.level);
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self.damage = self.damage.with_level(level);
        self
    }

    pub fn with_effort(mut self, effort: EffortValues) -> Self {
        self.effort = effort;
        self
    }

    pub fn with_power(mut self, power: u32) -> Self {
        self.power = power;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn own(&self) -> &Roster {
        &self.own
    }

    pub fn opponent(&self) -> &Roster {
        &self.opponent
    }

    /// Last computed result (empty before the first evaluation)
    pub fn result(&self) -> &MatchupResult {
        &self.result
    }

    /// Add creatures to both rosters
    ///
    /// With `reset`, both rosters are cleared first. Each roster then keeps
    /// only its six most recent names.
    pub fn append<A, B>(&mut self, own: A, opponent: B, reset: bool)
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        if reset {
            self.own.clear();
            self.opponent.clear();
        }

        self.own.extend(own);
        self.opponent.extend(opponent);

        tracing::debug!(
            own = self.own.len(),
            opponent = self.opponent.len(),
            reset,
            "Rosters updated"
        );
    }

    /// Best same-type damage `attacker` deals to `defender`
    pub fn best_same_type_damage(
        &mut self,
        attacker: &str,
        defender: &str,
        power: u32,
    ) -> Result<u32, MatchupError> {
        let attacker = resolve(&self.provider, attacker, self.level, &self.effort)?;
        let defender = resolve(&self.provider, defender, self.level, &self.effort)?;
        best_same_type_damage(&attacker, &defender, power, &mut self.damage)
    }

    /// Score both rosters against each other and rank each side
    ///
    /// Recomputes everything from the current rosters. On error the stored
    /// result is left untouched.
    pub fn evaluate(&mut self) -> Result<&MatchupResult, MatchupError> {
        tracing::info!(
            own = self.own.len(),
            opponent = self.opponent.len(),
            "Evaluating matchup"
        );

        let own = resolve_roster(&self.provider, &self.own, self.level, &self.effort)?;
        let opponent = resolve_roster(&self.provider, &self.opponent, self.level, &self.effort)?;

        let mut own_entries = score_side(&self.own, &own, &opponent, self.power, &mut self.damage)?;
        let mut opponent_entries =
            score_side(&self.opponent, &opponent, &own, self.power, &mut self.damage)?;

        assign_ranks(&mut own_entries);
        assign_ranks(&mut opponent_entries);

        self.result = MatchupResult {
            own: own_entries,
            opponent: opponent_entries,
        };
        Ok(&self.result)
    }

    /// Evaluate with the scoring strategy numbered `algorithm`
    pub fn run(&mut self, algorithm: u8) -> Result<&MatchupResult, MatchupError> {
        match Algorithm::try_from(algorithm) {
            Ok(Algorithm::SameTypeAverage) => self.evaluate(),
            Err(e) => {
                tracing::warn!(algorithm, "Rejected unsupported scoring algorithm");
                Err(e)
            }
        }
    }

    /// Replace both rosters with the request's and evaluate them
    pub fn fit(&mut self, request: &FitRequest) -> Result<FitResponse, MatchupError> {
        self.append(
            request.mypoke.iter().cloned(),
            request.oppoke.iter().cloned(),
            true,
        );
        self.run(0).map(FitResponse::from)
    }
}

fn resolve<'a, P: BaseStatProvider>(
    provider: &'a P,
    name: &str,
    level: u32,
    effort: &EffortValues,
) -> Result<Combatant<'a>, MatchupError> {
    let record = provider.lookup(name)?;
    Ok(Combatant::new(
        record,
        compute_stats(&record.base, level, effort),
    ))
}

/// Resolve every filled slot, `None` for blanks
fn resolve_roster<'a, P: BaseStatProvider>(
    provider: &'a P,
    roster: &Roster,
    level: u32,
    effort: &EffortValues,
) -> Result<Vec<Option<Combatant<'a>>>, MatchupError> {
    roster
        .iter()
        .map(|name| {
            if is_blank(name) {
                Ok(None)
            } else {
                resolve(provider, name, level, effort).map(Some)
            }
        })
        .collect()
}

fn score_side(
    roster: &Roster,
    attackers: &[Option<Combatant<'_>>],
    defenders: &[Option<Combatant<'_>>],
    power: u32,
    model: &mut DamageModel,
) -> Result<Vec<MatchupEntry>, MatchupError> {
    let mut entries = Vec::with_capacity(attackers.len());

    for (index, (name, attacker)) in roster.iter().zip(attackers).enumerate() {
        let evaluation = match attacker {
            Some(attacker) => {
                let mut total: u64 = 0;
                let mut count: u64 = 0;
                for defender in defenders.iter().flatten() {
                    let damage = best_same_type_damage(attacker, defender, power, model)?;
                    tracing::debug!(
                        attacker = attacker.name(),
                        defender = defender.name(),
                        damage,
                        "Best same-type damage"
                    );
                    total += u64::from(damage);
                    count += 1;
                }
                if count == 0 { 0 } else { (total / count) as u32 }
            }
            None => 0,
        };

        entries.push(MatchupEntry {
            index,
            name: name.to_string(),
            evaluation,
            rank: 0,
        });
    }

    Ok(entries)
}

/// Rank filled slots 1..k by descending evaluation, leaving entries in
/// roster order
///
/// Equal evaluations keep roster order. Blank slots get rank 0.
pub(crate) fn assign_ranks(entries: &mut [MatchupEntry]) {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by(|&a, &b| entries[b].evaluation.cmp(&entries[a].evaluation));

    let mut next = 1;
    for i in order {
        if is_blank(&entries[i].name) {
            entries[i].rank = 0;
        } else {
            entries[i].rank = next;
            next += 1;
        }
    }
}
