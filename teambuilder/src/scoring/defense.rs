use std::collections::BTreeSet;

use serde::Serialize;
use teambuilder_data::{
    CreatureData,
    Type,
    TypeChart,
    TypeEffectiveness,
};

/// Combined weakness multiplier above which a candidate is penalized.
pub const WEAKNESS_PENALTY_THRESHOLD: f64 = 2.0;
/// Penalty per unit of weakness multiplier above [`WEAKNESS_PENALTY_THRESHOLD`].
pub const WEAKNESS_PENALTY_FACTOR: f64 = 0.5;

pub const RESISTANCE_SCORE: f64 = 1.0;
pub const IMMUNITY_SCORE: f64 = 2.0;
pub const WEAKNESS_SCORE: f64 = -1.5;

/// Scores how much the candidate's types diversify the team.
///
/// Each of the candidate's types contributes `1 / 2^k`, where `k` is the number of team members
/// that already have the type.
pub fn type_diversity_score(candidate: &CreatureData, team: &[&CreatureData]) -> f64 {
    candidate
        .types()
        .map(|typ| {
            let holders = team.iter().filter(|member| member.has_type(typ)).count();
            1.0 / 2f64.powi(holders as i32)
        })
        .sum()
}

/// The highest combined multiplier any attacking type deals to the candidate.
///
/// Never less than neutral.
pub fn max_weakness_multiplier(
    type_chart: &TypeChart,
    attackers: &BTreeSet<Type>,
    candidate: &CreatureData,
) -> f64 {
    attackers
        .iter()
        .map(|attacker| type_chart.combined_multiplier(*attacker, candidate.types()) as f64)
        .fold(1.0, f64::max)
}

/// The penalty for a combined weakness multiplier.
pub fn weakness_penalty(max_multiplier: f64) -> f64 {
    if max_multiplier > WEAKNESS_PENALTY_THRESHOLD {
        (max_multiplier - WEAKNESS_PENALTY_THRESHOLD) * WEAKNESS_PENALTY_FACTOR
    } else {
        0.0
    }
}

/// Scores the defensive value the candidate brings to the team.
///
/// Type diversity less the penalty for the candidate's worst weakness, floored at zero.
pub fn defensive_coverage_score(
    type_chart: &TypeChart,
    attackers: &BTreeSet<Type>,
    candidate: &CreatureData,
    team: &[&CreatureData],
) -> f64 {
    let diversity = type_diversity_score(candidate, team);
    let penalty = weakness_penalty(max_weakness_multiplier(type_chart, attackers, candidate));
    (diversity - penalty).max(0.0)
}

/// Counts of how every attacking type matches up against a creature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DefensiveProfile {
    pub weaknesses: usize,
    pub resistances: usize,
    pub immunities: usize,
}

impl DefensiveProfile {
    pub fn new(type_chart: &TypeChart, attackers: &BTreeSet<Type>, creature: &CreatureData) -> Self {
        let mut profile = Self::default();
        for attacker in attackers {
            match type_chart.effectiveness(*attacker, creature.types()) {
                TypeEffectiveness::SuperEffective => profile.weaknesses += 1,
                TypeEffectiveness::Resisted => profile.resistances += 1,
                TypeEffectiveness::Immune => profile.immunities += 1,
                TypeEffectiveness::Neutral => (),
            }
        }
        profile
    }

    /// Rewards resistances and immunities and penalizes weaknesses, floored at zero.
    pub fn score(&self) -> f64 {
        let score = self.resistances as f64 * RESISTANCE_SCORE
            + self.immunities as f64 * IMMUNITY_SCORE
            + self.weaknesses as f64 * WEAKNESS_SCORE;
        score.max(0.0)
    }
}

/// Scores the candidate's typing on its own, regardless of the team.
pub fn intrinsic_defensive_score(
    type_chart: &TypeChart,
    attackers: &BTreeSet<Type>,
    candidate: &CreatureData,
) -> f64 {
    DefensiveProfile::new(type_chart, attackers, candidate).score()
}
