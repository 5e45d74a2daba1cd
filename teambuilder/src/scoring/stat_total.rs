use serde::Serialize;
use teambuilder_data::{
    CreatureData,
    Stat,
};

use crate::{
    StatBaseline,
    Stats,
};

/// Weight given to the stats a lopsided team is lacking.
pub const EMPHASIS_WEIGHT: f64 = 1.3;
/// How far one side of the team's stats must lead the other before weights shift.
pub const STAT_GAP_THRESHOLD: f64 = 10.0;
/// Scale applied to the weighted stat total.
pub const STAT_TOTAL_SCALE: f64 = 0.01;

/// Super-effective target count at which a creature has high offensive coverage.
pub const HIGH_OFFENSIVE_COVERAGE: usize = 6;
/// Intrinsic defensive score at which a creature has high defensive coverage.
pub const HIGH_DEFENSIVE_COVERAGE: f64 = 7.0;

pub const SYNERGY_BONUS: f64 = 1.1;
pub const SYNERGY_PENALTY: f64 = 0.9;

/// Chooses stat weights that push the team toward balance.
///
/// If the team's defensive stats lead the baseline by more than its offensive stats do (by over
/// [`STAT_GAP_THRESHOLD`]), offensive stats get [`EMPHASIS_WEIGHT`], and vice versa. An empty
/// team has no lean, so all weights are neutral.
pub fn stat_weights(team: &[&CreatureData], baseline: &StatBaseline) -> Stats<f64> {
    let mut weights = Stats::splat(1.0);
    if team.is_empty() {
        return weights;
    }
    let averages = Stats::average(team.iter().map(|member| &member.base_stats));
    let gap = |stats: &[Stat]| averages.sum_of(stats) - baseline.averages.sum_of(stats);
    let offensive_gap = gap(&Stat::OFFENSIVE[..]);
    let defensive_gap = gap(&Stat::DEFENSIVE[..]);

    let emphasized = if defensive_gap > offensive_gap + STAT_GAP_THRESHOLD {
        Stat::OFFENSIVE
    } else if offensive_gap > defensive_gap + STAT_GAP_THRESHOLD {
        Stat::DEFENSIVE
    } else {
        return weights;
    };
    for stat in emphasized {
        weights.set(stat, EMPHASIS_WEIGHT);
    }
    weights
}

/// Sums the creature's base stats, each multiplied by its weight.
pub fn weighted_stat_total(creature: &CreatureData, weights: &Stats<f64>) -> f64 {
    creature
        .base_stats
        .entries()
        .map(|(stat, value)| value as f64 * weights.get(stat))
        .sum()
}

/// Traits of a candidate that decide whether its stats and typing work together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SynergyTraits {
    /// Above-average Attack or Sp. Attack, and above-average Speed.
    pub offensive_statline: bool,
    /// Hits at least [`HIGH_OFFENSIVE_COVERAGE`] types super effectively.
    pub high_offensive_coverage: bool,
    /// Above-average HP, Defense, or Sp. Defense.
    pub defensive_statline: bool,
    /// Intrinsic defensive score of at least [`HIGH_DEFENSIVE_COVERAGE`].
    pub high_defensive_coverage: bool,
}

impl SynergyTraits {
    pub fn new(
        creature: &CreatureData,
        baseline: &StatBaseline,
        super_effective_targets: usize,
        intrinsic_defensive_score: f64,
    ) -> Self {
        let above = |stat: Stat| creature.base_stats.get(stat) as f64 > baseline.get(stat);
        Self {
            offensive_statline: (above(Stat::Atk) || above(Stat::SpAtk)) && above(Stat::Spe),
            high_offensive_coverage: super_effective_targets >= HIGH_OFFENSIVE_COVERAGE,
            defensive_statline: above(Stat::HP) || above(Stat::Def) || above(Stat::SpDef),
            high_defensive_coverage: intrinsic_defensive_score >= HIGH_DEFENSIVE_COVERAGE,
        }
    }

    /// The multiplier applied to the weighted stat total.
    ///
    /// Stats backed by matching typing earn [`SYNERGY_BONUS`]. A stat line or typing strength
    /// without its partner earns [`SYNERGY_PENALTY`].
    ///
    /// The penalty pairs each stat line with the opposite typing strength and fires when exactly
    /// one of a pair holds. An offensive stat line with high defensive coverage, or a defensive
    /// stat line with high offensive coverage, is neutral rather than penalized.
    pub fn multiplier(&self) -> f64 {
        if (self.offensive_statline && self.high_offensive_coverage)
            || (self.defensive_statline && self.high_defensive_coverage)
        {
            SYNERGY_BONUS
        } else if (self.offensive_statline ^ self.high_defensive_coverage)
            || (self.defensive_statline ^ self.high_offensive_coverage)
        {
            SYNERGY_PENALTY
        } else {
            1.0
        }
    }
}

/// Scores the candidate's stats against the team's needs.
pub fn stat_total_score(candidate: &CreatureData, weights: &Stats<f64>, synergy: f64) -> f64 {
    weighted_stat_total(candidate, weights) * synergy * STAT_TOTAL_SCALE
}
