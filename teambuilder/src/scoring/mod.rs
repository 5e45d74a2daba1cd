//! Scoring of candidates against a partial team.
//!
//! A candidate's score is the sum of its offensive coverage, defensive coverage, and stat total
//! contributions, multiplied by a bonus if the candidate debuted in the game's generation.

mod defense;
mod offense;
mod stat_total;

pub use defense::*;
pub use offense::*;
pub use stat_total::*;

use std::collections::BTreeSet;

use serde::Serialize;
use teambuilder_data::{
    CreatureData,
    Type,
    generation_of_species,
};

use crate::{
    RosterSnapshot,
    StatBaseline,
};

/// Multiplier for candidates whose species debuted in the game's generation.
pub const GENERATION_BONUS: f64 = 1.1;

/// Every component of a candidate's score.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// New super-effective coverage the candidate brings.
    pub offensive: f64,
    /// Type diversity less the candidate's worst weakness.
    pub defensive: f64,
    /// Weighted and scaled stat total, with `synergy` applied.
    pub stat_total: f64,
    /// Synergy multiplier applied to the stat total.
    pub synergy: f64,
    /// Multiplier applied to the sum of the other components.
    pub generation_bonus: f64,
    pub total: f64,
}

/// A candidate with its score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<'c> {
    pub creature: &'c CreatureData,
    pub score: ScoreBreakdown,
}

/// Scores candidates for one game.
///
/// Holds everything that does not depend on the team, so the same scorer is reused for every
/// slot of a build.
pub struct Scorer<'s> {
    snapshot: &'s RosterSnapshot,
    baseline: &'s StatBaseline,
    coverage: TypeCoverage,
    attackers: BTreeSet<Type>,
}

impl<'s> Scorer<'s> {
    pub fn new(snapshot: &'s RosterSnapshot, baseline: &'s StatBaseline) -> Self {
        let type_chart = snapshot.type_chart();
        Self {
            snapshot,
            baseline,
            coverage: TypeCoverage::new(type_chart),
            attackers: type_chart.known_types(),
        }
    }

    pub fn coverage(&self) -> &TypeCoverage {
        &self.coverage
    }

    /// Scores a single candidate against the current team.
    pub fn score(&self, candidate: &CreatureData, team: &[&CreatureData]) -> ScoreBreakdown {
        let type_chart = self.snapshot.type_chart();

        let offensive = offensive_coverage_score(&self.coverage, candidate, team);
        let defensive = defensive_coverage_score(type_chart, &self.attackers, candidate, team);

        let synergy = SynergyTraits::new(
            candidate,
            self.baseline,
            self.coverage.of_creature(candidate).len(),
            intrinsic_defensive_score(type_chart, &self.attackers, candidate),
        )
        .multiplier();
        let weights = stat_weights(team, self.baseline);
        let stat_total = stat_total_score(candidate, &weights, synergy);

        let generation_bonus =
            if generation_of_species(candidate.dex) == Some(self.snapshot.game().generation) {
                GENERATION_BONUS
            } else {
                1.0
            };

        ScoreBreakdown {
            offensive,
            defensive,
            stat_total,
            synergy,
            generation_bonus,
            total: (offensive + defensive + stat_total) * generation_bonus,
        }
    }

    /// Scores and sorts candidates, best first.
    ///
    /// The sort is stable: candidates with equal totals keep the order they were given in.
    pub fn rank<'c, I>(&self, candidates: I, team: &[&CreatureData]) -> Vec<ScoredCandidate<'c>>
    where
        I: IntoIterator<Item = &'c CreatureData>,
    {
        let mut scored = candidates
            .into_iter()
            .map(|creature| ScoredCandidate {
                creature,
                score: self.score(creature, team),
            })
            .collect::<Vec<_>>();
        scored.sort_by(|a, b| b.score.total.total_cmp(&a.score.total));
        scored
    }
}

#[cfg(test)]
mod scorer_test {
    use teambuilder_data::{
        Type,
        TypeChart,
    };
    use teambuilder_test_utils::{
        CreatureBuilder,
        TestDataStore,
    };

    use crate::{
        RosterSnapshot,
        StatBaseline,
        Stats,
        scoring::{
            ScoreBreakdown,
            Scorer,
        },
    };

    fn baseline() -> StatBaseline {
        StatBaseline {
            averages: Stats::splat(80.0),
            samples: 4,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn applies_generation_bonus_for_matching_debut() {
        let mut data = TestDataStore::new();
        data.add_game(1, "Red", 1).add_game(2, "Gold", 2);
        for game in [1, 2] {
            data.add_available_creature(
                game,
                CreatureBuilder::new(25, "Raichu", Type::Electric)
                    .stats([60, 90, 55, 90, 80, 110])
                    .build(),
            );
        }
        let baseline = baseline();

        let red = RosterSnapshot::capture(&data, 1).unwrap();
        let raichu = red.creature(25).unwrap();
        let red_score = Scorer::new(&red, &baseline).score(raichu, &[]);
        assert_eq!(red_score.generation_bonus, 1.1);

        let gold = RosterSnapshot::capture(&data, 2).unwrap();
        let gold_score = Scorer::new(&gold, &baseline).score(gold.creature(25).unwrap(), &[]);
        assert_eq!(gold_score.generation_bonus, 1.0);

        let base = gold_score.offensive + gold_score.defensive + gold_score.stat_total;
        assert_close(gold_score.total, base);
        assert_close(red_score.total, base * 1.1);
    }

    #[test]
    fn breaks_down_score() {
        let mut chart = TypeChart::new();
        chart.set(Type::Electric, Type::Water, 2.0);
        chart.set(Type::Ground, Type::Electric, 2.0);
        let mut data = TestDataStore::new();
        data.set_type_chart(chart)
            .add_game(1, "Gold", 2)
            .add_available_creature(
                1,
                CreatureBuilder::new(135, "Jolteon", Type::Electric)
                    .stats([65, 65, 60, 110, 95, 130])
                    .build(),
            );
        let snapshot = RosterSnapshot::capture(&data, 1).unwrap();
        let baseline = baseline();
        let scorer = Scorer::new(&snapshot, &baseline);
        let score = scorer.score(snapshot.creature(135).unwrap(), &[]);

        // Offensive statline without high defensive coverage incurs the synergy penalty.
        assert_eq!(score.synergy, 0.9);
        assert_eq!(score.offensive, 1.0);
        assert_eq!(score.defensive, 1.0);
        assert_close(score.stat_total, 525.0 * 0.9 * 0.01);
        assert_eq!(score.generation_bonus, 1.0);
        assert_close(score.total, 1.0 + 1.0 + 4.725);
    }

    #[test]
    fn redundant_coverage_lowers_score() {
        let mut chart = TypeChart::new();
        chart.set(Type::Electric, Type::Water, 2.0);
        let mut data = TestDataStore::new();
        data.set_type_chart(chart)
            .add_game(1, "Gold", 2)
            .add_available_creature(1, CreatureBuilder::new(1, "A", Type::Electric).build())
            .add_available_creature(1, CreatureBuilder::new(2, "B", Type::Electric).build());
        let snapshot = RosterSnapshot::capture(&data, 1).unwrap();
        let baseline = StatBaseline::zero();
        let scorer = Scorer::new(&snapshot, &baseline);
        let a = snapshot.creature(1).unwrap();
        let b = snapshot.creature(2).unwrap();

        pretty_assertions::assert_eq!(
            scorer.score(b, &[a]),
            ScoreBreakdown {
                offensive: 0.25,
                defensive: 0.5,
                stat_total: 0.0,
                synergy: 1.0,
                generation_bonus: 1.0,
                total: 0.75,
            }
        );
    }

    #[test]
    fn ranks_best_first_with_stable_ties() {
        let mut data = TestDataStore::new();
        data.add_game(1, "Gold", 2)
            .add_available_creature(
                1,
                CreatureBuilder::new(7, "Strong", Type::Water)
                    .stats([100, 100, 100, 100, 100, 100])
                    .build(),
            )
            .add_available_creature(
                1,
                CreatureBuilder::new(5, "Twin B", Type::Fire)
                    .stats([50, 50, 50, 50, 50, 50])
                    .build(),
            )
            .add_available_creature(
                1,
                CreatureBuilder::new(3, "Twin A", Type::Fire)
                    .stats([50, 50, 50, 50, 50, 50])
                    .build(),
            );
        let snapshot = RosterSnapshot::capture(&data, 1).unwrap();
        let baseline = baseline();
        let scorer = Scorer::new(&snapshot, &baseline);

        let ranked = scorer.rank(snapshot.roster(), &[]);
        pretty_assertions::assert_eq!(
            ranked
                .iter()
                .map(|scored| scored.creature.id)
                .collect::<Vec<_>>(),
            [7, 3, 5]
        );
        assert_eq!(ranked[1].score, ranked[2].score);

        // Ties keep the order candidates were given in.
        let reversed = scorer.rank(snapshot.roster().iter().rev(), &[]);
        assert_eq!(
            reversed
                .iter()
                .map(|scored| scored.creature.id)
                .collect::<Vec<_>>(),
            [7, 5, 3]
        );
    }
}
