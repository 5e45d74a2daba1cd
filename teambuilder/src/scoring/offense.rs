use ahash::{
    HashMap,
    HashSet,
};
use teambuilder_data::{
    CreatureData,
    Type,
    TypeChart,
};

/// Score for each super-effective target the team does not already cover.
pub const NEW_COVERAGE_SCORE: f64 = 1.0;
/// Score for each super-effective target the team already covers.
pub const REDUNDANT_COVERAGE_SCORE: f64 = 0.25;

/// Precomputed map of each attacking type to the defending types it is super effective against.
#[derive(Debug, Default, Clone)]
pub struct TypeCoverage {
    targets: HashMap<Type, HashSet<Type>>,
}

impl TypeCoverage {
    pub fn new(type_chart: &TypeChart) -> Self {
        let targets = type_chart
            .types
            .keys()
            .filter(|attacker| attacker.is_present())
            .map(|attacker| {
                (
                    *attacker,
                    type_chart.super_effective_targets(*attacker).collect(),
                )
            })
            .filter(|(_, targets): &(Type, HashSet<Type>)| !targets.is_empty())
            .collect();
        Self { targets }
    }

    /// The defending types a single attacking type is super effective against.
    pub fn targets(&self, attacker: Type) -> impl Iterator<Item = Type> + '_ {
        self.targets.get(&attacker).into_iter().flatten().copied()
    }

    /// The defending types any of the creature's types are super effective against.
    pub fn of_creature(&self, creature: &CreatureData) -> HashSet<Type> {
        creature
            .types()
            .flat_map(|typ| self.targets(typ))
            .collect()
    }

    /// The defending types covered by at least one team member.
    pub fn of_team(&self, team: &[&CreatureData]) -> HashSet<Type> {
        team.iter()
            .flat_map(|member| self.of_creature(member))
            .collect()
    }
}

/// Scores the new offensive coverage the candidate brings to the team.
///
/// Each type the candidate hits super effectively is worth [`NEW_COVERAGE_SCORE`], or
/// [`REDUNDANT_COVERAGE_SCORE`] if some team member already hits it super effectively.
pub fn offensive_coverage_score(
    coverage: &TypeCoverage,
    candidate: &CreatureData,
    team: &[&CreatureData],
) -> f64 {
    let covered = coverage.of_team(team);
    coverage
        .of_creature(candidate)
        .into_iter()
        .map(|target| {
            if covered.contains(&target) {
                REDUNDANT_COVERAGE_SCORE
            } else {
                NEW_COVERAGE_SCORE
            }
        })
        .sum()
}

#[cfg(test)]
mod offense_test {
    use teambuilder_data::{
        Type,
        TypeChart,
    };
    use teambuilder_test_utils::{
        CreatureBuilder,
        standard_type_chart,
    };

    use crate::scoring::{
        TypeCoverage,
        offensive_coverage_score,
    };

    #[test]
    fn builds_super_effective_map() {
        let coverage = TypeCoverage::new(&standard_type_chart());
        let mut targets = coverage.targets(Type::Electric).collect::<Vec<_>>();
        targets.sort();
        assert_eq!(targets, [Type::Flying, Type::Water]);
        assert_eq!(coverage.targets(Type::Normal).count(), 0);
        assert_eq!(coverage.targets(Type::None).count(), 0);
    }

    #[test]
    fn unions_targets_of_both_types() {
        let coverage = TypeCoverage::new(&standard_type_chart());
        let creature = CreatureBuilder::new(1, "Scizor", Type::Bug)
            .secondary_type(Type::Steel)
            .build();
        let mut targets = coverage.of_creature(&creature).into_iter().collect::<Vec<_>>();
        targets.sort();
        assert_eq!(
            targets,
            [
                Type::Rock,
                Type::Grass,
                Type::Psychic,
                Type::Ice,
                Type::Dark,
                Type::Fairy,
            ]
        );
    }

    #[test]
    fn redundant_coverage_is_diminished() {
        let mut chart = TypeChart::new();
        chart.set(Type::Electric, Type::Water, 2.0);
        let coverage = TypeCoverage::new(&chart);
        let a = CreatureBuilder::new(1, "A", Type::Electric).build();
        let b = CreatureBuilder::new(2, "B", Type::Electric).build();

        assert_eq!(offensive_coverage_score(&coverage, &b, &[]), 1.0);
        assert_eq!(offensive_coverage_score(&coverage, &b, &[&a]), 0.25);
    }

    #[test]
    fn mixes_new_and_redundant_coverage() {
        let coverage = TypeCoverage::new(&standard_type_chart());
        let team = CreatureBuilder::new(1, "Jolteon", Type::Electric).build();
        // Ice hits Flying (covered) and Grass, Ground, Dragon (new).
        let candidate = CreatureBuilder::new(2, "Articuno", Type::Ice).build();
        assert_eq!(offensive_coverage_score(&coverage, &candidate, &[&team]), 3.25);
    }

    #[test]
    fn typeless_creature_has_no_coverage() {
        let coverage = TypeCoverage::new(&standard_type_chart());
        let creature = CreatureBuilder::new(1, "Missingno", Type::None).build();
        assert_eq!(offensive_coverage_score(&coverage, &creature, &[]), 0.0);
    }
}
