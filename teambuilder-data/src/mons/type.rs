use std::collections::BTreeSet;

use ahash::{
    HashMap,
    HashMapExt,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The type of a creature, which determines its weaknesses and resistances.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
    #[string = "Fairy"]
    Fairy,
    /// No type.
    ///
    /// A type slot holding this value contributes nothing to any matchup.
    #[string = "None"]
    None,
}

impl Type {
    /// Checks if the type is an actual type, as opposed to [`Type::None`].
    pub fn is_present(&self) -> bool {
        *self != Self::None
    }
}

/// Classification of a type effectiveness multiplier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeEffectiveness {
    /// No effect.
    Immune,
    /// Not very effective.
    Resisted,
    /// Normal effectiveness.
    #[default]
    Neutral,
    /// Super effective.
    SuperEffective,
}

impl From<f32> for TypeEffectiveness {
    fn from(value: f32) -> Self {
        if value == 0f32 {
            Self::Immune
        } else if value < 1f32 {
            Self::Resisted
        } else if value == 1f32 {
            Self::Neutral
        } else {
            Self::SuperEffective
        }
    }
}

/// A type table, which contains type effectiveness multipliers for types against some other value.
///
/// The key here is the attacking type.
pub type TypeTable<T> = HashMap<Type, HashMap<T, f32>>;

/// A type chart, which contains all type effectiveness multipliers for types against other types.
///
/// The key here is the attacking type. Missing entries are neutral.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self {
            types: TypeTable::new(),
        }
    }

    /// Sets the multiplier of an attacking type against a defending type.
    pub fn set(&mut self, attacker: Type, defender: Type, multiplier: f32) {
        self.types
            .entry(attacker)
            .or_default()
            .insert(defender, multiplier);
    }

    /// The multiplier of an attacking type against a single defending type.
    ///
    /// Absent entries are neutral.
    pub fn multiplier(&self, attacker: Type, defender: Type) -> f32 {
        self.types
            .get(&attacker)
            .and_then(|row| row.get(&defender))
            .copied()
            .unwrap_or(1f32)
    }

    /// The multiplier of an attacking type against a set of defending types.
    ///
    /// [`Type::None`] defenders contribute nothing.
    pub fn combined_multiplier<I>(&self, attacker: Type, defenders: I) -> f32
    where
        I: IntoIterator<Item = Type>,
    {
        defenders
            .into_iter()
            .filter(Type::is_present)
            .map(|defender| self.multiplier(attacker, defender))
            .product()
    }

    /// Classifies the effectiveness of an attacking type against a set of defending types.
    pub fn effectiveness<I>(&self, attacker: Type, defenders: I) -> TypeEffectiveness
    where
        I: IntoIterator<Item = Type>,
    {
        TypeEffectiveness::from(self.combined_multiplier(attacker, defenders))
    }

    /// All defending types the attacking type is super effective against.
    pub fn super_effective_targets(&self, attacker: Type) -> impl Iterator<Item = Type> + '_ {
        self.types
            .get(&attacker)
            .into_iter()
            .flat_map(|row| row.iter())
            .filter(|(defender, multiplier)| defender.is_present() && **multiplier > 1f32)
            .map(|(defender, _)| *defender)
    }

    /// Every type the chart knows about, as an attacker or a defender.
    pub fn known_types(&self) -> BTreeSet<Type> {
        self.types
            .iter()
            .flat_map(|(attacker, row)| std::iter::once(*attacker).chain(row.keys().copied()))
            .filter(Type::is_present)
            .collect()
    }
}


#[cfg(test)]
mod type_chart_test {
    use std::collections::BTreeSet;

    use ahash::HashMap;

    use crate::{
        Type,
        TypeChart,
        TypeEffectiveness,
        TypeTable,
    };

    fn fire_chart() -> TypeChart {
        serde_json::from_str(
            r#"{
                "types": {
                    "Fire": {
                        "Fire": 0.5,
                        "Water": 0.5,
                        "Grass": 2,
                        "Ice": 2,
                        "Bug": 2,
                        "Rock": 0.5,
                        "Dragon": 0.5,
                        "Steel": 2
                    },
                    "Ground": {
                        "Flying": 0,
                        "Steel": 2
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_type_table() {
        let str = r#"{
            "Fire": {
                "Grass": 2,
                "Water": 0.5
            }
        }"#;
        let table = serde_json::from_str::<TypeTable<Type>>(str).unwrap();
        let expected = TypeTable::from_iter([(
            Type::Fire,
            HashMap::from_iter([(Type::Grass, 2f32), (Type::Water, 0.5)]),
        )]);
        pretty_assertions::assert_eq!(table, expected);
    }

    #[test]
    fn classifies_multipliers() {
        assert_eq!(TypeEffectiveness::from(0f32), TypeEffectiveness::Immune);
        assert_eq!(TypeEffectiveness::from(0.25), TypeEffectiveness::Resisted);
        assert_eq!(TypeEffectiveness::from(0.5), TypeEffectiveness::Resisted);
        assert_eq!(TypeEffectiveness::from(1f32), TypeEffectiveness::Neutral);
        assert_eq!(TypeEffectiveness::from(1.5), TypeEffectiveness::SuperEffective);
        assert_eq!(TypeEffectiveness::from(4f32), TypeEffectiveness::SuperEffective);
    }

    #[test]
    fn missing_entries_are_neutral() {
        let chart = fire_chart();
        assert_eq!(chart.multiplier(Type::Fire, Type::Normal), 1f32);
        assert_eq!(chart.multiplier(Type::Electric, Type::Water), 1f32);
        assert_eq!(chart.multiplier(Type::Fire, Type::Grass), 2f32);
    }

    #[test]
    fn combines_multipliers_over_defending_types() {
        let chart = fire_chart();
        assert_eq!(
            chart.combined_multiplier(Type::Fire, [Type::Grass, Type::Steel]),
            4f32
        );
        assert_eq!(
            chart.combined_multiplier(Type::Fire, [Type::Grass, Type::Water]),
            1f32
        );
        assert_eq!(
            chart.combined_multiplier(Type::Ground, [Type::Steel, Type::Flying]),
            0f32
        );
        assert_eq!(
            chart.combined_multiplier(Type::Fire, [Type::Grass, Type::None]),
            2f32
        );
        assert_eq!(
            chart.effectiveness(Type::Ground, [Type::Flying]),
            TypeEffectiveness::Immune
        );
    }

    #[test]
    fn lists_super_effective_targets() {
        let chart = fire_chart();
        let targets = chart
            .super_effective_targets(Type::Fire)
            .collect::<BTreeSet<_>>();
        pretty_assertions::assert_eq!(
            targets,
            BTreeSet::from_iter([Type::Bug, Type::Steel, Type::Grass, Type::Ice])
        );
        assert_eq!(chart.super_effective_targets(Type::Normal).count(), 0);
    }

    #[test]
    fn known_types_include_attackers_and_defenders() {
        let mut chart = TypeChart::new();
        chart.set(Type::Electric, Type::Water, 2f32);
        chart.set(Type::Electric, Type::None, 2f32);
        pretty_assertions::assert_eq!(
            chart.known_types(),
            BTreeSet::from_iter([Type::Water, Type::Electric])
        );
    }
}
