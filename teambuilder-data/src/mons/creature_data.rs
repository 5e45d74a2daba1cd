use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    StatTable,
    Type,
};

/// Unique identifier of a creature in the roster.
pub type CreatureId = u32;

/// Data about a particular creature in the roster.
///
/// Creature data is a read-only snapshot for the duration of a recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureData {
    /// Unique identifier.
    pub id: CreatureId,
    /// National dex number of the species.
    ///
    /// Multiple creatures (such as regional formes) may share the same dex number.
    pub dex: u16,
    /// Display name.
    pub name: String,
    /// Base stats.
    #[serde(default)]
    pub base_stats: StatTable,
    /// The primary type of the creature.
    pub primary_type: Type,
    /// The secondary type of the creature, if it exists.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Is this creature the final stage of its evolution line?
    #[serde(default)]
    pub final_evolution: bool,
    /// Is this creature legendary?
    #[serde(default)]
    pub legendary: bool,
    /// Is this creature mythical?
    #[serde(default)]
    pub mythical: bool,
    /// The last generation in which this creature is the final stage of its line.
    ///
    /// Set for creatures that received a new evolution in a later generation. A creature with no
    /// value remains a final stage in every generation.
    #[serde(default)]
    pub last_endpoint_generation: Option<u8>,
}

impl CreatureData {
    /// Iterates over the creature's types, skipping absent types.
    pub fn types(&self) -> impl Iterator<Item = Type> + Clone + use<> {
        [Some(self.primary_type), self.secondary_type]
            .into_iter()
            .flatten()
            .filter(Type::is_present)
    }

    /// Checks if the creature has the given type.
    pub fn has_type(&self, typ: Type) -> bool {
        self.types().any(|t| t == typ)
    }

    /// Checks if the creature is an endpoint of its line in the given generation.
    ///
    /// Endpoints are final evolutions that have not been superseded by an evolution introduced
    /// before the given generation.
    pub fn is_endpoint_in(&self, generation: u8) -> bool {
        self.final_evolution
            && self
                .last_endpoint_generation
                .is_none_or(|last| last >= generation)
    }
}

#[cfg(test)]
mod creature_data_test {
    use crate::{
        CreatureData,
        StatTable,
        Type,
    };

    fn creature() -> CreatureData {
        CreatureData {
            id: 1,
            dex: 1,
            name: "Sample".to_owned(),
            base_stats: StatTable::default(),
            primary_type: Type::Grass,
            secondary_type: None,
            final_evolution: true,
            legendary: false,
            mythical: false,
            last_endpoint_generation: None,
        }
    }

    #[test]
    fn deserializes_with_defaults() {
        let data = serde_json::from_str::<CreatureData>(
            r#"{
                "id": 26,
                "dex": 26,
                "name": "Raichu",
                "base_stats": { "hp": 60, "atk": 90, "def": 55, "spa": 90, "spd": 80, "spe": 110 },
                "primary_type": "Electric",
                "final_evolution": true
            }"#,
        )
        .unwrap();
        assert_eq!(data.name, "Raichu");
        assert_eq!(data.secondary_type, None);
        assert!(!data.legendary);
        assert!(!data.mythical);
        assert_eq!(data.last_endpoint_generation, None);
        assert_eq!(data.base_stats.sum(), 485);
    }

    #[test]
    fn types_skip_absent_types() {
        let mut data = creature();
        assert_eq!(data.types().collect::<Vec<_>>(), [Type::Grass]);
        data.secondary_type = Some(Type::Poison);
        assert_eq!(data.types().collect::<Vec<_>>(), [Type::Grass, Type::Poison]);
        data.primary_type = Type::None;
        data.secondary_type = None;
        assert_eq!(data.types().count(), 0);
        assert!(!data.has_type(Type::Grass));
    }

    #[test]
    fn endpoint_depends_on_generation() {
        let mut data = creature();
        assert!(data.is_endpoint_in(1));
        assert!(data.is_endpoint_in(9));

        data.last_endpoint_generation = Some(3);
        assert!(data.is_endpoint_in(1));
        assert!(data.is_endpoint_in(3));
        assert!(!data.is_endpoint_in(4));

        data.final_evolution = false;
        assert!(!data.is_endpoint_in(1));
    }
}
