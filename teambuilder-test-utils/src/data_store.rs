use std::{
    collections::BTreeMap,
    path::PathBuf,
    sync::LazyLock,
};

use anyhow::Result;
use teambuilder_data::{
    Availability,
    CreatureData,
    CreatureId,
    DataStore,
    DataStoreByName,
    ExclusivityGroup,
    ExclusivityGroupMember,
    GameData,
    GameId,
    GroupId,
    LocalDataStore,
    TypeChart,
};
use unicase::UniCase;

/// The full type chart from the sample data directory.
pub fn standard_type_chart() -> TypeChart {
    static TYPE_CHART: LazyLock<TypeChart> = LazyLock::new(|| {
        serde_json::from_str(include_str!("../../data/type-chart.json"))
            .expect("sample type chart is invalid")
    });
    TYPE_CHART.clone()
}

/// A [`LocalDataStore`] over the sample data directory, shared by all tests in the process.
pub fn static_local_data_store() -> &'static LocalDataStore {
    static DATA_STORE: LazyLock<LocalDataStore> = LazyLock::new(|| {
        LocalDataStore::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data"))
            .expect("failed to read sample data directory")
    });
    &DATA_STORE
}

/// An in-memory [`DataStore`] for tests.
///
/// Tables are filled directly by the test, so each test can describe exactly the roster it needs.
#[derive(Default)]
pub struct TestDataStore {
    games: BTreeMap<GameId, GameData>,
    creatures: BTreeMap<CreatureId, CreatureData>,
    availability: Vec<Availability>,
    type_chart: TypeChart,
    exclusivity_groups: BTreeMap<GroupId, ExclusivityGroup>,
    exclusivity_members: Vec<ExclusivityGroupMember>,
}

impl TestDataStore {
    /// Creates an empty store with the standard type chart.
    pub fn new() -> Self {
        Self {
            type_chart: standard_type_chart(),
            ..Default::default()
        }
    }

    pub fn set_type_chart(&mut self, type_chart: TypeChart) -> &mut Self {
        self.type_chart = type_chart;
        self
    }

    pub fn add_game(&mut self, id: GameId, name: &str, generation: u8) -> &mut Self {
        self.games.insert(
            id,
            GameData {
                id,
                name: name.to_owned(),
                generation,
            },
        );
        self
    }

    pub fn add_creature(&mut self, creature: CreatureData) -> &mut Self {
        self.creatures.insert(creature.id, creature);
        self
    }

    /// Adds a creature and marks it as available in the given game.
    pub fn add_available_creature(&mut self, game: GameId, creature: CreatureData) -> &mut Self {
        let id = creature.id;
        self.add_creature(creature).set_available(game, id, true)
    }

    pub fn set_available(
        &mut self,
        game: GameId,
        creature: CreatureId,
        available: bool,
    ) -> &mut Self {
        self.availability.push(Availability {
            game,
            creature,
            available,
        });
        self
    }

    pub fn add_exclusivity_group<I>(&mut self, id: GroupId, game: GameId, members: I) -> &mut Self
    where
        I: IntoIterator<Item = CreatureId>,
    {
        self.exclusivity_groups.insert(
            id,
            ExclusivityGroup {
                id,
                game,
                description: None,
            },
        );
        self.exclusivity_members
            .extend(members.into_iter().map(|creature| ExclusivityGroupMember {
                group: id,
                creature,
            }));
        self
    }
}

impl DataStore for TestDataStore {
    fn all_games(&self) -> Result<Vec<GameData>> {
        Ok(self.games.values().cloned().collect())
    }

    fn all_creatures(&self) -> Result<Vec<CreatureData>> {
        Ok(self.creatures.values().cloned().collect())
    }

    fn availability(&self, game: GameId) -> Result<Vec<Availability>> {
        Ok(self
            .availability
            .iter()
            .filter(|row| row.game == game)
            .copied()
            .collect())
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }

    fn exclusivity_groups(&self, game: GameId) -> Result<Vec<ExclusivityGroup>> {
        Ok(self
            .exclusivity_groups
            .values()
            .filter(|group| group.game == game)
            .cloned()
            .collect())
    }

    fn exclusivity_members(&self, group: GroupId) -> Result<Vec<CreatureId>> {
        Ok(self
            .exclusivity_members
            .iter()
            .filter(|member| member.group == group)
            .map(|member| member.creature)
            .collect())
    }
}

impl DataStoreByName for TestDataStore {
    fn get_game_by_name(&self, name: &str) -> Result<Option<GameData>> {
        let name = UniCase::new(name);
        Ok(self
            .games
            .values()
            .find(|game| UniCase::new(game.name.as_str()) == name)
            .cloned())
    }

    fn get_creature_by_name(&self, name: &str) -> Result<Option<CreatureData>> {
        let name = UniCase::new(name);
        Ok(self
            .creatures
            .values()
            .find(|creature| UniCase::new(creature.name.as_str()) == name)
            .cloned())
    }
}
