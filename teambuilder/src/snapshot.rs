use ahash::{
    HashMap,
    HashSet,
};
use anyhow::{
    Context,
    Error,
    Result,
};
use log::debug;
use teambuilder_data::{
    Availability,
    CreatureData,
    CreatureId,
    DataStore,
    ExclusivityGroup,
    GameData,
    GameId,
    GroupId,
    TypeChart,
};

/// An in-memory copy of all reference data needed for one recommendation run in one game.
///
/// Taken once at the start of a run, so that scoring never touches the data store and never
/// observes a partially updated roster.
#[derive(Debug, Clone)]
pub struct RosterSnapshot {
    game: GameData,
    roster: Vec<CreatureData>,
    type_chart: TypeChart,
    groups_by_creature: HashMap<CreatureId, Vec<GroupId>>,
    members_by_group: HashMap<GroupId, Vec<CreatureId>>,
}

impl RosterSnapshot {
    /// Captures a snapshot of the given game from the data store.
    pub fn capture(data: &dyn DataStore, game: GameId) -> Result<Self> {
        let game = data
            .get_game(game)
            .context("failed to read games")?
            .ok_or_else(|| Error::msg(format!("game {game} does not exist")))?;
        let creatures = data.all_creatures().context("failed to read creatures")?;
        let availability = data
            .availability(game.id)
            .context(format!("failed to read availability for {}", game.name))?;
        let type_chart = data.get_type_chart().context("failed to read type chart")?;
        let groups = data
            .exclusivity_groups(game.id)
            .context(format!("failed to read exclusivity groups for {}", game.name))?
            .into_iter()
            .map(|group| -> Result<_> {
                let members = data
                    .exclusivity_members(group.id)
                    .context(format!("failed to read members of exclusivity group {}", group.id))?;
                Ok((group, members))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(game, creatures, &availability, type_chart, groups))
    }

    /// Creates a snapshot from tables that have already been read.
    ///
    /// Availability rows and exclusivity groups for other games are ignored, as are rows that
    /// reference unknown creatures.
    pub fn new(
        game: GameData,
        creatures: Vec<CreatureData>,
        availability: &[Availability],
        type_chart: TypeChart,
        groups: Vec<(ExclusivityGroup, Vec<CreatureId>)>,
    ) -> Self {
        let available = availability
            .iter()
            .filter(|row| row.game == game.id && row.available)
            .map(|row| row.creature)
            .collect::<HashSet<_>>();
        let mut roster = creatures
            .into_iter()
            .filter(|creature| available.contains(&creature.id))
            .collect::<Vec<_>>();
        roster.sort_by_key(|creature| creature.id);
        roster.dedup_by_key(|creature| creature.id);

        let mut groups_by_creature = HashMap::<CreatureId, Vec<GroupId>>::default();
        let mut members_by_group = HashMap::<GroupId, Vec<CreatureId>>::default();
        for (group, members) in groups {
            if group.game != game.id {
                continue;
            }
            for member in &members {
                let groups = groups_by_creature.entry(*member).or_default();
                if !groups.contains(&group.id) {
                    groups.push(group.id);
                }
            }
            members_by_group.entry(group.id).or_default().extend(members);
        }

        debug!(
            "Captured roster of {} creatures and {} exclusivity groups for {}",
            roster.len(),
            members_by_group.len(),
            game.name
        );

        Self {
            game,
            roster,
            type_chart,
            groups_by_creature,
            members_by_group,
        }
    }

    /// The game the snapshot was taken for.
    pub fn game(&self) -> &GameData {
        &self.game
    }

    /// All creatures available in the game, in ascending ID order.
    pub fn roster(&self) -> &[CreatureData] {
        &self.roster
    }

    /// Looks up an available creature by ID.
    pub fn creature(&self, id: CreatureId) -> Option<&CreatureData> {
        self.roster
            .binary_search_by_key(&id, |creature| creature.id)
            .ok()
            .map(|index| &self.roster[index])
    }

    /// Checks if the creature is available in the game.
    pub fn is_available(&self, id: CreatureId) -> bool {
        self.creature(id).is_some()
    }

    /// All available creatures that are endpoints of their line in the game's generation.
    pub fn endpoint_creatures(&self) -> impl Iterator<Item = &CreatureData> {
        let generation = self.game.generation;
        self.roster
            .iter()
            .filter(move |creature| creature.is_endpoint_in(generation))
    }

    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }

    /// The exclusivity groups, scoped to the game, that the creature belongs to.
    pub fn groups_of(&self, creature: CreatureId) -> &[GroupId] {
        self.groups_by_creature
            .get(&creature)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The members of an exclusivity group.
    pub fn members_of(&self, group: GroupId) -> &[CreatureId] {
        self.members_by_group
            .get(&group)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod snapshot_test {
    use assert_matches::assert_matches;
    use teambuilder_data::Type;
    use teambuilder_test_utils::{
        CreatureBuilder,
        TestDataStore,
    };

    use crate::RosterSnapshot;

    fn data() -> TestDataStore {
        let mut data = TestDataStore::new();
        data.add_game(1, "Red", 1)
            .add_game(2, "Gold", 2)
            .add_available_creature(1, CreatureBuilder::new(9, "Blastoise", Type::Water).build())
            .add_available_creature(1, CreatureBuilder::new(6, "Charizard", Type::Fire).build())
            .add_available_creature(
                1,
                CreatureBuilder::new(95, "Onix", Type::Rock)
                    .last_endpoint_generation(1)
                    .build(),
            )
            .add_available_creature(2, CreatureBuilder::new(3, "Venusaur", Type::Grass).build())
            .add_creature(CreatureBuilder::new(151, "Mew", Type::Psychic).build())
            .set_available(1, 151, false)
            .set_available(1, 999, true)
            .add_exclusivity_group(1, 1, [6, 9])
            .add_exclusivity_group(2, 2, [3, 6]);
        data
    }

    #[test]
    fn fails_for_unknown_game() {
        assert_matches!(RosterSnapshot::capture(&data(), 5), Err(err) => {
            assert_eq!(err.to_string(), "game 5 does not exist");
        });
    }

    #[test]
    fn roster_contains_available_creatures_in_id_order() {
        let snapshot = RosterSnapshot::capture(&data(), 1).unwrap();
        assert_eq!(snapshot.game().name, "Red");
        pretty_assertions::assert_eq!(
            snapshot
                .roster()
                .iter()
                .map(|creature| creature.id)
                .collect::<Vec<_>>(),
            [6, 9, 95]
        );
        assert!(snapshot.is_available(9));
        assert!(!snapshot.is_available(3));
        assert!(!snapshot.is_available(151));
        assert!(!snapshot.is_available(999));
    }

    #[test]
    fn endpoint_creatures_respect_generation() {
        let mut data = data();
        data.set_available(2, 95, true);
        let red = RosterSnapshot::capture(&data, 1).unwrap();
        assert_eq!(red.endpoint_creatures().count(), 3);
        let gold = RosterSnapshot::capture(&data, 2).unwrap();
        pretty_assertions::assert_eq!(
            gold.endpoint_creatures()
                .map(|creature| creature.name.as_str())
                .collect::<Vec<_>>(),
            ["Venusaur"]
        );
    }

    #[test]
    fn indexes_exclusivity_groups_for_game_only() {
        let snapshot = RosterSnapshot::capture(&data(), 1).unwrap();
        assert_eq!(snapshot.groups_of(6), [1]);
        assert_eq!(snapshot.groups_of(9), [1]);
        assert!(snapshot.groups_of(3).is_empty());
        assert_eq!(snapshot.members_of(1), [6, 9]);
        assert!(snapshot.members_of(2).is_empty());
    }
}
