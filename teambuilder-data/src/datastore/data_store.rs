use anyhow::Result;

use crate::{
    Availability,
    CreatureData,
    CreatureId,
    ExclusivityGroup,
    GameData,
    GameId,
    GroupId,
    TypeChart,
};

/// Collection of tables for all reference data.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
///
/// All methods are read-only and return a point-in-time copy of the underlying data. Consumers
/// should take everything they need up front rather than interleaving lookups with computation.
pub trait DataStore: Send + Sync {
    /// Gets all games.
    fn all_games(&self) -> Result<Vec<GameData>>;
    /// Gets all creatures, ordered by ascending ID.
    fn all_creatures(&self) -> Result<Vec<CreatureData>>;
    /// Gets all availability rows for a game.
    fn availability(&self, game: GameId) -> Result<Vec<Availability>>;
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
    /// Gets all exclusivity groups scoped to a game.
    fn exclusivity_groups(&self, game: GameId) -> Result<Vec<ExclusivityGroup>>;
    /// Gets the creatures belonging to an exclusivity group.
    fn exclusivity_members(&self, group: GroupId) -> Result<Vec<CreatureId>>;

    /// Gets a game by ID.
    fn get_game(&self, id: GameId) -> Result<Option<GameData>> {
        Ok(self.all_games()?.into_iter().find(|game| game.id == id))
    }
}

/// An extension of [`DataStore`] for looking up resources by name.
///
/// Names are compared case-insensitively.
pub trait DataStoreByName: DataStore {
    /// Gets a game by name.
    fn get_game_by_name(&self, name: &str) -> Result<Option<GameData>>;
    /// Gets a creature by name.
    fn get_creature_by_name(&self, name: &str) -> Result<Option<CreatureData>>;
}
