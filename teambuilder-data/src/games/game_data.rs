use serde::{
    Deserialize,
    Serialize,
};

/// Unique identifier of a game.
pub type GameId = u32;

/// Data about a single game, which scopes the roster a team is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameData {
    /// Unique identifier.
    pub id: GameId,
    /// Display name.
    pub name: String,
    /// The generation the game belongs to.
    ///
    /// Decides which creatures are still final evolutions, and which creatures debuted alongside
    /// the game.
    pub generation: u8,
}
