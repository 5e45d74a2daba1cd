use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CreatureId,
    GameId,
};

/// Availability of a creature in a game.
///
/// Keyed by the pair of game and creature. A creature without a row for a game is unavailable in
/// that game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Availability {
    pub game: GameId,
    pub creature: CreatureId,
    #[serde(default = "default_as_true")]
    pub available: bool,
}

fn default_as_true() -> bool {
    true
}
