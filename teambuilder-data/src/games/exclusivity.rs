use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    CreatureId,
    GameId,
};

/// Unique identifier of an exclusivity group.
pub type GroupId = u32;

/// A set of creatures within one game, at most one of which may be on a team at a time.
///
/// For example, the three starters of a game, or a pair of version-exclusive fossils.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusivityGroup {
    pub id: GroupId,
    pub game: GameId,
    #[serde(default)]
    pub description: Option<String>,
}

/// Membership of a creature in an [`ExclusivityGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExclusivityGroupMember {
    pub group: GroupId,
    pub creature: CreatureId,
}
