use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::{
    CreatureData,
    CreatureId,
};
use thiserror::Error;

/// The number of slots on a team.
pub const TEAM_SIZE: usize = 6;

/// An error for an invalid operation on a [`Team`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("{name} is already on the team")]
    Duplicate { id: CreatureId, name: String },
    #[error("team is full")]
    Full,
    #[error("slot {slot} is out of bounds")]
    SlotOutOfBounds { slot: usize },
}

/// A team of up to [`TEAM_SIZE`] creatures.
///
/// Slots are positional, so a team may have empty slots between filled ones. No two slots hold
/// the same creature.
///
/// Serialized as its array of slots. Deserialization rejects duplicate creatures.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "[Option<CreatureData>; TEAM_SIZE]",
    into = "[Option<CreatureData>; TEAM_SIZE]"
)]
pub struct Team {
    slots: [Option<CreatureData>; TEAM_SIZE],
}

impl Team {
    /// Creates an empty team.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a team by filling slots in order.
    pub fn from_members<I>(members: I) -> Result<Self, TeamError>
    where
        I: IntoIterator<Item = CreatureData>,
    {
        let mut team = Self::new();
        for member in members {
            team.add(member)?;
        }
        Ok(team)
    }

    /// All slots, in order.
    pub fn slots(&self) -> &[Option<CreatureData>; TEAM_SIZE] {
        &self.slots
    }

    /// The creature in the given slot.
    pub fn get(&self, slot: usize) -> Option<&CreatureData> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Iterates over all creatures on the team, in slot order.
    pub fn members(&self) -> impl Iterator<Item = &CreatureData> {
        self.slots.iter().flatten()
    }

    /// The IDs of all creatures on the team, in slot order.
    pub fn member_ids(&self) -> impl Iterator<Item = CreatureId> + '_ {
        self.members().map(|creature| creature.id)
    }

    /// The number of filled slots.
    pub fn len(&self) -> usize {
        self.members().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.member_ids().any(|member| member == id)
    }

    /// The index of the first empty slot.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Adds a creature to the first empty slot.
    ///
    /// Returns the slot the creature was placed in.
    pub fn add(&mut self, creature: CreatureData) -> Result<usize, TeamError> {
        self.check_duplicate(&creature, None)?;
        let slot = self.first_empty_slot().ok_or(TeamError::Full)?;
        self.slots[slot] = Some(creature);
        Ok(slot)
    }

    /// Places a creature in the given slot, returning the creature it replaced.
    pub fn replace(
        &mut self,
        slot: usize,
        creature: CreatureData,
    ) -> Result<Option<CreatureData>, TeamError> {
        if slot >= TEAM_SIZE {
            return Err(TeamError::SlotOutOfBounds { slot });
        }
        self.check_duplicate(&creature, Some(slot))?;
        Ok(self.slots[slot].replace(creature))
    }

    /// Empties the given slot, returning the creature that was in it.
    pub fn remove(&mut self, slot: usize) -> Result<Option<CreatureData>, TeamError> {
        self.slots
            .get_mut(slot)
            .map(Option::take)
            .ok_or(TeamError::SlotOutOfBounds { slot })
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// The creatures on the team, in slot order, with empty slots omitted.
    pub fn compact(&self) -> Vec<CreatureData> {
        self.members().cloned().collect()
    }

    fn check_duplicate(
        &self,
        creature: &CreatureData,
        ignore_slot: Option<usize>,
    ) -> Result<(), TeamError> {
        let duplicate = self.slots.iter().enumerate().any(|(slot, member)| {
            Some(slot) != ignore_slot && member.as_ref().is_some_and(|m| m.id == creature.id)
        });
        if duplicate {
            return Err(TeamError::Duplicate {
                id: creature.id,
                name: creature.name.clone(),
            });
        }
        Ok(())
    }
}

impl TryFrom<[Option<CreatureData>; TEAM_SIZE]> for Team {
    type Error = TeamError;

    fn try_from(slots: [Option<CreatureData>; TEAM_SIZE]) -> Result<Self, Self::Error> {
        let mut team = Self::new();
        for (slot, member) in slots.into_iter().enumerate() {
            if let Some(member) = member {
                team.replace(slot, member)?;
            }
        }
        Ok(team)
    }
}

impl From<Team> for [Option<CreatureData>; TEAM_SIZE] {
    fn from(team: Team) -> Self {
        team.slots
    }
}
