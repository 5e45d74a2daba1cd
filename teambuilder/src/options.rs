use serde::{
    Deserialize,
    Serialize,
};
use teambuilder_data::CreatureData;

/// Options for which creatures may be suggested.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOptions {
    /// Allow legendary creatures.
    pub include_legendary: bool,
    /// Allow mythical creatures.
    pub include_mythical: bool,
}

impl SuggestOptions {
    /// Checks if the creature passes the legendary and mythical flags.
    pub fn permits(&self, creature: &CreatureData) -> bool {
        (self.include_legendary || !creature.legendary)
            && (self.include_mythical || !creature.mythical)
    }
}
