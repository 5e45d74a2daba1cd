use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use teambuilder::TeamSuggester;
use teambuilder_data::{
    CreatureId,
    LocalDataStore,
    Type,
};

use crate::commands::{
    Selection,
    print_json,
};

/// List the creatures that may be picked for a team
#[derive(Parser, Debug)]
pub struct Browse {
    #[command(flatten)]
    pub selection: Selection,

    /// Only list creatures whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Serialize)]
struct Entry {
    id: CreatureId,
    dex: u16,
    name: String,
    types: Vec<Type>,
    on_team: bool,
}

impl Browse {
    pub fn execute(self, data: &LocalDataStore) -> Result<()> {
        let (game, team) = self.selection.resolve(data)?;
        let entries = TeamSuggester::with_new_cache(data)
            .selectable(
                game.id,
                &team,
                &self.selection.options(),
                self.search.as_deref(),
            )?
            .into_iter()
            .map(|creature| Entry {
                id: creature.id,
                dex: creature.dex,
                types: creature.types().collect(),
                on_team: team.contains(creature.id),
                name: creature.name,
            })
            .collect::<Vec<_>>();
        print_json(&entries)
    }
}
