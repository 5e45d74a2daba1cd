use anyhow::Result;
use clap::Parser;
use log::warn;
use serde::Serialize;
use teambuilder::{
    BuildOutcome,
    TeamSuggester,
    scoring::ScoreBreakdown,
};
use teambuilder_data::LocalDataStore;

use crate::commands::{
    Selection,
    print_json,
};

/// Fill the empty slots of a team
#[derive(Parser, Debug)]
pub struct Suggest {
    #[command(flatten)]
    pub selection: Selection,
}

#[derive(Serialize)]
struct PickReport<'a> {
    slot: usize,
    name: &'a str,
    score: ScoreBreakdown,
}

#[derive(Serialize)]
struct SuggestReport<'a> {
    game: &'a str,
    outcome: BuildOutcome,
    team: Vec<&'a str>,
    picks: Vec<PickReport<'a>>,
}

impl Suggest {
    pub fn execute(self, data: &LocalDataStore) -> Result<()> {
        let (game, team) = self.selection.resolve(data)?;
        let options = self.selection.options();
        let suggester = TeamSuggester::with_new_cache(data);

        // Members picked for another game are dropped before filling the rest.
        let (team, removed) = suggester.prune(game.id, team, &options)?;
        for creature in &removed {
            warn!("{} cannot be used in {}", creature.name, game.name);
        }

        let suggestion = suggester.suggest(game.id, team, &options)?;
        print_json(&SuggestReport {
            game: &game.name,
            outcome: suggestion.outcome,
            team: suggestion
                .team
                .members()
                .map(|creature| creature.name.as_str())
                .collect(),
            picks: suggestion
                .picks
                .iter()
                .map(|pick| PickReport {
                    slot: pick.slot,
                    name: &pick.creature.name,
                    score: pick.score,
                })
                .collect(),
        })
    }
}
