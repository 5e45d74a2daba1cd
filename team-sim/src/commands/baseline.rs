use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use teambuilder::{
    StatBaseline,
    TeamSuggester,
};
use teambuilder_data::LocalDataStore;

use crate::commands::{
    print_json,
    resolve_game,
};

/// Show the average base stats of a game's endpoint creatures
#[derive(Parser, Debug)]
pub struct Baseline {
    /// Game name or ID
    #[arg(short, long)]
    pub game: String,
}

#[derive(Serialize)]
struct BaselineReport<'a> {
    game: &'a str,
    generation: u8,
    #[serde(flatten)]
    baseline: StatBaseline,
}

impl Baseline {
    pub fn execute(self, data: &LocalDataStore) -> Result<()> {
        let game = resolve_game(data, &self.game)?;
        let baseline = TeamSuggester::with_new_cache(data).baseline(game.id)?;
        print_json(&BaselineReport {
            game: &game.name,
            generation: game.generation,
            baseline,
        })
    }
}
