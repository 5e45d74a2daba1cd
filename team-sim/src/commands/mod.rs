mod baseline;
mod browse;
mod suggest;

pub use baseline::Baseline;
pub use browse::Browse;
pub use suggest::Suggest;

use anyhow::{
    Error,
    Result,
};
use clap::Args;
use serde::Serialize;
use teambuilder::{
    SuggestOptions,
    Team,
};
use teambuilder_data::{
    DataStoreByName,
    GameData,
    GameId,
};

/// Resolves a game by name, falling back to its ID.
pub fn resolve_game(data: &dyn DataStoreByName, game: &str) -> Result<GameData> {
    if let Some(found) = data.get_game_by_name(game)? {
        return Ok(found);
    }
    let id = game
        .parse::<GameId>()
        .map_err(|_| Error::msg(format!("game {game} does not exist")))?;
    data.get_game(id)?
        .ok_or_else(|| Error::msg(format!("game {id} does not exist")))
}

/// Builds a team from creature names, filling slots in order.
pub fn resolve_team(data: &dyn DataStoreByName, names: &[String]) -> Result<Team> {
    let members = names
        .iter()
        .map(|name| {
            data.get_creature_by_name(name)?
                .ok_or_else(|| Error::msg(format!("creature {name} does not exist")))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Team::from_members(members)?)
}

/// Prints a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// The game, team, and inclusion flags shared by commands that work on a team.
#[derive(Args, Debug)]
pub struct Selection {
    /// Game name or ID
    #[arg(short, long)]
    pub game: String,

    /// Creatures already on the team, by name, in slot order
    #[arg(short, long, value_delimiter = ',')]
    pub team: Vec<String>,

    /// Allow legendary creatures
    #[arg(long)]
    pub legendary: bool,

    /// Allow mythical creatures
    #[arg(long)]
    pub mythical: bool,
}

impl Selection {
    pub fn options(&self) -> SuggestOptions {
        SuggestOptions {
            include_legendary: self.legendary,
            include_mythical: self.mythical,
        }
    }

    pub fn resolve(&self, data: &dyn DataStoreByName) -> Result<(GameData, Team)> {
        Ok((resolve_game(data, &self.game)?, resolve_team(data, &self.team)?))
    }
}
