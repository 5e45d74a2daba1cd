use std::sync::Arc;

use anyhow::Result;
use log::info;
use teambuilder_data::{
    CreatureData,
    DataStore,
    GameId,
};

use crate::{
    RosterSnapshot,
    StatBaseline,
    StatBaselineCache,
    SuggestOptions,
    Team,
    TeamSuggestion,
    build_team,
    prune_ineligible,
    selectable_creatures,
};

/// Suggests a team for a game, filling the empty slots of the given team.
///
/// A full team is returned unchanged, without reading any data. Otherwise, the game's data is
/// snapshotted, its stat baseline is computed if it is not already cached, and the team is filled
/// greedily.
pub fn suggest_team(
    data: &dyn DataStore,
    baselines: &StatBaselineCache,
    game: GameId,
    team: Team,
    options: &SuggestOptions,
) -> Result<TeamSuggestion> {
    if team.is_full() {
        return Ok(TeamSuggestion::unchanged(team));
    }
    let snapshot = RosterSnapshot::capture(data, game)?;
    let baseline = baselines.ensure(&snapshot);
    let suggestion = build_team(&snapshot, &baseline, team, options);
    info!(
        "Suggested {} creatures for {} ({:?})",
        suggestion.picks.len(),
        snapshot.game().name,
        suggestion.outcome
    );
    Ok(suggestion)
}

/// Entry point for suggesting teams over a data store.
///
/// Stat baselines are shared through the cache, which may be shared with other suggesters.
pub struct TeamSuggester<'d> {
    data: &'d dyn DataStore,
    baselines: Arc<StatBaselineCache>,
}

impl<'d> TeamSuggester<'d> {
    pub fn new(data: &'d dyn DataStore, baselines: Arc<StatBaselineCache>) -> Self {
        Self { data, baselines }
    }

    /// Creates a suggester with its own baseline cache.
    pub fn with_new_cache(data: &'d dyn DataStore) -> Self {
        Self::new(data, Arc::new(StatBaselineCache::new()))
    }

    pub fn baselines(&self) -> &StatBaselineCache {
        &self.baselines
    }

    /// Fills the empty slots of the team with suggested creatures.
    pub fn suggest(
        &self,
        game: GameId,
        team: Team,
        options: &SuggestOptions,
    ) -> Result<TeamSuggestion> {
        suggest_team(self.data, &self.baselines, game, team, options)
    }

    /// The stat baseline of a game, computing it if needed.
    pub fn baseline(&self, game: GameId) -> Result<StatBaseline> {
        let snapshot = RosterSnapshot::capture(self.data, game)?;
        Ok(self.baselines.ensure(&snapshot))
    }

    /// The creatures a user may pick from for the team in the game.
    pub fn selectable(
        &self,
        game: GameId,
        team: &Team,
        options: &SuggestOptions,
        search: Option<&str>,
    ) -> Result<Vec<CreatureData>> {
        let snapshot = RosterSnapshot::capture(self.data, game)?;
        Ok(selectable_creatures(&snapshot, team, options, search)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Removes team members that are not allowed in the game, such as after switching games.
    pub fn prune(
        &self,
        game: GameId,
        team: Team,
        options: &SuggestOptions,
    ) -> Result<(Team, Vec<CreatureData>)> {
        let snapshot = RosterSnapshot::capture(self.data, game)?;
        Ok(prune_ineligible(team, &snapshot, options))
    }
}
