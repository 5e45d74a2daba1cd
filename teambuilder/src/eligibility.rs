use ahash::HashSet;
use itertools::Itertools;
use teambuilder_data::{
    CreatureData,
    CreatureId,
};
use unicase::UniCase;

use crate::{
    RosterSnapshot,
    SuggestOptions,
    Team,
};

/// Checks if the name contains the search text, ignoring case.
fn name_contains(name: &str, search: &str) -> bool {
    let search = UniCase::new(search);
    let width = search.chars().count();
    name.char_indices().any(|(start, _)| {
        let end = name[start..]
            .char_indices()
            .nth(width)
            .map_or(name.len(), |(offset, _)| start + offset);
        UniCase::new(&name[start..end]) == search
    })
}

/// Collects the creatures that cannot join the team because they share an exclusivity group with
/// a current team member.
///
/// Team members themselves are never in the set.
pub fn exclusive_with_team(snapshot: &RosterSnapshot, team: &Team) -> HashSet<CreatureId> {
    team.member_ids()
        .flat_map(|member| snapshot.groups_of(member).iter().copied())
        .unique()
        .flat_map(|group| snapshot.members_of(group).iter().copied())
        .filter(|creature| !team.contains(*creature))
        .collect()
}

/// Collects the creatures that may be suggested for the next open slot of the team.
///
/// Candidates are available in the game, are endpoints in the game's generation, pass the
/// legendary and mythical flags, are not on the team, and are not excluded by a team member's
/// exclusivity group. They are returned in roster order, which is ascending ID.
pub fn candidates<'s>(
    snapshot: &'s RosterSnapshot,
    team: &Team,
    options: &SuggestOptions,
) -> Vec<&'s CreatureData> {
    let excluded = exclusive_with_team(snapshot, team);
    snapshot
        .endpoint_creatures()
        .filter(|creature| options.permits(creature))
        .filter(|creature| !team.contains(creature.id))
        .filter(|creature| !excluded.contains(&creature.id))
        .collect()
}

/// Collects the creatures a user may pick from to fill a slot manually.
///
/// Unlike [`candidates`], creatures that are not endpoints are included, as are creatures already
/// on the team. Results are ordered by dex number, then ID. If `search` is given, only creatures
/// whose name contains it, ignoring case, are returned.
pub fn selectable_creatures<'s>(
    snapshot: &'s RosterSnapshot,
    team: &Team,
    options: &SuggestOptions,
    search: Option<&str>,
) -> Vec<&'s CreatureData> {
    let excluded = exclusive_with_team(snapshot, team);
    let search = search.map(str::trim).filter(|search| !search.is_empty());
    snapshot
        .roster()
        .iter()
        .filter(|creature| options.permits(creature))
        .filter(|creature| !excluded.contains(&creature.id))
        .filter(|creature| {
            search.is_none_or(|search| name_contains(&creature.name, search))
        })
        .sorted_by_key(|creature| (creature.dex, creature.id))
        .collect()
}

/// Removes team members that are no longer allowed in the game.
///
/// A member is removed if it is not available in the game or does not pass the legendary and
/// mythical flags. Remaining members keep their slots. Returns the pruned team and the removed
/// creatures, in slot order.
pub fn prune_ineligible(
    mut team: Team,
    snapshot: &RosterSnapshot,
    options: &SuggestOptions,
) -> (Team, Vec<CreatureData>) {
    let ineligible = team
        .slots()
        .iter()
        .enumerate()
        .filter_map(|(slot, member)| Some((slot, member.as_ref()?)))
        .filter(|(_, member)| !snapshot.is_available(member.id) || !options.permits(member))
        .map(|(slot, _)| slot)
        .collect::<Vec<_>>();
    let removed = ineligible
        .into_iter()
        .filter_map(|slot| team.remove(slot).ok().flatten())
        .collect();
    (team, removed)
}
