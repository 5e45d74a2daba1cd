use log::{
    debug,
    warn,
};
use serde::Serialize;
use teambuilder_data::CreatureData;

use crate::{
    RosterSnapshot,
    StatBaseline,
    SuggestOptions,
    Team,
    candidates,
    scoring::{
        ScoreBreakdown,
        Scorer,
    },
};

/// How a team build ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildOutcome {
    /// Every slot is filled.
    Full,
    /// No eligible candidate remained for an empty slot.
    Exhausted,
}

/// A creature placed on the team by the builder.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pick {
    pub slot: usize,
    pub creature: CreatureData,
    pub score: ScoreBreakdown,
}

/// The result of filling a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSuggestion {
    pub team: Team,
    pub outcome: BuildOutcome,
    /// Creatures added by the builder, in the order they were picked.
    pub picks: Vec<Pick>,
}

impl TeamSuggestion {
    /// A suggestion that returns the team as given, without adding anyone.
    pub fn unchanged(team: Team) -> Self {
        let outcome = if team.is_full() {
            BuildOutcome::Full
        } else {
            BuildOutcome::Exhausted
        };
        Self {
            team,
            outcome,
            picks: Vec::new(),
        }
    }
}

/// Greedily fills the empty slots of a team.
///
/// On each step, the eligible candidates for the current team are scored, and the best is placed
/// in the first empty slot. Existing members are never moved or removed. Stops when the team is
/// full or no candidate remains.
pub fn build_team(
    snapshot: &RosterSnapshot,
    baseline: &StatBaseline,
    mut team: Team,
    options: &SuggestOptions,
) -> TeamSuggestion {
    let scorer = Scorer::new(snapshot, baseline);
    let mut picks = Vec::new();
    let outcome = loop {
        if team.is_full() {
            break BuildOutcome::Full;
        }

        let members = team.members().collect::<Vec<_>>();
        let pool = candidates(snapshot, &team, options);
        let Some(best) = scorer.rank(pool, &members).into_iter().next() else {
            debug!(
                "No candidates remain in {} for a team of {}",
                snapshot.game().name,
                members.len()
            );
            break BuildOutcome::Exhausted;
        };
        let creature = best.creature.clone();
        let score = best.score;

        match team.add(creature.clone()) {
            Ok(slot) => {
                debug!(
                    "Picked {} for slot {slot} with score {:.3}",
                    creature.name, score.total
                );
                picks.push(Pick {
                    slot,
                    creature,
                    score,
                });
            }
            Err(err) => {
                warn!("Failed to place {}: {err}", creature.name);
                break BuildOutcome::Exhausted;
            }
        }
    };
    TeamSuggestion {
        team,
        outcome,
        picks,
    }
}
