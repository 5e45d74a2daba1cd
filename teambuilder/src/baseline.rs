use std::sync::{
    Mutex,
    MutexGuard,
    PoisonError,
};

use ahash::HashMap;
use log::debug;
use serde::Serialize;
use teambuilder_data::{
    GameId,
    Stat,
};

use crate::{
    RosterSnapshot,
    Stats,
};

/// Average base stats among the endpoint creatures available in a game.
///
/// Used to judge whether a creature or a team is above or below the norm for the game.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct StatBaseline {
    /// Average of each base stat.
    pub averages: Stats<f64>,
    /// Number of creatures the averages were taken over.
    ///
    /// Zero means the game has no endpoint creatures, and every average is zero.
    pub samples: usize,
}

impl StatBaseline {
    /// The baseline for a game with no data.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Computes the baseline of a game from its roster snapshot.
    pub fn compute(snapshot: &RosterSnapshot) -> Self {
        let pool = snapshot.endpoint_creatures().collect::<Vec<_>>();
        if pool.is_empty() {
            return Self::zero();
        }
        Self {
            averages: Stats::average(pool.iter().map(|creature| &creature.base_stats)),
            samples: pool.len(),
        }
    }

    /// The average value of a single stat.
    pub fn get(&self, stat: Stat) -> f64 {
        self.averages.get(stat)
    }

    /// Checks if the baseline was computed over at least one creature.
    pub fn has_data(&self) -> bool {
        self.samples > 0
    }
}

/// Cache of [`StatBaseline`]s, keyed by game.
///
/// A baseline is computed at most once per game for the lifetime of the cache. Safe to share
/// across threads; computation for a game happens under the cache lock, so concurrent callers
/// never compute the same baseline twice.
#[derive(Debug, Default)]
pub struct StatBaselineCache {
    baselines: Mutex<HashMap<GameId, StatBaseline>>,
}

impl StatBaselineCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes and stores the baseline for the snapshot's game, if it is not already stored.
    ///
    /// Returns the stored baseline. Games with no endpoint creatures store the zero baseline, so
    /// they are not recomputed either.
    pub fn ensure(&self, snapshot: &RosterSnapshot) -> StatBaseline {
        let game = snapshot.game();
        self.lock()
            .entry(game.id)
            .or_insert_with(|| {
                let baseline = StatBaseline::compute(snapshot);
                debug!(
                    "Computed stat baseline for {} over {} creatures: {:?}",
                    game.name, baseline.samples, baseline.averages
                );
                baseline
            })
            .clone()
    }

    /// Returns the stored baseline for the game, or the zero baseline if it was never computed.
    pub fn get(&self, game: GameId) -> StatBaseline {
        self.lock().get(&game).cloned().unwrap_or_default()
    }

    /// Checks if a baseline is stored for the game.
    pub fn is_computed(&self, game: GameId) -> bool {
        self.lock().contains_key(&game)
    }

    /// The number of games with a stored baseline.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, StatBaseline>> {
        // Entries are only ever inserted whole, so a poisoned map is still consistent.
        self.baselines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
