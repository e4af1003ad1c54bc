use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{Match, MatchId, Player};

/// The independent fetch sources a catalog holds lists for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    Search,
    Recommended,
    Featured,
}

impl Source {
    /// All sources, in the order `find` resolves duplicates.
    pub const ALL: [Source; 3] = [Source::Search, Source::Recommended, Source::Featured];
}

/// The in-memory authoritative copy of match records, per source.
///
/// Each source's list is replaced wholesale by its own fetch and kept in
/// arrival order. The same match id may appear in several sources at once;
/// [`Catalog::apply_join`] is the single mutation entry point and updates
/// every occurrence in one call, so simultaneously rendered views of the
/// same match never diverge.
#[derive(Debug, Default)]
pub struct Catalog {
    search: Vec<Match>,
    recommended: Vec<Match>,
    featured: Vec<Match>,
    version: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full list for one source with a freshly fetched one.
    ///
    /// Other sources are untouched; there is no cross-source merging. A
    /// failed fetch never reaches this method, so a prior successful list
    /// survives a later failed refresh.
    pub fn load(&mut self, source: Source, matches: Vec<Match>) {
        debug!(%source, count = matches.len(), "loading source");
        *self.list_mut(source) = matches;
        self.version += 1;
    }

    /// Record a successful join in every source list containing `match_id`.
    ///
    /// For each occurrence, appends `player_id` to the joined-players list
    /// and decrements `players_required`, floored at zero, as one pair.
    /// Returns whether any source contained the id.
    pub fn apply_join(&mut self, match_id: &MatchId, player_id: &str) -> bool {
        let mut applied = false;
        for source in Source::ALL {
            for m in self.list_mut(source).iter_mut().filter(|m| m.id == *match_id) {
                m.players.push(Player {
                    player_id: player_id.to_string(),
                });
                m.players_required = m.players_required.saturating_sub(1);
                applied = true;
            }
        }
        if applied {
            self.version += 1;
            debug!(%match_id, player_id, "applied join across sources");
        }
        applied
    }

    /// The current list for `source`, in arrival order.
    pub fn get(&self, source: Source) -> &[Match] {
        match source {
            Source::Search => &self.search,
            Source::Recommended => &self.recommended,
            Source::Featured => &self.featured,
        }
    }

    /// First occurrence of `match_id` across sources, in [`Source::ALL`] order.
    pub fn find(&self, match_id: &MatchId) -> Option<&Match> {
        Source::ALL
            .iter()
            .flat_map(|&source| self.get(source))
            .find(|m| m.id == *match_id)
    }

    /// Occurrence of `match_id` within one source.
    pub fn find_in(&self, source: Source, match_id: &MatchId) -> Option<&Match> {
        self.get(source).iter().find(|m| m.id == *match_id)
    }

    /// Monotonic counter bumped on every load or applied join. Projections
    /// compare against it to detect staleness.
    pub fn version(&self) -> u64 {
        self.version
    }

    fn list_mut(&mut self, source: Source) -> &mut Vec<Match> {
        match source {
            Source::Search => &mut self.search,
            Source::Recommended => &mut self.recommended,
            Source::Featured => &mut self.featured,
        }
    }
}
