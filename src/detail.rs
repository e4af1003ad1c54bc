use crate::catalog::{Catalog, Source};
use crate::error::{MatchboardError, Result};
use crate::model::{Match, MatchId, Player};

/// A point-in-time copy of one match shown in a focused overlay.
///
/// Opened by snapshotting the match from whichever source list the user
/// selected it from. The join coordinator re-syncs an open projection in
/// the same step that mutates the catalog, so the overlay and any list
/// views of the same match agree without a re-fetch. A projection never
/// writes back to the catalog.
#[derive(Debug, Clone)]
pub struct DetailProjection {
    source: Source,
    snapshot: Match,
    seen_version: u64,
}

impl DetailProjection {
    pub fn open(catalog: &Catalog, source: Source, match_id: &MatchId) -> Result<Self> {
        let snapshot = catalog
            .find_in(source, match_id)
            .cloned()
            .ok_or_else(|| MatchboardError::NotInSource {
                origin: source,
                id: match_id.clone(),
            })?;
        Ok(DetailProjection {
            source,
            snapshot,
            seen_version: catalog.version(),
        })
    }

    pub fn match_id(&self) -> &MatchId {
        &self.snapshot.id
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn snapshot(&self) -> &Match {
        &self.snapshot
    }

    /// Apply the same append+decrement pair the catalog applied, keeping
    /// the overlay in step without a re-fetch. Called by the coordinator
    /// on successful join.
    pub(crate) fn apply_join(&mut self, player_id: &str, catalog_version: u64) {
        self.snapshot.players.push(Player {
            player_id: player_id.to_string(),
        });
        self.snapshot.players_required = self.snapshot.players_required.saturating_sub(1);
        self.seen_version = catalog_version;
    }

    /// Whether the catalog has changed since this projection last synced.
    pub fn is_stale(&self, catalog: &Catalog) -> bool {
        self.seen_version != catalog.version()
    }

    /// Re-snapshot from the catalog. Returns false when the match is no
    /// longer present in any source, in which case the old snapshot is
    /// kept as-is.
    pub fn refresh(&mut self, catalog: &Catalog) -> bool {
        let current = catalog
            .find_in(self.source, &self.snapshot.id)
            .or_else(|| catalog.find(&self.snapshot.id));
        match current {
            Some(m) => {
                self.snapshot = m.clone();
                self.seen_version = catalog.version();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::match_fixture;

    fn catalog_with_m1() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.load(Source::Recommended, vec![match_fixture("m1", 5)]);
        catalog
    }

    #[test]
    fn test_open_snapshots_from_selected_source() {
        let catalog = catalog_with_m1();
        let detail = DetailProjection::open(&catalog, Source::Recommended, &"m1".into()).unwrap();
        assert_eq!(detail.snapshot().players_required, 5);
        assert!(!detail.is_stale(&catalog));
    }

    #[test]
    fn test_open_missing_match_fails() {
        let catalog = catalog_with_m1();
        let err = DetailProjection::open(&catalog, Source::Search, &"m1".into()).unwrap_err();
        assert!(matches!(err, MatchboardError::NotInSource { .. }));
    }

    #[test]
    fn test_apply_join_mutates_pair() {
        let catalog = catalog_with_m1();
        let mut detail =
            DetailProjection::open(&catalog, Source::Recommended, &"m1".into()).unwrap();
        detail.apply_join("u1", catalog.version());
        assert_eq!(detail.snapshot().players_required, 4);
        assert_eq!(detail.snapshot().players.len(), 1);
    }

    #[test]
    fn test_catalog_mutation_marks_projection_stale_until_refreshed() {
        let mut catalog = catalog_with_m1();
        let mut detail =
            DetailProjection::open(&catalog, Source::Recommended, &"m1".into()).unwrap();

        catalog.apply_join(&"m1".into(), "u2");
        assert!(detail.is_stale(&catalog));

        assert!(detail.refresh(&catalog));
        assert!(!detail.is_stale(&catalog));
        assert_eq!(detail.snapshot().players_required, 4);
        assert_eq!(detail.snapshot().players[0].player_id, "u2");
    }

    #[test]
    fn test_refresh_keeps_snapshot_when_match_disappears() {
        let mut catalog = catalog_with_m1();
        let mut detail =
            DetailProjection::open(&catalog, Source::Recommended, &"m1".into()).unwrap();

        catalog.load(Source::Recommended, vec![]);
        assert!(!detail.refresh(&catalog));
        assert_eq!(detail.snapshot().id, "m1".into());
    }
}
