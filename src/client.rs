use tracing::{instrument, warn};

use crate::api;
use crate::catalog::{Catalog, Source};
use crate::coordinator::{self, Eligibility, JoinCoordinator, JoinOutcome};
use crate::detail::DetailProjection;
use crate::error::{MatchboardError, Result};
use crate::filter;
use crate::identity::Identity;
use crate::model::{Match, MatchId, UserRecord};

/// The main entry point for interacting with a matchboard service.
///
/// `MatchboardClient` wraps a [`reqwest::Client`] together with the local
/// match catalog, join coordinator, session identity, and the optional open
/// detail view. All state lives behind `&mut self`; the intended model is a
/// single-threaded event loop where network calls suspend but nothing else
/// touches the client in parallel.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> matchboard::Result<()> {
/// use matchboard::{MatchboardClient, Source};
///
/// let mut client = MatchboardClient::new("http://localhost:3000");
/// client.resolve_identity().await;
/// client.refresh_search().await?;
/// let id = client.catalog().get(Source::Search)[0].id.clone();
/// let outcome = client.join(&id).await?;
/// println!("{}", outcome.message);
/// # Ok(())
/// # }
/// ```
pub struct MatchboardClient {
    http: reqwest::Client,
    base_url: String,
    catalog: Catalog,
    coordinator: JoinCoordinator,
    identity: Identity,
    detail: Option<DetailProjection>,
}

impl MatchboardClient {
    /// Create a new client for the service at `base_url` with default
    /// HTTP settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, cookies, etc.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            catalog: Catalog::new(),
            coordinator: JoinCoordinator::new(),
            identity: Identity::default(),
            detail: None,
        }
    }

    /// Resolve the current session's user id.
    ///
    /// Called once at startup. A failure (unauthenticated, network) is
    /// logged and leaves the identity unresolved indefinitely; it is never
    /// surfaced as a user-visible error and nothing blocks on it, join
    /// attempts included.
    #[instrument(skip(self))]
    pub async fn resolve_identity(&mut self) {
        match api::session::get_session(&self.http, &self.base_url).await {
            Ok(session) => self.identity.resolve(session.user_id),
            Err(e) => warn!(error = %e, "identity resolution failed, staying unresolved"),
        }
    }

    /// Refresh the search source from the match listing endpoint.
    ///
    /// On failure the previously loaded list is left untouched.
    #[instrument(skip(self))]
    pub async fn refresh_search(&mut self) -> Result<()> {
        let matches = api::listings::get_matches(&self.http, &self.base_url).await?;
        self.catalog.load(Source::Search, matches);
        Ok(())
    }

    /// Refresh the recommended and featured sources from the home feed.
    ///
    /// On failure neither source is touched.
    #[instrument(skip(self))]
    pub async fn refresh_home(&mut self) -> Result<()> {
        let feed = api::listings::get_home_feed(&self.http, &self.base_url).await?;
        self.catalog.load(Source::Recommended, feed.recommended_matches);
        self.catalog.load(Source::Featured, feed.featured_matches);
        Ok(())
    }

    /// Server-side free-text search over user profiles.
    #[instrument(skip(self))]
    pub async fn find_users(&self, term: &str) -> Result<Vec<UserRecord>> {
        api::listings::find_users(&self.http, &self.base_url, term).await
    }

    /// Join a match by id.
    ///
    /// Validates eligibility and the per-match in-flight guard locally,
    /// posts the join request, and on success applies the player-list
    /// append and `players_required` decrement to every catalog source
    /// holding the match and to the open detail view, all before
    /// returning. On any failure the catalog is untouched and the error
    /// carries the server's message where one was given.
    #[instrument(skip(self))]
    pub async fn join(&mut self, match_id: &MatchId) -> Result<JoinOutcome> {
        let ticket = self
            .coordinator
            .begin(&self.catalog, &self.identity, match_id)?;
        let response = api::join::post_join(&self.http, &self.base_url, ticket.request()).await;
        self.coordinator.complete(
            &mut self.catalog,
            self.detail.as_mut(),
            &mut self.identity,
            ticket,
            response,
        )
    }

    /// Filter one source's list by a free-text query. A blank query yields
    /// the full list; see [`crate::filter::filter`].
    pub fn filter<'a>(
        &'a self,
        source: Source,
        query: &str,
    ) -> impl Iterator<Item = &'a Match> + Clone + 'a {
        filter::filter(&self.catalog, source, query)
    }

    /// Open a detail view over one match from the given source, replacing
    /// any previously open one.
    pub fn open_detail(&mut self, source: Source, match_id: &MatchId) -> Result<&DetailProjection> {
        let projection = DetailProjection::open(&self.catalog, source, match_id)?;
        Ok(self.detail.insert(projection))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&DetailProjection> {
        self.detail.as_ref()
    }

    /// The current user's join eligibility for a catalog match.
    pub fn eligibility(&self, match_id: &MatchId) -> Result<Eligibility> {
        let m = self
            .catalog
            .find(match_id)
            .ok_or_else(|| MatchboardError::MatchNotFound(match_id.clone()))?;
        Ok(coordinator::eligibility(m, &self.identity))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_support::match_fixture;

    fn loaded_client() -> MatchboardClient {
        let mut client = MatchboardClient::new("http://localhost:3000/");
        client
            .catalog
            .load(Source::Search, vec![match_fixture("m1", 5)]);
        client
            .catalog
            .load(Source::Featured, vec![match_fixture("m1", 5)]);
        client
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = MatchboardClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_eligibility_reflects_identity_and_catalog() {
        let mut client = loaded_client();
        assert_eq!(
            client.eligibility(&"m1".into()).unwrap(),
            Eligibility::Unknown
        );

        client.identity.resolve("u1".to_string());
        assert_eq!(
            client.eligibility(&"m1".into()).unwrap(),
            Eligibility::NotJoined
        );

        client.catalog.apply_join(&"m1".into(), "u1");
        assert_eq!(
            client.eligibility(&"m1".into()).unwrap(),
            Eligibility::Joined
        );
    }

    #[test]
    fn test_open_detail_replaces_previous_view() {
        let mut client = loaded_client();
        client
            .catalog
            .load(Source::Recommended, vec![match_fixture("m2", 3)]);

        client.open_detail(Source::Search, &"m1".into()).unwrap();
        client.open_detail(Source::Recommended, &"m2".into()).unwrap();
        assert_eq!(client.detail().unwrap().match_id(), &"m2".into());

        client.close_detail();
        assert!(client.detail().is_none());
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_list() {
        // nothing listens on port 9, so the fetch fails before any load
        let mut client = MatchboardClient::new("http://127.0.0.1:9");
        client
            .catalog
            .load(Source::Search, vec![match_fixture("m1", 5)]);

        assert!(client.refresh_search().await.is_err());
        assert_eq!(client.catalog().get(Source::Search).len(), 1);

        assert!(client.refresh_home().await.is_err());
        assert!(client.catalog().get(Source::Recommended).is_empty());
    }

    #[test]
    fn test_filter_runs_over_loaded_catalog() {
        let client = loaded_client();
        assert_eq!(client.filter(Source::Search, "football").count(), 1);
        assert_eq!(client.filter(Source::Search, "tennis").count(), 0);
    }
}
