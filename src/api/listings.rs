use tracing::{debug, instrument};

use crate::api;
use crate::error::Result;
use crate::model::{HomeFeed, Match, UserRecord};

/// Fetch the full match listing backing the search view.
#[instrument(skip(client, base_url))]
pub(crate) async fn get_matches(client: &reqwest::Client, base_url: &str) -> Result<Vec<Match>> {
    let url = format!("{base_url}/api/match");
    let matches: Vec<Match> = api::get_json(client, &url).await?;
    debug!(count = matches.len(), "fetched match listing");
    Ok(matches)
}

/// Fetch the home payload and keep the recommended and featured lists.
#[instrument(skip(client, base_url))]
pub(crate) async fn get_home_feed(client: &reqwest::Client, base_url: &str) -> Result<HomeFeed> {
    let url = format!("{base_url}/api/home");
    let feed: HomeFeed = api::get_json(client, &url).await?;
    debug!(
        recommended = feed.recommended_matches.len(),
        featured = feed.featured_matches.len(),
        "fetched home feed"
    );
    Ok(feed)
}

/// Server-side free-text search over user profiles. Match filtering stays
/// local; this endpoint only covers the player-discovery panel.
#[instrument(skip(client, base_url))]
pub(crate) async fn find_users(
    client: &reqwest::Client,
    base_url: &str,
    term: &str,
) -> Result<Vec<UserRecord>> {
    let url = format!("{base_url}/auth/find-users?search={term}");
    api::get_json(client, &url).await
}
