pub(crate) mod join;
pub(crate) mod listings;
pub(crate) mod session;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MatchboardError, Result};

/// Fetch a URL and decode the JSON response body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|e| MatchboardError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MatchboardError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response
        .json()
        .await
        .map_err(|e| MatchboardError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })
}
