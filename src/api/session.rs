use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::SessionResponse;

#[instrument(skip(client, base_url))]
pub(crate) async fn get_session(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<SessionResponse> {
    let url = format!("{base_url}/auth/me");
    api::get_json(client, &url).await
}
