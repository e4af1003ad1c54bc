use tracing::{debug, instrument};

use crate::error::{MatchboardError, Result};
use crate::model::{JoinRequest, JoinResponse};

/// Submit a join request.
///
/// A non-success status with a decodable `{message}` body is a server-side
/// rejection and surfaces as [`MatchboardError::JoinRejected`] with the
/// message verbatim; anything else is a transport error.
#[instrument(skip(client, base_url, request))]
pub(crate) async fn post_join(
    client: &reqwest::Client,
    base_url: &str,
    request: &JoinRequest,
) -> Result<JoinResponse> {
    let url = format!("{base_url}/api/match/join");
    debug!(%url, match_name = %request.match_name, "posting join");

    let response = client
        .post(&url)
        .json(request)
        .send()
        .await
        .map_err(|e| MatchboardError::Http {
            url: url.clone(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return match response.json::<JoinResponse>().await {
            Ok(body) => Err(MatchboardError::JoinRejected {
                message: body.message,
            }),
            Err(_) => Err(MatchboardError::UnexpectedStatus { url, status }),
        };
    }

    response
        .json()
        .await
        .map_err(|e| MatchboardError::ResponseBody { url, source: e })
}
