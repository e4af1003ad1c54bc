use crate::catalog::Source;
use crate::model::MatchId;

/// All errors that can occur while talking to the match service or
/// coordinating local join state.
#[derive(thiserror::Error, Debug)]
pub enum MatchboardError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the response body.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The server rejected a join attempt; the message is surfaced verbatim.
    #[error("join rejected: {message}")]
    JoinRejected { message: String },

    /// The current user is already on the match's player list; refused
    /// locally without a network call.
    #[error("already joined match {0}")]
    AlreadyJoined(MatchId),

    /// A join request for this match is still outstanding; refused locally
    /// without a network call.
    #[error("join already in flight for match {0}")]
    JoinInFlight(MatchId),

    /// The match id is not present in any catalog source.
    #[error("match {0} not found in catalog")]
    MatchNotFound(MatchId),

    /// A detail view was requested for a match absent from the given source.
    #[error("match {id} not found in {origin} source")]
    NotInSource { origin: Source, id: MatchId },
}

pub type Result<T> = std::result::Result<T, MatchboardError>;
