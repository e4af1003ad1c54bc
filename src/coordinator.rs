use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::detail::DetailProjection;
use crate::error::{MatchboardError, Result};
use crate::identity::Identity;
use crate::model::{JoinRequest, JoinResponse, Match, MatchId};

/// Whether the current user may join a match.
///
/// `Unknown` is the identity-not-yet-resolved case: the membership check
/// cannot distinguish "not joined" from "identity unknown", so it is kept
/// as its own state instead of being folded into `NotJoined`. A UI may
/// choose to disable the join control while `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Joined,
    NotJoined,
    Unknown,
}

pub fn eligibility(m: &Match, identity: &Identity) -> Eligibility {
    match identity.user_id() {
        None => Eligibility::Unknown,
        Some(user_id) if m.is_joined_by(user_id) => Eligibility::Joined,
        Some(_) => Eligibility::NotJoined,
    }
}

/// Proof that a join attempt passed the local gates and was marked
/// in-flight. Carries the wire payload, which identifies the target match
/// by its descriptive fields because that is what the join endpoint keys
/// on; the id stays local for the catalog fan-out afterwards.
#[derive(Debug)]
pub struct JoinTicket {
    match_id: MatchId,
    request: JoinRequest,
}

impl JoinTicket {
    pub fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    pub fn request(&self) -> &JoinRequest {
        &self.request
    }
}

/// A successful join, after the catalog and any open detail view have been
/// updated.
#[derive(Debug, Clone)]
pub struct JoinOutcome {
    pub message: String,
    pub user_id: String,
}

/// Orchestrates the join request/response cycle.
///
/// A join runs in two phases around the network suspension point:
/// [`JoinCoordinator::begin`] checks eligibility and marks the match
/// in-flight before the request is sent, and [`JoinCoordinator::complete`]
/// clears the marker and, on success only, fans the append+decrement
/// mutation out to the catalog and any open detail projection in one call.
/// No borrows are held across the await between the two phases.
///
/// Per attempt the states are `Idle -> Requesting -> Applied | Rejected`.
/// After `Applied` the eligibility gate reports `Joined` and further
/// attempts are refused locally; after `Rejected` a fresh attempt may
/// begin. There is no retry, timeout, or cancellation.
#[derive(Debug, Default)]
pub struct JoinCoordinator {
    in_flight: HashSet<MatchId>,
}

impl JoinCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a join request for this match is currently outstanding.
    pub fn is_in_flight(&self, match_id: &MatchId) -> bool {
        self.in_flight.contains(match_id)
    }

    /// Validate a join attempt and mark it in-flight.
    ///
    /// Refuses locally, without any network traffic, when the match is not
    /// in the catalog, the user is already on its player list, or another
    /// request for the same match is still outstanding. An unresolved
    /// identity does not block the attempt; the membership check then
    /// degenerates to "not already joined" and the server remains the
    /// authority.
    pub fn begin(
        &mut self,
        catalog: &Catalog,
        identity: &Identity,
        match_id: &MatchId,
    ) -> Result<JoinTicket> {
        let m = catalog
            .find(match_id)
            .ok_or_else(|| MatchboardError::MatchNotFound(match_id.clone()))?;

        match eligibility(m, identity) {
            Eligibility::Joined => return Err(MatchboardError::AlreadyJoined(match_id.clone())),
            Eligibility::Unknown => {
                debug!(%match_id, "identity unresolved at join time, proceeding");
            }
            Eligibility::NotJoined => {}
        }

        if !self.in_flight.insert(match_id.clone()) {
            return Err(MatchboardError::JoinInFlight(match_id.clone()));
        }

        debug!(%match_id, "join requesting");
        Ok(JoinTicket {
            match_id: match_id.clone(),
            request: JoinRequest::from(m),
        })
    }

    /// Settle an attempt with the collaborator's response.
    ///
    /// On success the response's resolving user id is appended to the
    /// joined-players list and `players_required` decremented in every
    /// source holding the match, the identity is backfilled if it was
    /// still unresolved, and an open detail projection for the same match
    /// is re-synced. On any failure nothing is mutated and the error
    /// carries the server's message verbatim.
    pub fn complete(
        &mut self,
        catalog: &mut Catalog,
        detail: Option<&mut DetailProjection>,
        identity: &mut Identity,
        ticket: JoinTicket,
        response: Result<JoinResponse>,
    ) -> Result<JoinOutcome> {
        self.in_flight.remove(&ticket.match_id);

        let response = response?;
        let Some(user_id) = response.user_id else {
            // a success body without the resolving user id gives us nothing
            // to record; treat it as a rejection rather than guess
            warn!(match_id = %ticket.match_id, "join response missing user id");
            return Err(MatchboardError::JoinRejected {
                message: response.message,
            });
        };

        identity.resolve(user_id.clone());

        if !catalog.apply_join(&ticket.match_id, &user_id) {
            warn!(match_id = %ticket.match_id, "joined match no longer in any source");
        }
        if let Some(detail) = detail {
            if *detail.match_id() == ticket.match_id {
                detail.apply_join(&user_id, catalog.version());
            }
        }

        debug!(match_id = %ticket.match_id, %user_id, "join applied");
        Ok(JoinOutcome {
            message: response.message,
            user_id,
        })
    }
}
