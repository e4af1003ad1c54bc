use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Address, Match};

/// Response from the session-introspection endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body of a join request.
///
/// The join endpoint resolves the target match server-side from these
/// descriptive fields rather than from its unique id, so this is the
/// shape the wire requires; callers of this crate still join by id and
/// the payload is derived from the catalog's authoritative copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinRequest {
    #[serde(rename = "matchName")]
    pub match_name: String,
    #[serde(rename = "sportsType")]
    pub sports_type: String,
    pub date: DateTime<Utc>,
    pub address: Address,
}

impl From<&Match> for JoinRequest {
    fn from(m: &Match) -> Self {
        JoinRequest {
            match_name: m.name.clone(),
            sports_type: m.sport.clone(),
            date: m.date,
            address: m.address.clone(),
        }
    }
}

/// Response from the join endpoint.
///
/// On success `user_id` carries the id the server resolved the joining
/// user to; on rejection only `message` is present.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinResponse {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// A user profile as returned by the player-discovery search.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub bio: String,
}

/// The slice of the home payload this subsystem consumes.
///
/// The endpoint also carries leaderboards and activity charts; those are
/// presentational and ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeFeed {
    #[serde(rename = "recommendedMatches", default)]
    pub recommended_matches: Vec<Match>,
    #[serde(rename = "featuredMatches", default)]
    pub featured_matches: Vec<Match>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        serde_json::from_str(
            r#"{
                "_id": "m1",
                "matchName": "Sunday Football",
                "sportsType": "football",
                "matchType": "Friendly",
                "date": "2026-09-06T07:00:00Z",
                "address": {
                    "groundName": "Riverside",
                    "area": "Aundh",
                    "city": "Pune",
                    "state": "Maharashtra"
                },
                "playersRequired": 3
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_join_request_carries_description_not_id() {
        let request = JoinRequest::from(&sample_match());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["matchName"], "Sunday Football");
        assert_eq!(value["sportsType"], "football");
        assert_eq!(value["address"]["groundName"], "Riverside");
        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_decode_home_feed_ignores_presentational_fields() {
        let json = r#"{
            "percentile": 87,
            "weeklyLeaderboard": [{"name": "x", "score": 1}],
            "recommendedMatches": [],
            "featuredMatches": []
        }"#;
        let feed: HomeFeed = serde_json::from_str(json).unwrap();
        assert!(feed.recommended_matches.is_empty());
        assert!(feed.featured_matches.is_empty());
    }

    #[test]
    fn test_decode_join_response_variants() {
        let ok: JoinResponse =
            serde_json::from_str(r#"{"message": "Joined match successfully", "userId": "u1"}"#)
                .unwrap();
        assert_eq!(ok.user_id.as_deref(), Some("u1"));

        let rejected: JoinResponse =
            serde_json::from_str(r#"{"message": "Match is already full"}"#).unwrap();
        assert!(rejected.user_id.is_none());
        assert_eq!(rejected.message, "Match is already full");
    }
}
