use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Opaque server-assigned match identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub String);

impl Display for MatchId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MatchId {
    fn from(id: &str) -> Self {
        MatchId(id.to_string())
    }
}

/// The format a match is played under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
pub enum MatchType {
    Friendly,
    Tournament,
    Practice,
}

/// Optional map-link coordinates attached to an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(rename = "mapLink")]
    pub map_link: String,
}

/// Where a match takes place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "groundName")]
    pub ground_name: String,
    pub area: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

/// A player recorded as having joined a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "playerId")]
    pub player_id: String,
}

/// A schedulable group activity with capacity and location.
///
/// Fetched read-only from the listing endpoints; the only fields this
/// subsystem ever mutates locally are `players` and `players_required`,
/// and always as a pair (see [`crate::catalog::Catalog::apply_join`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(rename = "_id")]
    pub id: MatchId,
    #[serde(rename = "matchName")]
    pub name: String,
    #[serde(rename = "sportsType")]
    pub sport: String,
    #[serde(rename = "matchType")]
    pub match_type: MatchType,
    pub date: DateTime<Utc>,
    pub address: Address,
    #[serde(rename = "playersRequired")]
    pub players_required: u32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub notes: String,
}

impl Match {
    /// Whether `user_id` already appears on the joined-players list.
    pub fn is_joined_by(&self, user_id: &str) -> bool {
        self.players.iter().any(|p| p.player_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_match_document() {
        let json = r#"{
            "_id": "66f1a2b3c4d5e6f7a8b9c0d1",
            "matchName": "Night Cricket",
            "sportsType": "cricket",
            "matchType": "Friendly",
            "date": "2026-09-05T18:30:00.000Z",
            "address": {
                "groundName": "Deccan Turf",
                "area": "Baner",
                "city": "Pune",
                "state": "Maharashtra",
                "coordinates": { "mapLink": "https://maps.example.com/x" }
            },
            "playersRequired": 5,
            "players": [{ "playerId": "u42" }],
            "notes": "Bring your own pads"
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, MatchId::from("66f1a2b3c4d5e6f7a8b9c0d1"));
        assert_eq!(m.match_type, MatchType::Friendly);
        assert_eq!(m.address.city, "Pune");
        assert_eq!(m.players_required, 5);
        assert!(m.is_joined_by("u42"));
        assert!(!m.is_joined_by("u1"));
    }

    #[test]
    fn test_decode_match_without_optional_fields() {
        let json = r#"{
            "_id": "m2",
            "matchName": "Chess Club",
            "sportsType": "chess",
            "matchType": "Practice",
            "date": "2026-09-06T10:00:00Z",
            "address": {
                "groundName": "Community Hall",
                "area": "Kothrud",
                "city": "Pune",
                "state": "Maharashtra"
            },
            "playersRequired": 1
        }"#;
        let m: Match = serde_json::from_str(json).unwrap();
        assert!(m.players.is_empty());
        assert!(m.notes.is_empty());
        assert!(m.address.coordinates.is_none());
    }
}
