//! Playlist types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::null_as_empty;

/// Playlist image URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistImages {
    #[serde(default)]
    pub showcase: Option<String>,
    #[serde(default)]
    pub mission_icon: Option<String>,
}

/// A game playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sub_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default)]
    pub rating_type: Option<String>,
    pub min_players: i32,
    pub max_players: i32,
    pub max_teams: i32,
    pub max_team_size: i32,
    pub max_squads: i32,
    pub max_squad_size: i32,
    pub is_default: bool,
    pub is_tournament: bool,
    pub is_limited_time_mode: bool,
    pub is_large_team_game: bool,
    pub accumulate_to_profile_stats: bool,
    #[serde(default)]
    pub images: Option<PlaylistImages>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gameplay_tags: Vec<String>,
    pub path: String,
    pub added: DateTime<Utc>,
}
