//! Festival jam track cosmetics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::null_as_empty;

/// Per-instrument difficulty ratings (0-6).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTrackDifficulty {
    #[serde(default)]
    pub vocals: i32,
    #[serde(default)]
    pub guitar: i32,
    #[serde(default)]
    pub bass: i32,
    #[serde(default)]
    pub plastic_bass: i32,
    #[serde(default)]
    pub drums: i32,
    #[serde(default)]
    pub plastic_drums: i32,
}

/// A jam track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTrack {
    pub id: String,
    pub dev_name: String,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    pub release_year: i32,
    pub bpm: i32,
    /// Length in seconds
    pub duration: i64,
    #[serde(default)]
    pub difficulty: CosmeticTrackDifficulty,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gameplay_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<String>,
    /// Album art URL
    pub album_art: String,
    pub added: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl CosmeticTrack {
    /// Track length.
    pub fn length(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.duration.max(0) as u64)
    }
}
