//! News types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::null_as_empty;

/// A "message of the day" tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsMotd {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tab_title: Option<String>,
    pub body: String,
    pub image: String,
    #[serde(default)]
    pub tile_image: Option<String>,
    #[serde(default)]
    pub sorting_priority: i32,
    #[serde(default)]
    pub hidden: bool,
}

/// A plain news message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsMessage {
    pub title: String,
    pub body: String,
    pub image: String,
}

/// News for a single game mode (BR, STW).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModeNews {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Composite image of all entries
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub motds: Vec<NewsMotd>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<NewsMessage>,
}

/// Response for GET /v2/news.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    #[serde(default)]
    pub br: Option<GameModeNews>,
    #[serde(default)]
    pub stw: Option<GameModeNews>,
    #[serde(default)]
    pub creative: Option<GameModeNews>,
}
