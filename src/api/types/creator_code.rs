//! Creator code types.

use serde::{Deserialize, Serialize};

/// Epic Games account reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
}

/// Creator code status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreatorCodeStatus {
    Active,
    Disabled,
    #[serde(other)]
    Unknown,
}

/// Response for GET /v2/creatorcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorCode {
    pub code: String,
    pub account: Account,
    pub status: CreatorCodeStatus,
    pub verified: bool,
}

impl CreatorCode {
    /// Whether the code can no longer be used.
    pub fn disabled(&self) -> bool {
        self.status == CreatorCodeStatus::Disabled
    }
}
