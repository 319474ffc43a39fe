//! Battle Royale player stats types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::creator_code::Account;
use crate::shared::{AccountType, StatsImageType, TimeWindow};

/// Battle pass progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattlePass {
    pub level: i32,
    /// Progress to the next level, in percent
    pub progress: i32,
}

/// Stats for one game mode.
///
/// `topN` placements only exist for the modes where they apply; all of them
/// are present in `overall`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrGameModeStats {
    pub score: i64,
    pub score_per_min: f64,
    pub score_per_match: f64,
    pub wins: i64,
    #[serde(default)]
    pub top3: Option<i64>,
    #[serde(default)]
    pub top5: Option<i64>,
    #[serde(default)]
    pub top6: Option<i64>,
    #[serde(default)]
    pub top10: Option<i64>,
    #[serde(default)]
    pub top12: Option<i64>,
    #[serde(default)]
    pub top25: Option<i64>,
    pub kills: i64,
    pub kills_per_min: f64,
    pub kills_per_match: f64,
    pub deaths: i64,
    pub kd: f64,
    pub matches: i64,
    pub win_rate: f64,
    pub minutes_played: i64,
    pub players_outlived: i64,
    pub last_modified: DateTime<Utc>,
}

/// Stats for one input method, split by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrInputStats {
    #[serde(default)]
    pub overall: Option<BrGameModeStats>,
    #[serde(default)]
    pub solo: Option<BrGameModeStats>,
    #[serde(default)]
    pub duo: Option<BrGameModeStats>,
    #[serde(default)]
    pub squad: Option<BrGameModeStats>,
    #[serde(default)]
    pub ltm: Option<BrGameModeStats>,
}

/// Stats split by input method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrInputs {
    #[serde(default)]
    pub all: Option<BrInputStats>,
    #[serde(default)]
    pub keyboard_mouse: Option<BrInputStats>,
    #[serde(default)]
    pub gamepad: Option<BrInputStats>,
    #[serde(default)]
    pub touch: Option<BrInputStats>,
}

/// Response for GET /v2/stats/br/v2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrPlayerStats {
    pub account: Account,
    #[serde(default)]
    pub battle_pass: Option<BattlePass>,
    /// Rendered stats image, when requested
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stats: Option<BrInputs>,
}

impl BrPlayerStats {
    /// Overall stats across every input method and mode.
    pub fn overall(&self) -> Option<&BrGameModeStats> {
        self.stats.as_ref()?.all.as_ref()?.overall.as_ref()
    }
}

/// Query parameters for the stats endpoints.
#[derive(Debug, Clone, Default)]
pub struct StatsParams {
    /// Account name; required for lookups by name, ignored for lookups by id
    pub name: Option<String>,
    pub account_type: Option<AccountType>,
    pub time_window: Option<TimeWindow>,
    pub image: Option<StatsImageType>,
}

impl StatsParams {
    /// Params for a lookup by account name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the platform the name belongs to.
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    /// Set the time window.
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    /// Request a rendered stats image.
    pub fn with_image(mut self, image: StatsImageType) -> Self {
        self.image = Some(image);
        self
    }
}
