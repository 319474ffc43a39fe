//! Rocket Racing car cosmetics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::{
    null_as_empty, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticTypeInfo, SizedImages,
};

/// A car cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticCar {
    pub id: String,
    pub vehicle_id: String,
    pub name: String,
    pub description: String,
    #[serde(default, rename = "type")]
    pub kind: Option<CosmeticTypeInfo>,
    #[serde(default)]
    pub rarity: Option<CosmeticRarityInfo>,
    #[serde(default)]
    pub images: Option<SizedImages>,
    #[serde(default)]
    pub series: Option<CosmeticSeriesInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gameplay_tags: Vec<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub showcase_video: Option<String>,
    pub added: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}
