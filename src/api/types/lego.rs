//! LEGO cosmetics and LEGO kits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::{null_as_empty, CosmeticSeriesInfo, CosmeticTypeInfo, SizedImages};

/// LEGO style of a Battle Royale cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticLego {
    pub id: String,
    /// Id of the [`CosmeticBr`](super::CosmeticBr) this is the LEGO style of
    pub cosmetic_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sound_library_tags: Vec<String>,
    #[serde(default)]
    pub images: Option<SizedImages>,
    #[serde(default)]
    pub path: Option<String>,
    pub added: DateTime<Utc>,
}

/// A LEGO kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticLegoKit {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<CosmeticTypeInfo>,
    #[serde(default)]
    pub series: Option<CosmeticSeriesInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gameplay_tags: Vec<String>,
    #[serde(default)]
    pub images: Option<SizedImages>,
    #[serde(default)]
    pub path: Option<String>,
    pub added: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}
