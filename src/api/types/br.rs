//! Battle Royale cosmetic types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cosmetic::{
    null_as_empty, CosmeticImages, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticTypeInfo,
};

/// Set a cosmetic belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticBrSet {
    /// Set name
    pub value: String,
    /// Display text, e.g. "Part of the Lovely set."
    pub text: String,
    /// Internal marker
    pub backend_value: String,
}

/// When a cosmetic was introduced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticBrIntroduction {
    /// Chapter, sent as a string by the API
    pub chapter: String,
    /// Season; "OG" for items that predate seasons
    pub season: String,
    /// Display text, e.g. "Introduced in Chapter 1, Season 5."
    pub text: String,
    /// Internal season number
    pub backend_value: i64,
}

impl CosmeticBrIntroduction {
    /// Chapter as a number, when the API sent a numeric value.
    pub fn chapter_number(&self) -> Option<u32> {
        self.chapter.parse().ok()
    }
}

/// One selectable option of a variant channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmeticBrVariantOption {
    pub tag: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Preview image URL
    pub image: String,
}

/// A variant channel (style, material, parts, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmeticBrVariant {
    pub channel: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub options: Vec<CosmeticBrVariantOption>,
}

/// A Battle Royale cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticBr {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub exclusive_description: Option<String>,
    #[serde(default)]
    pub unlock_requirements: Option<String>,
    #[serde(default)]
    pub custom_exclusive_callout: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<CosmeticTypeInfo>,
    #[serde(default)]
    pub rarity: Option<CosmeticRarityInfo>,
    #[serde(default)]
    pub series: Option<CosmeticSeriesInfo>,
    #[serde(default)]
    pub set: Option<CosmeticBrSet>,
    #[serde(default)]
    pub introduction: Option<CosmeticBrIntroduction>,
    #[serde(default)]
    pub images: Option<CosmeticImages>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub variants: Vec<CosmeticBrVariant>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub built_in_emote_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub search_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gameplay_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meta_tags: Vec<String>,
    #[serde(default)]
    pub showcase_video: Option<String>,
    #[serde(default)]
    pub dynamic_pak_id: Option<String>,
    #[serde(default)]
    pub item_preview_hero_path: Option<String>,
    #[serde(default)]
    pub display_asset_path: Option<String>,
    #[serde(default)]
    pub definition_path: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    pub added: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub shop_history: Vec<DateTime<Utc>>,
}

impl CosmeticBr {
    /// Last time this cosmetic was in the item shop.
    pub fn last_seen_in_shop(&self) -> Option<DateTime<Utc>> {
        self.shop_history.iter().max().copied()
    }
}
