//! Banner types.

use serde::{Deserialize, Serialize};

/// Banner icon URLs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerImages {
    #[serde(default)]
    pub small_icon: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A banner icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub dev_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub full_usage_rights: bool,
    #[serde(default)]
    pub images: BannerImages,
}

/// A banner background color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerColor {
    pub id: String,
    /// Hex color without `#`, e.g. `ff6a00`
    pub color: String,
    pub category: String,
    pub sub_category_group: i32,
}
