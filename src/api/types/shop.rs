//! Item shop types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::br::CosmeticBr;
use super::car::CosmeticCar;
use super::cosmetic::null_as_empty;
use super::instrument::CosmeticInstrument;
use super::lego::CosmeticLegoKit;
use super::track::CosmeticTrack;

/// Bundle information of a shop entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopEntryBundle {
    pub name: String,
    pub info: String,
    pub image: String,
}

/// Banner shown on a shop tile (e.g. "New!").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryBanner {
    pub value: String,
    pub intensity: String,
    pub backend_value: String,
}

/// Shop section a tile is placed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryLayout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub index: i32,
    #[serde(default)]
    pub rank: i32,
    pub show_ineligible_offers: String,
    #[serde(default)]
    pub background: Option<String>,
}

/// Tile gradient colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryColors {
    pub color1: String,
    #[serde(default)]
    pub color2: Option<String>,
    pub color3: String,
    #[serde(default)]
    pub text_background_color: Option<String>,
}

/// Rendered image of a display asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryRenderImage {
    pub product_tag: String,
    pub file_name: String,
    pub image: String,
}

/// Display asset of a shop tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntryNewDisplayAsset {
    pub id: String,
    #[serde(default)]
    pub cosmetic_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub render_images: Vec<ShopEntryRenderImage>,
}

/// A single offer in the item shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopEntry {
    pub regular_price: i32,
    pub final_price: i32,
    pub dev_name: String,
    pub offer_id: String,
    pub in_date: DateTime<Utc>,
    pub out_date: DateTime<Utc>,
    #[serde(default)]
    pub bundle: Option<ShopEntryBundle>,
    #[serde(default)]
    pub banner: Option<ShopEntryBanner>,
    #[serde(default)]
    pub giftable: bool,
    #[serde(default)]
    pub refundable: bool,
    #[serde(default)]
    pub sort_priority: i32,
    #[serde(default)]
    pub layout_id: Option<String>,
    #[serde(default)]
    pub layout: Option<ShopEntryLayout>,
    #[serde(default)]
    pub colors: Option<ShopEntryColors>,
    #[serde(default)]
    pub tile_size: Option<String>,
    #[serde(default)]
    pub display_asset_path: Option<String>,
    #[serde(default)]
    pub new_display_asset_path: Option<String>,
    #[serde(default)]
    pub new_display_asset: Option<ShopEntryNewDisplayAsset>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub br_items: Vec<CosmeticBr>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tracks: Vec<CosmeticTrack>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instruments: Vec<CosmeticInstrument>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cars: Vec<CosmeticCar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lego_kits: Vec<CosmeticLegoKit>,
}

impl ShopEntry {
    /// V-Bucks saved compared to the regular price.
    pub fn discount(&self) -> i32 {
        (self.regular_price - self.final_price).max(0)
    }

    /// Number of cosmetics granted by this offer.
    pub fn item_count(&self) -> usize {
        self.br_items.len()
            + self.tracks.len()
            + self.instruments.len()
            + self.cars.len()
            + self.lego_kits.len()
    }
}

/// Response for GET /v2/shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub hash: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub vbuck_icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<ShopEntry>,
}

impl Shop {
    /// Find the entry selling a given cosmetic id.
    pub fn entry_for(&self, cosmetic_id: &str) -> Option<&ShopEntry> {
        self.entries.iter().find(|entry| {
            entry.br_items.iter().any(|c| c.id == cosmetic_id)
                || entry.tracks.iter().any(|c| c.id == cosmetic_id)
                || entry.instruments.iter().any(|c| c.id == cosmetic_id)
                || entry.cars.iter().any(|c| c.id == cosmetic_id)
                || entry.lego_kits.iter().any(|c| c.id == cosmetic_id)
        })
    }
}
