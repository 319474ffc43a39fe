//! Types for the "new cosmetics" endpoints.
//!
//! `/v2/cosmetics/new` sends one map each for hashes, last additions and
//! items, keyed by cosmetic kind. [`NewCosmetics`] regroups them so each
//! kind is a single [`NewCosmetic`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::br::CosmeticBr;
use super::car::CosmeticCar;
use super::cosmetic::null_as_empty;
use super::instrument::CosmeticInstrument;
use super::lego::{CosmeticLego, CosmeticLegoKit};
use super::track::CosmeticTrack;

/// Cosmetic kinds reported by the new cosmetics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NewCosmeticKind {
    Br,
    Tracks,
    Instruments,
    Cars,
    Lego,
    LegoKits,
}

/// New cosmetics of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCosmetic<T> {
    pub kind: NewCosmeticKind,
    /// `None` when no cosmetics of this kind were added
    pub hash: Option<String>,
    pub last_addition: Option<DateTime<Utc>>,
    pub items: Vec<T>,
}

/// Response for GET /v2/cosmetics/new.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "NewCosmeticsResponse", into = "NewCosmeticsResponse")]
pub struct NewCosmetics {
    pub date: DateTime<Utc>,
    pub build: String,
    pub previous_build: String,
    /// Combined hash of all new cosmetics
    pub global_hash: String,
    pub global_last_addition: Option<DateTime<Utc>>,
    pub br: NewCosmetic<CosmeticBr>,
    pub tracks: NewCosmetic<CosmeticTrack>,
    pub instruments: NewCosmetic<CosmeticInstrument>,
    pub cars: NewCosmetic<CosmeticCar>,
    pub lego: NewCosmetic<CosmeticLego>,
    pub lego_kits: NewCosmetic<CosmeticLegoKit>,
}

impl NewCosmetics {
    /// Total number of new cosmetics across all kinds.
    pub fn total_items(&self) -> usize {
        self.br.items.len()
            + self.tracks.items.len()
            + self.instruments.items.len()
            + self.cars.items.len()
            + self.lego.items.len()
            + self.lego_kits.items.len()
    }
}

/// Response for GET /v2/cosmetics/br/new.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBrCosmetics {
    pub build: String,
    pub previous_build: String,
    pub hash: String,
    pub date: DateTime<Utc>,
    pub last_addition: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<CosmeticBr>,
}

// ─── Wire format ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KindMap<T> {
    all: Option<T>,
    br: Option<T>,
    tracks: Option<T>,
    instruments: Option<T>,
    cars: Option<T>,
    lego: Option<T>,
    lego_kits: Option<T>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewItems {
    #[serde(default, deserialize_with = "null_as_empty")]
    br: Vec<CosmeticBr>,
    #[serde(default, deserialize_with = "null_as_empty")]
    tracks: Vec<CosmeticTrack>,
    #[serde(default, deserialize_with = "null_as_empty")]
    instruments: Vec<CosmeticInstrument>,
    #[serde(default, deserialize_with = "null_as_empty")]
    cars: Vec<CosmeticCar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    lego: Vec<CosmeticLego>,
    #[serde(default, deserialize_with = "null_as_empty")]
    lego_kits: Vec<CosmeticLegoKit>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewCosmeticsResponse {
    date: DateTime<Utc>,
    build: String,
    previous_build: String,
    hashes: KindMap<String>,
    last_additions: KindMap<DateTime<Utc>>,
    #[serde(default)]
    items: NewItems,
}

impl From<NewCosmeticsResponse> for NewCosmetics {
    fn from(resp: NewCosmeticsResponse) -> Self {
        let NewCosmeticsResponse {
            date,
            build,
            previous_build,
            hashes,
            last_additions,
            items,
        } = resp;

        Self {
            date,
            build,
            previous_build,
            global_hash: hashes.all.unwrap_or_default(),
            global_last_addition: last_additions.all,
            br: NewCosmetic {
                kind: NewCosmeticKind::Br,
                hash: hashes.br,
                last_addition: last_additions.br,
                items: items.br,
            },
            tracks: NewCosmetic {
                kind: NewCosmeticKind::Tracks,
                hash: hashes.tracks,
                last_addition: last_additions.tracks,
                items: items.tracks,
            },
            instruments: NewCosmetic {
                kind: NewCosmeticKind::Instruments,
                hash: hashes.instruments,
                last_addition: last_additions.instruments,
                items: items.instruments,
            },
            cars: NewCosmetic {
                kind: NewCosmeticKind::Cars,
                hash: hashes.cars,
                last_addition: last_additions.cars,
                items: items.cars,
            },
            lego: NewCosmetic {
                kind: NewCosmeticKind::Lego,
                hash: hashes.lego,
                last_addition: last_additions.lego,
                items: items.lego,
            },
            lego_kits: NewCosmetic {
                kind: NewCosmeticKind::LegoKits,
                hash: hashes.lego_kits,
                last_addition: last_additions.lego_kits,
                items: items.lego_kits,
            },
        }
    }
}

impl From<NewCosmetics> for NewCosmeticsResponse {
    fn from(new: NewCosmetics) -> Self {
        let NewCosmetics {
            date,
            build,
            previous_build,
            global_hash,
            global_last_addition,
            br,
            tracks,
            instruments,
            cars,
            lego,
            lego_kits,
        } = new;

        Self {
            date,
            build,
            previous_build,
            hashes: KindMap {
                all: (!global_hash.is_empty()).then_some(global_hash),
                br: br.hash,
                tracks: tracks.hash,
                instruments: instruments.hash,
                cars: cars.hash,
                lego: lego.hash,
                lego_kits: lego_kits.hash,
            },
            last_additions: KindMap {
                all: global_last_addition,
                br: br.last_addition,
                tracks: tracks.last_addition,
                instruments: instruments.last_addition,
                cars: cars.last_addition,
                lego: lego.last_addition,
                lego_kits: lego_kits.last_addition,
            },
            items: NewItems {
                br: br.items,
                tracks: tracks.items,
                instruments: instruments.items,
                cars: cars.items,
                lego: lego.items,
                lego_kits: lego_kits.items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regroups_by_kind() {
        let json = r#"{
            "date": "2024-06-04T10:00:00Z",
            "build": "++Fortnite+Release-30.10-CL-34033419",
            "previousBuild": "++Fortnite+Release-30.00-CL-33952381",
            "hashes": {"all": "abc", "br": "def", "tracks": null},
            "lastAdditions": {"all": "2024-06-04T10:00:00Z", "br": "2024-06-04T10:00:00Z", "tracks": null},
            "items": {"br": [], "tracks": null}
        }"#;
        let new: NewCosmetics = serde_json::from_str(json).unwrap();
        assert_eq!(new.global_hash, "abc");
        assert_eq!(new.br.kind, NewCosmeticKind::Br);
        assert_eq!(new.br.hash.as_deref(), Some("def"));
        assert!(new.br.last_addition.is_some());
        assert!(new.tracks.hash.is_none());
        assert!(new.tracks.last_addition.is_none());
        assert_eq!(new.lego_kits.kind, NewCosmeticKind::LegoKits);
        assert_eq!(new.total_items(), 0);
    }

    #[test]
    fn test_serializes_back_to_wire_shape() {
        let json = r#"{
            "date": "2024-06-04T10:00:00Z",
            "build": "++Fortnite+Release-30.10-CL-34033419",
            "previousBuild": "++Fortnite+Release-30.00-CL-33952381",
            "hashes": {"all": "abc", "br": "def", "cars": "ghi"},
            "lastAdditions": {"all": "2024-06-04T10:00:00Z", "br": "2024-06-03T08:30:00Z"},
            "items": {"br": [], "cars": []}
        }"#;
        let new: NewCosmetics = serde_json::from_str(json).unwrap();

        let value = serde_json::to_value(&new).unwrap();
        assert_eq!(value["hashes"]["all"], "abc");
        assert_eq!(value["hashes"]["cars"], "ghi");
        assert!(value["hashes"]["tracks"].is_null());
        assert!(value["items"]["br"].is_array());

        let back: NewCosmetics = serde_json::from_value(value).unwrap();
        assert_eq!(back, new);
    }
}
