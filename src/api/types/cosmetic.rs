//! Building blocks shared by every cosmetic kind, plus the `/v2/cosmetics` aggregate.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::br::CosmeticBr;
use super::car::CosmeticCar;
use super::instrument::CosmeticInstrument;
use super::lego::{CosmeticLego, CosmeticLegoKit};
use super::track::CosmeticTrack;

/// Cosmetic type value.
///
/// Values the client does not know yet decode as [`CosmeticType::Other`]
/// and serialize back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CosmeticType {
    Outfit,
    Backpack,
    Pet,
    PetCarrier,
    Pickaxe,
    Glider,
    Contrail,
    Emote,
    Emoji,
    Spray,
    Toy,
    Wrap,
    Music,
    LoadingScreen,
    Banner,
    Shoe,
    Bundle,
    Aura,
    Sidekick,
    ItemAccess,
    Other(String),
}

impl CosmeticType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Outfit => "outfit",
            Self::Backpack => "backpack",
            Self::Pet => "pet",
            Self::PetCarrier => "petcarrier",
            Self::Pickaxe => "pickaxe",
            Self::Glider => "glider",
            Self::Contrail => "contrail",
            Self::Emote => "emote",
            Self::Emoji => "emoji",
            Self::Spray => "spray",
            Self::Toy => "toy",
            Self::Wrap => "wrap",
            Self::Music => "music",
            Self::LoadingScreen => "loadingscreen",
            Self::Banner => "banner",
            Self::Shoe => "shoe",
            Self::Bundle => "bundle",
            Self::Aura => "aura",
            Self::Sidekick => "sidekick",
            Self::ItemAccess => "itemaccess",
            Self::Other(value) => value,
        }
    }
}

impl From<&str> for CosmeticType {
    fn from(value: &str) -> Self {
        match value {
            "outfit" => Self::Outfit,
            "backpack" => Self::Backpack,
            "pet" => Self::Pet,
            "petcarrier" => Self::PetCarrier,
            "pickaxe" => Self::Pickaxe,
            "glider" => Self::Glider,
            "contrail" => Self::Contrail,
            "emote" => Self::Emote,
            "emoji" => Self::Emoji,
            "spray" => Self::Spray,
            "toy" => Self::Toy,
            "wrap" => Self::Wrap,
            "music" => Self::Music,
            "loadingscreen" => Self::LoadingScreen,
            "banner" => Self::Banner,
            "shoe" => Self::Shoe,
            "bundle" => Self::Bundle,
            "aura" => Self::Aura,
            "sidekick" => Self::Sidekick,
            "itemaccess" => Self::ItemAccess,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for CosmeticType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CosmeticType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CosmeticType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Cosmetic rarity value, including series rarities such as `marvel`.
///
/// Values the client does not know yet decode as [`CosmeticRarity::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CosmeticRarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Exotic,
    Transcendent,
    Marvel,
    Dc,
    Icon,
    GamingLegends,
    StarWars,
    Lava,
    Frozen,
    Shadow,
    Slurp,
    Dark,
    Other(String),
}

impl CosmeticRarity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Common => "common",
            Self::Uncommon => "uncommon",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
            Self::Mythic => "mythic",
            Self::Exotic => "exotic",
            Self::Transcendent => "transcendent",
            Self::Marvel => "marvel",
            Self::Dc => "dc",
            Self::Icon => "icon",
            Self::GamingLegends => "gaminglegends",
            Self::StarWars => "starwars",
            Self::Lava => "lava",
            Self::Frozen => "frozen",
            Self::Shadow => "shadow",
            Self::Slurp => "slurp",
            Self::Dark => "dark",
            Self::Other(value) => value,
        }
    }

    /// Whether this rarity marks a series (Marvel, Icon, ...) rather than a tier.
    pub fn is_series(&self) -> bool {
        matches!(
            self,
            Self::Marvel
                | Self::Dc
                | Self::Icon
                | Self::GamingLegends
                | Self::StarWars
                | Self::Lava
                | Self::Frozen
                | Self::Shadow
                | Self::Slurp
                | Self::Dark
        )
    }
}

impl From<&str> for CosmeticRarity {
    fn from(value: &str) -> Self {
        match value {
            "common" => Self::Common,
            "uncommon" => Self::Uncommon,
            "rare" => Self::Rare,
            "epic" => Self::Epic,
            "legendary" => Self::Legendary,
            "mythic" => Self::Mythic,
            "exotic" => Self::Exotic,
            "transcendent" => Self::Transcendent,
            "marvel" => Self::Marvel,
            "dc" => Self::Dc,
            "icon" => Self::Icon,
            "gaminglegends" => Self::GamingLegends,
            "starwars" => Self::StarWars,
            "lava" => Self::Lava,
            "frozen" => Self::Frozen,
            "shadow" => Self::Shadow,
            "slurp" => Self::Slurp,
            "dark" => Self::Dark,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for CosmeticRarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CosmeticRarity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CosmeticRarity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Type information attached to a cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticTypeInfo {
    /// Type value
    pub value: CosmeticType,
    /// Display value, localized
    pub display_value: String,
    /// Internal marker, e.g. `AthenaCharacter`
    pub backend_value: String,
}

/// Rarity information attached to a cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticRarityInfo {
    /// Rarity value
    pub value: CosmeticRarity,
    /// Display value, localized
    pub display_value: String,
    /// Internal marker, e.g. `EFortRarity::Legendary`
    pub backend_value: String,
}

/// Series a cosmetic belongs to (e.g. Marvel, Icon).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSeriesInfo {
    /// Series name
    pub value: String,
    /// Series image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Colors associated with the series
    #[serde(default)]
    pub colors: Vec<String>,
    /// Internal marker
    pub backend_value: String,
}

/// Image URLs of a cosmetic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticImages {
    #[serde(default)]
    pub small_icon: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub lego: Option<String>,
    #[serde(default)]
    pub bean: Option<String>,
    /// Additional named images
    #[serde(default)]
    pub other: HashMap<String, String>,
}

impl CosmeticImages {
    /// Background image URL, if any.
    pub fn background(&self) -> Option<&str> {
        self.other_image("background")
    }

    /// Cover art image URL, if any.
    pub fn coverart(&self) -> Option<&str> {
        self.other_image("coverart")
    }

    /// Decal image URL, if any.
    pub fn decal(&self) -> Option<&str> {
        self.other_image("decal")
    }

    fn other_image(&self, key: &str) -> Option<&str> {
        self.other
            .get(key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// Small/large image pair used by cars, instruments and LEGO cosmetics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizedImages {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub wide: Option<String>,
}

/// Response for GET /v2/cosmetics: every cosmetic, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticsAll {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub br: Vec<CosmeticBr>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tracks: Vec<CosmeticTrack>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instruments: Vec<CosmeticInstrument>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cars: Vec<CosmeticCar>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lego: Vec<CosmeticLego>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub lego_kits: Vec<CosmeticLegoKit>,
}

impl CosmeticsAll {
    /// Total number of cosmetics across all kinds.
    pub fn len(&self) -> usize {
        self.br.len()
            + self.tracks.len()
            + self.instruments.len()
            + self.cars.len()
            + self.lego.len()
            + self.lego_kits.len()
    }

    /// Whether no cosmetics were returned at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the ids of every cosmetic, BR first.
    pub fn iter_ids(&self) -> impl Iterator<Item = &str> {
        self.br
            .iter()
            .map(|c| c.id.as_str())
            .chain(self.tracks.iter().map(|c| c.id.as_str()))
            .chain(self.instruments.iter().map(|c| c.id.as_str()))
            .chain(self.cars.iter().map(|c| c.id.as_str()))
            .chain(self.lego.iter().map(|c| c.id.as_str()))
            .chain(self.lego_kits.iter().map(|c| c.id.as_str()))
    }
}

/// Treat an explicit `null` list the same as a missing one.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
