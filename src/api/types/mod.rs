//! API response and request types for the Fortnite REST API.
//!
//! One module per API area. Every response type derives `Clone` and
//! `PartialEq`, so results from the async and blocking clients compare
//! directly.

pub mod aes;
pub mod banner;
pub mod br;
pub mod car;
pub mod cosmetic;
pub mod creator_code;
pub mod instrument;
pub mod lego;
pub mod map;
pub mod material;
pub mod new_cosmetics;
pub mod news;
pub mod playlist;
pub mod search;
pub mod shop;
pub mod stats;
pub mod track;

// Re-export all types for convenience
pub use aes::*;
pub use banner::*;
pub use br::*;
pub use car::*;
pub use cosmetic::{
    CosmeticImages, CosmeticRarity, CosmeticRarityInfo, CosmeticSeriesInfo, CosmeticType,
    CosmeticTypeInfo, CosmeticsAll, SizedImages,
};
pub use creator_code::*;
pub use instrument::*;
pub use lego::*;
pub use map::*;
pub use material::*;
pub use new_cosmetics::*;
pub use news::*;
pub use playlist::*;
pub use search::*;
pub use shop::*;
pub use stats::*;
pub use track::*;
