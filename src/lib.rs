//! # Fortnite API Rust Client
//!
//! A Rust client for the [fortnite-api.com](https://fortnite-api.com) REST API.
//!
//! ## Modules
//!
//! - [`api`]: async and blocking clients, response types and errors
//! - [`shared`]: query enums used across endpoints (languages, match methods, stats filters)
//! - [`network`]: base URL and environment constants
//!
//! ## Quick Start - Async
//!
//! ```rust,ignore
//! use fortnite_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FortniteApiClient::new()?;
//!
//!     let params = CosmeticSearchParams::new()
//!         .with_name("Peely")
//!         .with_match_method(MatchMethod::Starts);
//!     let peely = client.search_br_cosmetic(&params).await?;
//!     println!("{}: {}", peely.id, peely.description);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Quick Start - Blocking
//!
//! ```rust,ignore
//! use fortnite_api::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Stats require an API key, read here from FORTNITE_API_KEY.
//!     let client = ClientBuilder::from_env().build_blocking()?;
//!
//!     let stats = client.fetch_br_stats(&StatsParams::by_name("Ninja"))?;
//!     if let Some(overall) = stats.overall() {
//!         println!("{} wins", overall.wins);
//!     }
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Shared query enums.
pub mod shared;

/// Network constants (API base URL, key environment variable).
pub mod network;

/// REST API clients, endpoint bindings and response types.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use fortnite_api::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ApiError, ApiResult, ClientBuilder, ErrorKind, ErrorResponse, FortniteApiClient,
        // Common types
        Aes, Banner, BannerColor, BrPlayerStats, CosmeticBr, CosmeticSearchParams, CosmeticsAll,
        CreatorCode, GameModeNews, Map, NewBrCosmetics, NewCosmetics, News, Playlist, Shop,
        StatsParams,
    };

    #[cfg(feature = "blocking")]
    pub use crate::api::BlockingFortniteApiClient;

    // Network constants
    pub use crate::network::{API_KEY_ENV_VAR, DEFAULT_API_URL};

    // Query enums
    pub use crate::shared::{
        AccountType, GameLanguage, KeyFormat, MatchMethod, StatsImageType, TimeWindow,
    };
}
