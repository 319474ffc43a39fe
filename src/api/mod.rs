//! REST API client module for fortnite-api.com.
//!
//! Two clients expose the same operations with the same signatures:
//! [`FortniteApiClient`] returns futures, [`BlockingFortniteApiClient`]
//! (feature `blocking`, on by default) blocks the calling thread. Both are
//! built from one [`ClientBuilder`] and share request building and response
//! decoding, so they return equal values for equal responses.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fortnite_api::api::FortniteApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FortniteApiClient::new()?;
//!
//!     let news = client.fetch_news_br(None).await?;
//!     println!("{} BR news messages", news.motds.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use fortnite_api::api::ClientBuilder;
//! use fortnite_api::shared::GameLanguage;
//! use std::time::Duration;
//!
//! let client = ClientBuilder::from_env()
//!     .default_language(GameLanguage::French)
//!     .timeout(Duration::from_secs(10))
//!     .build_blocking()?;
//!
//! let shop = client.fetch_shop(None)?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>` which is an alias for `Result<T, ApiError>`.
//!
//! ```rust,ignore
//! use fortnite_api::api::{ApiError, ErrorKind};
//!
//! match client.fetch_cosmetic_br("CID_unknown", None).await {
//!     Ok(cosmetic) => println!("{}", cosmetic.name),
//!     Err(ApiError::NotFound(resp)) => println!("No such cosmetic: {}", resp),
//!     Err(e) if e.kind() == ErrorKind::Local => println!("Bad input: {}", e),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

#[cfg(feature = "blocking")]
pub mod blocking;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod types;

// Re-export main types for convenience
#[cfg(feature = "blocking")]
pub use blocking::BlockingFortniteApiClient;
pub use client::FortniteApiClient;
pub use config::{ClientBuilder, ClientConfig};
pub use endpoint::{ApiRequest, Endpoint};
pub use error::{ApiError, ApiResult, ErrorKind, ErrorResponse};
pub use types::*;
