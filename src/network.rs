//! Network URL constants for the Fortnite API client.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://fortnite-api.com";

/// Environment variable read by [`ClientBuilder::from_env`](crate::api::ClientBuilder::from_env).
pub const API_KEY_ENV_VAR: &str = "FORTNITE_API_KEY";
