//! Client configuration and builder shared by the async and blocking clients.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::api::client::FortniteApiClient;
use crate::api::endpoint::Endpoint;
use crate::api::error::{ApiError, ApiResult};
use crate::network::{API_KEY_ENV_VAR, DEFAULT_API_URL};
use crate::shared::GameLanguage;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Idle connections kept per host.
pub(crate) const POOL_MAX_IDLE_PER_HOST: usize = 10;

/// `User-Agent` sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("fortnite-api-rs/", env!("CARGO_PKG_VERSION"));

/// Settings resolved by [`ClientBuilder`].
///
/// Immutable once built; both client flavors read it without locking.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
    default_language: GameLanguage,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
    beta: bool,
}

impl ClientConfig {
    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Language used when a call does not name one.
    pub fn default_language(&self) -> GameLanguage {
        self.default_language
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether beta endpoints may be called.
    pub fn has_beta(&self) -> bool {
        self.beta
    }

    /// Resolve a per-call language against the configured default.
    pub fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        language.unwrap_or(self.default_language)
    }

    /// Fail locally when an endpoint needs a key or beta access the
    /// client does not have.
    pub fn check_access(&self, endpoint: &Endpoint) -> ApiResult<()> {
        if endpoint.requires_key && self.api_key.is_none() {
            return Err(ApiError::MissingApiKey(endpoint.name));
        }
        if endpoint.requires_beta && !self.beta {
            return Err(ApiError::BetaAccessNotEnabled(endpoint.name));
        }
        Ok(())
    }

    /// Headers attached to every request.
    pub(crate) fn header_map(&self) -> ApiResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));

        if let Some(key) = &self.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::InvalidParameter(format!("Invalid API key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.default_headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                ApiError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Builder for [`FortniteApiClient`] and, with the `blocking` feature,
/// [`BlockingFortniteApiClient`](crate::api::BlockingFortniteApiClient).
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: ClientConfig,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientBuilder {
    /// Create a new builder with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            config: ClientConfig {
                base_url: base_url.into().trim_end_matches('/').to_string(),
                api_key: None,
                default_language: GameLanguage::default(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                default_headers: Vec::new(),
                beta: false,
            },
        }
    }

    /// Builder for the public API, taking the key from `FORTNITE_API_KEY` if set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(API_KEY_ENV_VAR) {
            Ok(key) if !key.trim().is_empty() => builder.api_key(key.trim()),
            _ => builder,
        }
    }

    /// Set the API key sent in the `Authorization` header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the language used when a call passes `None`.
    pub fn default_language(mut self, language: GameLanguage) -> Self {
        self.config.default_language = language;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout = Duration::from_secs(secs);
        self
    }

    /// Allow calls to beta endpoints. Off by default.
    pub fn beta(mut self, enabled: bool) -> Self {
        self.config.beta = enabled;
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the async client.
    pub fn build(self) -> ApiResult<FortniteApiClient> {
        let headers = self.config.header_map()?;
        let http_client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .default_headers(headers)
            .build()?;

        Ok(FortniteApiClient::from_parts(http_client, self.config))
    }

    /// Build the blocking client.
    ///
    /// Must not be called from inside an async runtime.
    #[cfg(feature = "blocking")]
    pub fn build_blocking(self) -> ApiResult<crate::api::blocking::BlockingFortniteApiClient> {
        let headers = self.config.header_map()?;
        let http_client = reqwest::blocking::Client::builder()
            .timeout(self.config.timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .default_headers(headers)
            .build()?;

        Ok(crate::api::blocking::BlockingFortniteApiClient::from_parts(
            http_client,
            self.config,
        ))
    }

    /// The configuration this builder would produce.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
