//! Async Fortnite API client.
//!
//! The [`FortniteApiClient`] provides a type-safe interface for the
//! fortnite-api.com REST API on top of an async `reqwest` client.
//!
//! # Example
//!
//! ```rust,ignore
//! use fortnite_api::api::FortniteApiClient;
//! use fortnite_api::shared::GameLanguage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FortniteApiClient::new()?;
//!
//!     let shop = client.fetch_shop(Some(GameLanguage::German)).await?;
//!     println!("{} shop entries", shop.entries.len());
//!
//!     let cosmetic = client.fetch_cosmetic_br("CID_028_Athena_Commando_F", None).await?;
//!     println!("{}", cosmetic.name);
//!
//!     Ok(())
//! }
//! ```

use bytes::Bytes;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;

use crate::api::config::{ClientBuilder, ClientConfig};
use crate::api::endpoint::{self, ApiRequest};
use crate::api::error::ApiResult;
use crate::api::types::*;
use crate::shared::{GameLanguage, KeyFormat};

/// Async Fortnite API client.
///
/// Cloning is cheap and clones share the connection pool. Calls on one
/// handle may run concurrently; they share no per-request state.
#[derive(Debug, Clone)]
pub struct FortniteApiClient {
    http_client: Client,
    config: ClientConfig,
}

impl FortniteApiClient {
    /// Create a client for the public API with default settings
    /// (no API key, English, 30s timeout).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> ApiResult<Self> {
        ClientBuilder::default().build()
    }

    /// Create a client for the public API that authenticates with `api_key`.
    pub fn with_api_key(api_key: impl Into<String>) -> ApiResult<Self> {
        ClientBuilder::default().api_key(api_key).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub(crate) fn from_parts(http_client: Client, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Send a built request and decode the response.
    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> ApiResult<T> {
        let endpoint = request.endpoint();
        self.config.check_access(endpoint)?;

        let url = request.url(self.config.base_url());
        tracing::debug!(endpoint = endpoint.name, method = %endpoint.method, url = %url, "Sending request");

        let response = self
            .http_client
            .request(endpoint.method.clone(), &url)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(endpoint = endpoint.name, status = %status, bytes = body.len(), "Received response");
        request.decode(status, &body)
    }

    fn language(&self, language: Option<GameLanguage>) -> GameLanguage {
        self.config.language(language)
    }

    // =========================================================================
    // AES endpoints
    // =========================================================================

    /// Get the current AES keys.
    pub async fn fetch_aes(&self, key_format: KeyFormat) -> ApiResult<Aes> {
        self.execute(endpoint::aes(key_format)?).await
    }

    // =========================================================================
    // Banner endpoints
    // =========================================================================

    /// Get all banners.
    pub async fn fetch_banners(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Banner>> {
        self.execute(endpoint::banners(self.language(language))?).await
    }

    /// Get all banner colors.
    pub async fn fetch_banner_colors(&self) -> ApiResult<Vec<BannerColor>> {
        self.execute(endpoint::banner_colors()?).await
    }

    // =========================================================================
    // Creator code endpoints
    // =========================================================================

    /// Look up a creator code.
    pub async fn fetch_creator_code(&self, name: &str) -> ApiResult<CreatorCode> {
        self.execute(endpoint::creator_code(name)?).await
    }

    // =========================================================================
    // Cosmetic endpoints
    // =========================================================================

    /// Get every cosmetic of every kind.
    pub async fn fetch_cosmetics_all(&self, language: Option<GameLanguage>) -> ApiResult<CosmeticsAll> {
        self.execute(endpoint::cosmetics_all(self.language(language))?).await
    }

    /// Get all Battle Royale cosmetics.
    pub async fn fetch_cosmetics_br(&self, language: Option<GameLanguage>) -> ApiResult<Vec<CosmeticBr>> {
        self.execute(endpoint::cosmetics_br(self.language(language))?).await
    }

    /// Get a Battle Royale cosmetic by id.
    pub async fn fetch_cosmetic_br(
        &self,
        id: &str,
        language: Option<GameLanguage>,
    ) -> ApiResult<CosmeticBr> {
        self.execute(endpoint::cosmetic_br(id, self.language(language))?).await
    }

    /// Get several Battle Royale cosmetics by id in one request.
    ///
    /// Ids the API does not know are left out of the result.
    pub async fn fetch_cosmetics_br_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticBr>> {
        self.execute(endpoint::cosmetics_br_by_ids(ids, self.language(language))?)
            .await
    }

    /// Get the first Battle Royale cosmetic matching the search.
    pub async fn search_br_cosmetic(&self, params: &CosmeticSearchParams) -> ApiResult<CosmeticBr> {
        let language = self.language(None);
        self.execute(endpoint::search_br_cosmetic(params, language)?).await
    }

    /// Get every Battle Royale cosmetic matching the search.
    pub async fn search_br_cosmetics(
        &self,
        params: &CosmeticSearchParams,
    ) -> ApiResult<Vec<CosmeticBr>> {
        let language = self.language(None);
        self.execute(endpoint::search_br_cosmetics(params, language)?).await
    }

    /// Get cosmetics added in the latest update, grouped by kind.
    pub async fn fetch_cosmetics_new(&self, language: Option<GameLanguage>) -> ApiResult<NewCosmetics> {
        self.execute(endpoint::cosmetics_new(self.language(language))?).await
    }

    /// Get Battle Royale cosmetics added in the latest update.
    pub async fn fetch_cosmetics_br_new(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<NewBrCosmetics> {
        self.execute(endpoint::cosmetics_br_new(self.language(language))?).await
    }

    /// Get all car cosmetics.
    pub async fn fetch_cosmetics_cars(&self, language: Option<GameLanguage>) -> ApiResult<Vec<CosmeticCar>> {
        self.execute(endpoint::cosmetics_cars(self.language(language))?).await
    }

    /// Get all jam tracks.
    pub async fn fetch_cosmetics_tracks(&self) -> ApiResult<Vec<CosmeticTrack>> {
        self.execute(endpoint::cosmetics_tracks()?).await
    }

    /// Get all instrument cosmetics.
    pub async fn fetch_cosmetics_instruments(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticInstrument>> {
        self.execute(endpoint::cosmetics_instruments(self.language(language))?)
            .await
    }

    /// Get all LEGO kits.
    pub async fn fetch_cosmetics_lego_kits(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticLegoKit>> {
        self.execute(endpoint::cosmetics_lego_kits(self.language(language))?)
            .await
    }

    // =========================================================================
    // Map endpoints
    // =========================================================================

    /// Get the current map and its points of interest.
    pub async fn fetch_map(&self, language: Option<GameLanguage>) -> ApiResult<Map> {
        self.execute(endpoint::map(self.language(language))?).await
    }

    // =========================================================================
    // News endpoints
    // =========================================================================

    /// Get news for every game mode.
    pub async fn fetch_news(&self, language: Option<GameLanguage>) -> ApiResult<News> {
        self.execute(endpoint::news(self.language(language))?).await
    }

    /// Get Battle Royale news.
    pub async fn fetch_news_br(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews> {
        self.execute(endpoint::news_br(self.language(language))?).await
    }

    /// Get Save the World news.
    pub async fn fetch_news_stw(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews> {
        self.execute(endpoint::news_stw(self.language(language))?).await
    }

    // =========================================================================
    // Playlist endpoints
    // =========================================================================

    /// Get all playlists.
    pub async fn fetch_playlists(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Playlist>> {
        self.execute(endpoint::playlists(self.language(language))?).await
    }

    /// Get a playlist by id.
    pub async fn fetch_playlist(
        &self,
        id: &str,
        language: Option<GameLanguage>,
    ) -> ApiResult<Playlist> {
        self.execute(endpoint::playlist(id, self.language(language))?).await
    }

    // =========================================================================
    // Shop endpoints
    // =========================================================================

    /// Get the current item shop.
    pub async fn fetch_shop(&self, language: Option<GameLanguage>) -> ApiResult<Shop> {
        self.execute(endpoint::shop(self.language(language))?).await
    }

    // =========================================================================
    // Stats endpoints (API key required)
    // =========================================================================

    /// Get Battle Royale stats by account name.
    pub async fn fetch_br_stats(&self, params: &StatsParams) -> ApiResult<BrPlayerStats> {
        self.execute(endpoint::br_stats(params)?).await
    }

    /// Get Battle Royale stats by account id.
    pub async fn fetch_br_stats_by_id(
        &self,
        account_id: &str,
        params: &StatsParams,
    ) -> ApiResult<BrPlayerStats> {
        self.execute(endpoint::br_stats_by_id(account_id, params)?).await
    }

    // =========================================================================
    // Beta endpoints (beta access required)
    // =========================================================================

    /// Get all material instances.
    ///
    /// Fails with [`ApiError::BetaAccessNotEnabled`](crate::api::ApiError::BetaAccessNotEnabled)
    /// unless the client was built with `.beta(true)`.
    pub async fn fetch_material_instances(&self) -> ApiResult<Vec<MaterialInstance>> {
        self.execute(endpoint::material_instances()?).await
    }

    // =========================================================================
    // Assets
    // =========================================================================

    /// Download an image or other asset referenced by a response.
    ///
    /// `url` is an absolute URL or a path on the API host. The client's
    /// default headers, including the API key, are sent with the request.
    pub async fn fetch_asset(&self, url: &str) -> ApiResult<Bytes> {
        let url = endpoint::asset_url(self.config.base_url(), url)?;
        tracing::debug!(url = %url, "Fetching asset");

        let response = self
            .http_client
            .request(Method::GET, &url)
            .header(ACCEPT, "*/*")
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Received asset");
        endpoint::decode_asset(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FortniteApiClient::new().unwrap();
        assert_eq!(client.base_url(), "https://fortnite-api.com");
        assert!(!client.config().has_api_key());
    }

    #[test]
    fn test_client_builder() {
        let client = FortniteApiClient::builder()
            .timeout_secs(60)
            .default_language(GameLanguage::Polish)
            .header("X-Custom", "test")
            .build()
            .unwrap();

        assert_eq!(client.config().timeout().as_secs(), 60);
        assert_eq!(client.language(None), GameLanguage::Polish);
    }

    #[test]
    fn test_client_with_api_key() {
        let client = FortniteApiClient::with_api_key("key").unwrap();
        assert!(client.config().has_api_key());
    }

    #[tokio::test]
    async fn test_stats_without_key_fails_locally() {
        // Unroutable base URL: any request attempt would be a transport error.
        let client = ClientBuilder::new("http://127.0.0.1:9").build().unwrap();
        let err = client
            .fetch_br_stats(&StatsParams::by_name("Ninja"))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::api::ApiError::MissingApiKey("stats_br")));
    }

    #[tokio::test]
    async fn test_beta_endpoint_fails_locally() {
        let client = ClientBuilder::new("http://127.0.0.1:9").build().unwrap();
        let err = client.fetch_material_instances().await.unwrap_err();
        assert!(matches!(
            err,
            crate::api::ApiError::BetaAccessNotEnabled("material_instances")
        ));

        let err = client.fetch_asset("").await.unwrap_err();
        assert!(matches!(err, crate::api::ApiError::InvalidParameter(_)));
    }

    #[tokio::test]
    async fn test_invalid_parameter_fails_locally() {
        let client = ClientBuilder::new("http://127.0.0.1:9").build().unwrap();
        let err = client.fetch_cosmetic_br("", None).await.unwrap_err();
        assert!(matches!(err, crate::api::ApiError::InvalidParameter(_)));
    }
}
