//! Blocking Fortnite API client.
//!
//! Mirrors [`FortniteApiClient`](crate::api::FortniteApiClient) method for
//! method on top of `reqwest::blocking`. Requests are built and responses
//! decoded by the same code in [`endpoint`](crate::api::endpoint), so both
//! flavors return identical results for identical responses.
//!
//! Do not create or use this client from inside an async runtime.

use bytes::Bytes;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::api::config::{ClientBuilder, ClientConfig};
use crate::api::endpoint::{self, ApiRequest};
use crate::api::error::ApiResult;
use crate::api::types::*;
use crate::shared::{GameLanguage, KeyFormat};

/// Blocking Fortnite API client.
///
/// `Clone`, `Send` and `Sync`; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct BlockingFortniteApiClient {
    http_client: Client,
    config: ClientConfig,
}

impl BlockingFortniteApiClient {
    /// Create a client for the public API with default settings.
    pub fn new() -> ApiResult<Self> {
        ClientBuilder::default().build_blocking()
    }

    /// Create a client for the public API that authenticates with `api_key`.
    pub fn with_api_key(api_key: impl Into<String>) -> ApiResult<Self> {
        ClientBuilder::default().api_key(api_key).build_blocking()
    }

    /// Create a new client builder; finish it with
    /// [`ClientBuilder::build_blocking`].
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

    fn execute<T: DeserializeOwned>(&self, request: ApiRequest<T>) -> ApiResult<T> {
        let endpoint = request.endpoint();
        self.config.check_access(endpoint)?;

        let url = request.url(self.config.base_url());
        tracing::debug!(endpoint = endpoint.name, method = %endpoint.method, url = %url, "Sending blocking request");

        let response = self
            .http_client
            .request(endpoint.method.clone(), &url)
            .send()?;
        let status = response.status();
        let body = response.bytes()?;

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
    pub fn fetch_aes(&self, key_format: KeyFormat) -> ApiResult<Aes> {
        self.execute(endpoint::aes(key_format)?)
    }

    // =========================================================================
    // Banner endpoints
    // =========================================================================

    /// Get all banners.
    pub fn fetch_banners(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Banner>> {
        self.execute(endpoint::banners(self.language(language))?)
    }

    /// Get all banner colors.
    pub fn fetch_banner_colors(&self) -> ApiResult<Vec<BannerColor>> {
        self.execute(endpoint::banner_colors()?)
    }

    // =========================================================================
    // Creator code endpoints
    // =========================================================================

    /// Look up a creator code.
    pub fn fetch_creator_code(&self, name: &str) -> ApiResult<CreatorCode> {
        self.execute(endpoint::creator_code(name)?)
    }

    // =========================================================================
    // Cosmetic endpoints
    // =========================================================================

    /// Get every cosmetic of every kind.
    pub fn fetch_cosmetics_all(&self, language: Option<GameLanguage>) -> ApiResult<CosmeticsAll> {
        self.execute(endpoint::cosmetics_all(self.language(language))?)
    }

    /// Get all Battle Royale cosmetics.
    pub fn fetch_cosmetics_br(&self, language: Option<GameLanguage>) -> ApiResult<Vec<CosmeticBr>> {
        self.execute(endpoint::cosmetics_br(self.language(language))?)
    }

    /// Get a Battle Royale cosmetic by id.
    pub fn fetch_cosmetic_br(
        &self,
        id: &str,
        language: Option<GameLanguage>,
    ) -> ApiResult<CosmeticBr> {
        self.execute(endpoint::cosmetic_br(id, self.language(language))?)
    }

    /// Get several Battle Royale cosmetics by id in one request.
    ///
    /// Ids the API does not know are left out of the result.
    pub fn fetch_cosmetics_br_by_ids<S: AsRef<str>>(
        &self,
        ids: &[S],
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticBr>> {
        self.execute(endpoint::cosmetics_br_by_ids(ids, self.language(language))?)
    }

    /// Get the first Battle Royale cosmetic matching the search.
    pub fn search_br_cosmetic(&self, params: &CosmeticSearchParams) -> ApiResult<CosmeticBr> {
        let language = self.language(None);
        self.execute(endpoint::search_br_cosmetic(params, language)?)
    }

    /// Get every Battle Royale cosmetic matching the search.
    pub fn search_br_cosmetics(
        &self,
        params: &CosmeticSearchParams,
    ) -> ApiResult<Vec<CosmeticBr>> {
        let language = self.language(None);
        self.execute(endpoint::search_br_cosmetics(params, language)?)
    }

    /// Get cosmetics added in the latest update, grouped by kind.
    pub fn fetch_cosmetics_new(&self, language: Option<GameLanguage>) -> ApiResult<NewCosmetics> {
        self.execute(endpoint::cosmetics_new(self.language(language))?)
    }

    /// Get Battle Royale cosmetics added in the latest update.
    pub fn fetch_cosmetics_br_new(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<NewBrCosmetics> {
        self.execute(endpoint::cosmetics_br_new(self.language(language))?)
    }

    /// Get all car cosmetics.
    pub fn fetch_cosmetics_cars(&self, language: Option<GameLanguage>) -> ApiResult<Vec<CosmeticCar>> {
        self.execute(endpoint::cosmetics_cars(self.language(language))?)
    }

    /// Get all jam tracks.
    pub fn fetch_cosmetics_tracks(&self) -> ApiResult<Vec<CosmeticTrack>> {
        self.execute(endpoint::cosmetics_tracks()?)
    }

    /// Get all instrument cosmetics.
    pub fn fetch_cosmetics_instruments(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticInstrument>> {
        self.execute(endpoint::cosmetics_instruments(self.language(language))?)
    }

    /// Get all LEGO kits.
    pub fn fetch_cosmetics_lego_kits(
        &self,
        language: Option<GameLanguage>,
    ) -> ApiResult<Vec<CosmeticLegoKit>> {
        self.execute(endpoint::cosmetics_lego_kits(self.language(language))?)
    }

    // =========================================================================
    // Map endpoints
    // =========================================================================

    /// Get the current map and its points of interest.
    pub fn fetch_map(&self, language: Option<GameLanguage>) -> ApiResult<Map> {
        self.execute(endpoint::map(self.language(language))?)
    }

    // =========================================================================
    // News endpoints
    // =========================================================================

    /// Get news for every game mode.
    pub fn fetch_news(&self, language: Option<GameLanguage>) -> ApiResult<News> {
        self.execute(endpoint::news(self.language(language))?)
    }

    /// Get Battle Royale news.
    pub fn fetch_news_br(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews> {
        self.execute(endpoint::news_br(self.language(language))?)
    }

    /// Get Save the World news.
    pub fn fetch_news_stw(&self, language: Option<GameLanguage>) -> ApiResult<GameModeNews> {
        self.execute(endpoint::news_stw(self.language(language))?)
    }

    // =========================================================================
    // Playlist endpoints
    // =========================================================================

    /// Get all playlists.
    pub fn fetch_playlists(&self, language: Option<GameLanguage>) -> ApiResult<Vec<Playlist>> {
        self.execute(endpoint::playlists(self.language(language))?)
    }

    /// Get a playlist by id.
    pub fn fetch_playlist(
        &self,
        id: &str,
        language: Option<GameLanguage>,
    ) -> ApiResult<Playlist> {
        self.execute(endpoint::playlist(id, self.language(language))?)
    }

    // =========================================================================
    // Shop endpoints
    // =========================================================================

    /// Get the current item shop.
    pub fn fetch_shop(&self, language: Option<GameLanguage>) -> ApiResult<Shop> {
        self.execute(endpoint::shop(self.language(language))?)
    }

    // =========================================================================
    // Stats endpoints (API key required)
    // =========================================================================

    /// Get Battle Royale stats by account name.
    pub fn fetch_br_stats(&self, params: &StatsParams) -> ApiResult<BrPlayerStats> {
        self.execute(endpoint::br_stats(params)?)
    }

    /// Get Battle Royale stats by account id.
    pub fn fetch_br_stats_by_id(
        &self,
        account_id: &str,
        params: &StatsParams,
    ) -> ApiResult<BrPlayerStats> {
        self.execute(endpoint::br_stats_by_id(account_id, params)?)
    }

    // =========================================================================
    // Beta endpoints (beta access required)
    // =========================================================================

    /// Get all material instances. Requires `.beta(true)` on the builder.
    pub fn fetch_material_instances(&self) -> ApiResult<Vec<MaterialInstance>> {
        self.execute(endpoint::material_instances()?)
    }

    // =========================================================================
    // Assets
    // =========================================================================

    /// Download an image or other asset referenced by a response.
    pub fn fetch_asset(&self, url: &str) -> ApiResult<Bytes> {
        let url = endpoint::asset_url(self.config.base_url(), url)?;
        tracing::debug!(url = %url, "Fetching asset (blocking)");

        let response = self
            .http_client
            .request(Method::GET, &url)
            .header(ACCEPT, "*/*")
            .send()?;
        let status = response.status();
        let body = response.bytes()?;

        tracing::debug!(url = %url, status = %status, bytes = body.len(), "Received asset");
        endpoint::decode_asset(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_blocking_client_creation() {
        let client = BlockingFortniteApiClient::builder()
            .default_language(GameLanguage::Turkish)
            .build_blocking()
            .unwrap();
        assert_eq!(client.base_url(), "https://fortnite-api.com");
        assert_eq!(client.language(None), GameLanguage::Turkish);
    }

    #[test]
    fn test_stats_without_key_fails_locally() {
        let client = ClientBuilder::new("http://127.0.0.1:9").build_blocking().unwrap();
        let err = client
            .fetch_br_stats_by_id("4735ce9132924caf8a5b17789b40f79c", &StatsParams::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingApiKey("stats_br_by_id")));
    }

    #[test]
    fn test_beta_endpoint_fails_locally() {
        let client = ClientBuilder::new("http://127.0.0.1:9").build_blocking().unwrap();
        let err = client.fetch_material_instances().unwrap_err();
        assert!(matches!(err, ApiError::BetaAccessNotEnabled("material_instances")));
    }

    #[test]
    fn test_empty_ids_fail_locally() {
        let client = ClientBuilder::new("http://127.0.0.1:9").build_blocking().unwrap();
        let ids: Vec<String> = Vec::new();
        let err = client.fetch_cosmetics_br_by_ids(&ids, None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidParameter(_)));
    }
}
