//! Endpoint descriptors, request builders and response decoding.
//!
//! Everything here is transport-agnostic: the async and blocking clients
//! build an [`ApiRequest`] with the functions in this module, send it with
//! their own HTTP client, and hand the status and body back to
//! [`ApiRequest::decode`].

use std::marker::PhantomData;

use bytes::Bytes;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::api::types::*;
use crate::shared::{GameLanguage, KeyFormat};

/// API version prefix of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    V1,
    V2,
}

impl ApiVersion {
    /// Path prefix, e.g. `v2`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

/// Static description of an API endpoint.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Short name used in logs and errors
    pub name: &'static str,
    pub method: Method,
    pub version: ApiVersion,
    /// Path below the version prefix; `{}` marks a path parameter
    pub path: &'static str,
    /// Whether the API rejects requests without a key
    pub requires_key: bool,
    /// Beta endpoint, only reachable when the client opts into beta access
    pub requires_beta: bool,
}

impl Endpoint {
    const fn get(name: &'static str, version: ApiVersion, path: &'static str) -> Self {
        Self {
            name,
            method: Method::GET,
            version,
            path,
            requires_key: false,
            requires_beta: false,
        }
    }

    const fn keyed(mut self) -> Self {
        self.requires_key = true;
        self
    }

    const fn beta(mut self) -> Self {
        self.requires_beta = true;
        self
    }

    /// Substitute path parameters, percent-encoding each one.
    pub fn resolve_path(&self, params: &[&str]) -> ApiResult<String> {
        let mut out = format!("/{}", self.version.as_str());
        let mut params = params.iter();

        for segment in self.path.split('/') {
            out.push('/');
            if segment == "{}" {
                let value = params.next().ok_or_else(|| {
                    ApiError::InvalidParameter(format!("{}: missing path parameter", self.name))
                })?;
                if value.is_empty() {
                    return Err(ApiError::InvalidParameter(format!(
                        "{}: path parameter cannot be empty",
                        self.name
                    )));
                }
                out.push_str(&urlencoding::encode(value));
            } else {
                out.push_str(segment);
            }
        }

        if params.next().is_some() {
            return Err(ApiError::InvalidParameter(format!(
                "{}: too many path parameters",
                self.name
            )));
        }
        Ok(out)
    }
}

// ============================================================================
// Endpoint table
// ============================================================================

pub static AES: Endpoint = Endpoint::get("aes", ApiVersion::V2, "aes");
pub static BANNERS: Endpoint = Endpoint::get("banners", ApiVersion::V1, "banners");
pub static BANNER_COLORS: Endpoint = Endpoint::get("banner_colors", ApiVersion::V1, "banners/colors");
pub static CREATOR_CODE: Endpoint = Endpoint::get("creator_code", ApiVersion::V2, "creatorcode");
pub static COSMETICS_ALL: Endpoint = Endpoint::get("cosmetics_all", ApiVersion::V2, "cosmetics");
pub static COSMETICS_BR: Endpoint = Endpoint::get("cosmetics_br", ApiVersion::V2, "cosmetics/br");
pub static COSMETIC_BR: Endpoint = Endpoint::get("cosmetic_br", ApiVersion::V2, "cosmetics/br/{}");
pub static COSMETICS_BR_IDS: Endpoint =
    Endpoint::get("cosmetics_br_ids", ApiVersion::V2, "cosmetics/br/search/ids");
pub static COSMETICS_BR_SEARCH: Endpoint =
    Endpoint::get("cosmetics_br_search", ApiVersion::V2, "cosmetics/br/search");
pub static COSMETICS_BR_SEARCH_ALL: Endpoint =
    Endpoint::get("cosmetics_br_search_all", ApiVersion::V2, "cosmetics/br/search/all");
pub static COSMETICS_NEW: Endpoint = Endpoint::get("cosmetics_new", ApiVersion::V2, "cosmetics/new");
pub static COSMETICS_BR_NEW: Endpoint =
    Endpoint::get("cosmetics_br_new", ApiVersion::V2, "cosmetics/br/new");
pub static COSMETICS_CARS: Endpoint = Endpoint::get("cosmetics_cars", ApiVersion::V2, "cosmetics/cars");
pub static COSMETICS_TRACKS: Endpoint =
    Endpoint::get("cosmetics_tracks", ApiVersion::V2, "cosmetics/tracks");
pub static COSMETICS_INSTRUMENTS: Endpoint =
    Endpoint::get("cosmetics_instruments", ApiVersion::V2, "cosmetics/instruments");
pub static COSMETICS_LEGO_KITS: Endpoint =
    Endpoint::get("cosmetics_lego_kits", ApiVersion::V2, "cosmetics/lego/kits");
pub static MAP: Endpoint = Endpoint::get("map", ApiVersion::V1, "map");
pub static NEWS: Endpoint = Endpoint::get("news", ApiVersion::V2, "news");
pub static NEWS_BR: Endpoint = Endpoint::get("news_br", ApiVersion::V2, "news/br");
pub static NEWS_STW: Endpoint = Endpoint::get("news_stw", ApiVersion::V2, "news/stw");
pub static PLAYLISTS: Endpoint = Endpoint::get("playlists", ApiVersion::V1, "playlists");
pub static PLAYLIST: Endpoint = Endpoint::get("playlist", ApiVersion::V1, "playlists/{}");
pub static SHOP: Endpoint = Endpoint::get("shop", ApiVersion::V2, "shop");
pub static STATS_BR: Endpoint = Endpoint::get("stats_br", ApiVersion::V2, "stats/br/v2").keyed();
pub static STATS_BR_BY_ID: Endpoint =
    Endpoint::get("stats_br_by_id", ApiVersion::V2, "stats/br/v2/{}").keyed();
pub static MATERIAL_INSTANCES: Endpoint =
    Endpoint::get("material_instances", ApiVersion::V2, "beta/materialinstances").beta();

// ============================================================================
// ApiRequest
// ============================================================================

/// A fully built request, typed by the payload it decodes into.
#[derive(Debug)]
pub struct ApiRequest<T> {
    endpoint: &'static Endpoint,
    path: String,
    query: String,
    _response: PhantomData<fn() -> T>,
}

impl<T> ApiRequest<T> {
    fn new(endpoint: &'static Endpoint, path: String, query: String) -> Self {
        Self {
            endpoint,
            path,
            query,
            _response: PhantomData,
        }
    }

    fn with_query<Q: Serialize>(
        endpoint: &'static Endpoint,
        path_params: &[&str],
        query: Q,
    ) -> ApiResult<Self> {
        let path = endpoint.resolve_path(path_params)?;
        let query = serde_urlencoded::to_string(query).map_err(|e| {
            ApiError::InvalidParameter(format!("{}: cannot encode query: {}", endpoint.name, e))
        })?;
        Ok(Self::new(endpoint, path, query))
    }

    /// The endpoint this request targets.
    pub fn endpoint(&self) -> &'static Endpoint {
        self.endpoint
    }

    /// Resolved path, including the version prefix.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Encoded query string, without the leading `?`.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Full URL against a base URL (no trailing slash).
    pub fn url(&self, base_url: &str) -> String {
        if self.query.is_empty() {
            format!("{}{}", base_url, self.path)
        } else {
            format!("{}{}?{}", base_url, self.path, self.query)
        }
    }
}

impl<T: DeserializeOwned> ApiRequest<T> {
    /// Decode a response for this request.
    ///
    /// Non-2xx statuses always produce a status error, whatever the body
    /// contains. A 2xx body must be a `{"status", "data"}` envelope whose
    /// `data` matches `T`.
    pub fn decode(&self, status: StatusCode, body: &[u8]) -> ApiResult<T> {
        decode_response(status, body)
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[allow(dead_code)]
    #[serde(default)]
    status: Option<u16>,
    data: T,
}

/// Decode a status + body pair into the payload type or an error.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ApiResult<T> {
    if status.is_success() {
        return serde_json::from_slice::<Envelope<T>>(body)
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError::deserialize(e, body));
    }

    Err(status_error(status, body))
}

fn status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let error_response = serde_json::from_slice::<ErrorResponse>(body).unwrap_or_else(|e| {
        tracing::warn!(status = %status, error = %e, "Error body is not a JSON error response");
        ErrorResponse::from_text(String::from_utf8_lossy(body).into_owned())
    });
    ApiError::from_status(status, error_response)
}

// ============================================================================
// Assets
// ============================================================================

/// Resolve an asset URL taken from a response.
///
/// Absolute `http(s)` URLs are used as-is; paths starting with `/` are
/// resolved against `base_url`.
pub fn asset_url(base_url: &str, url: &str) -> ApiResult<String> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ApiError::InvalidParameter("asset URL cannot be empty".to_string()));
    }
    if url.starts_with("https://") || url.starts_with("http://") {
        return Ok(url.to_string());
    }
    if url.starts_with('/') {
        return Ok(format!("{}{}", base_url, url));
    }
    Err(ApiError::InvalidParameter(format!("unsupported asset URL: {}", url)))
}

/// Raw asset body on success; the usual status error otherwise.
pub fn decode_asset(status: StatusCode, body: Bytes) -> ApiResult<Bytes> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(status_error(status, &body))
    }
}

// ============================================================================
// Request builders
// ============================================================================

#[derive(Serialize)]
struct LanguageQuery {
    language: GameLanguage,
}

fn language_request<T>(endpoint: &'static Endpoint, language: GameLanguage) -> ApiResult<ApiRequest<T>> {
    ApiRequest::with_query(endpoint, &[], LanguageQuery { language })
}

pub fn aes(key_format: KeyFormat) -> ApiResult<ApiRequest<Aes>> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Query {
        key_format: KeyFormat,
    }
    ApiRequest::with_query(&AES, &[], Query { key_format })
}

pub fn banners(language: GameLanguage) -> ApiResult<ApiRequest<Vec<Banner>>> {
    language_request(&BANNERS, language)
}

pub fn banner_colors() -> ApiResult<ApiRequest<Vec<BannerColor>>> {
    ApiRequest::with_query(&BANNER_COLORS, &[], ())
}

pub fn creator_code(name: &str) -> ApiResult<ApiRequest<CreatorCode>> {
    if name.is_empty() {
        return Err(ApiError::InvalidParameter("creator code name cannot be empty".to_string()));
    }
    ApiRequest::with_query(&CREATOR_CODE, &[], [("name", name)])
}

pub fn cosmetics_all(language: GameLanguage) -> ApiResult<ApiRequest<CosmeticsAll>> {
    language_request(&COSMETICS_ALL, language)
}

pub fn cosmetics_br(language: GameLanguage) -> ApiResult<ApiRequest<Vec<CosmeticBr>>> {
    language_request(&COSMETICS_BR, language)
}

pub fn cosmetic_br(id: &str, language: GameLanguage) -> ApiResult<ApiRequest<CosmeticBr>> {
    ApiRequest::with_query(&COSMETIC_BR, &[id], LanguageQuery { language })
}

/// Sends `id` once per requested id: `?id=a&id=b&language=en`.
pub fn cosmetics_br_by_ids<S: AsRef<str>>(
    ids: &[S],
    language: GameLanguage,
) -> ApiResult<ApiRequest<Vec<CosmeticBr>>> {
    if ids.is_empty() {
        return Err(ApiError::InvalidParameter("at least one cosmetic id is required".to_string()));
    }
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(ids.len() + 1);
    for id in ids {
        let id = id.as_ref();
        if id.is_empty() {
            return Err(ApiError::InvalidParameter("cosmetic id cannot be empty".to_string()));
        }
        pairs.push(("id", id));
    }
    pairs.push(("language", language.as_str()));
    ApiRequest::with_query(&COSMETICS_BR_IDS, &[], pairs)
}

fn search_query(params: &CosmeticSearchParams, language: GameLanguage) -> CosmeticSearchParams {
    let mut params = params.clone();
    params.language = params.language.or(Some(language));
    params
}

pub fn search_br_cosmetic(
    params: &CosmeticSearchParams,
    language: GameLanguage,
) -> ApiResult<ApiRequest<CosmeticBr>> {
    ApiRequest::with_query(&COSMETICS_BR_SEARCH, &[], search_query(params, language))
}

pub fn search_br_cosmetics(
    params: &CosmeticSearchParams,
    language: GameLanguage,
) -> ApiResult<ApiRequest<Vec<CosmeticBr>>> {
    ApiRequest::with_query(&COSMETICS_BR_SEARCH_ALL, &[], search_query(params, language))
}

pub fn cosmetics_new(language: GameLanguage) -> ApiResult<ApiRequest<NewCosmetics>> {
    language_request(&COSMETICS_NEW, language)
}

pub fn cosmetics_br_new(language: GameLanguage) -> ApiResult<ApiRequest<NewBrCosmetics>> {
    language_request(&COSMETICS_BR_NEW, language)
}

pub fn cosmetics_cars(language: GameLanguage) -> ApiResult<ApiRequest<Vec<CosmeticCar>>> {
    language_request(&COSMETICS_CARS, language)
}

pub fn cosmetics_tracks() -> ApiResult<ApiRequest<Vec<CosmeticTrack>>> {
    ApiRequest::with_query(&COSMETICS_TRACKS, &[], ())
}

pub fn cosmetics_instruments(language: GameLanguage) -> ApiResult<ApiRequest<Vec<CosmeticInstrument>>> {
    language_request(&COSMETICS_INSTRUMENTS, language)
}

pub fn cosmetics_lego_kits(language: GameLanguage) -> ApiResult<ApiRequest<Vec<CosmeticLegoKit>>> {
    language_request(&COSMETICS_LEGO_KITS, language)
}

pub fn map(language: GameLanguage) -> ApiResult<ApiRequest<Map>> {
    language_request(&MAP, language)
}

pub fn news(language: GameLanguage) -> ApiResult<ApiRequest<News>> {
    language_request(&NEWS, language)
}

pub fn news_br(language: GameLanguage) -> ApiResult<ApiRequest<GameModeNews>> {
    language_request(&NEWS_BR, language)
}

pub fn news_stw(language: GameLanguage) -> ApiResult<ApiRequest<GameModeNews>> {
    language_request(&NEWS_STW, language)
}

pub fn playlists(language: GameLanguage) -> ApiResult<ApiRequest<Vec<Playlist>>> {
    language_request(&PLAYLISTS, language)
}

pub fn playlist(id: &str, language: GameLanguage) -> ApiResult<ApiRequest<Playlist>> {
    ApiRequest::with_query(&PLAYLIST, &[id], LanguageQuery { language })
}

pub fn shop(language: GameLanguage) -> ApiResult<ApiRequest<Shop>> {
    language_request(&SHOP, language)
}

pub fn material_instances() -> ApiResult<ApiRequest<Vec<MaterialInstance>>> {
    ApiRequest::with_query(&MATERIAL_INSTANCES, &[], ())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_window: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'static str>,
}

pub fn br_stats(params: &StatsParams) -> ApiResult<ApiRequest<BrPlayerStats>> {
    let name = params
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| ApiError::InvalidParameter("account name is required".to_string()))?;
    let query = StatsQuery {
        name: Some(name),
        account_type: params.account_type.map(|t| t.as_str()),
        time_window: params.time_window.map(|t| t.as_str()),
        image: params.image.map(|i| i.as_str()),
    };
    ApiRequest::with_query(&STATS_BR, &[], query)
}

/// Lookup by account id; `params.name` and `params.account_type` are ignored.
pub fn br_stats_by_id(account_id: &str, params: &StatsParams) -> ApiResult<ApiRequest<BrPlayerStats>> {
    let query = StatsQuery {
        name: None,
        account_type: None,
        time_window: params.time_window.map(|t| t.as_str()),
        image: params.image.map(|i| i.as_str()),
    };
    ApiRequest::with_query(&STATS_BR_BY_ID, &[account_id], query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ErrorKind;
    use crate::shared::{AccountType, StatsImageType, TimeWindow};

    #[test]
    fn test_resolve_path_encodes_segments() {
        let path = PLAYLIST.resolve_path(&["Playlist_DefaultSolo"]).unwrap();
        assert_eq!(path, "/v1/playlists/Playlist_DefaultSolo");

        let path = COSMETIC_BR.resolve_path(&["a b/c"]).unwrap();
        assert_eq!(path, "/v2/cosmetics/br/a%20b%2Fc");
    }

    #[test]
    fn test_resolve_path_parameter_count() {
        assert!(matches!(
            COSMETIC_BR.resolve_path(&[]),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            COSMETIC_BR.resolve_path(&[""]),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            SHOP.resolve_path(&["extra"]),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    static ALL_ENDPOINTS: [&Endpoint; 26] = [
        &AES, &BANNERS, &BANNER_COLORS, &CREATOR_CODE, &COSMETICS_ALL, &COSMETICS_BR,
        &COSMETIC_BR, &COSMETICS_BR_IDS, &COSMETICS_BR_SEARCH, &COSMETICS_BR_SEARCH_ALL,
        &COSMETICS_NEW, &COSMETICS_BR_NEW, &COSMETICS_CARS, &COSMETICS_TRACKS,
        &COSMETICS_INSTRUMENTS, &COSMETICS_LEGO_KITS, &MAP, &NEWS, &NEWS_BR, &NEWS_STW,
        &PLAYLISTS, &PLAYLIST, &SHOP, &STATS_BR, &STATS_BR_BY_ID, &MATERIAL_INSTANCES,
    ];

    #[test]
    fn test_only_stats_require_key() {
        let keyed: Vec<&str> = ALL_ENDPOINTS
            .iter()
            .filter(|e| e.requires_key)
            .map(|e| e.name)
            .collect();
        assert_eq!(keyed, vec!["stats_br", "stats_br_by_id"]);
    }

    #[test]
    fn test_only_material_instances_is_beta() {
        let beta: Vec<&str> = ALL_ENDPOINTS
            .iter()
            .filter(|e| e.requires_beta)
            .map(|e| e.name)
            .collect();
        assert_eq!(beta, vec!["material_instances"]);

        let request = material_instances().unwrap();
        assert_eq!(request.url("http://localhost"), "http://localhost/v2/beta/materialinstances");
    }

    #[test]
    fn test_asset_url() {
        assert_eq!(
            asset_url("http://localhost", "https://fortnite-api.com/images/cosmetics/br/cid_028/icon.png")
                .unwrap(),
            "https://fortnite-api.com/images/cosmetics/br/cid_028/icon.png"
        );
        assert_eq!(
            asset_url("http://localhost:8080", "/images/map.png").unwrap(),
            "http://localhost:8080/images/map.png"
        );
        assert!(matches!(asset_url("http://localhost", "  "), Err(ApiError::InvalidParameter(_))));
        assert!(matches!(
            asset_url("http://localhost", "ftp://host/icon.png"),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_decode_asset() {
        let body = Bytes::from_static(b"\x89PNG\r\n");
        assert_eq!(decode_asset(StatusCode::OK, body.clone()).unwrap(), body);

        let err = decode_asset(StatusCode::NOT_FOUND, Bytes::from_static(b"Not Found")).unwrap_err();
        match err {
            ApiError::NotFound(resp) => assert_eq!(resp.get_message(), "Not Found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_language_request_url() {
        let request = cosmetics_br(GameLanguage::German).unwrap();
        assert_eq!(request.path(), "/v2/cosmetics/br");
        assert_eq!(
            request.url("https://fortnite-api.com"),
            "https://fortnite-api.com/v2/cosmetics/br?language=de"
        );
    }

    #[test]
    fn test_request_without_query() {
        let request = banner_colors().unwrap();
        assert_eq!(request.query(), "");
        assert_eq!(request.url("http://localhost"), "http://localhost/v1/banners/colors");
    }

    #[test]
    fn test_aes_key_format() {
        let request = aes(KeyFormat::Base64).unwrap();
        assert_eq!(request.query(), "keyFormat=base64");
    }

    #[test]
    fn test_ids_are_repeated() {
        let request = cosmetics_br_by_ids(&["CID_1", "CID_2"], GameLanguage::English).unwrap();
        assert_eq!(request.query(), "id=CID_1&id=CID_2&language=en");

        let empty: [&str; 0] = [];
        assert!(matches!(
            cosmetics_br_by_ids(&empty, GameLanguage::English),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(matches!(
            cosmetics_br_by_ids(&["CID_1", ""], GameLanguage::English),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_search_falls_back_to_default_language() {
        let params = CosmeticSearchParams::new().with_name("Peely");
        let request = search_br_cosmetics(&params, GameLanguage::French).unwrap();
        assert_eq!(
            request.query(),
            "language=fr&searchLanguage=en&matchMethod=full&name=Peely"
        );

        let params = params.with_language(GameLanguage::Japanese);
        let request = search_br_cosmetic(&params, GameLanguage::French).unwrap();
        assert!(request.query().starts_with("language=ja&"));
        assert_eq!(request.path(), "/v2/cosmetics/br/search");
    }

    #[test]
    fn test_stats_query() {
        let params = StatsParams::by_name("Ninja")
            .with_account_type(AccountType::Psn)
            .with_time_window(TimeWindow::Season)
            .with_image(StatsImageType::All);
        let request = br_stats(&params).unwrap();
        assert_eq!(request.path(), "/v2/stats/br/v2");
        assert_eq!(
            request.query(),
            "name=Ninja&accountType=psn&timeWindow=season&image=all"
        );

        assert!(matches!(
            br_stats(&StatsParams::default()),
            Err(ApiError::InvalidParameter(_))
        ));

        let request = br_stats_by_id("4735ce91", &params).unwrap();
        assert_eq!(request.path(), "/v2/stats/br/v2/4735ce91");
        assert_eq!(request.query(), "timeWindow=season&image=all");
    }

    #[test]
    fn test_creator_code_requires_name() {
        assert!(creator_code("").is_err());
        assert_eq!(creator_code("ninja").unwrap().query(), "name=ninja");
    }

    #[test]
    fn test_decode_success_envelope() {
        let body = br#"{"status": 200, "data": {"id": "c1", "color": "ff0000", "category": "Basic", "subCategoryGroup": 1}}"#;
        let color: BannerColor = decode_response(StatusCode::OK, body).unwrap();
        assert_eq!(color.id, "c1");
        assert_eq!(color.sub_category_group, 1);
    }

    #[test]
    fn test_decode_error_status_ignores_data() {
        let body = br#"{"status": 404, "error": "not found", "data": []}"#;
        let err = decode_response::<Vec<Banner>>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Status);
        match err {
            ApiError::NotFound(resp) => assert_eq!(resp.get_message(), "not found"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_status_plain_text_body() {
        let err = decode_response::<Shop>(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
            .unwrap_err();
        match err {
            ApiError::ServerError(502, resp) => {
                assert_eq!(resp.get_message(), "<html>bad gateway</html>")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_response::<Shop>(StatusCode::OK, b"{\"status\": 200, \"data\": ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);
    }

    #[test]
    fn test_decode_schema_mismatch() {
        let err = decode_response::<Vec<BannerColor>>(StatusCode::OK, br#"{"status": 200, "data": {"id": 1}}"#)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);

        let err = decode_response::<Vec<BannerColor>>(StatusCode::OK, br#"[]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Deserialize);
    }
}
