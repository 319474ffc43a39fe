//! Query parameters for the BR cosmetic search endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::shared::{GameLanguage, MatchMethod};

/// Filters for GET /v2/cosmetics/br/search and /v2/cosmetics/br/search/all.
///
/// String filters are compared according to `match_method` in
/// `search_language`. Unset filters are not sent.
///
/// ```rust,ignore
/// let params = CosmeticSearchParams::new()
///     .with_name("Peely")
///     .with_match_method(MatchMethod::Contains)
///     .with_has_set(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmeticSearchParams {
    /// Response language; falls back to the client default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<GameLanguage>,
    pub search_language: GameLanguage,
    pub match_method: MatchMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_rarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_series: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_set: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_introduction: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction_chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub introduction_season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_featured_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_variants: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gameplay_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gameplay_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_meta_tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_dynamic_pak_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_pak_id: Option<String>,
    /// Exact time the cosmetic was added
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_since: Option<DateTime<Utc>>,
    /// Only cosmetics not seen in the shop for at least this many days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unseen_for: Option<u32>,
    /// Exact time of the last shop appearance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_appearance: Option<DateTime<Utc>>,
}

impl CosmeticSearchParams {
    /// Create empty params (English, full match).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the response language.
    pub fn with_language(mut self, language: GameLanguage) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the language string filters are matched in.
    pub fn with_search_language(mut self, language: GameLanguage) -> Self {
        self.search_language = language;
        self
    }

    /// Set how string filters are compared.
    pub fn with_match_method(mut self, match_method: MatchMethod) -> Self {
        self.match_method = match_method;
        self
    }

    /// Filter by cosmetic id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Filter by name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter by type value, e.g. `outfit`.
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Filter by rarity value, e.g. `legendary`.
    pub fn with_rarity(mut self, rarity: impl Into<String>) -> Self {
        self.rarity = Some(rarity.into());
        self
    }

    /// Filter by series value.
    pub fn with_series(mut self, series: impl Into<String>) -> Self {
        self.series = Some(series.into());
        self
    }

    /// Filter by set value.
    pub fn with_set(mut self, set: impl Into<String>) -> Self {
        self.set = Some(set.into());
        self
    }

    /// Only cosmetics that do (or do not) belong to a set.
    pub fn with_has_set(mut self, has_set: bool) -> Self {
        self.has_set = Some(has_set);
        self
    }

    /// Only cosmetics that do (or do not) have variants.
    pub fn with_has_variants(mut self, has_variants: bool) -> Self {
        self.has_variants = Some(has_variants);
        self
    }

    /// Filter by gameplay tag.
    pub fn with_gameplay_tag(mut self, tag: impl Into<String>) -> Self {
        self.gameplay_tag = Some(tag.into());
        self
    }

    /// Only cosmetics added after the given time.
    pub fn with_added_since(mut self, since: DateTime<Utc>) -> Self {
        self.added_since = Some(since);
        self
    }

    /// Only cosmetics absent from the shop for at least `days` days.
    pub fn with_unseen_for(mut self, days: u32) -> Self {
        self.unseen_for = Some(days);
        self
    }

    /// Only cosmetics last seen in the shop at exactly this time.
    pub fn with_last_appearance(mut self, at: DateTime<Utc>) -> Self {
        self.last_appearance = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_only_has_required_keys() {
        let query = serde_urlencoded::to_string(CosmeticSearchParams::new()).unwrap();
        assert_eq!(query, "searchLanguage=en&matchMethod=full");
    }

    #[test]
    fn test_filters_are_camel_case() {
        let params = CosmeticSearchParams::new()
            .with_language(GameLanguage::German)
            .with_match_method(MatchMethod::Starts)
            .with_type("outfit")
            .with_has_set(true)
            .with_gameplay_tag("Cosmetics.Source.ItemShop");
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(
            query,
            "language=de&searchLanguage=en&matchMethod=starts&type=outfit&hasSet=true\
             &gameplayTag=Cosmetics.Source.ItemShop"
        );
    }

    #[test]
    fn test_time_filters() {
        let since = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let params = CosmeticSearchParams::new()
            .with_added_since(since)
            .with_unseen_for(30);
        let query = serde_urlencoded::to_string(&params).unwrap();
        assert_eq!(
            query,
            "searchLanguage=en&matchMethod=full&addedSince=2024-01-01T00%3A00%3A00Z&unseenFor=30"
        );
    }
}
