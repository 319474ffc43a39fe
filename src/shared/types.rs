//! Query enums shared by many endpoints.

// ============================================================================
// GameLanguage
// ============================================================================

/// Language used for localized fields (names, descriptions, news bodies).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum GameLanguage {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "de")]
    German,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "es-419")]
    SpanishLatin,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt-BR")]
    PortugueseBrasil,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh-CN")]
    ChineseSimplified,
    #[serde(rename = "zh-Hant")]
    ChineseTraditional,
}

impl GameLanguage {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::German => "de",
            Self::English => "en",
            Self::Spanish => "es",
            Self::SpanishLatin => "es-419",
            Self::French => "fr",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Polish => "pl",
            Self::PortugueseBrasil => "pt-BR",
            Self::Russian => "ru",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Vietnamese => "vi",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-Hant",
        }
    }
}

impl std::fmt::Display for GameLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// MatchMethod
// ============================================================================

/// How string filters in a cosmetic search are compared.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    #[default]
    Full,
    Contains,
    Starts,
    Ends,
}

impl MatchMethod {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Contains => "contains",
            Self::Starts => "starts",
            Self::Ends => "ends",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// KeyFormat
// ============================================================================

/// Encoding of AES keys returned by `/v2/aes`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    #[default]
    Hex,
    Base64,
}

impl KeyFormat {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }
}

// ============================================================================
// Stats filters
// ============================================================================

/// Platform an account name belongs to, for stats lookups by name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Epic,
    Psn,
    Xbl,
}

impl AccountType {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epic => "epic",
            Self::Psn => "psn",
            Self::Xbl => "xbl",
        }
    }
}

/// Time window stats are aggregated over.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Season,
    #[default]
    Lifetime,
}

impl TimeWindow {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Season => "season",
            Self::Lifetime => "lifetime",
        }
    }
}

/// Which input platforms the rendered stats image covers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StatsImageType {
    All,
    KeyboardMouse,
    Gamepad,
    Touch,
    #[default]
    None,
}

impl StatsImageType {
    /// Get the query string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::KeyboardMouse => "keyboardMouse",
            Self::Gamepad => "gamepad",
            Self::Touch => "touch",
            Self::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_as_str_matches_serde() {
        for language in [
            GameLanguage::English,
            GameLanguage::SpanishLatin,
            GameLanguage::PortugueseBrasil,
            GameLanguage::ChineseTraditional,
        ] {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{}\"", language.as_str()));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GameLanguage::default(), GameLanguage::English);
        assert_eq!(MatchMethod::default(), MatchMethod::Full);
        assert_eq!(KeyFormat::default(), KeyFormat::Hex);
        assert_eq!(TimeWindow::default(), TimeWindow::Lifetime);
        assert_eq!(StatsImageType::default(), StatsImageType::None);
    }

    #[test]
    fn test_stats_image_type_camel_case() {
        let json = serde_json::to_string(&StatsImageType::KeyboardMouse).unwrap();
        assert_eq!(json, r#""keyboardMouse""#);
        assert_eq!(StatsImageType::KeyboardMouse.as_str(), "keyboardMouse");
    }

    #[test]
    fn test_display() {
        assert_eq!(GameLanguage::German.to_string(), "de");
        assert_eq!(MatchMethod::Contains.to_string(), "contains");
    }
}
