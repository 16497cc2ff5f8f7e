//! Naming styles for wire-key generation

use serde::{Deserialize, Serialize};

/// Naming convention applied to member names when deriving wire keys
///
/// A style is chosen once per generation request and applied uniformly to
/// every eligible member. The serialized spellings below are the exact
/// values recognized on the configuration surface:
///
/// | Spelling | Example |
/// |----------|---------|
/// | `original` | `firstName` → `firstName` |
/// | `lowercase` | `SessionToken` → `sessiontoken` |
/// | `uppercase` | `active` → `ACTIVE` |
/// | `snake_case` | `firstName` → `first_name` |
/// | `camelCase` | `UserID` → `userID` |
/// | `httpHeaderCase` | `cacheControl` → `Cache-Control` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NamingStyle {
    /// Keep the member name unchanged
    #[default]
    #[serde(rename = "original")]
    Original,
    /// Lowercase every character
    #[serde(rename = "lowercase")]
    Lowercase,
    /// Uppercase every character
    #[serde(rename = "uppercase")]
    Uppercase,
    /// Underscore-separate camel humps, then lowercase the result
    #[serde(rename = "snake_case")]
    SnakeCase,
    /// Decapitalize the first character only
    #[serde(rename = "camelCase")]
    CamelCase,
    /// Dash-separate camel humps and capitalize each segment
    #[serde(rename = "httpHeaderCase")]
    HttpHeaderCase,
}

impl NamingStyle {
    /// Every supported style, in declaration order
    pub const ALL: [NamingStyle; 6] = [
        NamingStyle::Original,
        NamingStyle::Lowercase,
        NamingStyle::Uppercase,
        NamingStyle::SnakeCase,
        NamingStyle::CamelCase,
        NamingStyle::HttpHeaderCase,
    ];

    /// Strict parse of a configuration spelling
    ///
    /// Returns `None` for anything that is not one of the recognized values.
    pub fn try_from_config_value(value: &str) -> Option<Self> {
        match value {
            "original" => Some(NamingStyle::Original),
            "lowercase" => Some(NamingStyle::Lowercase),
            "uppercase" => Some(NamingStyle::Uppercase),
            "snake_case" => Some(NamingStyle::SnakeCase),
            "camelCase" => Some(NamingStyle::CamelCase),
            "httpHeaderCase" => Some(NamingStyle::HttpHeaderCase),
            _ => None,
        }
    }

    /// Lenient parse used at the configuration boundary
    ///
    /// Unrecognized values emit a warning and fall back to
    /// [`NamingStyle::Original`], so a misspelled option degrades to
    /// unstyled keys instead of failing the request.
    pub fn from_config_value(value: &str) -> Self {
        match Self::try_from_config_value(value) {
            Some(style) => style,
            None => {
                tracing::warn!(
                    "unrecognized naming style \"{}\", falling back to original",
                    value
                );
                NamingStyle::Original
            }
        }
    }

    /// Configuration spelling of this style
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::Original => "original",
            NamingStyle::Lowercase => "lowercase",
            NamingStyle::Uppercase => "uppercase",
            NamingStyle::SnakeCase => "snake_case",
            NamingStyle::CamelCase => "camelCase",
            NamingStyle::HttpHeaderCase => "httpHeaderCase",
        }
    }
}

impl std::fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
