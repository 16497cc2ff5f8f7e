//! Generator configuration

use serde::{Deserialize, Serialize};

use crate::error::GenerateResult;
use crate::style::NamingStyle;

/// Configuration for key-mapping generation
///
/// Currently a single knob: the [`NamingStyle`] applied to stored-member
/// names. Deserialization is lenient about the style value, so configuration
/// typos degrade to the original spelling (with a warning) instead of
/// failing the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Naming style applied to every stored member
    #[serde(deserialize_with = "lenient_style")]
    pub style: NamingStyle,
}

impl GeneratorConfig {
    /// Create a configuration with the default style (`original`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with an explicit style
    pub fn with_style(style: NamingStyle) -> Self {
        Self { style }
    }

    /// Parse a configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> GenerateResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Accept any string as a style value, falling back to `original`
fn lenient_style<'de, D>(deserializer: D) -> Result<NamingStyle, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(NamingStyle::from_config_value(&value))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
