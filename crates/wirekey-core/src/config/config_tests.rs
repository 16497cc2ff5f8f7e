#![allow(non_snake_case)]

use super::*;
use crate::error::GenerateError;

// Construction

#[test]
fn GeneratorConfig___default___uses_original_style() {
    let config = GeneratorConfig::default();

    assert_eq!(config.style, NamingStyle::Original);
}

#[test]
fn GeneratorConfig___new___matches_default() {
    let config = GeneratorConfig::new();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___with_style___stores_requested_style() {
    let config = GeneratorConfig::with_style(NamingStyle::SnakeCase);

    assert_eq!(config.style, NamingStyle::SnakeCase);
}

// JSON parsing

#[test]
fn GeneratorConfig___from_json_empty_bytes___returns_default() {
    let config = GeneratorConfig::from_json(b"").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_json_empty_object___returns_default() {
    let config = GeneratorConfig::from_json(b"{}").unwrap();

    assert_eq!(config.style, NamingStyle::Original);
}

#[test]
fn GeneratorConfig___from_json_known_style___parses_style() {
    let config = GeneratorConfig::from_json(br#"{"style": "httpHeaderCase"}"#).unwrap();

    assert_eq!(config.style, NamingStyle::HttpHeaderCase);
}

#[test]
fn GeneratorConfig___from_json_unknown_style___falls_back_to_original() {
    let config = GeneratorConfig::from_json(br#"{"style": "PascalCase"}"#).unwrap();

    assert_eq!(config.style, NamingStyle::Original);
}

#[test]
fn GeneratorConfig___from_json_extra_fields___are_ignored() {
    let config = GeneratorConfig::from_json(br#"{"style": "uppercase", "extra": 1}"#).unwrap();

    assert_eq!(config.style, NamingStyle::Uppercase);
}

#[test]
fn GeneratorConfig___from_json_malformed_input___returns_invalid_config() {
    let result = GeneratorConfig::from_json(b"{not json");

    assert!(matches!(result, Err(GenerateError::InvalidConfig(_))));
}

#[test]
fn GeneratorConfig___from_json_non_string_style___returns_invalid_config() {
    let result = GeneratorConfig::from_json(br#"{"style": 42}"#);

    assert!(matches!(result, Err(GenerateError::InvalidConfig(_))));
}

// Serialization

#[test]
fn GeneratorConfig___serialize___emits_config_spelling() {
    let config = GeneratorConfig::with_style(NamingStyle::SnakeCase);

    let json = serde_json::to_string(&config).unwrap();

    assert_eq!(json, r#"{"style":"snake_case"}"#);
}
