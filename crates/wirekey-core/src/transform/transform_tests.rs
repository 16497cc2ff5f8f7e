#![allow(non_snake_case)]

use super::*;

// original

#[test]
fn NamingStyle___original___keeps_name_unchanged() {
    let key = NamingStyle::Original.apply("mixedCASE_name");

    assert_eq!(key, "mixedCASE_name");
}

// lowercase / uppercase

#[test]
fn NamingStyle___lowercase___folds_every_ascii_letter() {
    let key = NamingStyle::Lowercase.apply("SessionToken");

    assert_eq!(key, "sessiontoken");
}

#[test]
fn NamingStyle___uppercase___folds_every_ascii_letter() {
    let key = NamingStyle::Uppercase.apply("active");

    assert_eq!(key, "ACTIVE");
}

#[test]
fn NamingStyle___lowercase___leaves_non_ascii_untouched() {
    let key = NamingStyle::Lowercase.apply("Straße");

    assert_eq!(key, "straße");
}

// snake_case

#[test]
fn NamingStyle___snake_case___separates_single_hump() {
    let key = NamingStyle::SnakeCase.apply("cardNo");

    assert_eq!(key, "card_no");
}

#[test]
fn NamingStyle___snake_case___separates_every_hump() {
    let key = NamingStyle::SnakeCase.apply("cardIdentifierValue");

    assert_eq!(key, "card_identifier_value");
}

#[test]
fn NamingStyle___snake_case___single_word_is_identity() {
    let key = NamingStyle::SnakeCase.apply("age");

    assert_eq!(key, "age");
}

#[test]
fn NamingStyle___snake_case___leading_capital_gets_no_separator() {
    let key = NamingStyle::SnakeCase.apply("FirstName");

    assert_eq!(key, "first_name");
}

#[test]
fn NamingStyle___snake_case___acronym_run_stays_together() {
    let key = NamingStyle::SnakeCase.apply("HTTPServer");

    assert_eq!(key, "httpserver");
}

#[test]
fn NamingStyle___snake_case___trailing_acronym_separates_once() {
    let key = NamingStyle::SnakeCase.apply("userID");

    assert_eq!(key, "user_id");
}

#[test]
fn NamingStyle___snake_case___digit_counts_as_hump_predecessor() {
    let key = NamingStyle::SnakeCase.apply("card2No");

    assert_eq!(key, "card2_no");
}

#[test]
fn NamingStyle___snake_case___existing_snake_name_is_stable() {
    let key = NamingStyle::SnakeCase.apply("first_name");

    assert_eq!(key, "first_name");
}

// camelCase

#[test]
fn NamingStyle___camel_case___decapitalizes_first_character_only() {
    let key = NamingStyle::CamelCase.apply("SessionToken");

    assert_eq!(key, "sessionToken");
}

#[test]
fn NamingStyle___camel_case___keeps_interior_acronym() {
    let key = NamingStyle::CamelCase.apply("UserID");

    assert_eq!(key, "userID");
}

#[test]
fn NamingStyle___camel_case___lowercase_first_character_is_identity() {
    let key = NamingStyle::CamelCase.apply("age");

    assert_eq!(key, "age");
}

#[test]
fn NamingStyle___camel_case___single_character_name() {
    let key = NamingStyle::CamelCase.apply("A");

    assert_eq!(key, "a");
}

// httpHeaderCase

#[test]
fn NamingStyle___http_header_case___separates_and_capitalizes_segments() {
    let key = NamingStyle::HttpHeaderCase.apply("contentSecurityPolicy");

    assert_eq!(key, "Content-Security-Policy");
}

#[test]
fn NamingStyle___http_header_case___single_word_is_capitalized() {
    let key = NamingStyle::HttpHeaderCase.apply("authorization");

    assert_eq!(key, "Authorization");
}

#[test]
fn NamingStyle___http_header_case___keeps_acronym_segment_casing() {
    let key = NamingStyle::HttpHeaderCase.apply("xRequestID");

    assert_eq!(key, "X-Request-ID");
}

#[test]
fn NamingStyle___http_header_case___underscore_name_keeps_underscore() {
    let key = NamingStyle::HttpHeaderCase.apply("first_name");

    assert_eq!(key, "First_name");
}

// Totality

#[test]
fn NamingStyle___empty_name___every_style_returns_empty() {
    for style in NamingStyle::ALL {
        let key = style.apply("");

        assert_eq!(key, "", "{} should map empty input to empty output", style);
    }
}
