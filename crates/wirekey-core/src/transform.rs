//! Case-style transformation engine
//!
//! Implements the per-identifier rewrite for every [`NamingStyle`]. Boundary
//! detection follows a single rule: a separator belongs immediately before an
//! uppercase ASCII letter whose predecessor is an ASCII lowercase letter or
//! digit. A leading capital never receives a separator, and runs of
//! consecutive capitals (acronyms) are never split.

use crate::style::NamingStyle;

impl NamingStyle {
    /// Transform a member name into its wire-key spelling
    ///
    /// Pure and deterministic: identical `(name, style)` inputs always yield
    /// identical output. Casing operates on the ASCII letter range only;
    /// non-ASCII characters pass through unchanged. Names are expected to be
    /// non-empty identifiers (guaranteed for names taken from
    /// [`Member`](crate::Member) records).
    ///
    /// # Examples
    ///
    /// ```
    /// use wirekey_core::NamingStyle;
    ///
    /// assert_eq!(NamingStyle::SnakeCase.apply("cardNo"), "card_no");
    /// assert_eq!(NamingStyle::CamelCase.apply("UserID"), "userID");
    /// assert_eq!(
    ///     NamingStyle::HttpHeaderCase.apply("contentSecurityPolicy"),
    ///     "Content-Security-Policy"
    /// );
    /// ```
    pub fn apply(self, name: &str) -> String {
        match self {
            NamingStyle::Original => name.to_string(),
            NamingStyle::Lowercase => name.to_ascii_lowercase(),
            NamingStyle::Uppercase => name.to_ascii_uppercase(),
            NamingStyle::SnakeCase => separate_camel_humps(name, '_').to_ascii_lowercase(),
            NamingStyle::CamelCase => decapitalize_first(name),
            NamingStyle::HttpHeaderCase => capitalize_segments(&separate_camel_humps(name, '-')),
        }
    }
}

/// Insert `separator` before every camel-hump boundary
///
/// A boundary is an uppercase ASCII letter preceded by an ASCII lowercase
/// letter or digit, so `cardNo` gains one separator while `UserID` and
/// `HTTPServer` keep their capital runs intact.
fn separate_camel_humps(name: &str, separator: char) -> String {
    let mut result = String::new();
    let mut prev_is_lower_or_digit = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && prev_is_lower_or_digit {
            result.push(separator);
        }
        prev_is_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        result.push(c);
    }

    result
}

/// Lowercase the first character of a name, leaving the rest untouched
fn decapitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_ascii_lowercase())
            .chain(chars)
            .collect(),
    }
}

/// Capitalize the first character of every dash-separated segment
///
/// Segment interiors keep their original casing, so acronym tails survive:
/// `x-Request-ID` stays `X-Request-ID`.
fn capitalize_segments(name: &str) -> String {
    name.split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("-")
}

/// Uppercase the first character of a segment, leaving the rest untouched
fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect(),
    }
}

#[cfg(test)]
#[path = "transform/transform_tests.rs"]
mod transform_tests;
