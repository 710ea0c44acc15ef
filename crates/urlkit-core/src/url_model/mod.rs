//! URL decomposition and reassembly.
//!
//! [`parse`] splits a URL-like string into raw substrings (nothing is decoded)
//! and [`format`] joins them back. For any input the parser produced a record
//! from, `format(&parse(s)) == s`.

mod format;
mod scan;

pub use format::format;
pub use scan::{parse, parse_with};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;

/// Components of a URL as they appeared in the input.
///
/// Absent components are `None`. `host` is `Some("")` when an authority was
/// present but empty (`file:///etc`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    /// Scheme including the trailing colon, e.g. `"https:"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Whether `//` introduced an authority section.
    #[serde(default)]
    pub slashes: bool,
    /// `user[:pass]`, without the `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port digits, without the `:`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pathname: Option<String>,
    /// Query including the leading `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Fragment including the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl ParsedUrl {
    /// Reads a record from its JSON form (as printed by `urlkit parse`).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format(self))
    }
}

impl From<&str> for ParsedUrl {
    fn from(url: &str) -> Self {
        parse(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UrlKitError;

    #[test]
    fn display_formats_record() {
        let url = ParsedUrl::from("https://example.com:8080/path?query=value#hash");
        assert_eq!(url.to_string(), "https://example.com:8080/path?query=value#hash");
    }

    #[test]
    fn json_roundtrip_keeps_fields() {
        let url = parse("http://user@example.com:81/a?b#c");
        let json = url.to_json().unwrap();
        assert!(json.contains("\"auth\": \"user\""));
        assert_eq!(ParsedUrl::from_json(&json).unwrap(), url);
    }

    #[test]
    fn json_missing_fields_default_to_none() {
        let url = ParsedUrl::from_json(r#"{"pathname": "/simple/path"}"#).unwrap();
        assert_eq!(url.pathname.as_deref(), Some("/simple/path"));
        assert!(!url.slashes);
        assert!(url.host.is_none());
        assert_eq!(format(&url), "/simple/path");
    }

    #[test]
    fn json_garbage_is_record_error() {
        let err = ParsedUrl::from_json("{\"slashes\": \"yes\"}").unwrap_err();
        assert!(matches!(err, UrlKitError::Record(_)));
    }
}
