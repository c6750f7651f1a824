//! Outbound search-engine redirection.
//!
//! The dashboard's search box hands the query to a third-party engine; the
//! server's only job is building the redirect URL. A `site` host narrows the
//! query to one site via the engine's `site:` operator.

use std::str::FromStr;

use crate::error::UnknownEngine;

/// Supported outbound search engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchEngine {
    #[default]
    Google,
    Bing,
    Baidu,
}

impl FromStr for SearchEngine {
    type Err = UnknownEngine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "bing" => Ok(Self::Bing),
            "baidu" => Ok(Self::Baidu),
            other => Err(UnknownEngine {
                name: other.to_owned(),
            }),
        }
    }
}

impl SearchEngine {
    /// Build the engine's query URL for `query`, optionally narrowed to
    /// `site` with a `site:` operator. The query is percent-encoded.
    #[must_use]
    pub fn query_url(self, query: &str, site: Option<&str>) -> String {
        let full = match site {
            Some(host) if !host.is_empty() => format!("site:{host} {query}"),
            _ => query.to_owned(),
        };
        let encoded = urlencoding::encode(&full);
        match self {
            Self::Google => format!("https://www.google.com/search?q={encoded}"),
            Self::Bing => format!("https://www.bing.com/search?q={encoded}"),
            Self::Baidu => format!("https://www.baidu.com/s?wd={encoded}"),
        }
    }
}
