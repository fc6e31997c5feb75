use std::time::Duration;

use percent_encoding::percent_decode_str;

/// Default delay between refresh cycles, overridable with the `refresh`
/// query parameter.
pub const DEFAULT_REFRESH_MS: u64 = 5000;

/// Which view the board shows, chosen once at startup from the page path
/// and never re-evaluated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// List every pipeline group.
    Overview,
    /// Draw the tile grid for one group.
    Group(String),
}

/// Page-level configuration parsed from a location string such as
/// `/build?cols=4&refresh=10000`.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub mode: Mode,
    /// Caller-supplied column count; `None` means derive it from the
    /// pipeline count.
    pub columns: Option<usize>,
    pub refresh: Duration,
}

impl PageConfig {
    /// Parses a location into mode and tunables. Total: malformed input
    /// falls back to defaults, it never fails.
    pub fn from_location(location: &str) -> Self {
        let (path, query) = match location.split_once('?') {
            Some((path, query)) => (path, query),
            None => (location, ""),
        };

        Self {
            mode: mode_from_path(path),
            columns: positive_param(query, "cols").map(|cols| cols as usize),
            refresh: Duration::from_millis(query_param(query, "refresh", DEFAULT_REFRESH_MS)),
        }
    }
}

/// Selects the view from the page path: the segment after the last `/`
/// names the group, an empty segment means the overview.
fn mode_from_path(path: &str) -> Mode {
    let decoded = percent_decode_str(path).decode_utf8_lossy();
    let group = decoded.rsplit('/').next().unwrap_or_default();

    if group.is_empty() {
        Mode::Overview
    } else {
        Mode::Group(group.to_string())
    }
}

/// Looks up `key` in a query string and returns its value as a positive
/// integer, or `default` if the key is absent, malformed, or non-positive.
/// When the key appears multiple times the last occurrence wins.
pub fn query_param(query: &str, key: &str, default: u64) -> u64 {
    positive_param(query, key).unwrap_or(default)
}

fn positive_param(query: &str, key: &str) -> Option<u64> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(name, _)| name == key)
        .last()
        .and_then(|(_, value)| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
}
