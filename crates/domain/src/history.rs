//! Endpoint History Domain Model
//!
//! Endpoints the user has called, in the order they were recorded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::exchange::HttpExchange;

/// Format used for the `last_used` display text.
pub const LAST_USED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A previously used API endpoint, shown in the sidebar history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointHistoryEntry {
    /// HTTP method used.
    pub method: String,
    /// Display name.
    pub name: String,
    /// When the endpoint was last used, as display text.
    pub last_used: String,
}

impl EndpointHistoryEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        name: impl Into<String>,
        last_used: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            name: name.into(),
            last_used: last_used.into(),
        }
    }

    /// Derives an entry from a completed exchange.
    ///
    /// The name is the URL path, or the whole URL when it has no path.
    #[must_use]
    pub fn from_exchange(exchange: &HttpExchange, used_at: DateTime<Utc>) -> Self {
        Self {
            method: exchange.request.method.clone(),
            name: display_name(&exchange.request.url),
            last_used: used_at.format(LAST_USED_FORMAT).to_string(),
        }
    }

    /// CSS class for the method, e.g. `get` or `post`.
    #[must_use]
    pub fn method_class(&self) -> String {
        self.method.to_lowercase()
    }
}

fn display_name(url: &str) -> String {
    let after_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let path = after_scheme
        .find('/')
        .map_or("", |index| &after_scheme[index..]);
    let path = path.split(['?', '#']).next().unwrap_or_default();

    if path.is_empty() || path == "/" {
        url.to_string()
    } else {
        path.to_string()
    }
}

/// Ordered endpoint history. Entries render in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiHistory {
    entries: Vec<EndpointHistoryEntry>,
}

impl ApiHistory {
    /// Creates a new empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry at the end.
    pub fn push(&mut self, entry: EndpointHistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[EndpointHistoryEntry] {
        &self.entries
    }

    /// Clears all history entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<EndpointHistoryEntry> for ApiHistory {
    fn from_iter<I: IntoIterator<Item = EndpointHistoryEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
