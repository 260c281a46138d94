//! Panels the sidebar can open.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A panel reachable from the sidebar button menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PanelTarget {
    /// API management; handled by the request view provider.
    ApiManagement,
    /// Request editor.
    ApiRequest,
    /// Repository chat.
    ChatRepo,
    /// Generated documentation.
    Documentation,
    /// Test cases.
    TestCase,
}

impl PanelTarget {
    /// All targets in button order.
    pub const ALL: [Self; 5] = [
        Self::ApiManagement,
        Self::ApiRequest,
        Self::ChatRepo,
        Self::Documentation,
        Self::TestCase,
    ];

    /// Key used in UI messages and `data-webview` attributes.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ApiManagement => "apiManagement",
            Self::ApiRequest => "apiRequest",
            Self::ChatRepo => "chatRepo",
            Self::Documentation => "documentation",
            Self::TestCase => "testCase",
        }
    }

    /// Panel title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::ApiManagement => "API Management",
            Self::ApiRequest => "API Request",
            Self::ChatRepo => "Chat Repo",
            Self::Documentation => "Documentation",
            Self::TestCase => "Test Case",
        }
    }

    /// Resource holding the panel's HTML, relative to the resource root.
    #[must_use]
    pub fn resource_path(self) -> PathBuf {
        PathBuf::from(self.key()).join("index.html")
    }
}

impl FromStr for PanelTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.key() == s)
            .ok_or_else(|| DomainError::UnknownPanelTarget(s.to_string()))
    }
}

impl fmt::Display for PanelTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
