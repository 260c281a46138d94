//! Extension Settings Domain Model
//!
//! Settings for the sidebar host and the HTTP executor. Every field has a
//! default so partial settings files load.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default sidebar script, relative to the webview root.
pub const DEFAULT_SCRIPT_URI: &str = "out/sidebar.js";
/// Default sidebar stylesheet, relative to the webview root.
pub const DEFAULT_STYLE_URI: &str = "media/sidebar.css";

/// HTTP transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// User-Agent sent with every request.
    pub user_agent: String,
    /// Per-request timeout in milliseconds. No timeout when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Maximum number of redirects to follow.
    pub max_redirects: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: concat!("reqpanel/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
            max_redirects: 10,
        }
    }
}

/// Settings for the sidebar host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionSettings {
    /// Directory holding `<panel>/index.html` resources.
    pub resource_root: PathBuf,
    /// Source allowed by the content-security-policy.
    pub csp_source: String,
    /// Sidebar script, relative to the webview root.
    pub script_uri: String,
    /// Sidebar stylesheet, relative to the webview root.
    pub style_uri: String,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    /// HTTP transport settings.
    pub http: HttpSettings,
}

impl Default for ExtensionSettings {
    fn default() -> Self {
        Self {
            resource_root: PathBuf::from("."),
            csp_source: "vscode-resource:".to_string(),
            script_uri: DEFAULT_SCRIPT_URI.to_string(),
            style_uri: DEFAULT_STYLE_URI.to_string(),
            log_filter: "info".to_string(),
            http: HttpSettings::default(),
        }
    }
}
