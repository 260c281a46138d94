//! Host UI ports
//!
//! The editor host owns the sidebar webview, panels and notifications.
//! These traits are the only surface the controller sees.

use std::path::Path;

use async_trait::async_trait;
use reqpanel_domain::PanelTarget;

use crate::error::HostResult;

/// A panel to open in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelSpec {
    /// Which panel this is.
    pub target: PanelTarget,
    /// Panel title.
    pub title: String,
    /// Panel HTML.
    pub html: String,
}

/// Notifications and panels provided by the host.
pub trait HostUi: Send + Sync {
    /// Shows an informational notification.
    fn show_info(&self, message: &str);

    /// Shows an error notification.
    fn show_error(&self, message: &str);

    /// Opens a new panel with the given content.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Panel` if the host cannot create the panel.
    fn open_panel(&self, panel: PanelSpec) -> HostResult<()>;
}

/// The live sidebar webview.
pub trait WebviewHandle: Send + Sync {
    /// Replaces the webview content.
    fn set_html(&self, html: String);

    /// Source token allowed by the content-security-policy.
    fn csp_source(&self) -> String;

    /// Maps a path relative to the extension root to a webview URI.
    fn as_webview_uri(&self, relative: &str) -> String;
}

/// Reads static resources shipped with the extension.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Reads a resource as text.
    ///
    /// # Errors
    ///
    /// Returns `HostError::Resource` if the resource is missing or unreadable.
    async fn read_to_string(&self, relative: &Path) -> HostResult<String>;
}
