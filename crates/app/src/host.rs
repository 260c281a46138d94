//! Host over stdio: outbound UI effects are JSON lines on a writer.

use std::io::Write;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqpanel_application::{
    HostError, HostResult, HostUi, PanelSpec, RequestViewOpener, ResourceLoader, WebviewHandle,
};
use reqpanel_domain::{HttpExchange, PanelTarget};
use serde::Serialize;
use tracing::warn;

/// An effect the host asks its embedder to perform.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum OutboundEvent<'a> {
    /// Replace the sidebar HTML.
    SetHtml {
        /// New document.
        html: &'a str,
    },
    /// Open a panel.
    OpenPanel {
        /// Panel key.
        target: PanelTarget,
        /// Panel title.
        title: &'a str,
        /// Panel document.
        html: &'a str,
    },
    /// Informational notification.
    Info {
        /// Text to show.
        message: &'a str,
    },
    /// Error notification.
    Error {
        /// Text to show.
        message: &'a str,
    },
    /// A completed request.
    Exchange {
        /// The exchange.
        exchange: &'a HttpExchange,
    },
}

/// Host writing every effect as one JSON line.
pub struct StdioHost {
    out: Mutex<Box<dyn Write + Send>>,
    csp_source: String,
}

impl StdioHost {
    /// Creates a host writing to `out`.
    pub fn new(out: impl Write + Send + 'static, csp_source: impl Into<String>) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            csp_source: csp_source.into(),
        }
    }

    /// Writes one event.
    pub fn emit(&self, event: &OutboundEvent<'_>) {
        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to encode outbound event");
                return;
            }
        };

        let Ok(mut out) = self.out.lock() else {
            warn!("output writer poisoned");
            return;
        };
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!(error = %e, "failed to write outbound event");
        }
    }
}

impl HostUi for StdioHost {
    fn show_info(&self, message: &str) {
        self.emit(&OutboundEvent::Info { message });
    }

    fn show_error(&self, message: &str) {
        self.emit(&OutboundEvent::Error { message });
    }

    fn open_panel(&self, panel: PanelSpec) -> HostResult<()> {
        self.emit(&OutboundEvent::OpenPanel {
            target: panel.target,
            title: &panel.title,
            html: &panel.html,
        });
        Ok(())
    }
}

impl WebviewHandle for StdioHost {
    fn set_html(&self, html: String) {
        self.emit(&OutboundEvent::SetHtml { html: &html });
    }

    fn csp_source(&self) -> String {
        self.csp_source.clone()
    }

    fn as_webview_uri(&self, relative: &str) -> String {
        format!(
            "{}/{}",
            self.csp_source.trim_end_matches('/'),
            relative.trim_start_matches('/')
        )
    }
}

/// Request view provider that opens the request editor panel.
pub struct PanelRequestViews {
    host: Arc<dyn HostUi>,
    resources: Arc<dyn ResourceLoader>,
}

impl PanelRequestViews {
    /// Creates the provider.
    pub fn new(host: Arc<dyn HostUi>, resources: Arc<dyn ResourceLoader>) -> Self {
        Self { host, resources }
    }
}

#[async_trait]
impl RequestViewOpener for PanelRequestViews {
    async fn open_request_view(&self) -> HostResult<()> {
        let target = PanelTarget::ApiRequest;
        let html = self
            .resources
            .read_to_string(&target.resource_path())
            .await
            .map_err(|e| HostError::RequestView(e.to_string()))?;

        self.host.open_panel(PanelSpec {
            target,
            title: target.title().to_string(),
            html,
        })
    }
}
