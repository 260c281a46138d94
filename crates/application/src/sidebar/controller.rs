//! Sidebar controller.
//!
//! Owns the sidebar state and the live webview, renders on demand and
//! routes inbound UI messages. Handlers never return errors: failures are
//! logged and shown to the user as host notifications.

use std::sync::Arc;

use reqpanel_domain::settings::{DEFAULT_SCRIPT_URI, DEFAULT_STYLE_URI};
use reqpanel_domain::{
    EndpointHistoryEntry, InboundMessage, PanelTarget, SidebarEvent, SidebarState, SidebarView,
};
use tracing::{debug, error, info, warn};

use super::{Nonce, RenderContext, render_sidebar};
use crate::ports::{HostUi, PanelSpec, RequestViewOpener, ResourceLoader, WebviewHandle};

const API_MANAGEMENT_UNAVAILABLE: &str = "API Management is not available";
const API_REQUEST_UNAVAILABLE: &str = "API Request is not available";

/// Controller behind the API sidebar.
pub struct SidebarController {
    state: SidebarState,
    script_path: String,
    style_path: String,
    webview: Option<Arc<dyn WebviewHandle>>,
    host: Arc<dyn HostUi>,
    resources: Arc<dyn ResourceLoader>,
    request_views: Option<Arc<dyn RequestViewOpener>>,
}

impl SidebarController {
    /// Creates a controller in the button-menu view with empty history.
    ///
    /// No request view provider is attached; see [`Self::with_request_views`].
    pub fn new(host: Arc<dyn HostUi>, resources: Arc<dyn ResourceLoader>) -> Self {
        Self {
            state: SidebarState::new(),
            script_path: DEFAULT_SCRIPT_URI.to_string(),
            style_path: DEFAULT_STYLE_URI.to_string(),
            webview: None,
            host,
            resources,
            request_views: None,
        }
    }

    /// Attaches the provider that opens the request detail view.
    #[must_use]
    pub fn with_request_views(mut self, request_views: Arc<dyn RequestViewOpener>) -> Self {
        self.request_views = Some(request_views);
        self
    }

    /// Overrides the script and stylesheet paths.
    #[must_use]
    pub fn with_assets(
        mut self,
        script_path: impl Into<String>,
        style_path: impl Into<String>,
    ) -> Self {
        self.script_path = script_path.into();
        self.style_path = style_path.into();
        self
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &SidebarState {
        &self.state
    }

    /// Current view.
    #[must_use]
    pub const fn view(&self) -> SidebarView {
        self.state.view
    }

    /// Endpoint history in display order.
    #[must_use]
    pub fn history(&self) -> &[EndpointHistoryEntry] {
        self.state.history.entries()
    }

    /// Attaches the webview and renders into it.
    pub fn resolve_view(&mut self, webview: Arc<dyn WebviewHandle>) {
        webview.set_html(self.render_html(webview.as_ref()));
        self.webview = Some(webview);
    }

    /// Re-attaches a restored webview without rendering.
    pub fn revive(&mut self, webview: Arc<dyn WebviewHandle>) {
        self.webview = Some(webview);
    }

    /// Re-renders into the attached webview, if any.
    pub fn refresh(&self) {
        if let Some(webview) = &self.webview {
            debug!(view = ?self.state.view, "refreshing webview content");
            webview.set_html(self.render_html(webview.as_ref()));
        }
    }

    /// Renders the current state for the given webview with a fresh nonce.
    #[must_use]
    pub fn render_html(&self, webview: &dyn WebviewHandle) -> String {
        let context = RenderContext {
            csp_source: webview.csp_source(),
            script_uri: webview.as_webview_uri(&self.script_path),
            style_uri: webview.as_webview_uri(&self.style_path),
        };
        render_sidebar(&self.state, &context, &Nonce::generate())
    }

    /// Appends an endpoint to the history. Call [`Self::refresh`] to show it.
    pub fn record_endpoint(&mut self, entry: EndpointHistoryEntry) {
        self.state.history.push(entry);
    }

    /// Removes all history entries.
    pub fn clear_history(&mut self) {
        self.state.history.clear();
    }

    /// Decodes and dispatches a raw webview message.
    pub async fn handle_message(&mut self, message: InboundMessage) {
        debug!(kind = %message.kind, "received message on sidebar");
        self.dispatch(SidebarEvent::from(message)).await;
    }

    /// Applies one sidebar event.
    pub async fn dispatch(&mut self, event: SidebarEvent) {
        match event {
            SidebarEvent::Info(Some(message)) => self.host.show_info(&message),
            SidebarEvent::Error(Some(message)) => self.host.show_error(&message),
            SidebarEvent::OpenPanel(Some(key)) => self.open_panel(&key).await,
            SidebarEvent::Back => {
                self.state.show_menu();
                self.refresh();
            }
            SidebarEvent::NewRequest => {
                self.open_request_view(API_REQUEST_UNAVAILABLE).await;
            }
            SidebarEvent::Info(None) | SidebarEvent::Error(None) | SidebarEvent::OpenPanel(None) => {
                debug!("ignoring sidebar message without value");
            }
            SidebarEvent::Unknown(kind) => debug!(%kind, "ignoring unknown sidebar message"),
        }
    }

    async fn open_panel(&mut self, key: &str) {
        let target = match key.parse::<PanelTarget>() {
            Ok(target) => target,
            Err(e) => {
                warn!(error = %e, "ignoring request to open panel");
                return;
            }
        };

        if target == PanelTarget::ApiManagement {
            if self.open_request_view(API_MANAGEMENT_UNAVAILABLE).await {
                self.state.show_history();
                self.refresh();
            }
            return;
        }

        let html = match self.resources.read_to_string(&target.resource_path()).await {
            Ok(html) => html,
            Err(e) => {
                error!(%target, error = %e, "failed to load panel content");
                self.host
                    .show_error(&format!("{} is not available", target.title()));
                return;
            }
        };

        let panel = PanelSpec {
            target,
            title: target.title().to_string(),
            html,
        };
        if let Err(e) = self.host.open_panel(panel) {
            error!(%target, error = %e, "failed to open panel");
            self.host.show_error(&e.to_string());
        }
    }

    /// Returns false if no provider is attached. A provider failure is
    /// reported to the user but still counts as delegated.
    async fn open_request_view(&self, unavailable: &str) -> bool {
        let Some(request_views) = &self.request_views else {
            error!("request view provider is not initialized");
            self.host.show_error(unavailable);
            return false;
        };

        info!("opening API request view");
        if let Err(e) = request_views.open_request_view().await {
            error!(error = %e, "failed to open API request view");
            self.host.show_error(&e.to_string());
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::{HostError, HostResult};
    use crate::sidebar::NONCE_LEN;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct RecordingHost {
        infos: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
        panels: Mutex<Vec<PanelSpec>>,
    }

    impl HostUi for RecordingHost {
        fn show_info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn show_error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }

        fn open_panel(&self, panel: PanelSpec) -> HostResult<()> {
            self.panels.lock().unwrap().push(panel);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingWebview {
        renders: Mutex<Vec<String>>,
    }

    impl RecordingWebview {
        fn last(&self) -> String {
            self.renders.lock().unwrap().last().cloned().unwrap_or_default()
        }

        fn count(&self) -> usize {
            self.renders.lock().unwrap().len()
        }
    }

    impl WebviewHandle for RecordingWebview {
        fn set_html(&self, html: String) {
            self.renders.lock().unwrap().push(html);
        }

        fn csp_source(&self) -> String {
            "vscode-resource:".to_string()
        }

        fn as_webview_uri(&self, relative: &str) -> String {
            format!("vscode-resource:/ext/{relative}")
        }
    }

    #[derive(Default)]
    struct MapResources(HashMap<PathBuf, String>);

    #[async_trait]
    impl ResourceLoader for MapResources {
        async fn read_to_string(&self, relative: &Path) -> HostResult<String> {
            self.0.get(relative).cloned().ok_or_else(|| HostError::Resource {
                path: relative.to_path_buf(),
                message: "not found".to_string(),
            })
        }
    }

    #[derive(Default)]
    struct CountingViews(AtomicUsize);

    #[async_trait]
    impl RequestViewOpener for CountingViews {
        async fn open_request_view(&self) -> HostResult<()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct Fixture {
        host: Arc<RecordingHost>,
        webview: Arc<RecordingWebview>,
        views: Arc<CountingViews>,
        controller: SidebarController,
    }

    fn fixture() -> Fixture {
        let host = Arc::new(RecordingHost::default());
        let webview = Arc::new(RecordingWebview::default());
        let views = Arc::new(CountingViews::default());
        let mut resources = MapResources::default();
        resources.0.insert(
            PanelTarget::Documentation.resource_path(),
            "<h1>Docs</h1>".to_string(),
        );

        let mut controller = SidebarController::new(host.clone(), Arc::new(resources))
            .with_request_views(views.clone());
        controller.resolve_view(webview.clone());

        Fixture {
            host,
            webview,
            views,
            controller,
        }
    }

    fn nonces(html: &str) -> (String, String) {
        let extract = |prefix: &str| {
            let start = html.find(prefix).expect("prefix") + prefix.len();
            html[start..start + NONCE_LEN].to_string()
        };
        (extract("'nonce-"), extract("<script nonce=\""))
    }

    #[tokio::test]
    async fn test_resolve_renders_button_menu() {
        let f = fixture();
        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert_eq!(f.webview.count(), 1);
        assert!(f.webview.last().contains("data-webview=\"apiManagement\""));
        assert!(
            f.webview
                .last()
                .contains("src=\"vscode-resource:/ext/out/sidebar.js\"")
        );
    }

    #[tokio::test]
    async fn test_back_button_is_idempotent_in_menu() {
        let mut f = fixture();
        f.controller.dispatch(SidebarEvent::Back).await;
        f.controller.dispatch(SidebarEvent::Back).await;

        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert_eq!(f.webview.count(), 3);
    }

    #[tokio::test]
    async fn test_api_management_switches_to_history() {
        let mut f = fixture();
        f.controller
            .record_endpoint(EndpointHistoryEntry::new("GET", "/users", "today"));
        f.controller
            .record_endpoint(EndpointHistoryEntry::new("DELETE", "/users/1", "today"));

        f.controller
            .handle_message(InboundMessage::new("openApiManagement", "apiManagement"))
            .await;

        assert_eq!(f.controller.view(), SidebarView::HistoryList);
        assert_eq!(f.views.0.load(Ordering::SeqCst), 1);
        let html = f.webview.last();
        assert!(html.contains(">Back</button>"));
        assert_eq!(
            html.matches("<li class=\"api-endpoint ").count(),
            f.controller.history().len()
        );
        assert!(f.host.panels.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_back_returns_to_menu() {
        let mut f = fixture();
        f.controller
            .dispatch(SidebarEvent::OpenPanel(Some("apiManagement".to_string())))
            .await;
        f.controller.handle_message(InboundMessage::bare("backButton")).await;

        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert!(f.webview.last().contains("id=\"buttons\""));
    }

    #[tokio::test]
    async fn test_empty_panel_value_is_ignored() {
        let mut f = fixture();
        f.controller
            .handle_message(InboundMessage::new("openApiManagement", ""))
            .await;

        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert!(f.host.panels.lock().unwrap().is_empty());
        assert_eq!(f.views.0.load(Ordering::SeqCst), 0);
        assert_eq!(f.webview.count(), 1);
    }

    #[tokio::test]
    async fn test_other_target_opens_panel_with_resource() {
        let mut f = fixture();
        f.controller
            .handle_message(InboundMessage::new("openApiManagement", "documentation"))
            .await;

        let panels = f.host.panels.lock().unwrap();
        assert_eq!(
            *panels,
            vec![PanelSpec {
                target: PanelTarget::Documentation,
                title: "Documentation".to_string(),
                html: "<h1>Docs</h1>".to_string(),
            }]
        );
        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
    }

    #[tokio::test]
    async fn test_missing_resource_shows_error() {
        let mut f = fixture();
        f.controller
            .dispatch(SidebarEvent::OpenPanel(Some("testCase".to_string())))
            .await;

        assert!(f.host.panels.lock().unwrap().is_empty());
        assert_eq!(
            *f.host.errors.lock().unwrap(),
            vec!["Test Case is not available".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unknown_target_is_ignored() {
        let mut f = fixture();
        f.controller
            .dispatch(SidebarEvent::OpenPanel(Some("webview".to_string())))
            .await;

        assert!(f.host.panels.lock().unwrap().is_empty());
        assert!(f.host.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_notifications() {
        let mut f = fixture();
        f.controller.handle_message(InboundMessage::new("onInfo", "saved")).await;
        f.controller.handle_message(InboundMessage::new("onError", "boom")).await;
        f.controller.handle_message(InboundMessage::new("onInfo", "")).await;
        f.controller.handle_message(InboundMessage::bare("onError")).await;

        assert_eq!(*f.host.infos.lock().unwrap(), vec!["saved".to_string()]);
        assert_eq!(*f.host.errors.lock().unwrap(), vec!["boom".to_string()]);
    }

    #[tokio::test]
    async fn test_new_request_keeps_view() {
        let mut f = fixture();
        f.controller.handle_message(InboundMessage::bare("newRequest")).await;

        assert_eq!(f.views.0.load(Ordering::SeqCst), 1);
        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert_eq!(f.webview.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_request_views_report_errors() {
        let host = Arc::new(RecordingHost::default());
        let mut controller =
            SidebarController::new(host.clone(), Arc::new(MapResources::default()));

        controller
            .dispatch(SidebarEvent::OpenPanel(Some("apiManagement".to_string())))
            .await;
        controller.dispatch(SidebarEvent::NewRequest).await;

        assert_eq!(controller.view(), SidebarView::ButtonMenu);
        assert_eq!(
            *host.errors.lock().unwrap(),
            vec![
                "API Management is not available".to_string(),
                "API Request is not available".to_string(),
            ]
        );
    }

    struct FailingViews;

    #[async_trait]
    impl RequestViewOpener for FailingViews {
        async fn open_request_view(&self) -> HostResult<()> {
            Err(HostError::RequestView("apiRequest/index.html missing".to_string()))
        }
    }

    #[tokio::test]
    async fn test_failing_request_view_still_shows_history() {
        let host = Arc::new(RecordingHost::default());
        let webview = Arc::new(RecordingWebview::default());
        let mut controller =
            SidebarController::new(host.clone(), Arc::new(MapResources::default()))
                .with_request_views(Arc::new(FailingViews));
        controller.resolve_view(webview.clone());
        controller.record_endpoint(EndpointHistoryEntry::new("POST", "/orders", "today"));

        controller
            .handle_message(InboundMessage::new("openApiManagement", "apiManagement"))
            .await;

        assert_eq!(controller.view(), SidebarView::HistoryList);
        assert_eq!(webview.count(), 2);
        assert!(webview.last().contains("<li class=\"api-endpoint post\">"));
        assert_eq!(host.errors.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_message_is_ignored() {
        let mut f = fixture();
        f.controller.handle_message(InboundMessage::new("selfDestruct", "now")).await;

        assert_eq!(f.controller.view(), SidebarView::ButtonMenu);
        assert!(f.host.infos.lock().unwrap().is_empty());
        assert!(f.host.errors.lock().unwrap().is_empty());
        assert_eq!(f.webview.count(), 1);
    }

    #[tokio::test]
    async fn test_each_render_gets_its_own_nonce() {
        let f = fixture();
        f.controller.refresh();

        let renders = f.webview.renders.lock().unwrap();
        let (policy_a, script_a) = nonces(&renders[0]);
        let (policy_b, script_b) = nonces(&renders[1]);

        assert_eq!(policy_a, script_a);
        assert_eq!(policy_b, script_b);
        assert_ne!(policy_a, policy_b);
    }

    #[tokio::test]
    async fn test_refresh_without_webview_is_noop() {
        let host = Arc::new(RecordingHost::default());
        let mut controller = SidebarController::new(host, Arc::new(MapResources::default()));
        controller.record_endpoint(EndpointHistoryEntry::new("GET", "/a", "now"));
        controller.refresh();

        controller.clear_history();
        assert!(controller.history().is_empty());
    }

    #[tokio::test]
    async fn test_revive_attaches_without_render() {
        let host = Arc::new(RecordingHost::default());
        let webview = Arc::new(RecordingWebview::default());
        let mut controller = SidebarController::new(host, Arc::new(MapResources::default()));

        controller.revive(webview.clone());
        assert_eq!(webview.count(), 0);

        controller.refresh();
        assert_eq!(webview.count(), 1);
    }
}
