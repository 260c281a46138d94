//! Reqpanel - stdio host entry point
//!
//! Reads JSON lines from stdin. `{"type":"sendRequest","request":{...}}`
//! executes a request; every other line is a sidebar message. Effects are
//! written to stdout as JSON lines, logs go to stderr.

mod host;

use std::sync::Arc;

use reqpanel_application::{Clock, ExecuteRequest, HostUi, HttpClient, SidebarController};
use reqpanel_domain::{EndpointHistoryEntry, ExchangeRequest, InboundMessage};
use reqpanel_infrastructure::{
    FileResourceLoader, ReqwestHttpClient, SettingsRepository, SystemClock,
};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::host::{OutboundEvent, PanelRequestViews, StdioHost};

const SEND_REQUEST: &str = "sendRequest";

#[derive(Debug, Deserialize)]
struct SendRequestCommand {
    request: ExchangeRequest,
}

/// One decoded stdin line.
#[derive(Debug)]
enum HostCommand {
    SendRequest(ExchangeRequest),
    Sidebar(InboundMessage),
}

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("malformed host message: {0}")]
    Malformed(serde_json::Error),

    #[error("invalid sendRequest command: {0}")]
    InvalidRequest(serde_json::Error),
}

/// Decodes a line by its `type` field first, so a broken `sendRequest`
/// is reported instead of being read as a sidebar message.
fn parse_command(line: &str) -> Result<HostCommand, CommandError> {
    let value: Value = serde_json::from_str(line).map_err(CommandError::Malformed)?;

    if value.get("type").and_then(Value::as_str) == Some(SEND_REQUEST) {
        let command: SendRequestCommand =
            serde_json::from_value(value).map_err(CommandError::InvalidRequest)?;
        return Ok(HostCommand::SendRequest(command.request));
    }

    serde_json::from_value(value)
        .map(HostCommand::Sidebar)
        .map_err(CommandError::Malformed)
}

/// Everything one stdin line can touch.
struct Session<C: HttpClient, K: Clock> {
    host: Arc<StdioHost>,
    controller: SidebarController,
    executor: ExecuteRequest<C>,
    clock: K,
}

impl<C: HttpClient, K: Clock> Session<C, K> {
    async fn handle_line(&mut self, line: &str) {
        match parse_command(line) {
            Ok(HostCommand::SendRequest(request)) => self.send_request(request).await,
            Ok(HostCommand::Sidebar(message)) => self.controller.handle_message(message).await,
            Err(e @ CommandError::InvalidRequest(_)) => {
                warn!(error = %e, "rejecting host command");
                self.host.show_error(&e.to_string());
            }
            Err(e) => warn!(error = %e, "ignoring malformed host message"),
        }
    }

    async fn send_request(&mut self, request: ExchangeRequest) {
        match self.executor.execute(request).await {
            Ok(exchange) => {
                self.host.emit(&OutboundEvent::Exchange {
                    exchange: &exchange,
                });
                let entry = EndpointHistoryEntry::from_exchange(&exchange, self.clock.now());
                self.controller.record_endpoint(entry);
                self.controller.refresh();
            }
            Err(e) => self.host.show_error(&e.to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let repository = std::env::args()
        .nth(1)
        .map_or_else(SettingsRepository::new, SettingsRepository::with_path);
    let settings = repository.load().await?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        resource_root = %settings.resource_root.display(),
        "Starting reqpanel v{}",
        env!("CARGO_PKG_VERSION")
    );

    let host = Arc::new(StdioHost::new(std::io::stdout(), settings.csp_source.clone()));
    let resources = Arc::new(FileResourceLoader::new(&settings.resource_root));
    let request_views = Arc::new(PanelRequestViews::new(host.clone(), resources.clone()));

    let mut controller = SidebarController::new(host.clone(), resources)
        .with_request_views(request_views)
        .with_assets(settings.script_uri.clone(), settings.style_uri.clone());
    controller.resolve_view(host.clone());

    let executor = ExecuteRequest::new(Arc::new(ReqwestHttpClient::from_settings(
        &settings.http,
    )?));
    let mut session = Session {
        host,
        controller,
        executor,
        clock: SystemClock::new(),
    };

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if !line.is_empty() {
            session.handle_line(line).await;
        }
    }

    info!("stdin closed, shutting down");
    Ok(())
}
