//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer
//! or by the embedding host.

mod clock;
mod host;
mod http_client;
mod request_view;

pub use clock::Clock;
pub use host::{HostUi, PanelSpec, ResourceLoader, WebviewHandle};
pub use http_client::{HttpClient, HttpClientError};
pub use request_view::RequestViewOpener;
