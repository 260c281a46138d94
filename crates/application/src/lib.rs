//! Reqpanel Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces to the host, the transport and the clock)
//! - The request execution use case
//! - The sidebar controller and its HTML renderer

pub mod error;
pub mod execute_request;
pub mod ports;
pub mod sidebar;

pub use error::{HostError, HostResult};
pub use execute_request::{ExecuteRequest, ExecuteRequestError, ExecuteResult};
pub use ports::{
    Clock, HostUi, HttpClient, HttpClientError, PanelSpec, RequestViewOpener, ResourceLoader,
    WebviewHandle,
};
pub use sidebar::{Nonce, RenderContext, SidebarController, render_sidebar};
