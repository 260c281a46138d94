//! Reqpanel Domain - Core types
//!
//! This crate defines the domain model for the reqpanel API sidebar:
//! HTTP exchanges, endpoint history, panel targets and sidebar state.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod event;
pub mod exchange;
pub mod history;
pub mod panel;
pub mod settings;
pub mod sidebar;

pub use error::{DomainError, DomainResult};
pub use event::{InboundMessage, SidebarEvent};
pub use exchange::{
    ExchangeRequest, ExchangeResponse, FormField, FormPayload, Headers, HttpExchange,
    RequestPayload,
};
pub use history::{ApiHistory, EndpointHistoryEntry};
pub use panel::PanelTarget;
pub use settings::{ExtensionSettings, HttpSettings};
pub use sidebar::{SidebarState, SidebarView};
