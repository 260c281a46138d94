//! Reqpanel Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod http;
pub mod persistence;
pub mod serialization;

pub use adapters::{FileResourceLoader, ReqwestHttpClient, SystemClock};
pub use http::{BodyBuildError, build_multipart_form};
pub use persistence::{SettingsError, SettingsRepository};
pub use serialization::{
    SerializationError, from_json, from_json_bytes, to_json_stable, to_json_stable_bytes,
};
