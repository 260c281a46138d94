//! HTTP exchange types
//!
//! An exchange is one request sent through the executor together with the
//! normalized response the transport produced for it.

mod form;
mod request;
mod response;

use std::collections::BTreeMap;

pub use form::{FormField, FormPayload};
pub use request::{CONTENT_TYPE_KEY, ExchangeRequest, RequestPayload};
pub use response::{ExchangeResponse, HttpExchange};

/// Header map keyed by header name.
///
/// Keys are kept exactly as supplied; no case folding is applied.
pub type Headers = BTreeMap<String, String>;
