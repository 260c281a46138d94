//! Normalized response and the completed exchange

use serde::{Deserialize, Serialize};

use super::{ExchangeRequest, Headers};

/// Response as normalized from the transport.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExchangeResponse {
    /// HTTP status code
    pub status: u16,
    /// Status text (e.g., "OK", "Not Found")
    pub status_text: String,
    /// Response headers as reported by the transport
    pub headers: Headers,
    /// Response body decoded as text
    pub body: String,
}

impl ExchangeResponse {
    /// Creates a response with no headers.
    #[must_use]
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Headers::new(),
            body: body.into(),
        }
    }
}

/// One request/response pair. Built per call and handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExchange {
    /// The request as supplied by the caller.
    pub request: ExchangeRequest,
    /// The normalized response.
    pub response: ExchangeResponse,
}

impl HttpExchange {
    /// Pairs a request with its response.
    #[must_use]
    pub const fn new(request: ExchangeRequest, response: ExchangeResponse) -> Self {
        Self { request, response }
    }

    /// Response status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }

    /// Response body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.response.body
    }
}
