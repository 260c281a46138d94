//! HTTP Client port

use std::future::Future;

use reqpanel_domain::{ExchangeRequest, ExchangeResponse};
use thiserror::Error;

/// Transport-level failure. Surfaced to callers unchanged; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpClientError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The server refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// TLS negotiation or certificate validation failed.
    #[error("TLS error: {0}")]
    Tls(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (max {max})")]
    TooManyRedirects {
        /// Configured limit.
        max: usize,
    },

    /// The request could not be built (bad URL, method or header).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request body could not be prepared.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the application layer to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Sends the request once and returns the normalized response.
    ///
    /// Implementations send `request.transport_headers()`, not the raw
    /// header map, so multipart bodies get a transport-computed boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or other HTTP-related problems.
    fn execute(
        &self,
        request: &ExchangeRequest,
    ) -> impl Future<Output = Result<ExchangeResponse, HttpClientError>> + Send;
}
