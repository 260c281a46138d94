//! Execute Request Use Case
//!
//! Sends one request through the `HttpClient` port and pairs it with the
//! normalized response. A single attempt is made; transport errors are
//! logged and returned unchanged.

use std::sync::Arc;

use reqpanel_domain::{DomainError, ExchangeRequest, Headers, HttpExchange, RequestPayload};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::ports::{HttpClient, HttpClientError};

/// Result type for request execution.
pub type ExecuteResult = Result<HttpExchange, ExecuteRequestError>;

/// Error type for the execute request use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteRequestError {
    /// The request failed validation and was not sent.
    #[error("{0}")]
    Invalid(#[from] DomainError),

    /// The transport failed.
    #[error("{0}")]
    Network(#[from] HttpClientError),
}

/// Use case for executing HTTP requests.
///
/// # Example
///
/// ```ignore
/// let client = ReqwestHttpClient::new()?;
/// let use_case = ExecuteRequest::new(Arc::new(client));
///
/// let exchange = use_case
///     .execute(ExchangeRequest::get("https://api.example.com/users"))
///     .await?;
/// ```
pub struct ExecuteRequest<C: HttpClient> {
    client: Arc<C>,
}

impl<C: HttpClient> ExecuteRequest<C> {
    /// Creates a new `ExecuteRequest` use case with the given HTTP client.
    pub const fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Executes a request built from its parts.
    ///
    /// # Errors
    ///
    /// See [`ExecuteRequest::execute`].
    pub async fn send(
        &self,
        url: impl Into<String>,
        method: impl Into<String>,
        headers: Headers,
        body: Option<RequestPayload>,
    ) -> ExecuteResult {
        let request = ExchangeRequest {
            method: method.into(),
            url: url.into(),
            headers,
            body,
        };
        self.execute(request).await
    }

    /// Executes the request and returns the completed exchange.
    ///
    /// # Errors
    ///
    /// Returns `ExecuteRequestError::Invalid` for a blank URL or malformed
    /// form, without touching the network, and `ExecuteRequestError::Network`
    /// when the transport fails.
    pub async fn execute(&self, request: ExchangeRequest) -> ExecuteResult {
        request.validate()?;

        info!(method = %request.method, url = %request.url, "sending request");

        match self.client.execute(&request).await {
            Ok(response) => {
                debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "response received"
                );
                Ok(HttpExchange::new(request, response))
            }
            Err(e) => {
                error!(method = %request.method, url = %request.url, error = %e, "error sending request");
                Err(e.into())
            }
        }
    }
}
