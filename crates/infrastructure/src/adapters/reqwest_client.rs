//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It sends each request once and folds the response into an
//! `ExchangeResponse`.

use std::error::Error as _;
use std::time::Duration;

use reqpanel_application::ports::{HttpClient, HttpClientError};
use reqpanel_domain::{ExchangeRequest, ExchangeResponse, Headers, HttpSettings};
use reqwest::header::HeaderMap;
use reqwest::{Client, Method};

use crate::http::build_multipart_form;

/// Methods the fetch standard normalizes to uppercase.
const NORMALIZED_METHODS: [&str; 6] = ["DELETE", "GET", "HEAD", "OPTIONS", "POST", "PUT"];

/// HTTP client implementation using reqwest.
pub struct ReqwestHttpClient {
    client: Client,
    timeout_ms: Option<u64>,
    max_redirects: usize,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        Self::from_settings(&HttpSettings::default())
    }

    /// Creates a client from HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn from_settings(settings: &HttpSettings) -> Result<Self, HttpClientError> {
        let mut builder = Client::builder()
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(settings.max_redirects));
        if let Some(timeout_ms) = settings.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }

        let client = builder
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self {
            client,
            timeout_ms: settings.timeout_ms,
            max_redirects: settings.max_redirects,
        })
    }

    /// Parses the method, uppercasing the verbs fetch normalizes.
    fn to_reqwest_method(method: &str) -> Result<Method, HttpClientError> {
        let normalized = NORMALIZED_METHODS
            .iter()
            .find(|verb| verb.eq_ignore_ascii_case(method))
            .map_or(method, |verb| *verb);

        Method::from_bytes(normalized.as_bytes())
            .map_err(|e| HttpClientError::InvalidRequest(format!("{e}: {method}")))
    }

    /// Builds the transport request: method, transport headers, then body.
    async fn build_request(
        &self,
        request: &ExchangeRequest,
    ) -> Result<reqwest::Request, HttpClientError> {
        let method = Self::to_reqwest_method(&request.method)?;
        let mut builder = self.client.request(method, &request.url);

        for (name, value) in request.transport_headers() {
            builder = builder.header(name, value);
        }

        if let Some(form) = request.form_body() {
            let form = build_multipart_form(form)
                .await
                .map_err(|e| HttpClientError::InvalidBody(e.to_string()))?;
            builder = builder.multipart(form);
        } else if let Some(text) = request.text_body() {
            builder = builder.body(text.to_string());
        }

        builder.build().map_err(|e| self.map_error(&e))
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(&self, error: &reqwest::Error) -> HttpClientError {
        if error.is_builder() {
            return HttpClientError::InvalidRequest(error_chain(error));
        }

        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: self.timeout_ms.unwrap_or_default(),
            };
        }

        if error.is_redirect() {
            return HttpClientError::TooManyRedirects {
                max: self.max_redirects,
            };
        }

        let message = error_chain(error);
        let lowered = message.to_lowercase();
        let host = error
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("unknown")
            .to_string();

        if error.is_connect() {
            if lowered.contains("dns") || lowered.contains("resolve") {
                return HttpClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host,
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            if lowered.contains("certificate") || lowered.contains("tls") {
                return HttpClientError::Tls(message);
            }
            return HttpClientError::ConnectionFailed(message);
        }

        HttpClientError::Other(message)
    }
}

/// Joins an error with all of its sources.
fn error_chain(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Rebuilds the header map. Repeated headers are joined with `", "`.
fn collect_headers(headers: &HeaderMap) -> Headers {
    let mut collected = Headers::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    collected
}

impl HttpClient for ReqwestHttpClient {
    async fn execute(&self, request: &ExchangeRequest) -> Result<ExchangeResponse, HttpClientError> {
        let built = self.build_request(request).await?;

        let response = self
            .client
            .execute(built)
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status();
        let headers = collect_headers(response.headers());

        let body = response.bytes().await.map_err(|e| self.map_error(&e))?;

        Ok(ExchangeResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}
