//! Outgoing request description

use serde::{Deserialize, Serialize};

use super::{FormPayload, Headers};
use crate::error::{DomainError, DomainResult};

/// Header key removed from multipart requests.
///
/// The match is exact: `Content-Type` or `CONTENT-TYPE` are left in place.
pub const CONTENT_TYPE_KEY: &str = "content-type";

/// Request body accepted by the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPayload {
    /// Raw text sent verbatim.
    Text(String),
    /// Multipart form; the transport computes the boundary.
    Multipart(FormPayload),
}

impl RequestPayload {
    /// Returns true for multipart payloads.
    #[must_use]
    pub const fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// One request to execute: method, target, headers and optional body.
///
/// The method is free text and is not checked against a fixed verb set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// HTTP method as text (e.g. "GET").
    pub method: String,
    /// Target URL.
    pub url: String,
    /// Request headers as supplied by the caller.
    #[serde(default)]
    pub headers: Headers,
    /// Optional body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestPayload>,
}

impl ExchangeRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Headers::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new("GET", url)
    }

    /// Adds a header, replacing an existing one with the identical key.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets a raw text body.
    #[must_use]
    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.body = Some(RequestPayload::Text(content.into()));
        self
    }

    /// Sets a multipart form body.
    #[must_use]
    pub fn with_form(mut self, form: FormPayload) -> Self {
        self.body = Some(RequestPayload::Multipart(form));
        self
    }

    /// Headers to hand to the transport.
    ///
    /// For multipart bodies the `content-type` key is dropped so the
    /// transport can set its own boundary.
    #[must_use]
    pub fn transport_headers(&self) -> Headers {
        let mut headers = self.headers.clone();
        if self.body.as_ref().is_some_and(RequestPayload::is_multipart) {
            headers.remove(CONTENT_TYPE_KEY);
        }
        headers
    }

    /// Text body to attach, if any. Empty text counts as no body.
    #[must_use]
    pub fn text_body(&self) -> Option<&str> {
        match &self.body {
            Some(RequestPayload::Text(content)) if !content.is_empty() => Some(content),
            _ => None,
        }
    }

    /// Multipart body to attach, if any.
    #[must_use]
    pub const fn form_body(&self) -> Option<&FormPayload> {
        match &self.body {
            Some(RequestPayload::Multipart(form)) => Some(form),
            _ => None,
        }
    }

    /// Validates the request before execution.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyUrl` for a blank URL. Form fields are not
    /// checked: unnamed fields are sent as given.
    pub fn validate(&self) -> DomainResult<()> {
        if self.url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }
        Ok(())
    }
}
