//! Shapes of the traffic handed over by the capturing server.

use http::{HeaderMap, HeaderName, HeaderValue};

use crate::canon::header_value;

/// A request as captured by the proxy, before canonicalization.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    pub method: String,
    /// Path-only (`/api/v1/users?limit=2`) or absolute URL.
    pub url: String,
    pub headers: HeaderMap,
    /// JSON payload as sent by the client; key order is not significant.
    pub data: Option<String>,
    /// Raw body text, recorded as-is.
    pub body: Option<String>,
}

impl RawRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Appends a header; fails if the name or value is not valid HTTP.
    pub fn with_header(mut self, name: &str, value: &str) -> http::Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Read access to the response that answered a captured request.
pub trait CapturedResponse {
    fn status_code(&self) -> u16;
    fn status_message(&self) -> &str;
    /// Header value by case-insensitive name; `None` when absent.
    fn header(&self, name: &str) -> Option<String>;
}

/// Plain captured response.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderMap,
}

impl RawResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: HeaderMap::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> http::Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.append(name, value);
        Ok(self)
    }
}

impl CapturedResponse for RawResponse {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn status_message(&self) -> &str {
        &self.status_text
    }

    fn header(&self, name: &str) -> Option<String> {
        header_value(&self.headers, name)
    }
}

/// Responses produced by an `http`-based server can be recorded directly.
/// The status message is the canonical reason phrase.
impl<B> CapturedResponse for http::Response<B> {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    fn status_message(&self) -> &str {
        self.status().canonical_reason().unwrap_or("")
    }

    fn header(&self, name: &str) -> Option<String> {
        header_value(self.headers(), name)
    }
}
