//! Request canonicalization (live and stored).

use url::Url;

use crate::canon::{canonical_json, header_value, Canonicalizer};
use crate::capture::RawRequest;
use crate::error::Result;
use crate::har::{HarHeader, HarRequest};

/// A captured request after header redaction and canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    /// Method as captured (not yet uppercased).
    pub method: String,
    /// Absolute URL with sorted query.
    pub url: Url,
    /// Exactly the allow-listed headers, in allow-list order.
    pub headers: Vec<HarHeader>,
    /// Canonical JSON of the request data, or empty.
    pub data: String,
    pub body: String,
}

impl Canonicalizer {
    /// Redacts and canonicalizes a captured request.
    ///
    /// Headers not on the request allow-list are dropped; the allow-listed ones
    /// are always present, with `None` when the client did not send them.
    /// Fails if `data` is present but not valid JSON.
    pub fn normalize_request(&self, req: RawRequest) -> Result<NormalizedRequest> {
        let headers = self
            .request_headers()
            .iter()
            .map(|name| HarHeader {
                name: name.clone(),
                value: header_value(&req.headers, name),
            })
            .collect();

        let url = self.canonical_url(&req.url)?;

        let data = match req.data.as_deref() {
            Some(data) if !data.is_empty() => canonical_json(data)?,
            _ => String::new(),
        };

        Ok(NormalizedRequest {
            method: req.method,
            url,
            headers,
            data,
            body: req.body.unwrap_or_default(),
        })
    }

    /// Canonicalizes a request read back from a fixture so it compares equal
    /// to a freshly captured one: missing post text becomes `""` and the URL
    /// query is sorted.
    pub fn normalize_har_request(&self, mut request: HarRequest) -> Result<HarRequest> {
        request.post_data.text.get_or_insert_with(String::new);
        request.url = self.normalize_query_string(&request.url)?;
        Ok(request)
    }
}
