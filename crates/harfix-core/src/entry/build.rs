//! HAR entry assembly.

use serde_json::Map;

use crate::canon::Canonicalizer;
use crate::capture::{CapturedResponse, RawRequest};
use crate::error::Result;
use crate::har::{HarContent, HarEntry, HarHeader, HarPostData, HarQueryParam, HarRequest, HarResponse};

impl Canonicalizer {
    /// Builds the fixture entry for one captured exchange.
    ///
    /// The request URL is rebased onto the proxy target so fixtures recorded
    /// against different upstreams replay identically. Response headers are
    /// limited to the response allow-list and omitted when empty.
    pub fn build_entry<R>(&self, response_body: &str, req: RawRequest, res: &R) -> Result<HarEntry>
    where
        R: CapturedResponse + ?Sized,
    {
        let normalized = self.normalize_request(req)?;
        let url = self.rebase(&normalized.url);

        let query_string = url
            .query_pairs()
            .map(|(name, value)| HarQueryParam {
                name: name.into_owned(),
                value: value.into_owned(),
            })
            .collect();

        let request = HarRequest {
            method: normalized.method.to_uppercase(),
            url: url.to_string(),
            headers: normalized.headers,
            query_string,
            post_data: HarPostData {
                text: Some(normalized.body),
                ..HarPostData::default()
            },
            extra: Map::new(),
        };

        let headers = self
            .response_headers()
            .iter()
            .filter_map(|name| {
                res.header(name)
                    .filter(|v| !v.is_empty())
                    .map(|value| HarHeader {
                        name: name.clone(),
                        value: Some(value),
                    })
            })
            .collect();

        let response = HarResponse {
            status: res.status_code(),
            status_text: res.status_message().to_string(),
            headers,
            content: HarContent {
                mime_type: res.header("content-type"),
                text: response_body.to_string(),
                extra: Map::new(),
            },
            extra: Map::new(),
        };

        tracing::debug!(
            "recorded {} {} -> {}",
            request.method,
            request.url,
            response.status
        );

        Ok(HarEntry {
            request,
            response,
            extra: Map::new(),
        })
    }
}
