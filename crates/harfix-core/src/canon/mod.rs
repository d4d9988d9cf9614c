//! Canonicalization of captured HTTP traffic.
//!
//! Two semantically equivalent requests must serialize to the same bytes:
//! query pairs are sorted by key, JSON bodies have their object keys sorted at
//! every level, and headers are reduced to an explicit allow-list. The
//! [`Canonicalizer`] carries the proxy target that path-only URLs are resolved
//! against, so different targets can be used side by side (e.g. in tests).

mod headers;
mod json;
mod query;

pub use headers::{header_value, ALLOWED_REQUEST_HEADERS, ALLOWED_RESPONSE_HEADERS};
pub use json::{canonical_json, sort_keys};
pub use query::sort_query_pairs;

use url::Url;

use crate::config::HarfixConfig;
use crate::error::{HarfixError, Result};

/// Proxy target used when no configuration is supplied.
pub const DEFAULT_PROXY_TARGET: &str = "https://test.example.com";

/// Normalizes URLs, bodies and headers against a fixed proxy target.
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    proxy_target: Url,
    request_headers: Vec<String>,
    response_headers: Vec<String>,
}

impl Canonicalizer {
    /// Builds a canonicalizer for `proxy_target` with the default allow-lists.
    pub fn new(proxy_target: &str) -> Result<Self> {
        let proxy_target = Url::parse(proxy_target).map_err(|source| HarfixError::InvalidUrl {
            url: proxy_target.to_string(),
            source,
        })?;
        Ok(Self {
            proxy_target,
            request_headers: lowercase_all(ALLOWED_REQUEST_HEADERS),
            response_headers: lowercase_all(ALLOWED_RESPONSE_HEADERS),
        })
    }

    /// Builds a canonicalizer from the loaded configuration (target and allow-lists).
    pub fn from_config(cfg: &HarfixConfig) -> Result<Self> {
        Ok(Self::new(&cfg.proxy_target)?
            .with_request_headers(&cfg.allowed_request_headers)
            .with_response_headers(&cfg.allowed_response_headers))
    }

    /// Replaces the request header allow-list. Order is preserved in the output.
    pub fn with_request_headers<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.request_headers = lowercase_all(names);
        self
    }

    /// Replaces the response header allow-list. Order is preserved in the output.
    pub fn with_response_headers<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.response_headers = lowercase_all(names);
        self
    }

    pub fn proxy_target(&self) -> &Url {
        &self.proxy_target
    }

    pub fn request_headers(&self) -> &[String] {
        &self.request_headers
    }

    pub fn response_headers(&self) -> &[String] {
        &self.response_headers
    }

    /// Resolves `url` (absolute, or path-only starting with `/`) and sorts its query.
    pub fn canonical_url(&self, url: &str) -> Result<Url> {
        let parsed = if url.starts_with('/') {
            self.proxy_target.join(url)
        } else {
            Url::parse(url)
        };
        let mut parsed = parsed.map_err(|source| HarfixError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        sort_query_pairs(&mut parsed);
        Ok(parsed)
    }

    /// String form of [`Canonicalizer::canonical_url`].
    ///
    /// `/x?b=2&a=1` and `/x?a=1&b=2` both become `https://test.example.com/x?a=1&b=2`
    /// with the default target.
    pub fn normalize_query_string(&self, url: &str) -> Result<String> {
        Ok(self.canonical_url(url)?.into())
    }

    /// Moves the path and query of `url` onto the proxy target origin.
    pub fn rebase(&self, url: &Url) -> Url {
        let mut rebased = self.proxy_target.clone();
        rebased.set_path(url.path());
        rebased.set_query(url.query());
        rebased
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self {
            proxy_target: Url::parse(DEFAULT_PROXY_TARGET).expect("default proxy target is valid"),
            request_headers: lowercase_all(ALLOWED_REQUEST_HEADERS),
            response_headers: lowercase_all(ALLOWED_RESPONSE_HEADERS),
        }
    }
}

fn lowercase_all<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|n| n.as_ref().to_ascii_lowercase()).collect()
}
