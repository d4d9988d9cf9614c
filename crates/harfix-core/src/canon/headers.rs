//! Header redaction policy.
//!
//! Only the headers named here survive into a fixture. Everything else,
//! credentials included, is dropped before an entry is built.

use http::HeaderMap;

/// Request headers kept in recorded entries, in output order.
pub const ALLOWED_REQUEST_HEADERS: &[&str] = &["accept", "content-type"];

/// Response headers kept in recorded entries, in output order.
pub const ALLOWED_RESPONSE_HEADERS: &[&str] = &["content-type", "link"];

/// Case-insensitive lookup. Repeated headers are joined with `", "`.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
