//! HAR 1.2 subset written to and read from fixture files.
//!
//! Cookies, timings and cache data are not modeled; any field not listed here
//! is kept in `extra` so a loaded file is written back without losing data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HAR format version written into new documents.
pub const HAR_VERSION: f64 = 1.2;

/// Root HAR document (top-level `log` wrapper).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarDocument {
    pub log: HarLog,
}

impl HarDocument {
    /// Empty document attributed to `creator`.
    pub fn new(creator: HarCreator) -> Self {
        Self {
            log: HarLog {
                version: HarVersion::Number(HAR_VERSION),
                creator,
                entries: Vec::new(),
                extra: Map::new(),
            },
        }
    }

    pub fn entries(&self) -> &[HarEntry] {
        &self.log.entries
    }

    pub fn push_entry(&mut self, entry: HarEntry) {
        self.log.entries.push(entry);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub version: HarVersion,
    #[serde(default)]
    pub creator: HarCreator,
    #[serde(default)]
    pub entries: Vec<HarEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `log.version`: a number in files we write, a string in some browser exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HarVersion {
    Number(f64),
    Text(String),
}

impl Default for HarVersion {
    fn default() -> Self {
        HarVersion::Number(HAR_VERSION)
    }
}

/// `log.creator`; empty when a hand-written fixture leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarCreator {
    pub name: String,
    pub version: String,
}

/// One recorded request/response exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub query_string: Vec<HarQueryParam>,
    #[serde(default)]
    pub post_data: HarPostData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarResponse {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: HarContent,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Header pair. A request header that was not sent has no `value` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarHeader {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarQueryParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarPostData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
