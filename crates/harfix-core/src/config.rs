use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::canon::{ALLOWED_REQUEST_HEADERS, ALLOWED_RESPONSE_HEADERS, DEFAULT_PROXY_TARGET};
use crate::har::HarCreator;

/// Creator name written into new HAR documents.
pub const DEFAULT_CREATOR_NAME: &str = "okta-sdk-test-server";

/// Global configuration loaded from `~/.config/harfix/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarfixConfig {
    /// Origin that recorded requests are attributed to; path-only URLs resolve against it.
    pub proxy_target: String,
    /// `log.creator.name` of newly created fixtures.
    #[serde(default = "default_creator_name")]
    pub creator_name: String,
    /// Request headers kept in fixtures. Everything else is dropped.
    #[serde(default = "default_request_headers")]
    pub allowed_request_headers: Vec<String>,
    /// Response headers kept in fixtures (when non-empty).
    #[serde(default = "default_response_headers")]
    pub allowed_response_headers: Vec<String>,
}

impl Default for HarfixConfig {
    fn default() -> Self {
        Self {
            proxy_target: DEFAULT_PROXY_TARGET.to_string(),
            creator_name: default_creator_name(),
            allowed_request_headers: default_request_headers(),
            allowed_response_headers: default_response_headers(),
        }
    }
}

impl HarfixConfig {
    /// Creator stamped on new documents: configured name, this crate's version.
    pub fn creator(&self) -> HarCreator {
        HarCreator {
            name: self.creator_name.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

fn default_creator_name() -> String {
    DEFAULT_CREATOR_NAME.to_string()
}

fn default_request_headers() -> Vec<String> {
    ALLOWED_REQUEST_HEADERS.iter().map(|s| s.to_string()).collect()
}

fn default_response_headers() -> Vec<String> {
    ALLOWED_RESPONSE_HEADERS.iter().map(|s| s.to_string()).collect()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harfix")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarfixConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarfixConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarfixConfig = toml::from_str(&data)?;
    Ok(cfg)
}
