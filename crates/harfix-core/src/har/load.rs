//! Reading and writing HAR fixture files.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HarfixError, Result};

use super::model::{HarCreator, HarDocument, HarEntry};

/// File suffix of scenario fixtures.
pub const HAR_EXTENSION: &str = "har";

/// Returns the HAR document at `path`, or a fresh empty document attributed to
/// `creator` if no file exists yet (recording a new scenario).
///
/// Fails only when the file exists but cannot be read or parsed.
pub fn read_har_file(path: &Path, creator: &HarCreator) -> Result<HarDocument> {
    if !path.exists() {
        tracing::debug!("no HAR at {}, starting empty document", path.display());
        return Ok(HarDocument::new(creator.clone()));
    }
    read_document(path)
}

/// Loads a recorded scenario for replay: `(scenario name, entries)`.
///
/// Unlike [`read_har_file`] a missing file is an error ([`HarfixError::NotFound`]);
/// replay needs an existing fixture.
pub fn load_har_from_file(path: &Path) -> Result<(String, Vec<HarEntry>)> {
    let name = scenario_name(path);
    let doc = read_document(path)?;
    tracing::debug!(
        "loaded scenario {} ({} entries) from {}",
        name,
        doc.log.entries.len(),
        path.display()
    );
    Ok((name, doc.log.entries))
}

/// Writes `doc` as pretty-printed JSON, creating parent directories as needed.
pub fn write_har_file(path: &Path, doc: &HarDocument) -> Result<()> {
    let io_err = |source| HarfixError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut json = serde_json::to_string_pretty(doc).map_err(HarfixError::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(io_err)?;
    tracing::info!(
        "wrote {} entries to {}",
        doc.log.entries.len(),
        path.display()
    );
    Ok(())
}

/// File name with a trailing `.har` removed (`/tmp/my-scenario.har` → `my-scenario`).
/// Other extensions are kept.
pub fn scenario_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(".har") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name,
    }
}

fn read_document(path: &Path) -> Result<HarDocument> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            HarfixError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            HarfixError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_slice(&bytes).map_err(|source| HarfixError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
