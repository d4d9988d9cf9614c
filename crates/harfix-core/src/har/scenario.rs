//! Scenario index for replay: every `<name>.har` in a fixture directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::canon::Canonicalizer;
use crate::error::{HarfixError, Result};

use super::load::{load_har_from_file, HAR_EXTENSION};
use super::model::{HarEntry, HarRequest};

/// Recorded entries keyed by scenario name.
#[derive(Debug, Clone, Default)]
pub struct ScenarioSet {
    scenarios: BTreeMap<String, Vec<HarEntry>>,
}

impl ScenarioSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every `*.har` file directly under `dir`. Other files are ignored;
    /// a fixture that fails to parse fails the whole load.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let io_err = |source| HarfixError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.is_file() && path.extension().is_some_and(|e| e == HAR_EXTENSION) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut set = Self::new();
        for path in paths {
            let (name, entries) = load_har_from_file(&path)?;
            set.insert(name, entries);
        }
        tracing::debug!("indexed {} scenarios from {}", set.len(), dir.display());
        Ok(set)
    }

    /// Adds or replaces a scenario.
    pub fn insert(&mut self, name: impl Into<String>, entries: Vec<HarEntry>) {
        self.scenarios.insert(name.into(), entries);
    }

    pub fn get(&self, name: &str) -> Option<&[HarEntry]> {
        self.scenarios.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HarEntry])> {
        self.scenarios
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// First entry of `scenario` whose request matches `request`, see
    /// [`find_matching_entry`]. `Ok(None)` for an unknown scenario.
    pub fn find_entry(
        &self,
        canon: &Canonicalizer,
        scenario: &str,
        request: &HarRequest,
    ) -> Result<Option<&HarEntry>> {
        match self.get(scenario) {
            Some(entries) => find_matching_entry(canon, entries, request),
            None => Ok(None),
        }
    }
}

/// Finds the first stored entry matching a live request.
///
/// Both sides go through [`Canonicalizer::normalize_har_request`] and are then
/// compared on method (case-insensitive), canonical URL and post body text.
pub fn find_matching_entry<'a>(
    canon: &Canonicalizer,
    entries: &'a [HarEntry],
    request: &HarRequest,
) -> Result<Option<&'a HarEntry>> {
    let wanted = canon.normalize_har_request(request.clone())?;
    for entry in entries {
        let stored = canon.normalize_har_request(entry.request.clone())?;
        if requests_match(&stored, &wanted) {
            return Ok(Some(entry));
        }
    }
    tracing::debug!("no recorded entry for {} {}", wanted.method, wanted.url);
    Ok(None)
}

fn requests_match(a: &HarRequest, b: &HarRequest) -> bool {
    a.method.eq_ignore_ascii_case(&b.method)
        && a.url == b.url
        && a.post_data.text == b.post_data.text
}
