//! `harfix normalize <path>` – canonicalize stored requests of a fixture.

use anyhow::{Context, Result};
use harfix_core::config::HarfixConfig;
use harfix_core::har::{self, HarDocument};
use harfix_core::Canonicalizer;
use std::path::Path;

pub fn run_normalize(
    canon: &Canonicalizer,
    cfg: &HarfixConfig,
    path: &Path,
    write: bool,
) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("HAR file not found: {}", path.display());
    }
    let doc = har::read_har_file(path, &cfg.creator())?;
    let doc = normalize_document(canon, doc)
        .with_context(|| format!("normalize {}", path.display()))?;

    if write {
        har::write_har_file(path, &doc)?;
        println!(
            "Normalized {} entries in {}",
            doc.entries().len(),
            path.display()
        );
    } else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    Ok(())
}

fn normalize_document(canon: &Canonicalizer, mut doc: HarDocument) -> Result<HarDocument> {
    let entries = std::mem::take(&mut doc.log.entries);
    doc.log.entries = entries
        .into_iter()
        .enumerate()
        .map(|(i, mut entry)| {
            entry.request = canon
                .normalize_har_request(entry.request)
                .with_context(|| format!("entry {i}"))?;
            Ok(entry)
        })
        .collect::<Result<_>>()?;
    Ok(doc)
}
