//! `harfix init <path>` – create an empty scenario file.

use anyhow::Result;
use harfix_core::config::HarfixConfig;
use harfix_core::har;
use std::path::Path;

pub fn run_init(cfg: &HarfixConfig, path: &Path) -> Result<()> {
    if path.exists() {
        println!("Scenario already exists: {}", path.display());
        return Ok(());
    }
    let doc = har::read_har_file(path, &cfg.creator())?;
    har::write_har_file(path, &doc)?;
    println!(
        "Created scenario {} at {}",
        har::scenario_name(path),
        path.display()
    );
    Ok(())
}
