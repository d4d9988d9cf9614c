//! `harfix scenarios <dir>` – list recorded scenarios.

use anyhow::Result;
use harfix_core::har::ScenarioSet;
use std::path::Path;

pub fn run_scenarios(dir: &Path) -> Result<()> {
    let set = ScenarioSet::load_dir(dir)?;
    if set.is_empty() {
        println!("No scenarios in {}.", dir.display());
    } else {
        println!("{:<8} {}", "ENTRIES", "SCENARIO");
        for (name, entries) in set.iter() {
            println!("{:<8} {}", entries.len(), name);
        }
    }
    Ok(())
}
