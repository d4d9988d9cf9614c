//! `harfix normalize-url <url>` – print the canonical URL.

use anyhow::Result;
use harfix_core::Canonicalizer;

pub fn run_normalize_url(canon: &Canonicalizer, url: &str) -> Result<()> {
    println!("{}", canon.normalize_query_string(url)?);
    Ok(())
}
