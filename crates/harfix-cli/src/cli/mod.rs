//! CLI for managing HAR test fixtures.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use harfix_core::config;
use harfix_core::Canonicalizer;
use std::path::Path;

use commands::{
    run_completions, run_init, run_man, run_normalize, run_normalize_url, run_scenarios,
};

/// Top-level CLI for harfix.
#[derive(Debug, Parser)]
#[command(name = "harfix")]
#[command(about = "harfix: deterministic, secret-free HAR fixtures for mock API servers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the canonical form of a URL (path-only URLs resolve against the proxy target).
    NormalizeUrl {
        /// Absolute URL or path starting with `/`.
        url: String,
    },

    /// Re-normalize every recorded request in a HAR file.
    Normalize {
        /// Path to the HAR file.
        path: String,

        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        write: bool,
    },

    /// Create an empty scenario file if it does not exist yet.
    Init {
        /// Path to the HAR file, e.g. `fixtures/list-users.har`.
        path: String,
    },

    /// List the scenarios (`*.har` files) in a fixture directory.
    Scenarios {
        /// Fixture directory.
        dir: String,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::NormalizeUrl { url } => {
                let canon = Canonicalizer::from_config(&cfg)?;
                run_normalize_url(&canon, &url)?;
            }
            CliCommand::Normalize { path, write } => {
                let canon = Canonicalizer::from_config(&cfg)?;
                run_normalize(&canon, &cfg, Path::new(&path), write)?;
            }
            CliCommand::Init { path } => run_init(&cfg, Path::new(&path))?,
            CliCommand::Scenarios { dir } => run_scenarios(Path::new(&dir))?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
