//! CLI for the urlscout URL discovery engine.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use urlscout_core::config::{self, SiteConfig};

use commands::{run_discover, run_files, run_normalize, run_pagination};

/// Top-level CLI for urlscout.
#[derive(Debug, Parser)]
#[command(name = "urlscout")]
#[command(about = "urlscout: discover every URL a content site exposes", long_about = None)]
pub struct Cli {
    /// Site config file (default: ~/.config/urlscout/config.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print paginated archive URLs for every published content type.
    Pagination,

    /// Print URLs of static files under a directory.
    Files {
        /// Directory to scan (default: configured scan_dir or site_path).
        dir: Option<PathBuf>,
    },

    /// Run both generators and print the normalized URLs.
    Discover {
        /// Print the full result as JSON instead of one URL per line.
        #[arg(long)]
        json: bool,
    },

    /// Normalize the given URLs; `-` marks a URL that normalizes to nothing.
    Normalize {
        /// Home URL to strip (default: configured home_url).
        #[arg(long)]
        home: Option<String>,

        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig> {
    match path {
        Some(p) => config::load_from(p).with_context(|| format!("load config {}", p.display())),
        None => config::load_or_init(),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        dispatch(Cli::parse())
    }
}

/// Runs the parsed command. The site config is read only by commands that
/// need it; `normalize --home` does not.
fn dispatch(cli: Cli) -> Result<()> {
    if let CliCommand::Normalize {
        home: Some(home),
        urls,
    } = &cli.command
    {
        return run_normalize(home, urls);
    }

    let cfg = load_config(cli.config.as_ref())?;
    tracing::debug!("loaded config: {:?}", cfg);

    match cli.command {
        CliCommand::Pagination => run_pagination(&cfg)?,
        CliCommand::Files { dir } => run_files(&cfg, dir.as_deref())?,
        CliCommand::Discover { json } => run_discover(&cfg, json)?,
        CliCommand::Normalize { urls, .. } => run_normalize(&cfg.home_url, &urls)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
