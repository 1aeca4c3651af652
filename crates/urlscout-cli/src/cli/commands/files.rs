//! `urlscout files [dir]` – list static file URLs.

use anyhow::Result;
use std::path::Path;
use urlscout_core::config::SiteConfig;
use urlscout_core::discovery;

pub fn run_files(cfg: &SiteConfig, dir: Option<&Path>) -> Result<()> {
    let root = dir.unwrap_or_else(|| cfg.scan_dir());
    let urls = discovery::map_directory(root, &cfg.site_path, &cfg.crawl_filter());
    if urls.is_empty() {
        tracing::info!("no crawlable files under {}", root.display());
    }
    for url in urls {
        println!("{url}");
    }
    Ok(())
}
