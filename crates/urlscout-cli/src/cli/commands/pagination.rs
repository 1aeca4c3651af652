//! `urlscout pagination` – list archive page URLs.

use anyhow::Result;
use urlscout_core::config::SiteConfig;
use urlscout_core::content::{collect_content_types, StaticContentStore};
use urlscout_core::discovery;

pub fn run_pagination(cfg: &SiteConfig) -> Result<()> {
    let store = StaticContentStore::new(cfg.content_types.clone());
    let types = collect_content_types(&store);
    let archive = cfg.posts_archive.clone();
    let urls = discovery::generate(cfg.site_url(), &types, &cfg.pagination(), || {
        archive.clone()
    })?;
    for url in urls {
        println!("{url}");
    }
    Ok(())
}
