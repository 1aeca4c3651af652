//! `urlscout discover` – full pipeline.

use anyhow::Result;
use urlscout_core::config::SiteConfig;
use urlscout_core::content::StaticContentStore;
use urlscout_core::discovery;

pub fn run_discover(cfg: &SiteConfig, json: bool) -> Result<()> {
    let store = StaticContentStore::new(cfg.content_types.clone());
    let found = discovery::discover(cfg, &store)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
    } else {
        for url in found.urls() {
            println!("{url}");
        }
    }
    Ok(())
}
