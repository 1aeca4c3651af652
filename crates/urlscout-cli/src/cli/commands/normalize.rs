//! `urlscout normalize <url>...` – normalize ad-hoc URLs.

use anyhow::Result;
use urlscout_core::discovery;

/// `home` comes from `--home` or, failing that, the config's `home_url`.
pub fn run_normalize(home: &str, urls: &[String]) -> Result<()> {
    for url in discovery::normalize(urls, Some(home))? {
        println!("{}", url.as_deref().unwrap_or("-"));
    }
    Ok(())
}
