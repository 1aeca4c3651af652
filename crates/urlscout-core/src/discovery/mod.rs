//! URL discovery: pagination archives and static files, normalized into
//! site-relative paths.
//!
//! The two generators run independently; their outputs are normalized but
//! never merged or deduplicated here.

mod files;
mod normalize;
mod pagination;

pub use files::{is_crawlable, map_directory, CrawlFilter};
pub use normalize::{normalize, normalize_url};
pub use pagination::{generate, PaginationSettings};

use crate::config::SiteConfig;
use crate::content::{collect_content_types, ContentStore};
use crate::error::DiscoveryError;
use serde::Serialize;

/// Output of one discovery run.
///
/// Each normalized list is aligned with its raw counterpart; `None` marks a
/// candidate that normalized to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Discovery {
    pub pagination_candidates: Vec<String>,
    pub file_candidates: Vec<String>,
    pub pagination: Vec<Option<String>>,
    pub files: Vec<Option<String>>,
}

impl Discovery {
    /// Present normalized URLs, pagination first, duplicates kept.
    pub fn urls(&self) -> impl Iterator<Item = &str> + '_ {
        self.pagination
            .iter()
            .chain(self.files.iter())
            .filter_map(|u| u.as_deref())
    }
}

/// Runs both generators for the configured site and normalizes the results.
pub fn discover(cfg: &SiteConfig, store: &dyn ContentStore) -> Result<Discovery, DiscoveryError> {
    cfg.validate()?;

    let content_types = collect_content_types(store);
    let archive = cfg.posts_archive.clone();
    let pagination_candidates = generate(
        cfg.site_url(),
        &content_types,
        &cfg.pagination(),
        || archive.clone(),
    )?;
    tracing::debug!("{} pagination candidates", pagination_candidates.len());

    let file_candidates = map_directory(cfg.scan_dir(), &cfg.site_path, &cfg.crawl_filter());
    tracing::debug!(
        "{} file candidates under {}",
        file_candidates.len(),
        cfg.scan_dir().display()
    );

    let home = Some(cfg.home_url.as_str());
    let pagination = normalize(&pagination_candidates, home)?;
    let files = normalize(&file_candidates, home)?;

    let discovery = Discovery {
        pagination_candidates,
        file_candidates,
        pagination,
        files,
    };
    tracing::info!("discovered {} urls", discovery.urls().count());
    Ok(discovery)
}
