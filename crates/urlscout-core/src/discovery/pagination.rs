//! Paginated archive URLs implied by published item counts.

use crate::content::{ContentRole, ContentTypeInfo};
use crate::error::DiscoveryError;

/// Site-wide pagination settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSettings {
    /// Path segment placed before the page number, e.g. `page`.
    pub base_segment: String,
    /// Items per archive page; must be positive.
    pub default_page_size: i64,
}

impl PaginationSettings {
    pub fn new(base_segment: impl Into<String>, default_page_size: i64) -> Self {
        Self {
            base_segment: base_segment.into(),
            default_page_size,
        }
    }

    fn page_size(&self) -> Result<u64, DiscoveryError> {
        u64::try_from(self.default_page_size)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                DiscoveryError::invalid(
                    "pagination.per_page",
                    format!("must be positive, got {}", self.default_page_size),
                )
            })
    }
}

/// Generates `/<label>/<base>/<n>/` for every archive page of every eligible
/// content type, in the given type order and ascending page order.
///
/// The primary type is archived under the slug returned by
/// `resolve_archive_slug` (an archive link, absolute or relative to
/// `site_base_url`), or at the site root when it yields nothing.
///
/// Fails before producing anything if the page size is not positive.
pub fn generate<F>(
    site_base_url: &str,
    content_types: &[ContentTypeInfo],
    settings: &PaginationSettings,
    resolve_archive_slug: F,
) -> Result<Vec<String>, DiscoveryError>
where
    F: Fn() -> Option<String>,
{
    let page_size = settings.page_size()?;
    let base = &settings.base_segment;
    let mut urls = Vec::new();

    for ct in content_types {
        if ct.published_count == 0 {
            continue;
        }
        if ct.role == ContentRole::Hierarchical {
            tracing::trace!("{}: hierarchical type, skipping", ct.identifier);
            continue;
        }
        // Labels map to a single path segment.
        if ct.plural_label.chars().any(char::is_whitespace) {
            tracing::debug!(
                "{}: label {:?} contains whitespace, skipping",
                ct.identifier,
                ct.plural_label
            );
            continue;
        }

        let prefix = if ct.is_primary() {
            resolve_archive_slug()
                .map(|link| archive_prefix(&link, site_base_url))
                .unwrap_or_default()
        } else {
            format!("{}/", ct.plural_label)
        };

        let total_pages = ct.published_count.div_ceil(page_size);
        tracing::trace!("{}: {} archive pages", ct.identifier, total_pages);
        urls.extend((1..=total_pages).map(|page| format!("/{prefix}{base}/{page}/")));
    }

    Ok(urls)
}

/// Turns an archive link into a relative path prefix ending in one slash.
/// A link that points at the site root yields an empty prefix.
fn archive_prefix(link: &str, site_base_url: &str) -> String {
    let slashed = format!("{}/", link.trim_end_matches('/'));
    let relative = if site_base_url.is_empty() {
        slashed
    } else {
        slashed.replace(site_base_url, "")
    };
    relative.trim_start_matches('/').to_string()
}
