//! Static files under the site root, exposed as candidate URLs.

use jwalk::{Parallelism, WalkDir};
use std::path::{Component, Path};

/// Filename and extension ignore rules for static files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlFilter {
    /// Lowercased fragments; a path containing any of them is ignored.
    name_fragments: Vec<String>,
    /// Lowercased extensions without the leading dot.
    extensions: Vec<String>,
}

impl CrawlFilter {
    pub fn new<S: AsRef<str>>(ignored_name_fragments: &[S], ignored_extensions: &[S]) -> Self {
        Self {
            name_fragments: ignored_name_fragments
                .iter()
                .map(|f| f.as_ref().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
            extensions: ignored_extensions
                .iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// True when neither a name fragment nor an extension rule matches.
    pub fn is_crawlable(&self, filename: &str) -> bool {
        let lower = filename.to_lowercase();
        if self.name_fragments.iter().any(|f| lower.contains(f.as_str())) {
            return false;
        }
        !self.extensions.iter().any(|ext| {
            lower
                .strip_suffix(ext.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

/// Convenience form of [`CrawlFilter::is_crawlable`] over raw ignore-lists.
pub fn is_crawlable<S: AsRef<str>>(
    filename: &str,
    ignored_name_fragments: &[S],
    ignored_extensions: &[S],
) -> bool {
    CrawlFilter::new(ignored_name_fragments, ignored_extensions).is_crawlable(filename)
}

/// Lists every crawlable file beneath `root_dir` as a URL relative to
/// `site_path` (`<site_path>/a/b.png` becomes `/a/b.png`).
///
/// A missing or non-directory root yields an empty list. Files outside
/// `site_path`, unreadable entries and non-UTF-8 paths are skipped. Order is
/// traversal order and not stable across platforms.
pub fn map_directory(root_dir: &Path, site_path: &Path, filter: &CrawlFilter) -> Vec<String> {
    if !root_dir.is_dir() {
        tracing::debug!("{} is not a directory, no files to map", root_dir.display());
        return Vec::new();
    }

    let mut urls = Vec::new();
    // Depth 0 is the root itself; it is reported as a symlink, not a
    // directory, when root_dir is a link.
    let walker = WalkDir::new(root_dir)
        .min_depth(1)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false);

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("walk error under {}: {e}", root_dir.display());
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let Some(path_str) = path.to_str() else {
            tracing::trace!("non-UTF-8 path {}, skipping", path.display());
            continue;
        };
        if !filter.is_crawlable(path_str) {
            tracing::trace!("{path_str} not crawlable, skipping");
            continue;
        }
        match file_url(&path, site_path) {
            Some(url) => urls.push(url),
            None => tracing::trace!("{path_str} outside site path, skipping"),
        }
    }

    urls
}

/// Site-relative URL for `path`, or `None` when it is not under `site_path`.
fn file_url(path: &Path, site_path: &Path) -> Option<String> {
    let relative = path.strip_prefix(site_path).ok()?;
    let mut url = String::from("/");
    let mut first = true;
    for component in relative.components() {
        let Component::Normal(segment) = component else {
            return None;
        };
        if !first {
            url.push('/');
        }
        url.push_str(segment.to_str()?);
        first = false;
    }
    Some(url)
}
