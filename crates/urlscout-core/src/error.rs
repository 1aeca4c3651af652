//! Error type for configuration-level discovery failures.
//!
//! Per-item conditions (empty published count, non-crawlable file, URL that
//! normalizes to nothing) are skips, not errors, and never show up here.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// A required setting is present but unusable (e.g. `per_page = 0`).
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },
    /// Normalization needs the site's home URL to strip absolute URLs.
    #[error("home URL not defined")]
    MissingHomeUrl,
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl DiscoveryError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DiscoveryError::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}
