use crate::content::StaticContentType;
use crate::discovery::{CrawlFilter, PaginationSettings};
use crate::error::DiscoveryError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Archive pagination settings (`[pagination]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Path segment before the page number, e.g. `page` in `/page/2/`.
    pub base: String,
    /// Items per archive page.
    pub per_page: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            base: "page".to_string(),
            per_page: 10,
        }
    }
}

/// Static file ignore rules (`[ignore]` section). Both empty by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IgnoreConfig {
    /// Case-insensitive fragments; any file path containing one is skipped.
    #[serde(default)]
    pub filenames: Vec<String>,
    /// Extensions, with or without the leading dot.
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Site description loaded from `~/.config/urlscout/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Fully qualified home URL; stripped from URLs during normalization.
    pub home_url: String,
    /// Base URL stripped from archive links. Defaults to `home_url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    /// Filesystem root of the site; file URLs are relative to it.
    pub site_path: PathBuf,
    /// Directory to scan for static files. Defaults to `site_path`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_dir: Option<PathBuf>,
    /// Archive link of the primary content type, when it is not the site root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts_archive: Option<String>,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub ignore: IgnoreConfig,
    #[serde(default)]
    pub content_types: Vec<StaticContentType>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        use crate::content::ContentRole;

        Self {
            home_url: "http://localhost".to_string(),
            site_url: None,
            site_path: PathBuf::from("/var/www/html"),
            scan_dir: None,
            posts_archive: None,
            pagination: PaginationConfig::default(),
            ignore: IgnoreConfig::default(),
            content_types: vec![
                StaticContentType {
                    id: "post".to_string(),
                    label: Some("Posts".to_string()),
                    published: 0,
                    role: ContentRole::Primary,
                },
                StaticContentType {
                    id: "page".to_string(),
                    label: Some("Pages".to_string()),
                    published: 0,
                    role: ContentRole::Hierarchical,
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Rejects settings no discovery run could use.
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if self.pagination.per_page <= 0 {
            return Err(DiscoveryError::invalid(
                "pagination.per_page",
                format!("must be positive, got {}", self.pagination.per_page),
            ));
        }
        if self.pagination.base.is_empty() {
            return Err(DiscoveryError::invalid("pagination.base", "must not be empty"));
        }
        if self.home_url.is_empty() {
            return Err(DiscoveryError::MissingHomeUrl);
        }
        Ok(())
    }

    pub fn site_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or(&self.home_url)
    }

    pub fn scan_dir(&self) -> &Path {
        self.scan_dir.as_deref().unwrap_or(&self.site_path)
    }

    pub fn pagination(&self) -> PaginationSettings {
        PaginationSettings::new(self.pagination.base.clone(), self.pagination.per_page)
    }

    pub fn crawl_filter(&self) -> CrawlFilter {
        CrawlFilter::new(&self.ignore.filenames, &self.ignore.extensions)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlscout")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load and validate configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<SiteConfig, DiscoveryError> {
    let data = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    Ok(load_from(&path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRole;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.pagination.base, "page");
        assert_eq!(cfg.pagination.per_page, 10);
        assert!(cfg.ignore.filenames.is_empty());
        assert!(cfg.ignore.extensions.is_empty());
        assert_eq!(cfg.site_url(), cfg.home_url);
        assert_eq!(cfg.scan_dir(), cfg.site_path.as_path());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SiteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.home_url, cfg.home_url);
        assert_eq!(parsed.site_path, cfg.site_path);
        assert_eq!(parsed.content_types, cfg.content_types);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            home_url = "https://example.com"
            site_url = "https://example.com/wp"
            site_path = "/srv/site"
            scan_dir = "/srv/site/wp-content"
            posts_archive = "https://example.com/wp/blog"

            [pagination]
            base = "seite"
            per_page = 5

            [ignore]
            filenames = ["backup", ".git"]
            extensions = ["sql", ".log"]

            [[content_types]]
            id = "post"
            label = "Posts"
            published = 12
            role = "primary"

            [[content_types]]
            id = "product"
            label = "Products"
            published = 3
        "#;
        let cfg: SiteConfig = toml::from_str(toml).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.site_url(), "https://example.com/wp");
        assert_eq!(cfg.scan_dir(), Path::new("/srv/site/wp-content"));
        assert_eq!(cfg.pagination(), PaginationSettings::new("seite", 5));
        assert_eq!(cfg.content_types.len(), 2);
        assert_eq!(cfg.content_types[0].role, ContentRole::Primary);
        assert_eq!(cfg.content_types[1].role, ContentRole::Standard);

        let filter = cfg.crawl_filter();
        assert!(!filter.is_crawlable("/srv/site/dump.SQL"));
        assert!(!filter.is_crawlable("/srv/site/.git/HEAD"));
        assert!(filter.is_crawlable("/srv/site/index.php"));
    }

    #[test]
    fn validate_rejects_bad_pagination() {
        let mut cfg = SiteConfig::default();
        cfg.pagination.per_page = 0;
        assert!(matches!(
            cfg.validate(),
            Err(DiscoveryError::InvalidConfiguration { field: "pagination.per_page", .. })
        ));

        let mut cfg = SiteConfig::default();
        cfg.pagination.base.clear();
        assert!(matches!(
            cfg.validate(),
            Err(DiscoveryError::InvalidConfiguration { field: "pagination.base", .. })
        ));

        let mut cfg = SiteConfig::default();
        cfg.home_url.clear();
        assert!(matches!(cfg.validate(), Err(DiscoveryError::MissingHomeUrl)));
    }

    #[test]
    fn load_from_file_validates() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"home_url = \"http://a.test\"\nsite_path = \"/x\"\n[pagination]\nbase = \"page\"\nper_page = -1\n")
            .unwrap();
        f.flush().unwrap();
        assert!(matches!(
            load_from(f.path()),
            Err(DiscoveryError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn load_from_reports_missing_file_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert!(matches!(load_from(&missing), Err(DiscoveryError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "home_url = ").unwrap();
        assert!(matches!(load_from(&bad), Err(DiscoveryError::ConfigParse(_))));
    }
}
