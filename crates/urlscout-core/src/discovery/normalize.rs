//! Canonicalization of discovered URLs into site-relative paths.

use crate::error::DiscoveryError;

/// Normalizes every candidate against `home_url`.
///
/// The output has the same length and order as `urls`; entries that reduce
/// to nothing are `None` rather than removed.
pub fn normalize<S: AsRef<str>>(
    urls: &[S],
    home_url: Option<&str>,
) -> Result<Vec<Option<String>>, DiscoveryError> {
    let home = home_url
        .filter(|h| !h.is_empty())
        .ok_or(DiscoveryError::MissingHomeUrl)?;
    Ok(urls.iter().map(|u| normalize_url(u.as_ref(), home)).collect())
}

/// Applies the per-URL transform. Step order matters:
///
/// 1. empty input is absent;
/// 2. the home URL becomes `/`;
/// 3. `//` becomes `/` in a single left-to-right pass (`///` leaves `//`);
/// 4. everything from the first `#` is dropped, absent if empty;
/// 5. everything from the first `?` is dropped, absent if empty.
pub fn normalize_url(url: &str, home_url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    let stripped = strip_home(url, home_url);
    let collapsed = stripped.replace("//", "/");

    let without_fragment = collapsed.split('#').next().unwrap_or_default();
    if without_fragment.is_empty() {
        return None;
    }

    let path = without_fragment.split('?').next().unwrap_or_default();
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

/// Replaces the home URL with `/`. The home URL's own trailing slash is
/// consumed along with it, so `http://example.com//foo` strips to `//foo`.
fn strip_home(url: &str, home_url: &str) -> String {
    let bare = home_url.trim_end_matches('/');
    if bare.is_empty() {
        return url.replace(home_url, "/");
    }
    url.replace(&format!("{bare}/"), "/").replace(bare, "/")
}
