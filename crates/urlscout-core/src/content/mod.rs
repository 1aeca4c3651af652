//! Content-type registry: what the content store publishes and how each type
//! is labelled.
//!
//! The generator never queries the store itself; callers snapshot the registry
//! into a list of [`ContentTypeInfo`] with [`collect_content_types`].

mod store;

pub use store::{ContentStore, StaticContentStore, StaticContentType};

use serde::{Deserialize, Serialize};

/// How a content type participates in archive pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// The site's main listing; may live under a custom archive slug.
    Primary,
    /// Built-in hierarchical pages; paginated elsewhere, never here.
    Hierarchical,
    /// Any other type, archived under its plural label.
    #[default]
    Standard,
}

/// Label and role of a content type, as the content store describes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeDescriptor {
    pub plural_label: String,
    pub role: ContentRole,
}

/// Snapshot of one published content type for a single generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeInfo {
    pub identifier: String,
    pub published_count: u64,
    /// Lowercased plural label, used as the archive path segment.
    pub plural_label: String,
    pub role: ContentRole,
}

impl ContentTypeInfo {
    pub fn new(
        identifier: impl Into<String>,
        published_count: u64,
        plural_label: &str,
        role: ContentRole,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            published_count,
            plural_label: plural_label.to_lowercase(),
            role,
        }
    }

    pub fn is_primary(&self) -> bool {
        self.role == ContentRole::Primary
    }
}

/// Builds the per-run registry snapshot in the store's enumeration order.
///
/// Identifiers the store cannot describe are skipped.
pub fn collect_content_types(store: &dyn ContentStore) -> Vec<ContentTypeInfo> {
    store
        .published_types()
        .into_iter()
        .filter_map(|id| {
            let Some(descriptor) = store.descriptor(&id) else {
                tracing::debug!("content type {id} has no descriptor, skipping");
                return None;
            };
            let count = store.published_count(&id);
            Some(ContentTypeInfo::new(
                id,
                count,
                &descriptor.plural_label,
                descriptor.role,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PartialStore;

    impl ContentStore for PartialStore {
        fn published_types(&self) -> Vec<String> {
            vec!["post".into(), "ghost".into(), "product".into()]
        }

        fn published_count(&self, id: &str) -> u64 {
            match id {
                "post" => 12,
                "product" => 3,
                _ => 99,
            }
        }

        fn descriptor(&self, id: &str) -> Option<ContentTypeDescriptor> {
            match id {
                "post" => Some(ContentTypeDescriptor {
                    plural_label: "Posts".into(),
                    role: ContentRole::Primary,
                }),
                "product" => Some(ContentTypeDescriptor {
                    plural_label: "Products".into(),
                    role: ContentRole::Standard,
                }),
                _ => None,
            }
        }
    }

    #[test]
    fn collect_skips_undescribed_types_and_keeps_order() {
        let types = collect_content_types(&PartialStore);
        let ids: Vec<_> = types.iter().map(|t| t.identifier.as_str()).collect();
        assert_eq!(ids, ["post", "product"]);
        assert_eq!(types[0].published_count, 12);
        assert!(types[0].is_primary());
        assert_eq!(types[1].plural_label, "products");
    }

    #[test]
    fn new_lowercases_label() {
        let info = ContentTypeInfo::new("book", 1, "Books", ContentRole::Standard);
        assert_eq!(info.plural_label, "books");
        assert!(!info.is_primary());
    }
}
