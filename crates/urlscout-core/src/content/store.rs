//! Content store collaborator and its in-memory implementation.

use super::{ContentRole, ContentTypeDescriptor};
use serde::{Deserialize, Serialize};

/// Read-only view of the site's published content.
pub trait ContentStore {
    /// Distinct identifiers of content types with published items, in
    /// enumeration order.
    fn published_types(&self) -> Vec<String>;

    /// Number of published items of the given type.
    fn published_count(&self, id: &str) -> u64;

    /// Label and role for the type, or `None` when the type is unknown.
    fn descriptor(&self, id: &str) -> Option<ContentTypeDescriptor>;
}

/// One `[[content_types]]` entry in config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticContentType {
    pub id: String,
    /// Plural label; when omitted the type has no descriptor and is skipped.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub published: u64,
    #[serde(default)]
    pub role: ContentRole,
}

/// Content store backed by a fixed list, e.g. from the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticContentStore {
    types: Vec<StaticContentType>,
}

impl StaticContentStore {
    pub fn new(types: Vec<StaticContentType>) -> Self {
        Self { types }
    }

    fn find(&self, id: &str) -> Option<&StaticContentType> {
        self.types.iter().find(|t| t.id == id)
    }
}

impl ContentStore for StaticContentStore {
    fn published_types(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::with_capacity(self.types.len());
        for t in &self.types {
            if t.published > 0 && !ids.contains(&t.id) {
                ids.push(t.id.clone());
            }
        }
        ids
    }

    fn published_count(&self, id: &str) -> u64 {
        self.find(id).map_or(0, |t| t.published)
    }

    fn descriptor(&self, id: &str) -> Option<ContentTypeDescriptor> {
        let t = self.find(id)?;
        let label = t.label.as_ref()?;
        Some(ContentTypeDescriptor {
            plural_label: label.clone(),
            role: t.role,
        })
    }
}
