//! JSON catalog snapshots

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

use shelfcard_types::{Category, TermId};

use crate::memory::MemoryCatalog;

/// One category entry of a snapshot file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Term id
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Number of products filed under the category
    #[serde(default)]
    pub count: u64,
    /// Link to the category page
    pub link: String,
    /// Thumbnail image, if the category has one assigned
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// Serde model of a catalog snapshot.
///
/// Snapshots feed the preview binary and fixtures; render-time reads always
/// go through the [`Catalog`](shelfcard_core::Catalog) trait, never through
/// this model directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Placeholder image used for categories without a thumbnail
    pub placeholder_image_url: String,
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

impl CatalogFile {
    /// Load a snapshot from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file = serde_json::from_str(&content)?;
        Ok(file)
    }

    /// Build the in-memory catalog, synthesizing attachment ids for the
    /// listed thumbnail URLs
    pub fn into_catalog(self) -> MemoryCatalog {
        let count = self.categories.len();
        let mut catalog = MemoryCatalog::new(self.placeholder_image_url);
        for entry in self.categories {
            let term = TermId(entry.id);
            if let Some(url) = entry.thumbnail_url {
                catalog.set_thumbnail(term, url);
            }
            catalog.add_category(Category::new(term, entry.slug, entry.name, entry.count, entry.link));
        }
        log::debug!("Loaded catalog snapshot with {} categories", count);
        catalog
    }
}
