//! Catalog records exposed by the e-commerce extension

use serde::{Deserialize, Serialize};

/// Identifier of a category term in the shop taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(pub u64);

/// Identifier of an uploaded media attachment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttachmentId(pub u64);

/// A product category record.
///
/// Widgets only read these; the catalog extension owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Term id, used for metadata lookups such as the thumbnail attachment
    pub id: TermId,
    /// URL-safe identifier; settings refer to categories by slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Number of products filed under this category
    pub count: u64,
    /// Canonical link to the category page
    pub link: String,
}

impl Category {
    /// Create a new category record
    pub fn new(
        id: TermId,
        slug: impl Into<String>,
        name: impl Into<String>,
        count: u64,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            slug: slug.into(),
            name: name.into(),
            count,
            link: link.into(),
        }
    }
}

/// One entry of the category listing used to populate select controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub slug: String,
    pub name: String,
}

impl CategorySummary {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}
