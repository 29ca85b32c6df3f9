//! In-memory catalog

use std::collections::HashMap;

use shelfcard_core::Catalog;
use shelfcard_types::{AttachmentId, Category, CategorySummary, TermId};

/// Catalog backed by plain collections.
///
/// Categories keep insertion order, matching the contract that the listing
/// order is whatever the extension returns. Thumbnails resolve through the
/// same two steps the real extension exposes: term metadata names an
/// attachment, the attachment has a URL.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    categories: Vec<Category>,
    thumbnails: HashMap<TermId, AttachmentId>,
    attachments: HashMap<AttachmentId, String>,
    placeholder_image_url: String,
    next_attachment: u64,
}

impl MemoryCatalog {
    pub fn new(placeholder_image_url: impl Into<String>) -> Self {
        Self {
            placeholder_image_url: placeholder_image_url.into(),
            ..Self::default()
        }
    }

    /// Append a category; the listing keeps insertion order
    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Store an image attachment and return its id
    pub fn add_attachment(&mut self, url: impl Into<String>) -> AttachmentId {
        self.next_attachment += 1;
        let id = AttachmentId(self.next_attachment);
        self.attachments.insert(id, url.into());
        id
    }

    /// Assign a thumbnail image to a category term
    pub fn set_thumbnail(&mut self, term: TermId, url: impl Into<String>) -> AttachmentId {
        let id = self.add_attachment(url);
        self.thumbnails.insert(term, id);
        id
    }
}

impl Catalog for MemoryCatalog {
    fn categories(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .map(|category| CategorySummary::new(category.slug.clone(), category.name.clone()))
            .collect()
    }

    fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
    }

    fn category_thumbnail(&self, term: TermId) -> Option<AttachmentId> {
        self.thumbnails.get(&term).copied()
    }

    fn attachment_url(&self, attachment: AttachmentId) -> Option<String> {
        self.attachments.get(&attachment).cloned()
    }

    fn placeholder_image_url(&self) -> String {
        self.placeholder_image_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new("https://shop.example/placeholder.png");
        catalog.add_category(Category::new(
            TermId(7),
            "shoes",
            "Shoes",
            42,
            "https://shop.example/category/shoes",
        ));
        catalog.add_category(Category::new(
            TermId(8),
            "hats",
            "Hats",
            0,
            "https://shop.example/category/hats",
        ));
        catalog
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let catalog = sample();
        let summaries = catalog.categories();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].slug, "shoes");
        assert_eq!(summaries[1].slug, "hats");
    }

    #[test]
    fn test_lookup_by_slug() {
        let catalog = sample();
        let shoes = catalog.category_by_slug("shoes").unwrap();
        assert_eq!(shoes.name, "Shoes");
        assert_eq!(shoes.count, 42);
        assert!(catalog.category_by_slug("ghost").is_none());
    }

    #[test]
    fn test_thumbnail_resolves_in_two_steps() {
        let mut catalog = sample();
        let id = catalog.set_thumbnail(TermId(7), "https://shop.example/shoes.jpg");

        assert_eq!(catalog.category_thumbnail(TermId(7)), Some(id));
        assert_eq!(
            catalog.attachment_url(id).as_deref(),
            Some("https://shop.example/shoes.jpg")
        );
        assert_eq!(catalog.category_thumbnail(TermId(8)), None);
        assert_eq!(catalog.attachment_url(AttachmentId(999)), None);
    }

    #[test]
    fn test_attachment_ids_are_distinct() {
        let mut catalog = sample();
        let a = catalog.add_attachment("https://shop.example/a.png");
        let b = catalog.add_attachment("https://shop.example/b.png");
        assert_ne!(a, b);
    }
}
