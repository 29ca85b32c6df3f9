//! Read access to the shop's catalog extension

use shelfcard_types::{AttachmentId, Category, CategorySummary, TermId};

/// Read-only view of the product catalog.
///
/// All lookups are synchronous and side-effect free; caching and
/// availability are the backing extension's business. Widgets call these
/// once per render and keep nothing between calls.
pub trait Catalog: Send + Sync {
    /// Every category of the shop taxonomy, including empty ones, in the
    /// extension's own listing order
    fn categories(&self) -> Vec<CategorySummary>;

    /// Full record of the category with the given slug
    fn category_by_slug(&self, slug: &str) -> Option<Category>;

    /// Thumbnail attachment assigned to a category term, if any
    fn category_thumbnail(&self, term: TermId) -> Option<AttachmentId>;

    /// Public URL of a media attachment
    fn attachment_url(&self, attachment: AttachmentId) -> Option<String>;

    /// Placeholder image shown for categories without a usable thumbnail
    fn placeholder_image_url(&self) -> String;
}
