//! shelfcard: a configurable product-category card widget for server-side
//! page builders.
//!
//! This library ties the workspace crates together:
//! - Collaborator traits and the widget registry (`shelfcard-core`)
//! - Shared data types: settings, controls, catalog records (`shelfcard-types`)
//! - The escaping fragment builder (`shelfcard-render`)
//! - The built-in widgets (`shelfcard-widgets`)
//! - Catalog backends for previews and tests (`shelfcard-catalog`)

pub mod preview;

// Re-export commonly used types
pub use shelfcard_catalog::{CatalogFile, MemoryCatalog};
pub use shelfcard_core::{
    BoxedWidget, Catalog, Host, Registry, StaticHost, Widget, WidgetDescriptor,
};
pub use shelfcard_render::{escape_html, Element, InlineStyle};
pub use shelfcard_types::{
    Category, CategoryCardSettings, CategorySummary, Control, ControlKind, ControlSchema,
    Fragment, Section, Settings, Tab,
};
pub use shelfcard_widgets::{register_all, CategoryCardWidget};
