//! shelfcard-core: Collaborator traits and the widget registry.
//!
//! This crate contains the fundamental traits (Widget, Catalog, Host) and
//! the Registry that hosts resolve widgets from. Widgets reach their host
//! and the product catalog only through these traits, so everything here is
//! mockable in tests and previews.

mod catalog;
mod host;
mod registry;
mod widget;

pub use catalog::Catalog;
pub use host::{Host, StaticHost};
pub use registry::{Registry, WidgetFactory};
pub use widget::{BoxedWidget, Widget, WidgetDescriptor};

// Re-export types used in trait signatures for convenience
pub use shelfcard_types::{
    AttachmentId, Category, CategorySummary, ControlSchema, Fragment, Settings, TermId,
};
