//! Widget trait and descriptor

use serde::{Deserialize, Serialize};
use shelfcard_types::{ControlSchema, Fragment, Settings};

use crate::catalog::Catalog;
use crate::host::Host;

/// Identity a widget registers under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Unique machine name; registry key and owner of the settings record
    pub name: String,
    /// Title shown in the host's widget palette
    pub title: String,
    /// Icon token the host palette understands
    pub icon: String,
    /// Palette group the widget is filed under
    pub group: String,
}

impl WidgetDescriptor {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            icon: icon.into(),
            group: group.into(),
        }
    }
}

/// Trait for all page-builder widgets.
///
/// Implementations are stateless between calls: `controls` declares the
/// editor schema, `render` turns one persisted settings record into one
/// markup fragment, and neither mutates the collaborators it reads from.
pub trait Widget: Send + Sync {
    /// Identity registered with the host
    fn descriptor(&self) -> &WidgetDescriptor;

    /// Declarative editor controls for this widget
    fn controls(&self, catalog: &dyn Catalog, host: &dyn Host) -> ControlSchema;

    /// Render one instance.
    ///
    /// Never fails: anything unrenderable degrades to a user-visible notice
    /// fragment instead of an error.
    fn render(&self, settings: &Settings, catalog: &dyn Catalog, host: &dyn Host) -> Fragment;
}

/// Type-erased widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;
