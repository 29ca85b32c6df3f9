//! Registry of widget factories

use anyhow::{anyhow, Result};
use std::collections::HashMap;

use crate::widget::{BoxedWidget, WidgetDescriptor};

/// Function that creates a widget
pub type WidgetFactory = fn() -> BoxedWidget;

/// Registry of available widgets.
///
/// Hosts build one while loading the extension, register the built-in
/// widgets (and any third-party ones), and create instances by name whenever
/// a page renders. There is no global instance; whoever owns the registry
/// passes it where it is needed.
pub struct Registry {
    widgets: HashMap<String, WidgetFactory>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Register a widget under the name its descriptor reports.
    /// Re-registering a name replaces the earlier factory.
    pub fn register(&mut self, factory: WidgetFactory) {
        let name = factory().descriptor().name.clone();
        log::debug!("Registered widget: {}", name);
        self.widgets.insert(name, factory);
    }

    /// Create a widget by name
    pub fn create(&self, name: &str) -> Result<BoxedWidget> {
        let factory = self
            .widgets
            .get(name)
            .ok_or_else(|| anyhow!("Unknown widget: {}", name))?;
        Ok(factory())
    }

    /// List all registered widget names
    pub fn names(&self) -> Vec<String> {
        self.widgets.keys().cloned().collect()
    }

    /// Descriptors of all registered widgets, for host palettes
    pub fn descriptors(&self) -> Vec<WidgetDescriptor> {
        self.widgets
            .values()
            .map(|factory| factory().descriptor().clone())
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
