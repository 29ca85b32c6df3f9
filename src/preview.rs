//! Preview assembly: stands in for a page-builder host on the command line.
//!
//! These helpers wire a registry, a catalog, and a host together the way a
//! real host page would, so a widget's output can be inspected without one.

use anyhow::Result;
use std::path::Path;

use shelfcard_core::{Catalog, Host, Registry};
use shelfcard_types::{Fragment, Settings};

/// Parse a settings record from JSON text
pub fn settings_from_json(json: &str) -> Result<Settings> {
    let settings = serde_json::from_str(json)?;
    Ok(settings)
}

/// Load a settings record from a JSON file
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;
    settings_from_json(&content)
}

/// Render one widget instance the way a host page would
pub fn render_widget(
    registry: &Registry,
    name: &str,
    settings: &Settings,
    catalog: &dyn Catalog,
    host: &dyn Host,
) -> Result<Fragment> {
    let widget = registry.create(name)?;
    Ok(widget.render(settings, catalog, host))
}

/// Control schema of one widget as pretty JSON, the declarative form a host
/// editor consumes
pub fn schema_json(
    registry: &Registry,
    name: &str,
    catalog: &dyn Catalog,
    host: &dyn Host,
) -> Result<String> {
    let widget = registry.create(name)?;
    let schema = widget.controls(catalog, host);
    let json = serde_json::to_string_pretty(&schema)?;
    Ok(json)
}

/// Settings seeded from a widget's declared control defaults, used when no
/// settings file is given
pub fn default_settings(
    registry: &Registry,
    name: &str,
    catalog: &dyn Catalog,
    host: &dyn Host,
) -> Result<Settings> {
    let widget = registry.create(name)?;
    Ok(widget.controls(catalog, host).default_settings())
}
