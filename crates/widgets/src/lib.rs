//! shelfcard-widgets: built-in widgets.
//!
//! Each widget declares its editor controls and renders one markup fragment
//! per invocation. Hosts obtain instances through a
//! [`Registry`](shelfcard_core::Registry).

mod category_card;

pub use category_card::CategoryCardWidget;

use shelfcard_core::Registry;

/// Register all built-in widgets
pub fn register_all(registry: &mut Registry) {
    registry.register(|| Box::new(CategoryCardWidget::new()));
}
