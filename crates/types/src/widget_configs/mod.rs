//! Typed views of per-widget settings records

pub mod category_card;

pub use category_card::CategoryCardSettings;
