//! shelfcard-types: Shared data types for the shelfcard widget toolkit.
//!
//! This crate contains pure data types (catalog records, persisted settings,
//! control declarations, widget configs) that are shared across all shelfcard
//! crates. These types perform no I/O and talk to no host, making them
//! suitable as a foundation layer.

pub mod category;
pub mod control;
pub mod fragment;
pub mod settings;
pub mod values;
pub mod widget_configs;

// Re-export commonly used types at the crate root for convenience
pub use category::{AttachmentId, Category, CategorySummary, TermId};
pub use control::{
    Condition, Control, ControlKind, ControlSchema, Section, SelectOption, SelectorBinding,
    SwitchLabels, Tab, UnitRange, SWITCH_ON,
};
pub use fragment::Fragment;
pub use settings::Settings;
pub use values::{BoxDimensions, ImageRef, SliderValue, Unit};
pub use widget_configs::CategoryCardSettings;
