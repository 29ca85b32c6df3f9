//! Category card settings

use serde::{Deserialize, Serialize};

use crate::control::SWITCH_ON;
use crate::settings::Settings;
use crate::values::{BoxDimensions, ImageRef, SliderValue, Unit};

fn default_use_category_image() -> String {
    SWITCH_ON.to_string()
}

fn default_text_color() -> Option<String> {
    Some("#ffffff".to_string())
}

fn default_border_radius() -> SliderValue {
    SliderValue::px(10.0)
}

/// Typed view of a category card instance's settings.
///
/// Serde defaults mirror the editor control defaults, so deserializing an
/// empty object yields a freshly-added instance. The render path instead
/// goes through [`from_settings`](Self::from_settings), which reads the raw
/// record exactly as persisted: absent keys come back empty or unset and the
/// renderer's own fallbacks decide what to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCardSettings {
    /// Slug of the selected category
    #[serde(default)]
    pub category: String,
    /// The category's own image is used when this holds the switch on value
    #[serde(default = "default_use_category_image")]
    pub use_category_image: String,
    /// Image shown when the switch is off
    #[serde(default)]
    pub custom_image: ImageRef,
    /// Overrides the category name when non-empty
    #[serde(default)]
    pub custom_title: String,
    /// Container background; renderers fall back to black when unset
    #[serde(default)]
    pub background_color: Option<String>,
    /// Text color; renderers fall back to white when unset
    #[serde(default = "default_text_color")]
    pub text_color: Option<String>,
    /// Corner rounding, applied by the host through its selector binding
    #[serde(default = "default_border_radius")]
    pub border_radius: SliderValue,
    /// Inner padding, applied by the host through its selector binding
    #[serde(default)]
    pub padding: BoxDimensions,
}

impl Default for CategoryCardSettings {
    fn default() -> Self {
        Self {
            category: String::new(),
            use_category_image: default_use_category_image(),
            custom_image: ImageRef::default(),
            custom_title: String::new(),
            background_color: None,
            text_color: default_text_color(),
            border_radius: default_border_radius(),
            padding: BoxDimensions::zero(Unit::Px),
        }
    }
}

impl CategoryCardSettings {
    /// Read the raw persisted record without injecting control defaults.
    ///
    /// Records written by older editor versions, or edited by hand, may miss
    /// keys or hold the wrong type; every field degrades independently.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            category: settings.str_or("category", ""),
            use_category_image: settings.str_or("use_category_image", ""),
            custom_image: settings.typed("custom_image").unwrap_or_default(),
            custom_title: settings.str_or("custom_title", ""),
            background_color: settings.get_str("background_color").map(str::to_string),
            text_color: settings.get_str("text_color").map(str::to_string),
            border_radius: settings
                .typed("border_radius")
                .unwrap_or_else(default_border_radius),
            padding: settings.typed("padding").unwrap_or_default(),
        }
    }
}
