//! Value types carried by editor controls

use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS unit accepted by slider and dimensions controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "px")]
    Px,
    #[serde(rename = "em")]
    Em,
    #[serde(rename = "%")]
    Percent,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Px
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Percent => "%",
        };
        f.write_str(s)
    }
}

/// Value of a slider control: one size with its unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderValue {
    #[serde(default)]
    pub unit: Unit,
    #[serde(default)]
    pub size: f64,
}

impl SliderValue {
    pub fn new(unit: Unit, size: f64) -> Self {
        Self { unit, size }
    }

    /// Pixel-sized value
    pub fn px(size: f64) -> Self {
        Self::new(Unit::Px, size)
    }
}

/// Value of a dimensions control: per-side sizes sharing one unit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxDimensions {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub unit: Unit,
}

impl BoxDimensions {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64, unit: Unit) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            unit,
        }
    }

    /// All four sides zero in the given unit
    pub fn zero(unit: Unit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }
}

/// Value of a media control: an image referenced by URL.
///
/// The URL is stored exactly as the editor saved it; no validation happens
/// until some consumer dereferences it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub url: String,
}

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
