//! Declarative editor controls.
//!
//! A widget describes its configurable options as plain data; the host editor
//! renders the matching input fields and persists the values back into the
//! instance's [`Settings`](crate::settings::Settings) record. Nothing in this
//! module computes anything: hosts consume the declarations as-is, typically
//! serialized to JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::settings::Settings;
use crate::values::{BoxDimensions, ImageRef, SliderValue, Unit};

/// Value a switch control persists while on. Off persists the empty string.
pub const SWITCH_ON: &str = "yes";

/// Kind of editor input a control renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    /// Single-choice dropdown
    Select,
    /// On/off toggle persisting its return value (see [`SWITCH_ON`])
    Switch,
    /// Image picker
    Media,
    /// Free text input
    Text,
    /// Color picker
    Color,
    /// Single size with a unit
    Slider,
    /// Per-side sizes with a shared unit
    Dimensions,
}

/// One option of a select control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Persisted value
    pub value: String,
    /// Label shown in the dropdown
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// On/off labels and the persisted on value of a switch control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchLabels {
    pub label_on: String,
    pub label_off: String,
    /// Value stored in settings while the switch is on
    pub return_value: String,
}

/// Visibility condition: show the control only when another control's value
/// matches `equals` (or, with `negate`, does not match).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Key of the control the condition looks at
    pub control: String,
    pub equals: Value,
    #[serde(default)]
    pub negate: bool,
}

/// Host-applied CSS binding.
///
/// The host expands `declaration` with the persisted value and injects it
/// under `target`. `{{WRAPPER}}` in the target stands for the host's
/// per-instance wrapper selector; `{{VALUE}}`, `{{SIZE}}`/`{{UNIT}}` and
/// `{{TOP}}`/`{{RIGHT}}`/`{{BOTTOM}}`/`{{LEFT}}` in the declaration stand
/// for the control value's parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorBinding {
    pub target: String,
    pub declaration: String,
}

/// Valid range of a slider control for one unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitRange {
    pub unit: Unit,
    pub min: f64,
    pub max: f64,
}

impl UnitRange {
    pub fn new(unit: Unit, min: f64, max: f64) -> Self {
        Self { unit, min, max }
    }
}

/// A single editor control declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Settings key the persisted value is stored under
    pub key: String,
    /// Human-readable label
    pub label: String,
    pub kind: ControlKind,
    /// Default value persisted when an instance is created. Controls without
    /// one leave the key absent in fresh settings records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Options of a select control
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Labels of a switch control
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub switch: Option<SwitchLabels>,
    /// Units accepted by slider and dimensions controls
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<Unit>,
    /// Per-unit ranges of a slider control
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<UnitRange>,
    /// Visibility condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    /// Host-applied CSS bindings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<SelectorBinding>,
}

impl Control {
    fn base(key: impl Into<String>, label: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            default: None,
            options: Vec::new(),
            switch: None,
            units: Vec::new(),
            ranges: Vec::new(),
            condition: None,
            selectors: Vec::new(),
        }
    }

    /// Single-choice dropdown over `options`
    pub fn select(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
        default: Option<String>,
    ) -> Self {
        let mut control = Self::base(key, label, ControlKind::Select);
        control.options = options;
        control.default = default.map(Value::String);
        control
    }

    /// On/off toggle. On persists [`SWITCH_ON`], off the empty string.
    pub fn switch(
        key: impl Into<String>,
        label: impl Into<String>,
        label_on: impl Into<String>,
        label_off: impl Into<String>,
        default_on: bool,
    ) -> Self {
        let mut control = Self::base(key, label, ControlKind::Switch);
        control.switch = Some(SwitchLabels {
            label_on: label_on.into(),
            label_off: label_off.into(),
            return_value: SWITCH_ON.to_string(),
        });
        control.default = Some(Value::String(if default_on {
            SWITCH_ON.to_string()
        } else {
            String::new()
        }));
        control
    }

    /// Image picker defaulting to the given image
    pub fn media(key: impl Into<String>, label: impl Into<String>, default: ImageRef) -> Self {
        let mut control = Self::base(key, label, ControlKind::Media);
        control.default = serde_json::to_value(default).ok();
        control
    }

    /// Free text input
    pub fn text(key: impl Into<String>, label: impl Into<String>, default: impl Into<String>) -> Self {
        let mut control = Self::base(key, label, ControlKind::Text);
        control.default = Some(Value::String(default.into()));
        control
    }

    /// Color picker. `None` declares no default, so fresh settings records
    /// leave the key absent.
    pub fn color(key: impl Into<String>, label: impl Into<String>, default: Option<&str>) -> Self {
        let mut control = Self::base(key, label, ControlKind::Color);
        control.default = default.map(|color| Value::String(color.to_string()));
        control
    }

    /// Slider over `units`, constrained per unit by `ranges`
    pub fn slider(
        key: impl Into<String>,
        label: impl Into<String>,
        units: &[Unit],
        ranges: Vec<UnitRange>,
        default: SliderValue,
    ) -> Self {
        let mut control = Self::base(key, label, ControlKind::Slider);
        control.units = units.to_vec();
        control.ranges = ranges;
        control.default = serde_json::to_value(default).ok();
        control
    }

    /// Per-side dimensions over `units`
    pub fn dimensions(
        key: impl Into<String>,
        label: impl Into<String>,
        units: &[Unit],
        default: BoxDimensions,
    ) -> Self {
        let mut control = Self::base(key, label, ControlKind::Dimensions);
        control.units = units.to_vec();
        control.default = serde_json::to_value(default).ok();
        control
    }

    /// Show this control only when `control`'s value equals `equals`
    pub fn visible_when(mut self, control: impl Into<String>, equals: impl Into<Value>) -> Self {
        self.condition = Some(Condition {
            control: control.into(),
            equals: equals.into(),
            negate: false,
        });
        self
    }

    /// Show this control only when `control`'s value differs from `equals`
    pub fn visible_unless(mut self, control: impl Into<String>, equals: impl Into<Value>) -> Self {
        self.condition = Some(Condition {
            control: control.into(),
            equals: equals.into(),
            negate: true,
        });
        self
    }

    /// Attach a host-applied CSS binding
    pub fn selector(mut self, target: impl Into<String>, declaration: impl Into<String>) -> Self {
        self.selectors.push(SelectorBinding {
            target: target.into(),
            declaration: declaration.into(),
        });
        self
    }
}

/// Editor tab a section lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Content,
    Style,
}

/// A titled group of controls on one editor tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
    pub tab: Tab,
    pub controls: Vec<Control>,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        tab: Tab,
        controls: Vec<Control>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tab,
            controls,
        }
    }

    /// Section on the content tab
    pub fn content(id: impl Into<String>, label: impl Into<String>, controls: Vec<Control>) -> Self {
        Self::new(id, label, Tab::Content, controls)
    }

    /// Section on the style tab
    pub fn style(id: impl Into<String>, label: impl Into<String>, controls: Vec<Control>) -> Self {
        Self::new(id, label, Tab::Style, controls)
    }
}

/// The complete set of controls a widget exposes to the host editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlSchema {
    pub sections: Vec<Section>,
}

impl ControlSchema {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Iterate all controls across all sections, in declaration order
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.sections.iter().flat_map(|section| section.controls.iter())
    }

    /// Find a control by settings key
    pub fn find(&self, key: &str) -> Option<&Control> {
        self.controls().find(|control| control.key == key)
    }

    /// Seed a fresh settings record from the declared defaults, the way a
    /// host does when an instance is first added to a page. Controls without
    /// a default contribute nothing.
    pub fn default_settings(&self) -> Settings {
        let mut settings = Settings::new();
        for control in self.controls() {
            if let Some(default) = &control.default {
                settings.insert(control.key.clone(), default.clone());
            }
        }
        settings
    }
}
