//! Inline style composition

/// Ordered inline CSS declarations for a `style` attribute.
///
/// Property names are fixed strings chosen by widget code; only values carry
/// external data. The composed attribute value stays raw here and is escaped
/// by the owning element on serialization, like any other attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    declarations: Vec<(&'static str, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `property:value` declaration
    pub fn decl(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.declarations.push((property, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The attribute value: declarations joined with `;`, in insertion order
    pub fn to_attr_value(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(property);
            out.push(':');
            out.push_str(value);
        }
        out
    }
}
