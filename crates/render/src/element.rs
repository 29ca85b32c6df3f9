//! Element tree and HTML serialization

use shelfcard_types::Fragment;

use crate::escape::escape_html;
use crate::style::InlineStyle;

/// Tags serialized without children or a closing tag
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// A node of the fragment tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// One HTML element under construction.
///
/// Tag and attribute names are fixed strings chosen by widget code; attribute
/// values and text nodes carry external data and are stored raw. Escaping
/// happens exactly once, when [`into_fragment`](Self::into_fragment)
/// serializes the tree, so no call site can interpolate markup by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    style: Option<InlineStyle>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            style: None,
            children: Vec::new(),
        }
    }

    /// Append an attribute. Attributes serialize in insertion order.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Shorthand for the `class` attribute
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Set the inline style, serialized after the other attributes
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Append a child element
    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    /// Append a text node
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Serialize the tree into its final fragment
    pub fn into_fragment(self) -> Fragment {
        let mut out = String::new();
        self.write_html(&mut out);
        Fragment::new(out)
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            write_attr(out, name, value);
        }
        if let Some(style) = &self.style {
            if !style.is_empty() {
                write_attr(out, "style", &style.to_attr_value());
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_html(out),
                Node::Text(text) => out.push_str(&escape_html(text)),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
