//! shelfcard-render: HTML fragment construction for shelfcard widgets.
//!
//! Markup is assembled as a small element tree and serialized in one pass.
//! Every text node and attribute value passes through
//! [`escape_html`](escape::escape_html) at write time, never earlier, so raw
//! strings and escaped output cannot mix.

pub mod element;
pub mod escape;
pub mod style;

pub use element::{Element, Node};
pub use escape::escape_html;
pub use style::InlineStyle;
