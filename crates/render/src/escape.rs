//! HTML escaping

/// Escape the HTML special characters of `s` for text and attribute contexts.
///
/// This is the only place markup-significant characters are rewritten; the
/// element serializer routes every text node and attribute value through it.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
