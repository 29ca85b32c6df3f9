//! The render result type

use serde::{Deserialize, Serialize};
use std::fmt;

/// One rendered markup fragment.
///
/// A fragment is produced per render call, handed to the host page, and
/// dropped; nothing is cached or reused between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_display_is_verbatim() {
        let fragment = Fragment::new("<p>ok</p>");
        assert_eq!(fragment.to_string(), "<p>ok</p>");
        assert_eq!(fragment.as_str(), "<p>ok</p>");
        assert_eq!(fragment.into_string(), "<p>ok</p>");
    }
}
