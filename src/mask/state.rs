//! DisplayState - the (string, caret) snapshot exchanged with the host.

use serde::{Deserialize, Serialize};

use super::template::Template;

/// The externally visible text and caret of a masked input.
///
/// The engine never keeps one of these between calls: it takes a snapshot and
/// returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Full display string
    pub text: String,
    /// Caret as a char offset in `[0, len]`
    pub caret: usize,
}

impl DisplayState {
    pub fn new(text: impl Into<String>, caret: usize) -> Self {
        Self {
            text: text.into(),
            caret,
        }
    }

    /// Initial state for a fresh field: the raw template with the caret at 0
    pub fn from_template(template: &Template) -> Self {
        Self::new(template.as_str(), 0)
    }

    /// Length of the text in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Text with placeholder positions stripped, e.g. `5551234567` for `(555) 123-4567`
    pub fn unmasked(&self, template: &Template) -> String {
        self.text
            .chars()
            .enumerate()
            .filter(|&(pos, ch)| template.is_placeholder(pos) && Some(ch) != template.char_at(pos))
            .map(|(_, ch)| ch)
            .collect()
    }
}
