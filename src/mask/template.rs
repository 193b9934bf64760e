//! Mask templates and the placeholder alphabet they are classified against.

use serde::{Deserialize, Serialize};

/// Default placeholder characters: `_` for free text slots, `#` for digit slots.
pub const DEFAULT_PLACEHOLDERS: [char; 2] = ['_', '#'];

/// The set of characters that mark a template position as user-editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceholderSet {
    chars: Vec<char>,
}

impl Default for PlaceholderSet {
    fn default() -> Self {
        Self {
            chars: DEFAULT_PLACEHOLDERS.to_vec(),
        }
    }
}

impl PlaceholderSet {
    /// Build a set from arbitrary characters; duplicates are dropped.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set = Vec::new();
        for ch in chars {
            if !set.contains(&ch) {
                set.push(ch);
            }
        }
        Self { chars: set }
    }

    /// Parse a set from a string such as `"_#"`
    pub fn from_chars(s: &str) -> Self {
        Self::new(s.chars())
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

/// Classification of a single template position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// The user fills this position
    Placeholder,
    /// Fixed character, never edited by insert or delete
    Literal,
}

/// An immutable mask template such as `(###) ###-####`.
///
/// Positions are char indices, not byte offsets. The length is fixed for the
/// template's lifetime; a changed template is a new `Template`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    chars: Vec<char>,
    kinds: Vec<SlotKind>,
    placeholders: PlaceholderSet,
}

impl Template {
    /// Create a template using the default `_`/`#` placeholders
    pub fn new(pattern: &str) -> Self {
        Self::with_placeholders(pattern, PlaceholderSet::default())
    }

    pub fn with_placeholders(pattern: &str, placeholders: PlaceholderSet) -> Self {
        let chars: Vec<char> = pattern.chars().collect();
        let kinds = chars
            .iter()
            .map(|&ch| {
                if placeholders.contains(ch) {
                    SlotKind::Placeholder
                } else {
                    SlotKind::Literal
                }
            })
            .collect();
        Self {
            source: pattern.to_string(),
            chars,
            kinds,
            placeholders,
        }
    }

    /// Length in characters (L)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn placeholders(&self) -> &PlaceholderSet {
        &self.placeholders
    }

    /// Template character at `pos`, None past the end
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    pub fn kind(&self, pos: usize) -> Option<SlotKind> {
        self.kinds.get(pos).copied()
    }

    pub fn is_placeholder(&self, pos: usize) -> bool {
        self.kind(pos) == Some(SlotKind::Placeholder)
    }

    /// True for literal positions; false past the end
    pub fn is_literal(&self, pos: usize) -> bool {
        self.kind(pos) == Some(SlotKind::Literal)
    }

    /// Number of user-editable positions
    pub fn placeholder_count(&self) -> usize {
        self.kinds
            .iter()
            .filter(|k| **k == SlotKind::Placeholder)
            .count()
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
