//! Caret/selection range within a single-line masked input.

use serde::{Deserialize, Serialize};

/// A selection with anchor (start point) and head (caret position), both char offsets.
/// The anchor stays fixed while the head moves during selection extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub head: usize,
}

impl Selection {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    /// Check if selection is empty (anchor == head)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Lower bound of the range
    pub fn start(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Upper bound of the range (exclusive)
    pub fn end(&self) -> usize {
        self.anchor.max(self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!((sel.start(), sel.end()), (5, 5));
    }

    #[test]
    fn test_selection_start_end() {
        let forward = Selection::new(0, 5);
        assert_eq!(forward.start(), 0);
        assert_eq!(forward.end(), 5);

        // Shift+Left selections report head before anchor
        let backward = Selection::new(5, 0);
        assert_eq!(backward.start(), 0);
        assert_eq!(backward.end(), 5);
        assert!(!backward.is_empty());
    }
}
