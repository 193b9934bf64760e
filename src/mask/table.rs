//! Precomputed nearest-placeholder lookups used to skip literals.

use super::template::Template;

/// Nearest placeholder lookups for every template position.
///
/// Placeholder positions map to themselves. A literal position maps forward to
/// the first placeholder at or after it and backward to the last placeholder at
/// or before it. Built once per template and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTable {
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
}

impl MaskTable {
    pub fn build(template: &Template) -> Self {
        let len = template.len();
        let mut next = vec![None; len];
        let mut prev = vec![None; len];

        let mut upcoming = None;
        for pos in (0..len).rev() {
            if template.is_placeholder(pos) {
                upcoming = Some(pos);
            }
            next[pos] = upcoming;
        }

        let mut last = None;
        for pos in 0..len {
            if template.is_placeholder(pos) {
                last = Some(pos);
            }
            prev[pos] = last;
        }

        Self { next, prev }
    }

    /// Number of positions covered (equals the template length)
    pub fn len(&self) -> usize {
        self.next.len()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// First placeholder at or after `pos`
    pub fn next_placeholder(&self, pos: usize) -> Option<usize> {
        self.next.get(pos).copied().flatten()
    }

    /// Last placeholder at or before `pos`
    pub fn prev_placeholder(&self, pos: usize) -> Option<usize> {
        self.prev.get(pos).copied().flatten()
    }
}
