//! The mask transducer: `(DisplayState, EditIntent) -> DisplayState`.
//!
//! Every transition keeps the display exactly as long as the template. Typed
//! characters overwrite placeholder slots and never land on literals; deleted
//! slots are restored to the template's own glyph. Edits that cannot apply
//! return the normalized input unchanged.

use super::intent::EditIntent;
use super::state::DisplayState;
use super::table::MaskTable;
use super::template::Template;

/// Apply one edit intent to a display snapshot.
pub fn apply_mask(
    current: &DisplayState,
    template: &Template,
    table: &MaskTable,
    intent: EditIntent,
) -> DisplayState {
    let (mut slots, caret) = overflow_guard(current, template);
    let len = template.len();

    match intent {
        EditIntent::Insert { ch, at } => {
            let target = if template.is_placeholder(at) {
                Some(at)
            } else {
                table.next_placeholder(at)
            };
            let Some(target) = target else {
                tracing::trace!(at, "insert has no placeholder to land on");
                return DisplayState::new(collect(&slots), caret);
            };

            slots[target] = ch;

            let after = target + 1;
            let caret = if template.is_literal(after) {
                table.next_placeholder(after).unwrap_or(after)
            } else {
                after
            };
            DisplayState::new(collect(&slots), caret)
        }

        EditIntent::Delete { from } => {
            let Some(glyph) = template.char_at(from) else {
                return DisplayState::new(collect(&slots), caret);
            };

            slots[from] = glyph;

            // The caret lands one before the restored slot, so repeated
            // Backspace clears every other slot rather than the whole run.
            let caret = if template.is_literal(from) {
                table
                    .prev_placeholder(from)
                    .unwrap_or_else(|| from.saturating_sub(1))
            } else {
                from.saturating_sub(1)
            };
            DisplayState::new(collect(&slots), caret)
        }

        // Resets the whole field, not only the selected span
        EditIntent::SelectionReplace { start, .. } => {
            DisplayState::new(template.as_str(), start.min(len))
        }
    }
}

/// Bring a snapshot to exactly the template's length and clamp its caret.
///
/// Overlong text is truncated; short text is padded with the template's own
/// characters at the missing positions.
pub fn overflow_guard(current: &DisplayState, template: &Template) -> (Vec<char>, usize) {
    let len = template.len();
    let mut slots: Vec<char> = current.text.chars().take(len).collect();
    if slots.len() < len {
        slots.extend_from_slice(&template.chars()[slots.len()..]);
    }
    (slots, current.caret.min(len))
}

fn collect(slots: &[char]) -> String {
    slots.iter().collect()
}
