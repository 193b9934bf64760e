//! Edit classification: raw input events into normalized edit intents.
//!
//! The host reports what the native text input did (the `inputType` of a DOM
//! `input` event, the inserted text, and the caret range after the edit). The
//! classifier combines that with the selection that was active before the edit
//! and decides what the user meant.

use std::str::FromStr;

use super::error::MaskError;
use super::selection::Selection;

/// Raw edit kind as reported by the host input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawEditKind {
    /// `insertText`: one typed character
    InsertText,
    /// `deleteContentBackward`: Backspace
    DeleteContentBackward,
    /// `deleteContentForward`: Delete
    DeleteContentForward,
    /// Anything else (paste, drop, word deletion, composition...)
    Other(String),
}

impl RawEditKind {
    /// Parse a DOM `inputType` string. Never fails: unknown kinds become `Other`.
    pub fn from_input_type(input_type: &str) -> Self {
        match input_type {
            "insertText" => RawEditKind::InsertText,
            "deleteContentBackward" => RawEditKind::DeleteContentBackward,
            "deleteContentForward" => RawEditKind::DeleteContentForward,
            other => RawEditKind::Other(other.to_string()),
        }
    }

    pub fn as_input_type(&self) -> &str {
        match self {
            RawEditKind::InsertText => "insertText",
            RawEditKind::DeleteContentBackward => "deleteContentBackward",
            RawEditKind::DeleteContentForward => "deleteContentForward",
            RawEditKind::Other(other) => other,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, RawEditKind::InsertText)
    }

    pub fn is_delete(&self) -> bool {
        matches!(
            self,
            RawEditKind::DeleteContentBackward | RawEditKind::DeleteContentForward
        )
    }
}

impl FromStr for RawEditKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_input_type(s))
    }
}

/// One raw edit notification from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEditEvent {
    pub kind: RawEditKind,
    /// Inserted text, for insert kinds
    pub data: Option<String>,
    /// Caret/selection range reported after the native edit was applied
    pub selection: Selection,
}

impl RawEditEvent {
    /// Typed `ch`, native caret now at `caret_after`
    pub fn insert(ch: char, caret_after: usize) -> Self {
        Self {
            kind: RawEditKind::InsertText,
            data: Some(ch.to_string()),
            selection: Selection::collapsed(caret_after),
        }
    }

    /// Backspace, native caret now at `caret_after`
    pub fn delete_backward(caret_after: usize) -> Self {
        Self {
            kind: RawEditKind::DeleteContentBackward,
            data: None,
            selection: Selection::collapsed(caret_after),
        }
    }

    /// Forward delete, native caret now at `caret_after`
    pub fn delete_forward(caret_after: usize) -> Self {
        Self {
            kind: RawEditKind::DeleteContentForward,
            data: None,
            selection: Selection::collapsed(caret_after),
        }
    }
}

/// Normalized description of a single user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditIntent {
    /// Character typed with the caret at `at`
    Insert { ch: char, at: usize },
    /// Character removed at `from`
    Delete { from: usize },
    /// A highlighted span `[start, end)` was overwritten or cleared
    SelectionReplace { start: usize, end: usize },
}

/// Classify a raw edit against the selection that was active before it.
///
/// Only single-character edits are supported; anything else is rejected with
/// [`MaskError::UnsupportedEdit`] and the host should leave its state alone.
pub fn classify_edit(raw: &RawEditEvent, prior: Selection) -> Result<EditIntent, MaskError> {
    if !raw.kind.is_insert() && !raw.kind.is_delete() {
        return Err(MaskError::UnsupportedEdit(
            raw.kind.as_input_type().to_string(),
        ));
    }

    if !prior.is_empty() {
        return Ok(EditIntent::SelectionReplace {
            start: prior.start(),
            end: prior.end(),
        });
    }

    let reported = raw.selection.start();

    if raw.kind.is_insert() {
        let data = raw.data.as_deref().unwrap_or_default();
        let mut chars = data.chars();
        return match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(EditIntent::Insert {
                ch,
                at: reported.saturating_sub(1),
            }),
            (None, _) => Err(MaskError::UnsupportedEdit(
                "insertText without data".to_string(),
            )),
            (Some(_), Some(_)) => Err(MaskError::UnsupportedEdit(format!(
                "multi-character insert of {} chars",
                data.chars().count()
            ))),
        };
    }

    // Delete kinds from here on
    if !raw.selection.is_empty() || prior.start().abs_diff(reported) > 1 {
        return Err(MaskError::UnsupportedEdit(format!(
            "multi-character delete from {} to {}",
            prior.start(),
            reported
        )));
    }

    Ok(EditIntent::Delete { from: reported })
}
