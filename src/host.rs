//! A simulated host text input.
//!
//! [`HostInput`] behaves like a plain single-line browser input: it applies each
//! keystroke natively and reports what happened as a [`RawEditEvent`]. An
//! [`InputSession`] wires it to a [`MaskedField`] the way a masking directive
//! would, writing the masked value and caret back into the input after every
//! edit.
//!
//! Only keystrokes and pastes are modelled. Drag and drop is not suppressed at
//! `dragstart`; a dropped edit reaches the field as `insertFromDrop` and is
//! rejected like any other unsupported kind.

use crate::field::{EditOutcome, MaskedField};
use crate::mask::{DisplayState, MaskError, RawEditEvent, RawEditKind, Selection};
use crate::messages::InputMsg;

/// What the native input did with a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostReaction {
    /// The text changed; an `input` event fired
    Edited(RawEditEvent),
    /// Only the caret or selection moved
    Selected(Selection),
    /// Nothing happened (e.g. Backspace at position 0)
    Ignored,
}

/// Native single-line text input state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInput {
    chars: Vec<char>,
    selection: Selection,
}

impl HostInput {
    pub fn new(value: &str) -> Self {
        Self {
            chars: value.chars().collect(),
            selection: Selection::default(),
        }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Overwrite value and caret (what a masking directive does after each edit)
    pub fn sync(&mut self, state: &DisplayState) {
        self.chars = state.text.chars().collect();
        self.selection = Selection::collapsed(state.caret.min(self.chars.len()));
    }

    /// Apply a keystroke natively.
    pub fn apply(&mut self, msg: &InputMsg) -> HostReaction {
        let len = self.chars.len();
        match msg {
            InputMsg::Type(ch) => {
                let start = self.remove_selection();
                self.chars.insert(start, *ch);
                self.selection = Selection::collapsed(start + 1);
                HostReaction::Edited(RawEditEvent::insert(*ch, start + 1))
            }
            InputMsg::Paste(text) => {
                let start = self.remove_selection();
                for (i, ch) in text.chars().enumerate() {
                    self.chars.insert(start + i, ch);
                }
                let caret = start + text.chars().count();
                self.selection = Selection::collapsed(caret);
                HostReaction::Edited(RawEditEvent {
                    kind: RawEditKind::from_input_type("insertFromPaste"),
                    data: Some(text.clone()),
                    selection: self.selection,
                })
            }
            InputMsg::DeleteBackward => {
                if !self.selection.is_empty() {
                    let start = self.remove_selection();
                    return HostReaction::Edited(RawEditEvent::delete_backward(start));
                }
                let caret = self.selection.head;
                if caret == 0 {
                    return HostReaction::Ignored;
                }
                self.chars.remove(caret - 1);
                self.selection = Selection::collapsed(caret - 1);
                HostReaction::Edited(RawEditEvent::delete_backward(caret - 1))
            }
            InputMsg::DeleteForward => {
                if !self.selection.is_empty() {
                    let start = self.remove_selection();
                    return HostReaction::Edited(RawEditEvent::delete_forward(start));
                }
                let caret = self.selection.head;
                if caret >= len {
                    return HostReaction::Ignored;
                }
                self.chars.remove(caret);
                HostReaction::Edited(RawEditEvent::delete_forward(caret))
            }
            InputMsg::MoveLeft => self.move_to(self.selection.head.saturating_sub(1)),
            InputMsg::MoveRight => self.move_to(self.selection.head + 1),
            InputMsg::MoveHome => self.move_to(0),
            InputMsg::MoveEnd => self.move_to(len),
            InputMsg::MoveTo(pos) => self.move_to(*pos),
            InputMsg::Select(anchor, head) => {
                self.selection = Selection::new((*anchor).min(len), (*head).min(len));
                HostReaction::Selected(self.selection)
            }
        }
    }

    fn move_to(&mut self, pos: usize) -> HostReaction {
        self.selection = Selection::collapsed(pos.min(self.chars.len()));
        HostReaction::Selected(self.selection)
    }

    /// Remove the selected span (if any) and return where the caret lands
    fn remove_selection(&mut self) -> usize {
        let start = self.selection.start();
        let end = self.selection.end().min(self.chars.len());
        if start < end {
            self.chars.drain(start..end);
        }
        self.selection = Selection::collapsed(start);
        start
    }
}

/// Result of one keystroke through an [`InputSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Caret or selection moved
    Moved(Selection),
    /// The field processed an edit
    Edited(EditOutcome),
    /// The field rejected the edit; the input was restored
    Rejected(MaskError),
    /// The input did nothing
    Ignored,
}

/// A host input driving a masked field.
#[derive(Debug, Clone)]
pub struct InputSession {
    host: HostInput,
    field: MaskedField,
}

impl InputSession {
    pub fn new(field: MaskedField) -> Self {
        let mut host = HostInput::default();
        host.sync(field.state());
        Self { host, field }
    }

    pub fn field(&self) -> &MaskedField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut MaskedField {
        &mut self.field
    }

    pub fn host(&self) -> &HostInput {
        &self.host
    }

    /// Feed one keystroke through the input and the field.
    pub fn press(&mut self, msg: &InputMsg) -> SessionEvent {
        match self.host.apply(msg) {
            HostReaction::Ignored => SessionEvent::Ignored,
            HostReaction::Selected(selection) => {
                self.field.select(selection);
                SessionEvent::Moved(selection)
            }
            HostReaction::Edited(raw) => {
                let result = self.field.handle(&raw);
                self.host.sync(self.field.state());
                match result {
                    Ok(outcome) => SessionEvent::Edited(outcome),
                    Err(err) => SessionEvent::Rejected(err),
                }
            }
        }
    }

    /// Feed a sequence of keystrokes, collecting every emitted value.
    pub fn press_all<'a>(&mut self, msgs: impl IntoIterator<Item = &'a InputMsg>) -> Vec<String> {
        let mut emitted = Vec::new();
        for msg in msgs {
            if let SessionEvent::Edited(outcome) = self.press(msg) {
                emitted.extend(outcome.emitted);
            }
        }
        emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::MaskPreset;

    #[test]
    fn test_native_insert() {
        let mut host = HostInput::new("ab");
        host.apply(&InputMsg::MoveTo(1));
        let reaction = host.apply(&InputMsg::Type('x'));
        assert_eq!(reaction, HostReaction::Edited(RawEditEvent::insert('x', 2)));
        assert_eq!(host.value(), "axb");
    }

    #[test]
    fn test_native_backspace_at_start_is_ignored() {
        let mut host = HostInput::new("ab");
        assert_eq!(host.apply(&InputMsg::DeleteBackward), HostReaction::Ignored);
    }

    #[test]
    fn test_native_delete_at_end_is_ignored() {
        let mut host = HostInput::new("ab");
        host.apply(&InputMsg::MoveEnd);
        assert_eq!(host.apply(&InputMsg::DeleteForward), HostReaction::Ignored);
    }

    #[test]
    fn test_native_selection_delete() {
        let mut host = HostInput::new("abcdef");
        host.apply(&InputMsg::Select(4, 1));
        let reaction = host.apply(&InputMsg::DeleteBackward);
        assert_eq!(reaction, HostReaction::Edited(RawEditEvent::delete_backward(1)));
        assert_eq!(host.value(), "aef");
    }

    #[test]
    fn test_session_types_phone_number() {
        let mut session = InputSession::new(MaskedField::from_preset(MaskPreset::PhoneNumber));
        let msgs: Vec<InputMsg> = "5551234567".chars().map(InputMsg::Type).collect();
        let emitted = session.press_all(&msgs);

        assert_eq!(session.host().value(), "(555) 123-4567");
        assert_eq!(session.host().selection(), Selection::collapsed(14));
        assert_eq!(emitted, vec!["(555) 123-4567".to_string()]);
    }

    #[test]
    fn test_session_restores_input_after_rejected_paste() {
        let mut session = InputSession::new(MaskedField::from_preset(MaskPreset::Date));
        let event = session.press(&InputMsg::Paste("1231".to_string()));
        assert!(matches!(event, SessionEvent::Rejected(MaskError::UnsupportedEdit(_))));
        assert_eq!(session.host().value(), "__/__/____");
    }

    #[test]
    fn test_dropped_text_is_rejected() {
        let mut field = MaskedField::from_preset(MaskPreset::Date);
        let raw = RawEditEvent {
            kind: RawEditKind::from_input_type("insertFromDrop"),
            data: Some("12".to_string()),
            selection: Selection::collapsed(2),
        };
        assert_eq!(
            field.handle(&raw),
            Err(MaskError::UnsupportedEdit("insertFromDrop".to_string()))
        );
        assert_eq!(field.text(), "__/__/____");
    }

    #[test]
    fn test_session_selection_reset() {
        let mut session = InputSession::new(MaskedField::from_preset(MaskPreset::Date));
        let msgs: Vec<InputMsg> = "1231".chars().map(InputMsg::Type).collect();
        session.press_all(&msgs);
        session.press(&InputMsg::Select(3, 5));
        session.press(&InputMsg::Type('7'));
        assert_eq!(session.host().value(), "__/__/____");
        assert_eq!(session.field().caret(), 3);
    }
}
