//! MaskedField - a host-side session that owns one field's display state.
//!
//! The field composes the masking pipeline once per edit notification:
//! classify, apply, then validate. The display always commits; validation only
//! decides whether the new value is emitted.

use std::sync::Arc;

use crate::mask::{
    apply_mask, classify_edit, DisplayState, EditIntent, MaskError, MaskPreset, MaskTable,
    RawEditEvent, Selection, Template, Validation,
};

/// Result of handling one raw edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub intent: EditIntent,
    /// Display state after the edit (already committed)
    pub state: DisplayState,
    /// The new value, when it passed validation
    pub emitted: Option<String>,
}

/// One masked input field.
#[derive(Debug, Clone)]
pub struct MaskedField {
    label: String,
    template: Arc<Template>,
    table: Arc<MaskTable>,
    validation: Validation,
    state: DisplayState,
    /// Selection active before the next edit, as reported by the host
    selection: Selection,
}

impl MaskedField {
    pub fn new(label: impl Into<String>, template: Template, validation: Validation) -> Self {
        let table = MaskTable::build(&template);
        Self::shared(label, Arc::new(template), Arc::new(table), validation)
    }

    /// Create a field over a template and table shared with other fields
    pub fn shared(
        label: impl Into<String>,
        template: Arc<Template>,
        table: Arc<MaskTable>,
        validation: Validation,
    ) -> Self {
        let state = DisplayState::from_template(&template);
        Self {
            label: label.into(),
            template,
            table,
            validation,
            state,
            selection: Selection::default(),
        }
    }

    pub fn from_preset(preset: MaskPreset) -> Self {
        Self::new(
            preset.label(),
            Template::new(preset.template()),
            Validation::lenient(preset.validation()),
        )
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn table(&self) -> &MaskTable {
        &self.table
    }

    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn caret(&self) -> usize {
        self.state.caret
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Record the host's current selection (a `select` or caret move notification)
    pub fn select(&mut self, selection: Selection) {
        let len = self.template.len();
        self.selection = Selection::new(selection.anchor.min(len), selection.head.min(len));
        if self.selection.is_empty() {
            self.state.caret = self.selection.head;
        }
    }

    /// Handle one raw edit notification.
    ///
    /// On `Err` the keystroke is ignored and the display state is unchanged.
    pub fn handle(&mut self, raw: &RawEditEvent) -> Result<EditOutcome, MaskError> {
        let intent = match classify_edit(raw, self.selection) {
            Ok(intent) => intent,
            Err(err) => {
                tracing::debug!(field = %self.label, "ignoring edit: {}", err);
                return Err(err);
            }
        };

        let next = apply_mask(&self.state, &self.template, &self.table, intent);
        tracing::debug!(
            field = %self.label,
            ?intent,
            "{:?}@{} -> {:?}@{}",
            self.state.text,
            self.state.caret,
            next.text,
            next.caret
        );

        self.state = next;
        self.selection = Selection::collapsed(self.state.caret);

        let result = self.validation.check(&self.state.text);
        let emitted = if result.accepted {
            tracing::info!(field = %self.label, value = %result.candidate, "value accepted");
            Some(result.candidate)
        } else {
            None
        };

        Ok(EditOutcome {
            intent,
            state: self.state.clone(),
            emitted,
        })
    }

    /// Template-changed notification: rebuild the table and reset the display
    pub fn set_template(&mut self, template: Template) {
        tracing::debug!(
            field = %self.label,
            from = %self.template,
            to = %template,
            "template changed"
        );
        self.table = Arc::new(MaskTable::build(&template));
        self.template = Arc::new(template);
        self.state = DisplayState::from_template(&self.template);
        self.selection = Selection::default();
    }

    pub fn set_validation(&mut self, validation: Validation) {
        self.validation = validation;
    }
}
