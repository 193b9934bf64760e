//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use maskline::mask::{apply_mask, DisplayState, EditIntent, MaskTable, Template};

/// Template plus its table, built once per test
pub struct Mask {
    pub template: Template,
    pub table: MaskTable,
}

impl Mask {
    pub fn new(pattern: &str) -> Self {
        let template = Template::new(pattern);
        let table = MaskTable::build(&template);
        Self { template, table }
    }

    pub fn pristine(&self) -> DisplayState {
        DisplayState::from_template(&self.template)
    }

    pub fn apply(&self, state: &DisplayState, intent: EditIntent) -> DisplayState {
        apply_mask(state, &self.template, &self.table, intent)
    }

    /// Type each char at the current caret, threading the state through
    pub fn type_str(&self, state: &DisplayState, text: &str) -> DisplayState {
        text.chars().fold(state.clone(), |state, ch| {
            let at = state.caret;
            self.apply(&state, EditIntent::Insert { ch, at })
        })
    }
}

/// Templates used by the property-style tests
pub const TEMPLATES: &[&str] = &[
    "(###) ###-####",
    "__/__/____",
    "#### #### #### ####",
    "___",
    "-_-",
    "ABC",
    "",
];
