//! Input-masking core.
//!
//! A masked input shows a fixed-length template such as `(###) ###-####` and only
//! lets the user fill the placeholder slots. Each keystroke flows through a pure
//! pipeline:
//!
//! - [`classify_edit`]: raw edit event + prior selection -> [`EditIntent`]
//! - [`apply_mask`]: current [`DisplayState`] + intent -> new [`DisplayState`]
//! - [`validate`]: regex predicate over the new text, gating the emitted value
//!
//! [`Template`] and its [`MaskTable`] are immutable after construction and can be
//! shared between any number of fields.
//!
//! # Example
//!
//! ```
//! use maskline::mask::{apply_mask, DisplayState, EditIntent, MaskTable, Template};
//!
//! let template = Template::new("__/__/____");
//! let table = MaskTable::build(&template);
//!
//! let state = DisplayState::from_template(&template);
//! let state = apply_mask(&state, &template, &table, EditIntent::Insert { ch: '1', at: 0 });
//! let state = apply_mask(&state, &template, &table, EditIntent::Insert { ch: '2', at: 1 });
//!
//! assert_eq!(state.text, "12/__/____");
//! assert_eq!(state.caret, 3);
//! ```

mod error;
mod intent;
mod presets;
mod selection;
mod state;
mod table;
mod template;
mod transducer;
mod validate;

pub use error::MaskError;
pub use intent::{classify_edit, EditIntent, RawEditEvent, RawEditKind};
pub use presets::MaskPreset;
pub use selection::Selection;
pub use state::DisplayState;
pub use table::MaskTable;
pub use template::{PlaceholderSet, SlotKind, Template, DEFAULT_PLACEHOLDERS};
pub use transducer::{apply_mask, overflow_guard};
pub use validate::{validate, Validation, ValidationResult};
