//! maskline - fixed-template input masking
//!
//! This crate provides the masking core (template tables, edit classification,
//! caret-aware transduction and validation) plus a host-side field session, a
//! simulated text input for driving it, and configuration for named fields.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod field;
pub mod host;
pub mod mask;
pub mod messages;
pub mod tracing;

// Re-export commonly used types
pub use config::MaskConfig;
pub use field::{EditOutcome, MaskedField};
pub use host::{HostInput, InputSession, SessionEvent};
pub use mask::{DisplayState, EditIntent, MaskError, MaskTable, Template};
pub use messages::InputMsg;
