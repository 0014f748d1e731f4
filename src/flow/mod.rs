//! Page-flow state machine for the questionnaire
//!
//! Sequences the fifteen question screens with forward/back navigation
//! and a gated transition into the submitted result view. The machine is
//! a pure transition function over an explicit session state; per-question
//! validation lives in the catalog, never here.

pub mod machine;
pub mod state;

pub use machine::{advance, FlowEvent};
pub use state::{FlowPhase, SessionState};
