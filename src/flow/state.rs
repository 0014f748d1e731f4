//! Session state and derived flow phase
//!
//! One `SessionState` value per user traversal; destroyed when the
//! session ends. No persistence.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Accumulated questionnaire state for a single session
///
/// Invariant: `0 <= step <= question count`; `submitted` is true only
/// when `step` equals the question count and every question key has a
/// recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current screen: 0 = start page, 1..=N = question screens
    pub step: usize,

    /// Raw answers keyed by question key
    pub answers: HashMap<String, String>,

    /// Set once the submit transition has been accepted
    pub submitted: bool,
}

impl SessionState {
    /// Fresh session at the start page
    pub fn new() -> Self {
        SessionState {
            step: 0,
            answers: HashMap::new(),
            submitted: false,
        }
    }

    /// Derive the flow phase from the raw state
    pub fn phase(&self) -> FlowPhase {
        if self.submitted {
            FlowPhase::Submitted
        } else if self.step == 0 {
            FlowPhase::Start
        } else {
            FlowPhase::Asking(self.step)
        }
    }

    /// Recorded answer for a question key, if any
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Flow phases derived from `SessionState`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowPhase {
    /// Start page, nothing asked yet
    Start,

    /// Question screen `i` (1-based)
    Asking(usize),

    /// Result view; terminal for the session
    Submitted,
}

impl FlowPhase {
    /// Check if this is a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowPhase::Submitted)
    }

    /// Human-readable phase name
    pub fn display_name(&self) -> String {
        match self {
            FlowPhase::Start => "Start".to_string(),
            FlowPhase::Asking(i) => format!("Question {}", i),
            FlowPhase::Submitted => "Submitted".to_string(),
        }
    }
}
