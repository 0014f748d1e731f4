//! Flow transition function
//!
//! Implements a deterministic finite state machine over the question
//! screens:
//! - Safety: `step` stays within `0..=N`
//! - Determinism: unique next state per (phase, event)
//! - Termination: `Submitted` is absorbing for the session

use crate::catalog::Catalog;
use crate::errors::{QuizError, Result};
use crate::flow::state::{FlowPhase, SessionState};

/// Events that drive the page flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// Leave the start page for question 1
    Start,

    /// Record the current question's answer and advance one screen
    Next { value: String },

    /// Return to the previous question; its old answer is retained
    Back,

    /// Record the final answer and submit the questionnaire
    Submit { value: String },
}

impl FlowEvent {
    /// Event name for error reporting
    pub fn name(&self) -> &'static str {
        match self {
            FlowEvent::Start => "Start",
            FlowEvent::Next { .. } => "Next",
            FlowEvent::Back => "Back",
            FlowEvent::Submit { .. } => "Submit",
        }
    }
}

/// Attempt a flow transition
///
/// Transition table (N = question count):
/// 1. Start      --Start-->     Asking(1)    (answers cleared)
/// 2. Asking(i)  --Next(v)-->   Asking(i+1)  for i < N, v in domain(i)
/// 3. Asking(i)  --Back-->      Asking(i-1)  for i > 1
/// 4. Asking(N)  --Submit(v)--> Submitted    v in domain(N), all N present
/// 5. Submitted  --*-->         Submitted    (absorbing self-loop)
///
/// Everything else is rejected; on any `Err` the caller keeps the old
/// state, which is never mutated in place. Domain checks are delegated
/// to the catalog, so the machine itself carries no question knowledge.
pub fn advance(catalog: &Catalog, state: &SessionState, event: &FlowEvent) -> Result<SessionState> {
    let n = catalog.len();

    match (state.phase(), event) {
        // Result view re-renders on any further navigation
        (FlowPhase::Submitted, _) => Ok(state.clone()),

        (FlowPhase::Start, FlowEvent::Start) => {
            let mut next = SessionState::new();
            next.step = 1;
            Ok(next)
        }

        (FlowPhase::Asking(i), FlowEvent::Next { value }) if i < n => {
            let question = expect_question(catalog, i)?;
            question.validate(value)?;

            let mut next = state.clone();
            next.answers
                .insert(question.key.to_string(), value.trim().to_string());
            next.step = i + 1;
            Ok(next)
        }

        (FlowPhase::Asking(i), FlowEvent::Back) if i > 1 => {
            let mut next = state.clone();
            next.step = i - 1;
            Ok(next)
        }

        (FlowPhase::Asking(i), FlowEvent::Submit { value }) if i == n => {
            let question = expect_question(catalog, i)?;
            question.validate(value)?;

            let mut next = state.clone();
            next.answers
                .insert(question.key.to_string(), value.trim().to_string());

            let missing = missing_count(catalog, &next);
            if missing > 0 {
                return Err(QuizError::IncompleteSubmission { missing });
            }

            next.submitted = true;
            Ok(next)
        }

        // Submitting early is always an incomplete submission
        (FlowPhase::Asking(i), FlowEvent::Submit { .. }) => {
            Err(QuizError::IncompleteSubmission { missing: n - i })
        }

        (phase, event) => Err(QuizError::Transition {
            from: phase.display_name(),
            event: event.name().to_string(),
        }),
    }
}

/// Count catalog keys with no recorded answer
pub fn missing_count(catalog: &Catalog, state: &SessionState) -> usize {
    catalog
        .iter()
        .filter(|q| !state.answers.contains_key(q.key))
        .count()
}

fn expect_question(
    catalog: &Catalog,
    step: usize,
) -> Result<&'static crate::catalog::QuestionSpec> {
    catalog.question(step).ok_or_else(|| QuizError::Transition {
        from: format!("Question {}", step),
        event: "out-of-range step".to_string(),
    })
}
