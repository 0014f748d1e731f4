//! Property-based tests for the page-flow state machine

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shapecheck::catalog::{Catalog, QuestionKind};
use shapecheck::flow::{advance, FlowEvent, SessionState};

/// Navigation attempts a user could make at any point
#[derive(Clone, Debug)]
enum Action {
    Next,
    Back,
    Submit,
}

impl Arbitrary for Action {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 4 {
            0 => Action::Back,
            1 => Action::Submit,
            _ => Action::Next,
        }
    }
}

/// A value inside the current question's domain, if any question is live
fn valid_answer(catalog: &Catalog, step: usize) -> String {
    match catalog.question(step) {
        Some(question) => match question.kind {
            QuestionKind::Choice { options } => options[0].to_string(),
            QuestionKind::Numeric { min, .. } => format!("{}", min),
        },
        None => String::new(),
    }
}

#[quickcheck]
fn prop_step_stays_in_bounds(actions: Vec<Action>) -> bool {
    let catalog = Catalog::new();
    let mut state = advance(&catalog, &SessionState::new(), &FlowEvent::Start).unwrap();

    for action in actions {
        let event = match action {
            Action::Next => FlowEvent::Next {
                value: valid_answer(&catalog, state.step),
            },
            Action::Back => FlowEvent::Back,
            Action::Submit => FlowEvent::Submit {
                value: valid_answer(&catalog, state.step),
            },
        };

        // Rejected transitions leave the state untouched
        if let Ok(next) = advance(&catalog, &state, &event) {
            state = next;
        }

        if state.step == 0 || state.step > catalog.len() {
            return false;
        }
        if state.submitted && state.answers.len() != catalog.len() {
            return false;
        }
    }
    true
}

#[quickcheck]
fn prop_advance_is_deterministic(actions: Vec<Action>) -> bool {
    let catalog = Catalog::new();
    let mut a = advance(&catalog, &SessionState::new(), &FlowEvent::Start).unwrap();
    let mut b = a.clone();

    for action in actions {
        let event = match action {
            Action::Next => FlowEvent::Next {
                value: valid_answer(&catalog, a.step),
            },
            Action::Back => FlowEvent::Back,
            Action::Submit => FlowEvent::Submit {
                value: valid_answer(&catalog, a.step),
            },
        };

        match (
            advance(&catalog, &a, &event),
            advance(&catalog, &b, &event),
        ) {
            (Ok(next_a), Ok(next_b)) => {
                if next_a != next_b {
                    return false;
                }
                a = next_a;
                b = next_b;
            }
            (Err(_), Err(_)) => {}
            _ => return false,
        }
    }
    true
}

#[test]
fn test_n_consecutive_nexts_reach_step_n() {
    let catalog = Catalog::new();
    let mut state = advance(&catalog, &SessionState::new(), &FlowEvent::Start).unwrap();

    // After k valid forward moves the machine sits on screen k + 1
    for k in 1..catalog.len() {
        state = advance(
            &catalog,
            &state,
            &FlowEvent::Next {
                value: valid_answer(&catalog, state.step),
            },
        )
        .unwrap();
        assert_eq!(state.step, k + 1);
    }
    assert_eq!(state.step, catalog.len());
}
