//! Integration tests for the shapecheck questionnaire
//!
//! Exercises the full path from raw answers through the flow machine,
//! the answer mapper, a stub classifier, and the result presenter.

use shapecheck::advice::AdviceTable;
use shapecheck::catalog::Catalog;
use shapecheck::errors::QuizError;
use shapecheck::flow::{advance, FlowEvent, FlowPhase, SessionState};
use shapecheck::mapper::{map_answers, FeatureVector};
use shapecheck::predict::{self, PredictionResult, Predictor, TreeModel};
use shapecheck::present::present;
use std::cell::Cell;
use std::path::Path;

/// Valid answers in catalog order
const ANSWERS: [&str; 15] = [
    "Male", "25", "1.75", "95", "yes", "yes", "2.0", "3.0", "Sometimes", "no", "2.0", "no", "1.0",
    "1.0", "Sometimes",
];

/// Stub classifier with an invocation counter
struct StubPredictor {
    label: &'static str,
    calls: Cell<usize>,
}

impl StubPredictor {
    fn new(label: &'static str) -> Self {
        StubPredictor {
            label,
            calls: Cell::new(0),
        }
    }
}

impl Predictor for StubPredictor {
    fn predict(&self, _vector: &FeatureVector) -> shapecheck::Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.label.to_string())
    }
}

/// Walk the whole questionnaire and submit
fn submitted_state(catalog: &Catalog) -> SessionState {
    let mut state = advance(catalog, &SessionState::new(), &FlowEvent::Start).unwrap();
    for value in &ANSWERS[..14] {
        state = advance(
            catalog,
            &state,
            &FlowEvent::Next {
                value: value.to_string(),
            },
        )
        .unwrap();
    }
    advance(
        catalog,
        &state,
        &FlowEvent::Submit {
            value: ANSWERS[14].to_string(),
        },
    )
    .unwrap()
}

#[test]
fn test_full_walk_reaches_submitted() {
    let catalog = Catalog::new();
    let state = submitted_state(&catalog);

    assert_eq!(state.phase(), FlowPhase::Submitted);
    assert_eq!(state.step, catalog.len());
    assert_eq!(state.answers.len(), catalog.len());
}

#[test]
fn test_end_to_end_scenario() {
    let catalog = Catalog::new();
    let state = submitted_state(&catalog);

    // Mapping produces the exact encoding the model was trained on
    let vector = map_answers(&state.answers).unwrap();
    assert_eq!(
        vector,
        FeatureVector {
            gender: 1,
            age: 25,
            height: 1.75,
            weight: 95.0,
            family_history: 1,
            favc: 1,
            fcvc: 2.0,
            ncp: 3.0,
            caec: 0,
            smoke: 0,
            ch2o: 2.0,
            scc: 0,
            faf: 1.0,
            tue: 1.0,
            calc: 0,
        }
    );

    // A stub classifier's label flows through to the display model
    let stub = StubPredictor::new("Obesity_Type_I");
    let result = predict::invoke(&stub, &state.answers).unwrap();
    assert_eq!(result.label, "Obesity_Type_I");

    let advice = AdviceTable::builtin();
    let model = present(&result, &advice);
    assert_eq!(model.label, "Obesity_Type_I");
    assert_eq!(model.rows.len(), 15);

    // Advice sections come through verbatim
    let expected = advice.lookup("Obesity_Type_I").unwrap();
    let shown = model.advice.expect("advice for a covered label");
    assert_eq!(shown.prevention, expected.prevention);
    assert_eq!(shown.lifestyle, expected.lifestyle);
    assert_eq!(shown.checkups, expected.checkups);
}

#[test]
fn test_submit_is_invoked_at_most_once() {
    let catalog = Catalog::new();
    let state = submitted_state(&catalog);
    let stub = StubPredictor::new("Normal_Weight");

    // The flow machine absorbs repeated submits without effect
    let again = advance(
        &catalog,
        &state,
        &FlowEvent::Submit {
            value: ANSWERS[14].to_string(),
        },
    )
    .unwrap();
    assert_eq!(again, state);

    // The driver contract: invoke once, reuse the result
    let first: PredictionResult = predict::invoke(&stub, &state.answers).unwrap();
    assert_eq!(stub.calls.get(), 1);
    let second = first.clone();
    assert_eq!(first, second);
}

#[test]
fn test_incomplete_submission_rejected() {
    let catalog = Catalog::new();
    let mut state = submitted_state(&catalog);
    state.submitted = false;
    state.answers.remove("FAVC");

    let before_step = state.step;
    let err = advance(
        &catalog,
        &state,
        &FlowEvent::Submit {
            value: ANSWERS[14].to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        QuizError::IncompleteSubmission { missing: 1 }
    ));
    assert_eq!(state.step, before_step);
}

#[test]
fn test_out_of_domain_answer_keeps_state() {
    let catalog = Catalog::new();
    let state = advance(&catalog, &SessionState::new(), &FlowEvent::Start).unwrap();

    let err = advance(
        &catalog,
        &state,
        &FlowEvent::Next {
            value: "Unknown".to_string(),
        },
    )
    .unwrap_err();

    assert!(matches!(err, QuizError::InvalidInput { .. }));
    assert_eq!(state.step, 1);
    assert!(state.answers.is_empty());
}

#[test]
fn test_shipped_artifact_classifies_scenario() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/obesity_cart.json");
    let model = TreeModel::load(&path).unwrap();

    let catalog = Catalog::new();
    let state = submitted_state(&catalog);
    let result = predict::invoke(&model, &state.answers).unwrap();

    assert_eq!(result.label, "Obesity_Type_I");
}

#[test]
fn test_shipped_artifact_covers_all_advice_labels() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/obesity_cart.json");
    let model = TreeModel::load(&path).unwrap();
    let advice = AdviceTable::builtin();

    let catalog = Catalog::new();
    let mut state = submitted_state(&catalog);

    // Sweep weights across the tall branch; every label the tree emits
    // must have advice
    for weight in [40, 60, 80, 90, 100, 110, 130] {
        state
            .answers
            .insert("Weight".to_string(), weight.to_string());
        let result = predict::invoke(&model, &state.answers).unwrap();
        assert!(
            advice.lookup(&result.label).is_some(),
            "no advice for predicted label {}",
            result.label
        );
    }
}
