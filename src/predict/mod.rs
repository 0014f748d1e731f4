//! Prediction invoker wrapping the pre-trained classifier
//!
//! The classifier is an opaque, already-fitted collaborator loaded once
//! at process start. The core only depends on the `Predictor` trait;
//! `TreeModel` is the production adapter for the serialized artifact.

pub mod model;

pub use model::TreeModel;

use crate::errors::Result;
use crate::mapper::FeatureVector;
use serde::Serialize;
use std::collections::HashMap;

/// The closed set of categories the classifier can emit
pub const CATEGORY_LABELS: [&str; 7] = [
    "Insufficient_Weight",
    "Normal_Weight",
    "Overweight_Level_I",
    "Overweight_Level_II",
    "Obesity_Type_I",
    "Obesity_Type_II",
    "Obesity_Type_III",
];

/// Check whether a label belongs to the closed category set
pub fn is_known_label(label: &str) -> bool {
    CATEGORY_LABELS.contains(&label)
}

/// Single-record, synchronous classifier interface
pub trait Predictor {
    /// Classify one feature record into a category label
    fn predict(&self, vector: &FeatureVector) -> Result<String>;
}

/// Outcome of one submission: predicted label plus the exact model input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: String,
    pub input_echo: FeatureVector,
}

/// Map a fully-collected answer set and run inference once
///
/// Fails with `AnswerMapping` when the answers are not a complete,
/// parsable catalog match and with `Prediction` when the classifier
/// itself faults. Neither failure is fatal to the process.
pub fn invoke(
    predictor: &dyn Predictor,
    answers: &HashMap<String, String>,
) -> Result<PredictionResult> {
    let vector = crate::mapper::map_answers(answers)?;
    let label = predictor.predict(&vector)?;
    Ok(PredictionResult {
        label,
        input_echo: vector,
    })
}
