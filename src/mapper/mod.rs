//! Answer mapper: raw questionnaire answers to model features
//!
//! Pure, stateless translation from the string answers collected by the
//! flow into the fixed 15-field encoding the trained classifier expects.

use crate::errors::{QuizError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Fixed-order numeric record matching the classifier's input schema
///
/// Field order mirrors the question catalog; serialized names are the
/// feature names the model was trained against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    #[serde(rename = "Gender")]
    pub gender: u8,
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Weight")]
    pub weight: f64,
    #[serde(rename = "family_history_with_overweight")]
    pub family_history: u8,
    #[serde(rename = "FAVC")]
    pub favc: u8,
    #[serde(rename = "FCVC")]
    pub fcvc: f64,
    #[serde(rename = "NCP")]
    pub ncp: f64,
    #[serde(rename = "CAEC")]
    pub caec: u8,
    #[serde(rename = "SMOKE")]
    pub smoke: u8,
    #[serde(rename = "CH2O")]
    pub ch2o: f64,
    #[serde(rename = "SCC")]
    pub scc: u8,
    #[serde(rename = "FAF")]
    pub faf: f64,
    #[serde(rename = "TUE")]
    pub tue: f64,
    #[serde(rename = "CALC")]
    pub calc: u8,
}

/// Feature names in model order
pub const FEATURE_NAMES: [&str; 15] = [
    "Gender",
    "Age",
    "Height",
    "Weight",
    "family_history_with_overweight",
    "FAVC",
    "FCVC",
    "NCP",
    "CAEC",
    "SMOKE",
    "CH2O",
    "SCC",
    "FAF",
    "TUE",
    "CALC",
];

impl FeatureVector {
    /// Feature values as an `f64` row in model order
    pub fn as_row(&self) -> [f64; 15] {
        [
            f64::from(self.gender),
            f64::from(self.age),
            self.height,
            self.weight,
            f64::from(self.family_history),
            f64::from(self.favc),
            self.fcvc,
            self.ncp,
            f64::from(self.caec),
            f64::from(self.smoke),
            self.ch2o,
            f64::from(self.scc),
            self.faf,
            self.tue,
            f64::from(self.calc),
        ]
    }

    /// (name, rendered value) pairs in model order, for the echo table
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let row = self.as_row();
        FEATURE_NAMES
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (*name, format!("{}", value)))
            .collect()
    }
}

/// Encode a four-valued frequency answer (CAEC, CALC)
///
/// The code assignment is intentionally non-monotonic; it is the exact
/// encoding the classifier was trained against and must not be reordered.
/// Unrecognized values fall back to the `no` code (3), a documented
/// business rule rather than an error path.
pub fn ordinal_code(value: &str) -> u8 {
    match value {
        "Sometimes" => 0,
        "Frequently" => 1,
        "Always" => 2,
        "no" => 3,
        _ => 3,
    }
}

/// Inverse of `ordinal_code` for the four defined labels
pub fn ordinal_label(code: u8) -> Option<&'static str> {
    match code {
        0 => Some("Sometimes"),
        1 => Some("Frequently"),
        2 => Some("Always"),
        3 => Some("no"),
        _ => None,
    }
}

/// Encode a yes/no answer
pub fn yes_no_code(value: &str) -> u8 {
    u8::from(value == "yes")
}

/// Encode a gender answer
pub fn gender_code(value: &str) -> u8 {
    u8::from(value == "Male")
}

/// Build a `FeatureVector` from a fully-populated answer map
///
/// Total over answer maps that match the catalog; fails with
/// `AnswerMapping` when a required key is absent or a numeric value does
/// not parse. Deterministic: equal maps produce identical vectors.
pub fn map_answers(answers: &HashMap<String, String>) -> Result<FeatureVector> {
    Ok(FeatureVector {
        gender: gender_code(require(answers, "Gender")?),
        age: parse_u32(answers, "Age")?,
        height: parse_f64(answers, "Height")?,
        weight: parse_f64(answers, "Weight")?,
        family_history: yes_no_code(require(answers, "family_history_with_overweight")?),
        favc: yes_no_code(require(answers, "FAVC")?),
        fcvc: parse_f64(answers, "FCVC")?,
        ncp: parse_f64(answers, "NCP")?,
        caec: ordinal_code(require(answers, "CAEC")?),
        smoke: yes_no_code(require(answers, "SMOKE")?),
        ch2o: parse_f64(answers, "CH2O")?,
        scc: yes_no_code(require(answers, "SCC")?),
        faf: parse_f64(answers, "FAF")?,
        tue: parse_f64(answers, "TUE")?,
        calc: ordinal_code(require(answers, "CALC")?),
    })
}

fn require<'a>(answers: &'a HashMap<String, String>, field: &str) -> Result<&'a str> {
    answers
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| QuizError::AnswerMapping {
            field: field.to_string(),
            reason: "answer missing".to_string(),
        })
}

fn parse_f64(answers: &HashMap<String, String>, field: &str) -> Result<f64> {
    let raw = require(answers, field)?;
    raw.parse().map_err(|_| QuizError::AnswerMapping {
        field: field.to_string(),
        reason: format!("'{}' is not a number", raw),
    })
}

fn parse_u32(answers: &HashMap<String, String>, field: &str) -> Result<u32> {
    let raw = require(answers, field)?;
    raw.parse().map_err(|_| QuizError::AnswerMapping {
        field: field.to_string(),
        reason: format!("'{}' is not a whole number", raw),
    })
}
