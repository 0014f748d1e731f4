//! Question catalog for the obesity screening questionnaire
//!
//! Defines the canonical ordered sequence of fifteen questions together
//! with their answer domains. Catalog order is both the asking order and
//! the feature order the classifier expects, so it must never be
//! reshuffled without retraining the model.

use crate::errors::{QuizError, Result};

/// Answer domain for a single question
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuestionKind {
    /// Categorical answer: one of a fixed, ordered option list
    Choice { options: &'static [&'static str] },

    /// Numeric answer inside an inclusive range; `step` is the
    /// granularity hint shown to the user, not an enforced grid
    Numeric {
        min: f64,
        max: f64,
        step: f64,
        integer: bool,
    },
}

/// One question screen: stable key, user-facing prompt, answer domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionSpec {
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
}

const YES_NO: &[&str] = &["yes", "no"];
const FREQUENCY: &[&str] = &["no", "Sometimes", "Frequently", "Always"];

/// The canonical question sequence. Keys match the feature names of the
/// trained model exactly.
pub const QUESTIONS: &[QuestionSpec] = &[
    QuestionSpec {
        key: "Gender",
        prompt: "Gender",
        kind: QuestionKind::Choice {
            options: &["Male", "Female"],
        },
    },
    QuestionSpec {
        key: "Age",
        prompt: "Age",
        kind: QuestionKind::Numeric {
            min: 1.0,
            max: 120.0,
            step: 1.0,
            integer: true,
        },
    },
    QuestionSpec {
        key: "Height",
        prompt: "Height (in meters)",
        kind: QuestionKind::Numeric {
            min: 0.50,
            max: 2.50,
            step: 0.01,
            integer: false,
        },
    },
    QuestionSpec {
        key: "Weight",
        prompt: "Weight (in kg)",
        kind: QuestionKind::Numeric {
            min: 10.0,
            max: 300.0,
            step: 0.1,
            integer: false,
        },
    },
    QuestionSpec {
        key: "family_history_with_overweight",
        prompt: "Family with overweight",
        kind: QuestionKind::Choice { options: YES_NO },
    },
    QuestionSpec {
        key: "FAVC",
        prompt: "Do you eat high caloric food frequently?",
        kind: QuestionKind::Choice { options: YES_NO },
    },
    QuestionSpec {
        key: "FCVC",
        prompt: "How often do you eat vegetables?",
        kind: QuestionKind::Choice {
            options: &["1.0", "2.0", "3.0"],
        },
    },
    QuestionSpec {
        key: "NCP",
        prompt: "Number of main meals",
        kind: QuestionKind::Choice {
            options: &["1.0", "2.0", "3.0", "4.0"],
        },
    },
    QuestionSpec {
        key: "CAEC",
        prompt: "Consumption of food between meals?",
        kind: QuestionKind::Choice { options: FREQUENCY },
    },
    QuestionSpec {
        key: "SMOKE",
        prompt: "Do you smoke?",
        kind: QuestionKind::Choice { options: YES_NO },
    },
    QuestionSpec {
        key: "CH2O",
        prompt: "Water intake (liters per day)",
        kind: QuestionKind::Numeric {
            min: 1.0,
            max: 3.0,
            step: 0.1,
            integer: false,
        },
    },
    QuestionSpec {
        key: "SCC",
        prompt: "Do you monitor calorie intake?",
        kind: QuestionKind::Choice { options: YES_NO },
    },
    QuestionSpec {
        key: "FAF",
        prompt: "Physical activity frequency",
        kind: QuestionKind::Numeric {
            min: 0.0,
            max: 3.0,
            step: 0.1,
            integer: false,
        },
    },
    QuestionSpec {
        key: "TUE",
        prompt: "Time using technology devices (hours)",
        kind: QuestionKind::Numeric {
            min: 0.0,
            max: 2.0,
            step: 0.1,
            integer: false,
        },
    },
    QuestionSpec {
        key: "CALC",
        prompt: "Alcohol consumption frequency",
        kind: QuestionKind::Choice { options: FREQUENCY },
    },
];

impl QuestionSpec {
    /// Validate a raw answer against this question's domain
    ///
    /// Out-of-domain values are rejected explicitly; numeric answers are
    /// never clamped to the range ends.
    pub fn validate(&self, raw: &str) -> Result<()> {
        let raw = raw.trim();
        match self.kind {
            QuestionKind::Choice { options } => {
                if options.contains(&raw) {
                    Ok(())
                } else {
                    Err(self.reject(raw, format!("expected one of {}", options.join(", "))))
                }
            }
            QuestionKind::Numeric {
                min, max, integer, ..
            } => {
                if integer && raw.parse::<i64>().is_err() {
                    return Err(self.reject(raw, "must be a whole number".to_string()));
                }
                let value: f64 = raw
                    .parse()
                    .map_err(|_| self.reject(raw, "not a number".to_string()))?;
                if value < min {
                    Err(self.reject(raw, format!("below minimum {}", min)))
                } else if value > max {
                    Err(self.reject(raw, format!("above maximum {}", max)))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Short domain description shown next to the prompt
    pub fn domain_hint(&self) -> String {
        match self.kind {
            QuestionKind::Choice { options } => options.join(" / "),
            QuestionKind::Numeric { min, max, step, .. } => {
                format!("{} to {} (step {})", min, max, step)
            }
        }
    }

    fn reject(&self, value: &str, reason: String) -> QuizError {
        QuizError::InvalidInput {
            question: self.key.to_string(),
            value: value.to_string(),
            reason,
        }
    }
}

/// Read-only view over the canonical question sequence
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    questions: &'static [QuestionSpec],
}

impl Catalog {
    /// Catalog over the built-in question sequence
    pub fn new() -> Self {
        Catalog {
            questions: QUESTIONS,
        }
    }

    /// Number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question for a 1-based step number
    pub fn question(&self, step: usize) -> Option<&'static QuestionSpec> {
        if step == 0 {
            return None;
        }
        self.questions.get(step - 1)
    }

    /// Look up a question by its stable key
    pub fn by_key(&self, key: &str) -> Option<&'static QuestionSpec> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Iterate questions in asking order
    pub fn iter(&self) -> impl Iterator<Item = &'static QuestionSpec> {
        self.questions.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
