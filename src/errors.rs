//! Error types for the shapecheck questionnaire
//!
//! Provides the full error taxonomy for the quiz flow with
//! context propagation into the terminal UI.

use thiserror::Error;

/// Main error type for the questionnaire system
#[derive(Error, Debug)]
pub enum QuizError {
    /// Answer outside the question's declared domain
    #[error("Invalid answer '{value}' for {question}: {reason}")]
    InvalidInput {
        question: String,
        value: String,
        reason: String,
    },

    /// Submit attempted before every question was answered
    #[error("Cannot submit: {missing} answer(s) still missing")]
    IncompleteSubmission { missing: usize },

    /// Navigation event not defined for the current phase
    #[error("No transition from {from} on {event}")]
    Transition { from: String, event: String },

    /// Unparsable or absent value at feature-mapping time
    #[error("Failed to map answer for {field}: {reason}")]
    AnswerMapping { field: String, reason: String },

    /// Classifier artifact load or evaluation failure
    #[error("Prediction failed: {0}")]
    Prediction(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON parsing errors (model artifact)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

impl QuizError {
    /// Errors the quiz loop recovers from by re-prompting in place
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuizError::InvalidInput { .. }
                | QuizError::IncompleteSubmission { .. }
                | QuizError::Transition { .. }
        )
    }
}

/// Convert anyhow errors to QuizError
impl From<anyhow::Error> for QuizError {
    fn from(err: anyhow::Error) -> Self {
        QuizError::Generic(err.to_string())
    }
}
