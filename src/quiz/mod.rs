//! Interactive quiz module
//!
//! Drives the questionnaire loop: one question per screen, slash
//! commands for navigation, and the result view after submission. The
//! session coordinator owns the flow state and guards the single
//! inference call per submission.

pub mod commands;
pub mod display;
pub mod input;

use anyhow::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::advice::AdviceTable;
use crate::catalog::Catalog;
use crate::errors::QuizError;
use crate::flow::{advance, FlowEvent, SessionState};
use crate::predict::{self, PredictionResult, Predictor};
use crate::present;
use crate::quiz::commands::Command;
pub use crate::quiz::display::DisplayManager;
pub use crate::quiz::input::InputHandler;

/// Configuration for the interactive quiz
#[derive(Debug, Clone)]
pub struct QuizConfig {
    pub version: String,
    pub model_name: String,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            version: env!("CARGO_PKG_VERSION").to_string(),
            model_name: "obesity-cart".to_string(),
            quiet: false,
            verbose: false,
        }
    }
}

/// Quiz session coordinator
///
/// Owns one `SessionState` traversal from the start page to a single
/// submitted prediction. The classifier is invoked at most once per
/// submission; the cached result is re-rendered on any further
/// navigation.
pub struct QuizSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Catalog,
    state: SessionState,
    predictor: Box<dyn Predictor>,
    advice: AdviceTable,
    input: InputHandler,
    display: DisplayManager,
    result: Option<PredictionResult>,
    config: QuizConfig,
}

impl QuizSession {
    /// Create new quiz session
    pub fn new(
        predictor: Box<dyn Predictor>,
        advice: AdviceTable,
        config: QuizConfig,
    ) -> Result<Self> {
        Ok(QuizSession {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog: Catalog::new(),
            state: SessionState::new(),
            predictor,
            advice,
            input: InputHandler::new()?,
            display: DisplayManager::new(),
            result: None,
            config,
        })
    }

    /// Session identifier
    pub fn session_id(&self) -> Uuid {
        self.id
    }

    /// Session start time
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Current flow state (immutable)
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Cached prediction, if the session has submitted
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    /// Apply a flow event, replacing the session state on success
    pub fn apply(&mut self, event: &FlowEvent) -> crate::errors::Result<()> {
        self.state = advance(&self.catalog, &self.state, event)?;
        Ok(())
    }

    /// Record an answer for the current question
    ///
    /// Picks `Next` or `Submit` depending on whether the current screen
    /// is the final question. Returns true once the session is
    /// submitted.
    pub fn answer_current(&mut self, value: &str) -> crate::errors::Result<bool> {
        let event = if self.state.step == self.catalog.len() {
            FlowEvent::Submit {
                value: value.to_string(),
            }
        } else {
            FlowEvent::Next {
                value: value.to_string(),
            }
        };
        self.apply(&event)?;
        Ok(self.state.submitted)
    }

    /// Run inference for the submitted answers, at most once
    ///
    /// The cached result is returned on every later call; a failed
    /// attempt leaves the cache empty so the user may retry.
    pub fn predict_once(&mut self) -> crate::errors::Result<PredictionResult> {
        if let Some(result) = &self.result {
            return Ok(result.clone());
        }
        let result = predict::invoke(self.predictor.as_ref(), &self.state.answers)?;
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Discard the session and begin a fresh one
    pub fn reset(&mut self) {
        self.state = SessionState::new();
        self.result = None;
    }

    /// Drive the interactive loop until quit or EOF
    pub fn run(&mut self) -> Result<()> {
        if !self.config.quiet {
            self.display
                .show_banner(&self.config.version, &self.config.model_name);
        }
        if self.config.verbose {
            self.display.show_info(&format!(
                "Session {} started at {}",
                self.id.simple(),
                self.started_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
        self.display.show_start_hint();
        if !self.wait_for_start()? {
            self.display.show_goodbye();
            return Ok(());
        }

        'session: loop {
            self.apply(&FlowEvent::Start)?;

            while !self.state.submitted {
                match self.question_round()? {
                    Round::Continue => {}
                    Round::Restart => {
                        self.reset();
                        continue 'session;
                    }
                    Round::Quit => {
                        self.display.show_goodbye();
                        return Ok(());
                    }
                }
            }

            loop {
                self.render_result();
                match self.read()? {
                    None => {
                        self.display.show_goodbye();
                        return Ok(());
                    }
                    Some(line) => match commands::parse(&line) {
                        Command::Quit => {
                            self.display.show_goodbye();
                            return Ok(());
                        }
                        Command::Restart => {
                            self.reset();
                            continue 'session;
                        }
                        Command::Help => commands::show_help(),
                        // Submitted is absorbing: everything else re-renders
                        _ => {}
                    },
                }
            }
        }
    }

    /// One question screen: render, read, dispatch
    fn question_round(&mut self) -> Result<Round> {
        let step = self.state.step;
        let question = self
            .catalog
            .question(step)
            .ok_or_else(|| anyhow::anyhow!("step {} outside catalog", step))?;

        self.display.show_question(
            step,
            self.catalog.len(),
            question,
            self.state.answer(question.key),
        );

        let line = match self.read()? {
            None => return Ok(Round::Quit),
            Some(line) => line,
        };

        match commands::parse(&line) {
            Command::Quit => Ok(Round::Quit),
            Command::Restart => Ok(Round::Restart),
            Command::Help => {
                commands::show_help();
                Ok(Round::Continue)
            }
            Command::Back => {
                if let Err(e) = self.apply(&FlowEvent::Back) {
                    self.display.show_warning(&e.to_string());
                }
                Ok(Round::Continue)
            }
            Command::Unknown { input } => {
                self.display
                    .show_error(&format!("Unknown command: {}", input));
                Ok(Round::Continue)
            }
            Command::Answer { value } => {
                if value.is_empty() {
                    return Ok(Round::Continue);
                }
                match self.answer_current(&value) {
                    Ok(_) => Ok(Round::Continue),
                    Err(e) if e.is_recoverable() => {
                        self.display.show_error(&e.to_string());
                        Ok(Round::Continue)
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    /// Predict (at most once) and render the result view
    fn render_result(&mut self) {
        self.display.start_prediction();
        let outcome = self.predict_once();
        self.display.finish_current();

        match outcome {
            Ok(result) => {
                let model = present::present(&result, &self.advice);
                self.display.show_result(&model);
                self.display.show_result_hint();
            }
            Err(QuizError::Prediction(reason)) => {
                self.display.show_prediction_unavailable(&reason);
            }
            Err(other) => {
                self.display.show_error(&other.to_string());
            }
        }
    }

    /// Start page: wait for Enter; false means the user left
    fn wait_for_start(&mut self) -> Result<bool> {
        loop {
            match self.read()? {
                None => return Ok(false),
                Some(line) => match commands::parse(&line) {
                    Command::Quit => return Ok(false),
                    Command::Help => commands::show_help(),
                    Command::Answer { .. } => return Ok(true),
                    _ => self
                        .display
                        .show_warning("The questionnaire has not started yet"),
                },
            }
        }
    }

    /// Read one line; interrupts count as leaving
    fn read(&mut self) -> Result<Option<String>> {
        self.display.flush()?;
        match self.input.read_line() {
            Ok(line) => Ok(line),
            Err(e) if e.to_string() == "Interrupted" => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Outcome of one question round
enum Round {
    Continue,
    Restart,
    Quit,
}
