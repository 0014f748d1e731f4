//! Display manager for the quiz terminal UI
//!
//! Renders the banner, question screens with step progress, validation
//! complaints, and the final result view (label, echo table, advice).

use crate::catalog::QuestionSpec;
use crate::present::DisplayModel;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Width of the step progress track
const PROGRESS_WIDTH: usize = 30;

/// Display manager for the quiz UI
pub struct DisplayManager {
    current_bar: Option<ProgressBar>,
    update_interval: Duration,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new() -> Self {
        DisplayManager {
            current_bar: None,
            update_interval: Duration::from_millis(100),
        }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, model_name: &str) {
        let width = 64;
        let top = format!("{}", "=".repeat(width).cyan());
        let title = format!("  shapecheck {} - Obesity Screening Questionnaire", version);
        let info = format!("  Model: {} | One question per screen", model_name);
        let bottom = format!("{}", "=".repeat(width).cyan());

        println!("\n{}", top);
        println!("{}", title.bold().cyan());
        println!("{}", info.dimmed());
        println!("{}\n", bottom);
        println!(
            "Answer the questions that will appear to get an obesity\nprediction result. Type {} for commands, {} to leave.\n",
            "/help".green(),
            "/quit".green()
        );
    }

    /// Show the start page prompt
    pub fn show_start_hint(&self) {
        println!(
            "Press {} to start the questionnaire.",
            "Enter".bold().green()
        );
    }

    /// Render one question screen with step progress
    pub fn show_question(
        &self,
        step: usize,
        total: usize,
        question: &QuestionSpec,
        previous: Option<&str>,
    ) {
        let filled = PROGRESS_WIDTH * step / total;
        let track = format!(
            "[{}{}]",
            "=".repeat(filled),
            "-".repeat(PROGRESS_WIDTH - filled)
        );

        println!(
            "\n{} {}",
            format!("Question {}/{}", step, total).bold().cyan(),
            track.dimmed()
        );
        println!("{}", question.prompt.bold());
        println!("  {}", question.domain_hint().dimmed());
        if let Some(value) = previous {
            println!("  {} {}", "current answer:".dimmed(), value.yellow());
        }
    }

    /// Start the inference spinner
    pub fn start_prediction(&mut self) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Running prediction...");
        pb.enable_steady_tick(self.update_interval);

        self.current_bar = Some(pb.clone());
        pb
    }

    /// Finish any active spinner
    pub fn finish_current(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    /// Render the full result view
    pub fn show_result(&self, model: &DisplayModel) {
        self.show_section("PREDICTION RESULT");
        println!(
            "\n  {} {}\n",
            "Obesity Prediction:".bold(),
            model.label.bold().green()
        );

        self.show_echo_table(&model.rows);

        match &model.advice {
            Some(advice) => {
                self.show_section("Preventive actions");
                println!("  {}", advice.prevention);
                self.show_section("Lifestyle tips");
                println!("  {}", advice.lifestyle);
                self.show_section("Checkup suggestions");
                println!("  {}", advice.checkups);
            }
            None => {
                println!(
                    "\n{}",
                    format!("No advice available for '{}'.", model.label).yellow()
                );
            }
        }
        println!();
    }

    /// Render the echo table of model inputs
    fn show_echo_table(&self, rows: &[(&'static str, String)]) {
        let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

        println!("{}", "Your inputs as the model saw them:".dimmed());
        println!("{}", "-".repeat(name_width + 12).cyan());
        for (name, value) in rows {
            println!("  {:<width$}  {}", name, value.cyan(), width = name_width);
        }
        println!("{}", "-".repeat(name_width + 12).cyan());
    }

    /// Navigation hint under the result view
    pub fn show_result_hint(&self) {
        println!(
            "{} starts a new session, {} leaves.\n",
            "/restart".green(),
            "/quit".green()
        );
    }

    /// Shown when inference fails; the session stays open for retry
    pub fn show_prediction_unavailable(&self, reason: &str) {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Prediction unavailable".red().bold()
        );
        println!("  {}", reason.dimmed());
        println!(
            "  Press {} to retry, or {} to leave.\n",
            "Enter".green(),
            "/quit".green()
        );
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    /// Flush pending output before handing the prompt to readline
    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }

    /// Farewell line on quit
    pub fn show_goodbye(&self) {
        println!("{}", "Goodbye!".green());
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new()
    }
}
