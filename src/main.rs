//! shapecheck - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use shapecheck::advice::AdviceTable;
use shapecheck::cli::{Args, Commands};
use shapecheck::config::Config;
use shapecheck::predict::TreeModel;
use shapecheck::quiz::{QuizConfig, QuizSession};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Commands::Config) => show_config(&args),
        Some(Commands::Start) | None => run_quiz(&args),
    }
}

/// Load the config file, honoring an explicit --config path
fn load_config(args: &Args) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Print the resolved configuration
fn show_config(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    println!("{}", "shapecheck configuration".bold().cyan());
    println!(
        "  {:<12} {}",
        "config file:",
        args.config
            .clone()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| Config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string()))
    );
    println!(
        "  {:<12} {}",
        "model:",
        config.model_path(args.model.as_deref()).display()
    );
    println!(
        "  {:<12} {}",
        "advice:",
        config
            .advice_path(args.advice.as_deref())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<built-in>".to_string())
    );

    Ok(())
}

/// Load collaborators and run the interactive questionnaire
fn run_quiz(args: &Args) -> Result<()> {
    let verbosity = args.verbosity();
    let config = load_config(args)?;

    // The classifier is loaded exactly once and shared read-only for
    // the rest of the process lifetime
    let model_path = config.model_path(args.model.as_deref());
    let model = TreeModel::load(&model_path)
        .with_context(|| format!("loading classifier from {}", model_path.display()))?;

    let advice = match config.advice_path(args.advice.as_deref()) {
        Some(path) => AdviceTable::load(&path)
            .with_context(|| format!("loading advice table from {}", path.display()))?,
        None => AdviceTable::builtin(),
    };

    let quiz_config = QuizConfig {
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_name: model.name.clone(),
        quiet: !verbosity.show_banner(),
        verbose: verbosity.show_details(),
    };

    let mut session = QuizSession::new(Box::new(model), advice, quiz_config)?;
    session.run()
}
