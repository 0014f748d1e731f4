//! Command-line argument parsing for shapecheck
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shapecheck - interactive obesity-category screening questionnaire
#[derive(Parser, Debug)]
#[command(name = "shapecheck")]
#[command(version)]
#[command(about = "Answer fifteen questions and get an obesity-category prediction", long_about = None)]
pub struct Args {
    /// Path to the classifier artifact (overrides config)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Path to a replacement advice table (overrides config)
    #[arg(short, long)]
    pub advice: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level: default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress banner and hints)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive questionnaire (the default)
    Start,

    /// Display the resolved configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if the banner and hints should be shown
    pub fn show_banner(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if session details should be shown
    pub fn show_details(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args_with(verbose: u8, quiet: bool) -> Args {
        Args {
            model: None,
            advice: None,
            config: None,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(args_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(args_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(args_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(args_with(2, false).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_parse_subcommands() {
        let args = Args::parse_from(["shapecheck", "start"]);
        assert!(matches!(args.command, Some(Commands::Start)));

        let args = Args::parse_from(["shapecheck", "config"]);
        assert!(matches!(args.command, Some(Commands::Config)));

        let args = Args::parse_from(["shapecheck"]);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::parse_from([
            "shapecheck",
            "--model",
            "/tmp/model.json",
            "--advice",
            "/tmp/advice.toml",
        ]);
        assert_eq!(args.model, Some(PathBuf::from("/tmp/model.json")));
        assert_eq!(args.advice, Some(PathBuf::from("/tmp/advice.toml")));
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_banner());
        assert!(Verbosity::Normal.show_banner());

        assert!(!Verbosity::Normal.show_details());
        assert!(Verbosity::Verbose.show_details());
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
    }
}
