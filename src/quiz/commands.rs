//! Slash-command parsing for the interactive quiz
//!
//! Anything that does not start with `/` is treated as an answer to the
//! current question; navigation and session control go through commands.

use colored::*;

/// Input classified into quiz commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain answer text for the current question
    Answer { value: String },
    Help,
    Back,
    Restart,
    Quit,
    Unknown { input: String },
}

/// Check if input looks like a command rather than an answer
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse one input line
///
/// Complexity: O(1) string matching
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    if !is_command(trimmed) {
        return Command::Answer {
            value: trimmed.to_string(),
        };
    }

    match trimmed[1..].to_lowercase().as_str() {
        "help" | "h" => Command::Help,
        "back" | "b" => Command::Back,
        "restart" => Command::Restart,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

/// Print the command reference
pub fn show_help() {
    println!("\n{}", "Available commands:".bold().cyan());
    println!("{}", "-".repeat(40).cyan());
    let commands = [
        ("/help, /h", "Show this help"),
        ("/back, /b", "Return to the previous question"),
        ("/restart", "Discard answers and start over"),
        ("/quit, /q", "Leave the questionnaire"),
    ];
    for (cmd, desc) in commands {
        println!("  {:<14} {}", cmd.green(), desc);
    }
    println!(
        "\nAnything else is taken as the answer to the current question.\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_an_answer() {
        assert_eq!(
            parse("Male"),
            Command::Answer {
                value: "Male".to_string()
            }
        );
        assert_eq!(
            parse("  1.75  "),
            Command::Answer {
                value: "1.75".to_string()
            }
        );
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(parse("/help"), Command::Help);
        assert_eq!(parse("/h"), Command::Help);
        assert_eq!(parse("/back"), Command::Back);
        assert_eq!(parse("/b"), Command::Back);
        assert_eq!(parse("/restart"), Command::Restart);
        assert_eq!(parse("/quit"), Command::Quit);
        assert_eq!(parse("/exit"), Command::Quit);
        assert_eq!(parse("/q"), Command::Quit);
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        assert_eq!(parse("/HELP"), Command::Help);
        assert_eq!(parse("/Back"), Command::Back);
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("/frobnicate"),
            Command::Unknown {
                input: "/frobnicate".to_string()
            }
        );
    }

    #[test]
    fn test_is_command() {
        assert!(is_command("/help"));
        assert!(is_command("  /quit"));
        assert!(!is_command("yes"));
        assert!(!is_command("no /slash inside"));
    }

    #[test]
    fn test_empty_input_is_empty_answer() {
        assert_eq!(
            parse(""),
            Command::Answer {
                value: String::new()
            }
        );
    }
}
