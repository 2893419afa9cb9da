//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI

use crate::game::{Dictionary, GameSession, Submission, WordSource};
use crate::output::formatters::points;
use crate::output::{print_rejection, print_round};
use colored::Colorize;
use std::io::{self, Write};

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    Restart,
    Words,
    Help,
    /// Anything that is not a command is a word to submit
    Submit(String),
}

impl SimpleCommand {
    /// Parse a prompt line; commands start with `:`
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":restart" | ":new" | ":n" => Self::Restart,
            ":words" | ":w" => Self::Words,
            ":help" | ":h" | ":?" => Self::Help,
            _ => Self::Submit(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new round
/// cannot be started.
pub fn run_simple<S: WordSource, D: Dictionary>(
    session: &mut GameSession<S, D>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words from the letters of the root word.");
    println!("Each word scores one point per letter.\n");
    print_help();

    print_round(session);

    loop {
        let Some(line) = get_user_input("Word")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match SimpleCommand::parse(&line) {
            SimpleCommand::Quit => {
                println!(
                    "\n👋 Thanks for playing! Final score: {}\n",
                    session.score().to_string().bright_cyan().bold()
                );
                return Ok(());
            }
            SimpleCommand::Restart => {
                session.restart().map_err(|e| e.to_string())?;
                println!("\n🔄 New round started!\n");
                print_round(session);
            }
            SimpleCommand::Words => print_round(session),
            SimpleCommand::Help => print_help(),
            SimpleCommand::Submit(text) => match session.submit(&text) {
                Ok(Submission::Ignored) => {}
                Ok(Submission::Accepted { word, score }) => {
                    println!(
                        "{} {} (+{}) | Score: {}\n",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        points(word.chars().count()),
                        score.to_string().bright_cyan().bold()
                    );
                }
                Err(rejection) => print_rejection(rejection),
            },
        }
    }
}

fn print_help() {
    println!("Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n");
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok((read > 0).then_some(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse(":quit"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":Q\n"), SimpleCommand::Quit);
        assert_eq!(SimpleCommand::parse(":new"), SimpleCommand::Restart);
        assert_eq!(SimpleCommand::parse(" :restart "), SimpleCommand::Restart);
        assert_eq!(SimpleCommand::parse(":words"), SimpleCommand::Words);
        assert_eq!(SimpleCommand::parse(":help"), SimpleCommand::Help);
    }

    #[test]
    fn parse_words_are_submitted_raw() {
        assert_eq!(
            SimpleCommand::parse("  Silk \n"),
            SimpleCommand::Submit("  Silk \n".to_string())
        );
        assert_eq!(SimpleCommand::parse(""), SimpleCommand::Submit(String::new()));
    }

    #[test]
    fn parse_unknown_command_is_a_word() {
        assert_eq!(
            SimpleCommand::parse(":dance"),
            SimpleCommand::Submit(":dance".to_string())
        );
    }
}
