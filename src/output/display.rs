//! Display functions for command results

use super::formatters::{length_badge, points, spaced_letters};
use crate::commands::{CheckOutcome, CheckResult};
use crate::core::{Rejection, letter_count};
use crate::game::GameSession;
use colored::Colorize;

/// Print the root word, score and the words found so far
pub fn print_round<S, D>(session: &GameSession<S, D>) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        spaced_letters(session.root_word()).bright_yellow().bold()
    );
    println!(
        "Score:     {}",
        session.score().to_string().bright_cyan().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if session.used_words().is_empty() {
        println!("{}", "No words yet.".bright_black());
    } else {
        for word in session.used_words() {
            println!(
                "  {} {}",
                length_badge(letter_count(word)).bright_black(),
                word
            );
        }
    }
    println!();
}

/// Print a rejection as a title/message alert
pub fn print_rejection(rejection: Rejection) {
    println!(
        "{} {}\n  {}\n",
        "✗".red().bold(),
        rejection.title().red().bold(),
        rejection.message()
    );
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ROOT WORD:".bright_cyan().bold(),
        spaced_letters(&result.root_word).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    match result.outcome {
        CheckOutcome::Accepted { points: value } => {
            println!(
                "\n{} {} is playable for {}",
                "✓".green().bold(),
                result.word.bright_white().bold(),
                points(value).green().bold()
            );
        }
        CheckOutcome::Rejected(rejection) => {
            println!("\n{}", result.word.bright_white().bold());
            print_rejection(rejection);
        }
    }
}
