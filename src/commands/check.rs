//! Word check command
//!
//! Runs a single word through the validation rules against a root word the player names.

use crate::core::{Rejection, normalize};
use crate::game::{Dictionary, FixedWordSource, GameSession, Submission};

/// How a checked word fared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The word would be accepted for this many points
    Accepted { points: usize },
    /// The word would be rejected
    Rejected(Rejection),
}

/// Result of checking a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub root_word: String,
    pub word: String,
    pub outcome: CheckOutcome,
}

/// Check `word` against a fresh round on `root`
///
/// # Errors
///
/// Returns an error if:
/// - The root word is blank
/// - The word is blank after normalization
pub fn check_word<D: Dictionary>(
    word: &str,
    root: &str,
    dictionary: &D,
    language: &str,
) -> Result<CheckResult, String> {
    let mut session = GameSession::with_language(FixedWordSource::new(root), dictionary, language)
        .map_err(|e| format!("Invalid root word: {e}"))?;

    let (word, outcome) = match session.submit(word) {
        Ok(Submission::Accepted { word, score }) => (word, CheckOutcome::Accepted { points: score }),
        Ok(Submission::Ignored) => return Err("Nothing to check: the word is blank".to_string()),
        Err(rejection) => (
            normalize(word).unwrap_or_default(),
            CheckOutcome::Rejected(rejection),
        ),
    };

    Ok(CheckResult {
        root_word: session.root_word().to_string(),
        word,
        outcome,
    })
}
