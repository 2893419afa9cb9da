//! Submission rules
//!
//! The rules a normalized candidate must pass, and the fixed order they run in.
//! The first rule that fails decides the rejection.

use super::dictionary::Dictionary;
use crate::core::{MIN_WORD_LENGTH, Rejection, can_spell, letter_count};

/// The round state the rules read
#[derive(Debug, Clone, Copy)]
pub struct RoundView<'a> {
    pub root_word: &'a str,
    pub used_words: &'a [String],
    pub language: &'a str,
}

/// A single validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Candidate is not the root word
    NotRootWord,
    /// Candidate has at least [`MIN_WORD_LENGTH`] letters
    MinimumLength,
    /// Candidate was not accepted earlier this round
    Original,
    /// Root word has the letters to spell the candidate
    LettersAvailable,
    /// Dictionary recognises the candidate
    RealWord,
}

impl Rule {
    /// All rules, in evaluation order
    pub const PIPELINE: [Self; 5] = [
        Self::NotRootWord,
        Self::MinimumLength,
        Self::Original,
        Self::LettersAvailable,
        Self::RealWord,
    ];

    /// What the player is told when this rule fails
    #[must_use]
    pub const fn rejection(self) -> Rejection {
        match self {
            Self::NotRootWord => Rejection::IsRootWord,
            Self::MinimumLength => Rejection::TooShort,
            Self::Original => Rejection::AlreadyUsed,
            Self::LettersAvailable => Rejection::LettersUnavailable,
            Self::RealWord => Rejection::NotAWord,
        }
    }

    /// Check a normalized candidate against this rule
    pub fn passes<D: Dictionary + ?Sized>(
        self,
        candidate: &str,
        round: &RoundView<'_>,
        dictionary: &D,
    ) -> bool {
        match self {
            Self::NotRootWord => candidate != round.root_word,
            Self::MinimumLength => letter_count(candidate) >= MIN_WORD_LENGTH,
            Self::Original => !round.used_words.iter().any(|used| used == candidate),
            Self::LettersAvailable => can_spell(round.root_word, candidate),
            Self::RealWord => dictionary.is_real_word(candidate, round.language),
        }
    }
}

/// Run the full pipeline over a normalized candidate
///
/// # Errors
///
/// Returns the [`Rejection`] of the first rule that fails.
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    round: &RoundView<'_>,
    dictionary: &D,
) -> Result<(), Rejection> {
    Rule::PIPELINE
        .into_iter()
        .find(|rule| !rule.passes(candidate, round, dictionary))
        .map_or(Ok(()), |rule| Err(rule.rejection()))
}
