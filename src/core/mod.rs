//! Core domain types for Word Scramble
//!
//! Pure functions and types with no knowledge of sessions, word lists or terminals:
//! input normalization, the letter pool used for the availability check, and the
//! rejection reasons reported to the player.

mod letters;
mod rejection;
mod word;

pub use letters::{LetterPool, can_spell};
pub use rejection::Rejection;
pub use word::{MIN_WORD_LENGTH, letter_count, normalize};
