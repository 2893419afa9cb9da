//! Word lists for Word Scramble
//!
//! Provides the embedded root words and dictionary compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
