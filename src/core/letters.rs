//! Letter availability
//!
//! A candidate can only be built from the root word's letters, each occurrence used at most once.

use std::fmt;

/// The letters of a root word that have not been used up yet
///
/// Letters are consumed one occurrence at a time, so a root with a single `s`
/// can supply exactly one `s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Build a pool from a root word (lowercased first)
    #[must_use]
    pub fn from_root(root: &str) -> Self {
        Self {
            letters: root.to_lowercase().chars().collect(),
        }
    }

    /// Remove the first occurrence of `letter` from the pool
    ///
    /// Returns `false` (leaving the pool untouched) if the letter is not available.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(index) => {
                self.letters.remove(index);
                true
            }
            None => false,
        }
    }

    /// Letters still available, in root word order
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Check whether `candidate` can be spelled from the letters of `root`
///
/// Walks the candidate in order and stops at the first letter the pool cannot supply.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("silkworm", "silk"));
/// assert!(!can_spell("silkworm", "silks"));
/// ```
#[must_use]
pub fn can_spell(root: &str, candidate: &str) -> bool {
    let mut pool = LetterPool::from_root(root);
    candidate.chars().all(|letter| pool.take(letter))
}
