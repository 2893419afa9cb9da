//! Dictionary oracle
//!
//! Answers "is this a real word in this language?" for the last validation rule.

use rustc_hash::FxHashSet;

/// Language tag the game checks words in unless told otherwise
pub const DEFAULT_LANGUAGE: &str = "en";

/// A spelling oracle
pub trait Dictionary {
    /// Whether `word`, taken as a whole, is a correctly spelled word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

/// Word list backed dictionary for a single language
///
/// Words are stored lowercased. A lookup succeeds only when the requested language
/// has the same primary subtag as the dictionary (`en-GB` matches `en`).
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    #[must_use]
    pub fn new<I, T>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// Dictionary tagged with [`DEFAULT_LANGUAGE`]
    #[must_use]
    pub fn english<I, T>(words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::new(DEFAULT_LANGUAGE, words)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn speaks(&self, language: &str) -> bool {
        primary_subtag(&self.language).eq_ignore_ascii_case(primary_subtag(language))
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self.speaks(language) && self.contains(word)
    }
}

/// `en` for `en`, `en-US` and `en_GB`
fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_']).next().unwrap_or(tag).trim()
}
