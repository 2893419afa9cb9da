//! Game session
//!
//! Holds one round: the root word, the words accepted so far and the running score.

use super::dictionary::{DEFAULT_LANGUAGE, Dictionary};
use super::source::WordSource;
use super::validation::{RoundView, validate};
use crate::core::{Rejection, letter_count, normalize};
use tracing::{debug, error, info};

/// What a submission did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty after normalization; nothing changed
    Ignored,
    /// Word accepted and added to the round
    Accepted {
        /// The normalized word, now first in the used list
        word: String,
        /// Score after adding the word
        score: usize,
    },
}

/// Errors that prevent a round from starting
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// The word source could not supply a root word
    #[display("no root word available: the word list is empty or could not be loaded")]
    RootWordUnavailable,
}

/// A single-player round of Word Scramble
///
/// Created with a round already in progress; [`restart`](Self::restart) replaces it.
pub struct GameSession<S, D> {
    source: S,
    dictionary: D,
    language: String,
    root_word: String,
    used_words: Vec<String>,
    score: usize,
}

impl<S: WordSource, D: Dictionary> GameSession<S, D> {
    /// Start a session checking words in [`DEFAULT_LANGUAGE`]
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RootWordUnavailable`] if the source has no root word.
    pub fn new(source: S, dictionary: D) -> Result<Self, SessionError> {
        Self::with_language(source, dictionary, DEFAULT_LANGUAGE)
    }

    /// Start a session checking words in `language`
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RootWordUnavailable`] if the source has no root word.
    pub fn with_language(
        source: S,
        dictionary: D,
        language: impl Into<String>,
    ) -> Result<Self, SessionError> {
        let mut session = Self {
            source,
            dictionary,
            language: language.into(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
        };
        session.restart()?;
        Ok(session)
    }

    /// Begin a new round with a fresh root word
    ///
    /// Clears the used words and resets the score. On failure the current round is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::RootWordUnavailable`] if the source has no root word,
    /// or only a blank one.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let Some(root_word) = self.source.pick_root_word().and_then(|word| normalize(&word)) else {
            error!("word source could not supply a root word");
            return Err(SessionError::RootWordUnavailable);
        };

        info!(root_word = %root_word, "new round");
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
        Ok(())
    }

    /// Submit raw player input
    ///
    /// The input is normalized first; blank input is ignored. Otherwise the word runs
    /// through the validation rules and, if it passes, is added to the front of the
    /// used words and its length is added to the score.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing rule. The round is unchanged.
    pub fn submit(&mut self, raw: &str) -> Result<Submission, Rejection> {
        let Some(word) = normalize(raw) else {
            return Ok(Submission::Ignored);
        };

        if let Err(rejection) = validate(&word, &self.round(), &self.dictionary) {
            debug!(%word, %rejection, "submission rejected");
            return Err(rejection);
        }

        self.score += letter_count(&word);
        self.used_words.insert(0, word.clone());
        debug!(%word, score = self.score, "submission accepted");

        Ok(Submission::Accepted {
            word,
            score: self.score,
        })
    }
}

impl<S, D> GameSession<S, D> {
    /// Root word of the current round, lowercase and never empty
    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Sum of the lengths of the accepted words
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Language tag passed to the dictionary
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Snapshot of the round for the validation rules
    #[must_use]
    pub fn round(&self) -> RoundView<'_> {
        RoundView {
            root_word: &self.root_word,
            used_words: &self.used_words,
            language: &self.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::can_spell;
    use crate::game::{FallbackWordSource, FixedWordSource, RandomWordSource, WordListDictionary};
    use proptest::prelude::*;

    /// Dictionary that knows every word
    struct Anything;

    impl Dictionary for Anything {
        fn is_real_word(&self, _word: &str, _language: &str) -> bool {
            true
        }
    }

    /// Source that never has a word
    struct Exhausted;

    impl WordSource for Exhausted {
        fn pick_root_word(&mut self) -> Option<String> {
            None
        }
    }

    /// Source that hands out words from a list in order
    struct Scripted(Vec<&'static str>);

    impl WordSource for Scripted {
        fn pick_root_word(&mut self) -> Option<String> {
            (!self.0.is_empty()).then(|| self.0.remove(0).to_string())
        }
    }

    fn session(root: &str) -> GameSession<FixedWordSource, Anything> {
        GameSession::new(FixedWordSource::new(root), Anything).unwrap()
    }

    fn accepted(word: &str, score: usize) -> Result<Submission, Rejection> {
        Ok(Submission::Accepted {
            word: word.to_string(),
            score,
        })
    }

    #[test]
    fn new_session_starts_a_round() {
        let session = session("silkworm");
        assert_eq!(session.root_word(), "silkworm");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.language(), "en");
    }

    #[test]
    fn root_word_is_lowercased() {
        let session = session("  SilkWorm\n");
        assert_eq!(session.root_word(), "silkworm");
    }

    #[test]
    fn new_session_without_root_word_fails() {
        let result = GameSession::new(Exhausted, Anything);
        assert!(matches!(result, Err(SessionError::RootWordUnavailable)));
    }

    #[test]
    fn blank_root_word_is_unavailable() {
        let result = GameSession::new(FixedWordSource::new("   "), Anything);
        assert!(matches!(result, Err(SessionError::RootWordUnavailable)));
    }

    #[test]
    fn fallback_source_rescues_startup() {
        let session = GameSession::new(FallbackWordSource::silkworm(Exhausted), Anything).unwrap();
        assert_eq!(session.root_word(), "silkworm");
    }

    #[test]
    fn accepted_word_goes_to_front_and_scores() {
        let mut session = session("silkworm");

        assert_eq!(session.submit("silk"), accepted("silk", 4));
        assert_eq!(session.submit("Worm "), accepted("worm", 8));
        assert_eq!(session.submit("owl"), accepted("owl", 11));

        assert_eq!(session.used_words(), ["owl", "worm", "silk"]);
        assert_eq!(session.score(), 11);
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut session = session("silkworm");
        session.submit("silk").unwrap();

        assert_eq!(session.submit(""), Ok(Submission::Ignored));
        assert_eq!(session.submit("   "), Ok(Submission::Ignored));
        assert_eq!(session.submit("\n\t"), Ok(Submission::Ignored));

        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn alphabet_scenario() {
        let mut session = session("alphabet");

        assert_eq!(session.submit("alpha"), accepted("alpha", 5));
        assert_eq!(session.used_words(), ["alpha"]);

        assert_eq!(session.submit("alpha"), Err(Rejection::AlreadyUsed));
        assert_eq!(session.submit("zzz"), Err(Rejection::LettersUnavailable));
        assert_eq!(session.submit("at"), Err(Rejection::TooShort));
        assert_eq!(session.submit("alphabet"), Err(Rejection::IsRootWord));

        assert_eq!(session.used_words(), ["alpha"]);
        assert_eq!(session.score(), 5);
    }

    #[test]
    fn root_word_in_any_case_is_rejected() {
        let mut session = session("silkworm");
        assert_eq!(session.submit(" SILKWORM "), Err(Rejection::IsRootWord));
    }

    #[test]
    fn silkworm_letter_multiplicity() {
        let mut session = session("silkworm");
        assert_eq!(session.submit("silks"), Err(Rejection::LettersUnavailable));
        assert_eq!(session.submit("mirror"), Err(Rejection::LettersUnavailable));
        assert_eq!(session.score(), 0);

        assert_eq!(session.submit("worms"), accepted("worms", 5));
        assert!(session.submit("silk").is_ok());
        assert_eq!(session.used_words(), ["silk", "worms"]);
    }

    #[test]
    fn unknown_word_is_rejected() {
        let dictionary = WordListDictionary::english(["silk", "worm"]);
        let mut session = GameSession::new(FixedWordSource::new("silkworm"), dictionary).unwrap();

        assert_eq!(session.submit("mirk"), Err(Rejection::NotAWord));
        assert_eq!(session.submit("silk"), accepted("silk", 4));
    }

    #[test]
    fn language_mismatch_rejects_everything() {
        let dictionary = WordListDictionary::english(["silk"]);
        let mut session =
            GameSession::with_language(FixedWordSource::new("silkworm"), dictionary, "de").unwrap();

        assert_eq!(session.submit("silk"), Err(Rejection::NotAWord));
    }

    #[test]
    fn failed_submission_is_idempotent() {
        let mut session = session("silkworm");
        session.submit("silk").unwrap();

        for _ in 0..3 {
            assert_eq!(session.submit("silks"), Err(Rejection::LettersUnavailable));
            assert_eq!(session.used_words(), ["silk"]);
            assert_eq!(session.score(), 4);
        }
    }

    #[test]
    fn restart_clears_round() {
        let mut session = GameSession::new(Scripted(vec!["silkworm", "alphabet"]), Anything).unwrap();
        session.submit("silk").unwrap();
        session.submit("worm").unwrap();

        session.restart().unwrap();

        assert_eq!(session.root_word(), "alphabet");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn words_can_be_reused_after_restart() {
        let mut session = session("silkworm");
        session.submit("silk").unwrap();
        session.restart().unwrap();
        assert_eq!(session.submit("silk"), accepted("silk", 4));
    }

    #[test]
    fn failed_restart_keeps_round() {
        let mut session = GameSession::new(Scripted(vec!["silkworm"]), Anything).unwrap();
        session.submit("silk").unwrap();

        assert_eq!(session.restart(), Err(SessionError::RootWordUnavailable));
        assert_eq!(session.root_word(), "silkworm");
        assert_eq!(session.used_words(), ["silk"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn restart_draws_from_corpus() {
        let corpus = vec!["silkworm".to_string(), "alphabet".to_string()];
        let mut session =
            GameSession::new(RandomWordSource::with_seed(corpus.clone(), 42), Anything).unwrap();

        for _ in 0..10 {
            session.restart().unwrap();
            assert!(corpus.iter().any(|w| w == session.root_word()));
        }
    }

    #[test]
    fn session_error_message() {
        assert_eq!(
            SessionError::RootWordUnavailable.to_string(),
            "no root word available: the word list is empty or could not be loaded"
        );
    }

    proptest! {
        #[test]
        fn score_is_sum_of_used_word_lengths(inputs in prop::collection::vec("[a-z ]{0,9}", 0..40)) {
            let mut session = session("alphabet");

            for input in &inputs {
                let _ = session.submit(input);
            }

            let total: usize = session.used_words().iter().map(|w| w.chars().count()).sum();
            prop_assert_eq!(session.score(), total);
        }

        #[test]
        fn used_words_satisfy_every_rule(inputs in prop::collection::vec("[silkworm]{1,8}", 0..40)) {
            let mut session = session("silkworm");

            for input in &inputs {
                let _ = session.submit(input);
            }

            let used = session.used_words();
            for (i, word) in used.iter().enumerate() {
                prop_assert!(word.chars().count() >= 3);
                prop_assert_ne!(word.as_str(), "silkworm");
                prop_assert!(can_spell("silkworm", word));
                prop_assert!(!used[i + 1..].contains(word));
            }
        }

        #[test]
        fn success_prepends_normalized_word(raw in "[ ]{0,2}[A-Za-z]{1,8}[ ]{0,2}") {
            let mut session = session("alphabet");
            let old_score = session.score();

            if let Ok(Submission::Accepted { word, score }) = session.submit(&raw) {
                let normalized = normalize(&raw).unwrap();
                prop_assert_eq!(&session.used_words()[0], &normalized);
                prop_assert_eq!(&word, &normalized);
                prop_assert_eq!(score, old_score + normalized.chars().count());
            }
        }

        #[test]
        fn rejection_leaves_state_unchanged(prefill in prop::collection::vec("[alphbet]{3,6}", 0..10), raw in "[a-z]{0,10}") {
            let mut session = session("alphabet");
            for word in &prefill {
                let _ = session.submit(word);
            }
            let used_before = session.used_words().to_vec();
            let score_before = session.score();

            if let Err(first) = session.submit(&raw) {
                prop_assert_eq!(session.used_words(), used_before.as_slice());
                prop_assert_eq!(session.score(), score_before);
                prop_assert_eq!(session.submit(&raw), Err(first));
            }
        }
    }
}
