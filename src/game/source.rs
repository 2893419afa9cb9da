//! Root word providers
//!
//! Defines the `WordSource` trait and the providers the game ships with.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::warn;

/// Root word used by [`FallbackWordSource::silkworm`]
pub const DEFAULT_FALLBACK_ROOT: &str = "silkworm";

/// Supplies root words for new rounds
pub trait WordSource {
    /// Pick the root word for the next round
    ///
    /// Returns `None` if no word is available (e.g. the word list is empty).
    fn pick_root_word(&mut self) -> Option<String>;
}

impl<S: WordSource + ?Sized> WordSource for Box<S> {
    fn pick_root_word(&mut self) -> Option<String> {
        (**self).pick_root_word()
    }
}

/// Uniform random choice over a fixed word list
pub struct RandomWordSource {
    words: Vec<String>,
    rng: StdRng,
}

impl RandomWordSource {
    /// Create a source seeded from the thread-local generator
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a source with a fixed seed, for reproducible games
    #[must_use]
    pub fn with_seed(words: Vec<String>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSource for RandomWordSource {
    fn pick_root_word(&mut self) -> Option<String> {
        self.words.choose(&mut self.rng).cloned()
    }
}

/// Always returns the same root word
///
/// Used when the player names the root word explicitly.
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    word: String,
}

impl FixedWordSource {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }
}

impl WordSource for FixedWordSource {
    fn pick_root_word(&mut self) -> Option<String> {
        Some(self.word.clone())
    }
}

/// Wraps another source and substitutes a fixed word when it comes up empty
///
/// A blank word from the inner source counts as unavailable.
pub struct FallbackWordSource<S> {
    inner: S,
    fallback: String,
}

impl<S: WordSource> FallbackWordSource<S> {
    #[must_use]
    pub fn new(inner: S, fallback: impl Into<String>) -> Self {
        Self {
            inner,
            fallback: fallback.into(),
        }
    }

    /// Fall back to "silkworm"
    #[must_use]
    pub fn silkworm(inner: S) -> Self {
        Self::new(inner, DEFAULT_FALLBACK_ROOT)
    }
}

impl<S: WordSource> WordSource for FallbackWordSource<S> {
    fn pick_root_word(&mut self) -> Option<String> {
        self.inner
            .pick_root_word()
            .filter(|word| !word.trim().is_empty())
            .or_else(|| {
                warn!(fallback = %self.fallback, "word source unavailable, using fallback root word");
                Some(self.fallback.clone())
            })
    }
}
