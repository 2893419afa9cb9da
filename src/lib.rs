//! Word Scramble
//!
//! A word-formation game: build as many words as you can from the letters of a
//! randomly chosen root word. Each accepted word scores its length.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Rejection;
//! use word_scramble::game::{FixedWordSource, GameSession, Submission, WordListDictionary};
//!
//! let dictionary = WordListDictionary::english(["silk", "worm"]);
//! let mut session = GameSession::new(FixedWordSource::new("silkworm"), dictionary)?;
//!
//! let outcome = session.submit("  Silk ")?;
//! assert_eq!(outcome, Submission::Accepted { word: "silk".to_string(), score: 4 });
//! assert_eq!(session.submit("silk"), Err(Rejection::AlreadyUsed));
//! assert_eq!(session.submit("silks"), Err(Rejection::LettersUnavailable));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core domain types
pub mod core;

// Game session and its collaborators
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
