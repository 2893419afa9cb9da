//! Game session and its collaborators
//!
//! A [`GameSession`] draws root words from a [`WordSource`] and checks spelling
//! against a [`Dictionary`]; everything else lives in the session itself.

mod dictionary;
mod session;
mod source;
pub mod validation;

pub use dictionary::{DEFAULT_LANGUAGE, Dictionary, WordListDictionary};
pub use session::{GameSession, SessionError, Submission};
pub use source::{DEFAULT_FALLBACK_ROOT, FallbackWordSource, FixedWordSource, RandomWordSource, WordSource};
pub use validation::{RoundView, Rule, validate};
