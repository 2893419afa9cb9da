//! Reasons a submission is turned down
//!
//! Each kind carries a fixed title and message for the alert shown to the player.

/// Why a submitted word was rejected
///
/// `Display` renders the alert title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The word is the root word itself
    #[display("Word is the root word")]
    IsRootWord,

    /// The word is shorter than three letters
    #[display("Too short")]
    TooShort,

    /// The word was already accepted this round
    #[display("Word used already")]
    AlreadyUsed,

    /// The root word does not have the letters to spell it
    #[display("Word not possible")]
    LettersUnavailable,

    /// The dictionary does not know the word
    #[display("Word not recognised")]
    NotAWord,
}

impl Rejection {
    /// Every rejection, in the order the rules run
    pub const ALL: [Self; 5] = [
        Self::IsRootWord,
        Self::TooShort,
        Self::AlreadyUsed,
        Self::LettersUnavailable,
        Self::NotAWord,
    ];

    /// Alert title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::IsRootWord => "Word is the root word",
            Self::TooShort => "Too short",
            Self::AlreadyUsed => "Word used already",
            Self::LettersUnavailable => "Word not possible",
            Self::NotAWord => "Word not recognised",
        }
    }

    /// Alert body
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::IsRootWord => "You're just not trying.",
            Self::TooShort => "Words should be at least 3 letters long.",
            Self::AlreadyUsed => "Be more original.",
            Self::LettersUnavailable => "Use only the available letters.",
            Self::NotAWord => "That isn't a real word.",
        }
    }
}
