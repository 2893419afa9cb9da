//! Player word normalization
//!
//! Raw text typed by the player is lowercased and trimmed before any rule looks at it.

/// Shortest word the game accepts, counted in characters
pub const MIN_WORD_LENGTH: usize = 3;

/// Normalize raw player input
///
/// Lowercases first, then trims leading and trailing whitespace (newlines included).
/// Returns `None` when nothing is left, which callers treat as "no submission".
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n").as_deref(), Some("silk"));
/// assert_eq!(normalize(" \t "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Number of letters in a word, which is also the points it earns
///
/// Letters are Unicode scalar values, the same unit [`can_spell`](crate::core::can_spell)
/// consumes, so a decomposed accent counts as a letter of its own.
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}
