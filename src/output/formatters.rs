//! Formatting utilities for terminal output

/// Badge showing a word's letter count, e.g. `⑤` for a five-letter word
///
/// Circled digits cover 1-20; longer words fall back to `(21)`.
#[must_use]
pub fn length_badge(len: usize) -> String {
    match len {
        1..=20 => {
            // U+2460 CIRCLED DIGIT ONE onwards are contiguous up to twenty
            let offset = u32::try_from(len - 1).unwrap_or(0);
            char::from_u32(0x2460 + offset).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Root word spelled out in capitals with spaces, e.g. `S I L K W O R M`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1 point" / "4 points"
#[must_use]
pub fn points(value: usize) -> String {
    if value == 1 {
        "1 point".to_string()
    } else {
        format!("{value} points")
    }
}
