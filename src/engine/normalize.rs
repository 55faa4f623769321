//! OCR artifact cleanup.
//!
//! Photographed prescriptions come back with predictable character
//! confusions: zeroes for o's, ones for l's, fives for s's, @ for a.
//! The substitution is global and context-free, so legitimate digits inside
//! dose strings are rewritten too ("650mg" becomes "65omg"). That loss is
//! accepted; matching operates on words, not dose numbers.

/// Collapse non-breaking spaces and undo digit-for-letter confusions.
/// Never fails; empty input yields an empty string.
pub fn clean_text(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{00A0}' => ' ',
            '0' => 'o',
            '1' => 'l',
            '5' => 's',
            '@' => 'a',
            other => other,
        })
        .collect()
}
