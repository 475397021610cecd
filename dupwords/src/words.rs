//! Word-level helpers shared by both scan passes.
//!
//! A word is a maximal run of Unicode word characters. Only words made
//! entirely of Latin letters, Cyrillic letters and digits are considered
//! for duplicate detection; anything else (underscored identifiers, words
//! with letters from other alphabets) is skipped.

use regex::Regex;
use std::sync::LazyLock;

pub static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());
static RE_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ0-9]+$").unwrap());

/// Returns true if the word may take part in a duplicate match.
pub fn is_candidate(word: &str) -> bool {
    RE_CANDIDATE.is_match(word)
}

/// Case-insensitive word comparison.
pub fn same_word(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Slice of `text` spanning `width` characters before `start` and `width`
/// characters after `end`, clamped to the text. `start` and `end` are byte
/// offsets on character boundaries.
pub fn window(text: &str, start: usize, end: usize, width: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(width)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(width)
        .map_or(text.len(), |(i, _)| end + i);
    &text[from..to]
}

/// Converts ascending byte offsets into character offsets without
/// rescanning the text from the start each time.
#[derive(Debug, Default)]
pub struct CharCursor {
    byte: usize,
    chars: usize,
}

impl CharCursor {
    /// Character offset of byte position `pos`. Positions must not decrease
    /// between calls.
    pub fn advance(&mut self, text: &str, pos: usize) -> usize {
        self.chars += text[self.byte..pos].chars().count();
        self.byte = pos;
        self.chars
    }
}
