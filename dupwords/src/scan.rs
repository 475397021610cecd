//! Lazy duplicate-word scanning.
//!
//! Walks the word runs of a document pairwise and yields a [`Finding`] for
//! every pair that repeats the same word across an accepted separator.
//! Matches never overlap: the second word of a finding cannot start the
//! next one, so `the the the` yields a single finding.

use crate::words::{self, CharCursor, RE_WORD};
use regex::{Match, Matches, Regex};
use std::fmt;
use std::sync::LazyLock;

static RE_SPACE_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+$").unwrap());
static RE_SLASH_GAP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*/\s*$").unwrap());

/// What must sit between the two copies of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// One or more whitespace characters.
    Space,
    /// A slash with optional whitespace on either side.
    Slash,
}

impl Separator {
    fn accepts(self, gap: &str) -> bool {
        match self {
            Separator::Space => RE_SPACE_GAP.is_match(gap),
            Separator::Slash => RE_SLASH_GAP.is_match(gap),
        }
    }

    /// Section heading used in the report.
    pub fn heading(self) -> &'static str {
        match self {
            Separator::Space => "Space duplicates",
            Separator::Slash => "Slash duplicates",
        }
    }
}

/// One duplicated word pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding<'a> {
    /// Matched text as written, separator included.
    pub text: &'a str,
    /// Character offset of the match in the document.
    pub offset: usize,
    /// Surrounding text with newlines replaced by spaces.
    pub context: String,
}

impl fmt::Display for Finding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found duplicate: '{}' at {}", self.text, self.offset)?;
        write!(f, "Context: ...{}...", self.context)
    }
}

/// Iterator over the findings of one pass.
pub struct Scanner<'a> {
    text: &'a str,
    separator: Separator,
    width: usize,
    words: Matches<'static, 'a>,
    prev: Option<Match<'a>>,
    cursor: CharCursor,
}

/// Scan `text` for words repeated across `separator`, with `width`
/// characters of context on each side of a finding.
pub fn scan(text: &str, separator: Separator, width: usize) -> Scanner<'_> {
    Scanner {
        text,
        separator,
        width,
        words: RE_WORD.find_iter(text),
        prev: None,
        cursor: CharCursor::default(),
    }
}

impl<'a> Scanner<'a> {
    fn finding(&mut self, start: usize, end: usize) -> Finding<'a> {
        let context = words::window(self.text, start, end, self.width).replace('\n', " ");
        Finding {
            text: &self.text[start..end],
            offset: self.cursor.advance(self.text, start),
            context,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Finding<'a>;

    fn next(&mut self) -> Option<Finding<'a>> {
        loop {
            let word = self.words.next()?;
            let Some(prev) = self.prev.replace(word) else {
                continue;
            };
            if !words::is_candidate(prev.as_str()) || !words::same_word(prev.as_str(), word.as_str())
            {
                continue;
            }
            if !self.separator.accepts(&self.text[prev.end()..word.start()]) {
                continue;
            }
            // The second copy is consumed by this match.
            self.prev = None;
            return Some(self.finding(prev.start(), word.end()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, separator: Separator) -> Vec<(String, usize)> {
        scan(text, separator, 20)
            .map(|f| (f.text.to_string(), f.offset))
            .collect()
    }

    #[test]
    fn space_duplicate_at_start() {
        assert_eq!(
            texts("the the cat sat", Separator::Space),
            vec![("the the".to_string(), 0)]
        );
    }

    #[test]
    fn slash_duplicate() {
        assert_eq!(
            texts("risk / risk assessment", Separator::Slash),
            vec![("risk / risk".to_string(), 0)]
        );
        assert_eq!(
            texts("a risk/RISK b", Separator::Slash),
            vec![("risk/RISK".to_string(), 2)]
        );
    }

    #[test]
    fn passes_do_not_cross() {
        assert!(texts("risk / risk", Separator::Space).is_empty());
        assert!(texts("the the", Separator::Slash).is_empty());
    }

    #[test]
    fn no_repeats_no_findings() {
        let text = "every word here is different";
        assert!(texts(text, Separator::Space).is_empty());
        assert!(texts(text, Separator::Slash).is_empty());
    }

    #[test]
    fn cyrillic_duplicate() {
        assert_eq!(
            texts("привет привет мир", Separator::Space),
            vec![("привет привет".to_string(), 0)]
        );
    }

    #[test]
    fn offsets_are_in_characters() {
        assert_eq!(
            texts("ёж и и ёж", Separator::Space),
            vec![("и и".to_string(), 3)]
        );
    }

    #[test]
    fn case_insensitive_keeps_original_text() {
        assert_eq!(
            texts("The the end", Separator::Space),
            vec![("The the".to_string(), 0)]
        );
    }

    #[test]
    fn matches_do_not_overlap() {
        assert_eq!(
            texts("the the the the the", Separator::Space),
            vec![("the the".to_string(), 0), ("the the".to_string(), 8)]
        );
    }

    #[test]
    fn whole_words_only() {
        assert!(texts("then the end", Separator::Space).is_empty());
        assert!(texts("the then", Separator::Space).is_empty());
        assert!(texts("x_the the", Separator::Space).is_empty());
    }

    #[test]
    fn punctuation_breaks_a_pair() {
        assert!(texts("the, the", Separator::Space).is_empty());
    }

    #[test]
    fn newline_is_whitespace_and_context_is_flattened() {
        let findings: Vec<_> = scan("line one\none two", Separator::Space, 20).collect();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].text, "one\none");
        assert_eq!(findings[0].offset, 5);
        assert_eq!(findings[0].context, "line one one two");
    }

    #[test]
    fn context_is_clamped_to_width() {
        let text = "abcdefghij word word klmnopqrst";
        let finding = scan(text, Separator::Space, 3).next().unwrap();
        assert_eq!(finding.context, "ij word word kl");
    }

    #[test]
    fn display_matches_report_layout() {
        let finding = scan("the the cat", Separator::Space, 20).next().unwrap();
        assert_eq!(
            finding.to_string(),
            "Found duplicate: 'the the' at 0\nContext: ...the the cat..."
        );
    }

    #[test]
    fn rescanning_is_idempotent() {
        let text = "a a b / b c c";
        let first: Vec<_> = scan(text, Separator::Space, 5).collect();
        let second: Vec<_> = scan(text, Separator::Space, 5).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
