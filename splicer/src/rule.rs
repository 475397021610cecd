//! Named regex substitutions applied to a document in a fixed order.
//!
//! A rule never fails: a pattern that matches nothing leaves the text as it
//! was. What a rule does report is how often its pattern matched, so a miss
//! (or an unexpected second hit) is visible in the summary instead of being
//! discovered later by diffing the output by hand.

use regex::{Captures, Regex};
use std::fmt;

/// How many matches a rule rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Only the leftmost match.
    First,
    /// Every non-overlapping match.
    All,
}

/// What replaces each match.
#[derive(Debug)]
pub enum Replacement {
    /// A `regex` replacement template (`${1}` refers to capture group 1).
    Template(&'static str),
    /// Keep capture group 1, then insert the given text verbatim.
    ///
    /// `$` and `\` inside the text are not expanded, which matters for
    /// JavaScript fragments full of template literals.
    KeepPrefix(String),
}

/// A single substitution step.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pattern: &'static Regex,
    replacement: Replacement,
    limit: Limit,
}

/// Match count recorded for one rule application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub name: &'static str,
    pub hits: usize,
}

impl RuleOutcome {
    /// Every rule in this tool targets exactly one spot in the document.
    pub fn is_clean(&self) -> bool {
        self.hits == 1
    }
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.hits == 1 { "match" } else { "matches" };
        write!(f, "{}: {} {}", self.name, self.hits, noun)?;
        if !self.is_clean() {
            write!(f, " (expected 1)")?;
        }
        Ok(())
    }
}

impl Rule {
    pub fn new(
        name: &'static str,
        pattern: &'static Regex,
        replacement: Replacement,
        limit: Limit,
    ) -> Self {
        Self {
            name,
            pattern,
            replacement,
            limit,
        }
    }

    /// Apply the rule to `doc`, returning the rewritten text and the number
    /// of matches found in the input (before the limit is applied).
    pub fn apply(&self, doc: &str) -> (String, RuleOutcome) {
        let hits = self.pattern.find_iter(doc).count();
        let limit = match self.limit {
            Limit::First => 1,
            Limit::All => 0,
        };
        let text = match &self.replacement {
            Replacement::Template(template) => self.pattern.replacen(doc, limit, *template),
            Replacement::KeepPrefix(insert) => {
                self.pattern.replacen(doc, limit, |caps: &Captures| {
                    let prefix = caps.get(1).map_or("", |m| m.as_str());
                    format!("{prefix}{insert}")
                })
            }
        };
        tracing::debug!(rule = self.name, hits, "applied rule");
        (
            text.into_owned(),
            RuleOutcome {
                name: self.name,
                hits,
            },
        )
    }
}

/// Apply `rules` in order, each on the output of the previous one.
pub fn apply_all(rules: &[Rule], doc: &str) -> (String, Vec<RuleOutcome>) {
    let mut text = doc.to_string();
    let mut outcomes = Vec::with_capacity(rules.len());
    for rule in rules {
        let (next, outcome) = rule.apply(&text);
        text = next;
        outcomes.push(outcome);
    }
    (text, outcomes)
}
