//! Duplicate detection over a key list.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static RE_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// A key listed more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Duplicate {
    pub key: String,
    pub count: usize,
}

/// Counts and findings for one key list.
#[derive(Debug)]
pub struct Summary {
    pub total: usize,
    /// Repeated keys in order of first appearance.
    pub duplicates: Vec<Duplicate>,
    /// Keys that are not plain identifiers, in listing order.
    pub malformed: Vec<String>,
    /// Distinct keys, sorted.
    pub unique: BTreeSet<String>,
}

impl Summary {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

pub fn validate<'a>(keys: impl IntoIterator<Item = &'a str>) -> Summary {
    let mut total = 0;
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut malformed = Vec::new();

    for key in keys {
        total += 1;
        let count = counts.entry(key).or_insert(0);
        if *count == 0 {
            order.push(key);
            if !RE_IDENTIFIER.is_match(key) {
                malformed.push(key.to_string());
            }
        }
        *count += 1;
    }

    let duplicates = order
        .iter()
        .filter_map(|key| match counts[key] {
            n if n > 1 => Some(Duplicate {
                key: key.to_string(),
                count: n,
            }),
            _ => None,
        })
        .collect();

    Summary {
        total,
        duplicates,
        malformed,
        unique: order.into_iter().map(str::to_string).collect(),
    }
}
