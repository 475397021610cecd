//! Key-list file parsing.
//!
//! The format is forgiving enough that a list copied out of source code
//! still parses:
//!
//! ```text
//! # Splash
//! "splashBadge", "splashTitle",
//! splashBtn
//! ```
//!
//! - `#` lines open a new section named by the rest of the line
//! - keys are separated by commas and/or newlines
//! - surrounding whitespace and double quotes are stripped
//! - blank lines and empty entries are ignored

/// Keys grouped by the section they were listed under.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Section {
    pub name: Option<String>,
    pub keys: Vec<String>,
}

/// An ordered key list; insertion order is preserved for display.
#[derive(Debug, Default)]
pub struct KeyList {
    pub sections: Vec<Section>,
}

impl KeyList {
    /// All keys in listing order, across sections.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.keys.iter().map(String::as_str))
    }
}

/// Parse a key list.
pub fn parse(input: &str) -> KeyList {
    let mut sections = vec![Section::default()];
    for line in input.lines() {
        let line = line.trim();
        if let Some(name) = line.strip_prefix('#') {
            sections.push(Section {
                name: Some(name.trim().to_string()),
                keys: Vec::new(),
            });
            continue;
        }
        let Some(section) = sections.last_mut() else {
            continue;
        };
        section.keys.extend(
            line.split(',')
                .map(|entry| entry.trim().trim_matches('"').trim())
                .filter(|entry| !entry.is_empty())
                .map(str::to_string),
        );
    }
    // Drop the implicit leading section when the file opens with a header.
    sections.retain(|s| s.name.is_some() || !s.keys.is_empty());
    KeyList { sections }
}
