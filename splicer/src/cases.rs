//! Rule set that moves the quiz page onto a randomized case library.
//!
//! The static `CASES` array is swapped for the new fragment (which defines
//! `CASES_ALL` and `getRandomCases`), and the call sites that read `CASES`
//! directly are pointed at `state.cases`, the per-game random subset.

use crate::rule::{Limit, Replacement, Rule};
use regex::Regex;
use std::sync::LazyLock;

/// Comment line shipped at the top of the fragment; never inserted.
pub const BOILERPLATE: &str = "// ========== ALL 12 NEW CASES (KAZAKH) ==========";

/// Marker comment, the whitespace after it, then the old array up to the
/// first `];` that opens a line. Group 1 keeps the marker.
static RE_CASE_LIBRARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(/\*\* ======== ДАННЫЕ СЮЖЕТОВ \(можно расширять\) ======== \*/\s*)const CASES = \[[\s\S]*?\n\];",
    )
    .unwrap()
});

/// Start button handler up to the line that hides the start screen.
static RE_START_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"(\$\("#btnStart"\)\.addEventListener\("click",\s*\(\)\s*=>\s*\{\s*)(\$\("#start"\)\.style\.display\s*=\s*"none";)"##,
    )
    .unwrap()
});
const START_HANDLER: &str = "${1}let activeCases = getRandomCases();\n  \
state = { idx: 0, rep: 0, answers: {}, cases: activeCases };\n  \
updateHeader();\n  ${2}";

static RE_CASE_COUNTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"(\$\("#caseNo"\)\.textContent = `Дело — \$\{state\.idx\+1\} / \$\{)CASES\.length"##,
    )
    .unwrap()
});

static RE_RENDER_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const c = CASES\[state\.idx\];").unwrap());
const RENDER_CASE: &str = "const c = state.cases[state.idx];";

static RE_END_GAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(if\(state\.idx >= )CASES\.length").unwrap());

/// Case count of the running game, falling back to the full library.
const ACTIVE_LENGTH: &str = "${1}(state.cases?.length || CASES_ALL.length)";

/// Remove every boilerplate comment line from the fragment.
pub fn clean_fragment(fragment: &str) -> String {
    fragment
        .split_inclusive('\n')
        .filter(|line| line.trim_end_matches(&['\r', '\n'][..]) != BOILERPLATE)
        .collect()
}

/// The full rule sequence, in application order.
pub fn rules(fragment: &str) -> Vec<Rule> {
    vec![
        Rule::new(
            "case-library",
            &RE_CASE_LIBRARY,
            Replacement::KeepPrefix(clean_fragment(fragment)),
            Limit::First,
        ),
        Rule::new(
            "start-handler",
            &RE_START_HANDLER,
            Replacement::Template(START_HANDLER),
            Limit::All,
        ),
        Rule::new(
            "case-counter",
            &RE_CASE_COUNTER,
            Replacement::Template(ACTIVE_LENGTH),
            Limit::All,
        ),
        Rule::new(
            "render-case",
            &RE_RENDER_CASE,
            Replacement::Template(RENDER_CASE),
            Limit::All,
        ),
        Rule::new(
            "end-game",
            &RE_END_GAME,
            Replacement::Template(ACTIVE_LENGTH),
            Limit::All,
        ),
    ]
}
