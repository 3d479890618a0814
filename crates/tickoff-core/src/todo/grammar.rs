//! Checklist line grammar
//!
//! A line is a todo only if it *starts* with the task-list syntax:
//!
//! - `- [ ] text` is an unchecked todo
//! - `- [x] text` / `- [X] text` is a checked todo, optionally carrying a
//!   completion marker `✅ YYYY-MM-DD` anywhere after the checkbox
//!
//! Everything else (headings, prose, front matter, blank lines, indented
//! sub-items) is [`LineKind::Other`].

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

/// Prefix written in front of every new todo
pub const UNCHECKED_PREFIX: &str = "- [ ] ";

/// Completion marker emoji
pub const COMPLETION_MARKER: char = '✅';

const DATE_FORMAT: &str = "%Y-%m-%d";

static CHECKED_RE: OnceLock<Regex> = OnceLock::new();
static MARKER_RE: OnceLock<Regex> = OnceLock::new();

fn checked_re() -> &'static Regex {
    CHECKED_RE.get_or_init(|| Regex::new(r"^- \[[xX]\]").expect("checked todo pattern is valid"))
}

fn marker_re() -> &'static Regex {
    MARKER_RE.get_or_init(|| {
        // Exactly 4-2-2 ASCII digits; a fifth day digit disqualifies the date
        let pattern =
            format!(r"{COMPLETION_MARKER}\s*([0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}})(?:[^0-9]|$)");
        Regex::new(&pattern).expect("completion marker pattern is valid")
    })
}

/// Classification of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `- [ ] ...`
    Unchecked,
    /// `- [x] ...`, with the completion date when a valid marker is present
    Checked { completed: Option<NaiveDate> },
    /// Anything that is not a checklist line
    Other,
}

impl LineKind {
    pub fn is_todo(&self) -> bool {
        !matches!(self, LineKind::Other)
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, LineKind::Checked { .. })
    }

    /// Short label used by `tickoff classify`
    pub fn label(&self) -> &'static str {
        match self {
            LineKind::Unchecked => "unchecked",
            LineKind::Checked { .. } => "checked",
            LineKind::Other => "other",
        }
    }
}

/// Classify one line. Trailing `\r`/`\n` are ignored.
pub fn classify(line: &str) -> LineKind {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.starts_with("- [ ]") {
        return LineKind::Unchecked;
    }

    if let Some(checkbox) = checked_re().find(line) {
        return LineKind::Checked {
            completed: completion_date(&line[checkbox.end()..]),
        };
    }

    LineKind::Other
}

/// Extract the completion date from the text following a checkbox.
///
/// The first well-formed `✅ YYYY-MM-DD` marker wins; malformed markers
/// before it (a fifth day digit, say) are skipped. If the winning date is
/// not a real calendar date the result is `None`.
pub fn completion_date(text: &str) -> Option<NaiveDate> {
    let captures = marker_re().captures(text)?;
    let raw = captures.get(1)?.as_str();
    parse_strict_date(raw)
}

/// Strict `YYYY-MM-DD` parsing: exactly ten characters, real calendar date.
pub fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Format a new unchecked todo line (without separator). The body is used
/// verbatim.
pub fn format_unchecked(body: &str) -> String {
    format!("{UNCHECKED_PREFIX}{body}")
}
