//! Insertion policy for new todos

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::grammar::format_unchecked;
use super::lines::dominant_separator;
use crate::error::TickoffError;
use crate::note::frontmatter::header_info;

/// Where new todos go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertPosition {
    /// Right after the front matter, or at the very top
    #[default]
    Prepend,
    /// After all existing content
    Append,
}

impl FromStr for InsertPosition {
    type Err = TickoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prepend" => Ok(InsertPosition::Prepend),
            "append" => Ok(InsertPosition::Append),
            other => Err(TickoffError::invalid_value(
                "insert position (expected prepend or append)",
                other,
            )),
        }
    }
}

impl fmt::Display for InsertPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertPosition::Prepend => write!(f, "prepend"),
            InsertPosition::Append => write!(f, "append"),
        }
    }
}

/// Insert a new unchecked todo built from `body` into `text`.
///
/// `content_start` is the byte offset where body content begins after a
/// metadata header, if the document has one. The new line is always
/// `- [ ] {body}\n` and always starts a line of its own: when the insertion
/// point does not follow a separator, the document's separator is written
/// first. Existing line content is never changed.
pub fn insert(
    text: &str,
    body: &str,
    position: InsertPosition,
    content_start: Option<usize>,
) -> String {
    let line = format!("{}\n", format_unchecked(body));

    match position {
        InsertPosition::Append => {
            if text.is_empty() {
                return line;
            }
            let separator = dominant_separator(text);
            let mut out = String::with_capacity(text.len() + 2 * separator.len() + line.len());
            out.push_str(text);
            if !text.ends_with('\n') {
                out.push_str(separator);
            }
            // Blank line between existing content and the new todo
            out.push_str(separator);
            out.push_str(&line);
            out
        }
        InsertPosition::Prepend => {
            let at = boundary_at_or_after(text, content_start.unwrap_or(0));
            let mut out = String::with_capacity(text.len() + line.len() + 2);
            out.push_str(&text[..at]);
            if at > 0 && !text[..at].ends_with('\n') {
                out.push_str(dominant_separator(text));
            }
            out.push_str(&line);
            out.push_str(&text[at..]);
            out
        }
    }
}

/// Like [`insert`], computing the header offset from the text itself.
pub fn insert_with_header(text: &str, body: &str, position: InsertPosition) -> String {
    let header = header_info(text);
    let content_start = header.exists.then_some(header.content_start);
    insert(text, body, position, content_start)
}

fn boundary_at_or_after(text: &str, offset: usize) -> usize {
    let mut at = offset.min(text.len());
    while !text.is_char_boundary(at) {
        at += 1;
    }
    at
}
