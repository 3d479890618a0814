//! Reorder pass: non-todo lines, then open todos, then completed todos

use std::borrow::Cow;

use super::grammar::{classify, LineKind};
use super::lines::{dominant_separator, split_lines, Line};

/// Stable three-way partition of `text`'s lines.
///
/// Each line keeps its own separator. An unterminated final line that moves
/// up borrows the document's first separator, and the result ends with a
/// separator exactly when the input did. Text that is already partitioned
/// comes back borrowed.
pub fn reorder(text: &str) -> Cow<'_, str> {
    let lines = split_lines(text);
    let Some(last) = lines.last() else {
        return Cow::Borrowed(text);
    };
    let trailing_separator = last.is_terminated();

    let mut other: Vec<(usize, Line<'_>)> = Vec::new();
    let mut unchecked = Vec::new();
    let mut checked = Vec::new();
    for (index, line) in lines.iter().copied().enumerate() {
        match classify(line.content) {
            LineKind::Other => other.push((index, line)),
            LineKind::Unchecked => unchecked.push((index, line)),
            LineKind::Checked { .. } => checked.push((index, line)),
        }
    }

    let ordered: Vec<(usize, Line<'_>)> = other
        .into_iter()
        .chain(unchecked)
        .chain(checked)
        .collect();

    if ordered.iter().enumerate().all(|(pos, (index, _))| pos == *index) {
        return Cow::Borrowed(text);
    }

    let fallback = dominant_separator(text);
    let mut out = String::with_capacity(text.len() + fallback.len());
    for (line_no, (_, line)) in ordered.iter().enumerate() {
        out.push_str(line.content);
        let is_last = line_no + 1 == ordered.len();
        if is_last && !trailing_separator {
            break;
        }
        if line.is_terminated() {
            out.push_str(line.separator);
        } else {
            out.push_str(fallback);
        }
    }

    Cow::Owned(out)
}
