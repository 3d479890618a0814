//! Line splitting that keeps each line's own separator

/// One line of a document together with the separator that ended it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without its separator
    pub content: &'a str,
    /// `"\n"`, `"\r\n"`, or `""` for a final unterminated line
    pub separator: &'a str,
}

impl<'a> Line<'a> {
    /// The line exactly as it appeared in the document
    pub fn raw_len(&self) -> usize {
        self.content.len() + self.separator.len()
    }

    pub fn is_terminated(&self) -> bool {
        !self.separator.is_empty()
    }
}

/// Split `text` into lines, keeping separators.
///
/// Concatenating `content + separator` for every returned line reproduces
/// `text` byte for byte. Empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    text.split_inclusive('\n').map(split_separator).collect()
}

/// The first separator used in `text`, or `"\n"` if it has none.
pub fn dominant_separator(text: &str) -> &'static str {
    match text.find('\n') {
        Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => "\r\n",
        _ => "\n",
    }
}

fn split_separator(segment: &str) -> Line<'_> {
    if let Some(content) = segment.strip_suffix("\r\n") {
        Line {
            content,
            separator: "\r\n",
        }
    } else if let Some(content) = segment.strip_suffix('\n') {
        Line {
            content,
            separator: "\n",
        }
    } else {
        Line {
            content: segment,
            separator: "",
        }
    }
}
