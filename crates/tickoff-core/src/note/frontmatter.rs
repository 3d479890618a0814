//! YAML front matter detection
//!
//! Only the extent of the header matters here; its contents are never parsed.

use crate::todo::lines::split_lines;

const DELIMITER: &str = "---";

/// Location of a leading metadata header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderInfo {
    /// Whether the document opens with a closed `---` block
    pub exists: bool,
    /// Byte offset of the first body character (0 when there is no header)
    pub content_start: usize,
}

/// Locate the front matter block at the start of `text`.
///
/// The first line must be exactly `---` and a later line must be exactly
/// `---`; `content_start` points just past the closing line's separator.
#[tracing::instrument(level = "trace", skip(text), fields(len = text.len()))]
pub fn header_info(text: &str) -> HeaderInfo {
    let mut lines = split_lines(text).into_iter();

    let Some(first) = lines.next() else {
        return HeaderInfo::default();
    };
    if first.content != DELIMITER || !first.is_terminated() {
        return HeaderInfo::default();
    }

    let mut offset = first.raw_len();
    for line in lines {
        offset += line.raw_len();
        if line.content == DELIMITER {
            return HeaderInfo {
                exists: true,
                content_start: offset,
            };
        }
    }

    HeaderInfo::default()
}
