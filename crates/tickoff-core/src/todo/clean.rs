//! Cleaner: drop completed todos older than the age threshold

use std::borrow::Cow;

use chrono::NaiveDate;
use tracing::debug;

use super::grammar::{classify, LineKind};
use super::lines::split_lines;
use super::policy::AgePolicy;

/// Result of a cleaning pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome<'a> {
    /// Rewritten text; borrowed from the input when nothing was removed
    pub text: Cow<'a, str>,
    /// Number of lines removed
    pub removed: usize,
}

impl CleanOutcome<'_> {
    pub fn is_unchanged(&self) -> bool {
        self.removed == 0
    }

    pub fn into_owned(self) -> String {
        self.text.into_owned()
    }
}

/// Remove expired checked lines from `text`.
///
/// Removed lines take their separator with them; every surviving line is
/// copied byte for byte in its original order.
pub fn clean(text: &str, threshold: u32, today: NaiveDate) -> CleanOutcome<'_> {
    let policy = AgePolicy::new(threshold, today);
    let lines = split_lines(text);

    let expired: Vec<bool> = lines
        .iter()
        .map(|line| match classify(line.content) {
            LineKind::Checked { completed } => policy.is_expired(completed),
            _ => false,
        })
        .collect();

    let removed = expired.iter().filter(|e| **e).count();
    if removed == 0 {
        return CleanOutcome {
            text: Cow::Borrowed(text),
            removed: 0,
        };
    }

    let mut out = String::with_capacity(text.len());
    let mut removed_bytes = 0;
    for (line, drop) in lines.iter().zip(&expired) {
        if *drop {
            removed_bytes += line.raw_len();
            continue;
        }
        out.push_str(line.content);
        out.push_str(line.separator);
    }

    debug!(
        removed,
        removed_bytes,
        threshold,
        cutoff = %policy.cutoff(),
        "clean_pass"
    );

    CleanOutcome {
        text: Cow::Owned(out),
        removed,
    }
}
