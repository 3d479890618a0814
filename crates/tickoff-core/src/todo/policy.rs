//! Age policy for completed todos

use chrono::{Days, NaiveDate};

/// Compute the cutoff day: `today` minus `threshold` days.
///
/// Saturates at [`NaiveDate::MIN`] for absurd thresholds.
pub fn cutoff(today: NaiveDate, threshold: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(threshold)))
        .unwrap_or(NaiveDate::MIN)
}

/// Expiry rule for one cleaning pass.
///
/// The cutoff is fixed at construction so every line in a pass is judged
/// against the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    threshold: u32,
    cutoff: NaiveDate,
}

impl AgePolicy {
    pub fn new(threshold: u32, today: NaiveDate) -> Self {
        Self {
            threshold,
            cutoff: cutoff(today, threshold),
        }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    /// Whether a completed item with the given completion date should go.
    ///
    /// - threshold 0: always
    /// - dated: `date <= cutoff`
    /// - dateless: never
    pub fn is_expired(&self, completed: Option<NaiveDate>) -> bool {
        if self.threshold == 0 {
            return true;
        }
        match completed {
            Some(date) => date <= self.cutoff,
            None => false,
        }
    }
}

/// One-shot form of [`AgePolicy::is_expired`].
pub fn is_expired(completed: Option<NaiveDate>, threshold: u32, today: NaiveDate) -> bool {
    AgePolicy::new(threshold, today).is_expired(completed)
}
